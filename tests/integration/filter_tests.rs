//! Catalog filter integration tests

use llm_pricecalc::{evaluate_catalog, filter_results, parse_keywords};

use crate::common::fixtures::{RecordFactory, UsageFactory};

fn keywords(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_identity_on_empty_keyword_sets() {
    let results = evaluate_catalog(&RecordFactory::catalog(), &UsageFactory::example());
    let filtered = filter_results(&results, &[], &[]);
    assert_eq!(filtered, results);
}

#[test]
fn test_output_is_subset_with_identical_values() {
    let results = evaluate_catalog(&RecordFactory::catalog(), &UsageFactory::example());
    let filtered = filter_results(&results, &keywords(&["gpt"]), &[]);

    assert!(!filtered.is_empty());
    for row in &filtered {
        assert!(results.contains(row));
    }
}

#[test]
fn test_case_insensitive_include() {
    let results = evaluate_catalog(&RecordFactory::catalog(), &UsageFactory::example());
    let upper = filter_results(&results, &keywords(&["GPT"]), &[]);
    let lower = filter_results(&results, &keywords(&["gpt"]), &[]);
    assert_eq!(upper, lower);
}

#[test]
fn test_case_insensitive_exclude() {
    let results = evaluate_catalog(&RecordFactory::catalog(), &UsageFactory::example());
    let upper = filter_results(&results, &[], &keywords(&["FREE"]));
    let lower = filter_results(&results, &[], &keywords(&["free"]));
    assert_eq!(upper, lower);
    assert_eq!(upper.len(), 2);
}

#[test]
fn test_exclusion_beats_inclusion() {
    // "openai/gpt-4:free" matches both the include and the exclude keyword
    let results = evaluate_catalog(&RecordFactory::catalog(), &UsageFactory::example());
    let filtered = filter_results(&results, &keywords(&["gpt"]), &keywords(&["free"]));

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].model_id, "openai/gpt-4");
}

#[test]
fn test_include_matches_either_field() {
    let results = evaluate_catalog(&RecordFactory::catalog(), &UsageFactory::example());

    // "anthropic" occurs only in the id, "Claude" in both id and name
    let by_id = filter_results(&results, &keywords(&["anthropic"]), &[]);
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].model_name, "Claude 3");

    // "(free)" occurs only in the name
    let by_name = filter_results(&results, &keywords(&["(free)"]), &[]);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].model_id, "openai/gpt-4:free");
}

#[test]
fn test_multiple_includes_are_a_union() {
    let results = evaluate_catalog(&RecordFactory::catalog(), &UsageFactory::example());
    let filtered = filter_results(&results, &keywords(&["claude", "free"]), &[]);

    assert_eq!(filtered.len(), 2);
    // Original catalog order is kept, not keyword order
    assert_eq!(filtered[0].model_id, "openai/gpt-4:free");
    assert_eq!(filtered[1].model_id, "anthropic/claude-3");
}

#[test]
fn test_no_match_yields_empty_not_error() {
    let results = evaluate_catalog(&RecordFactory::catalog(), &UsageFactory::example());
    let filtered = filter_results(&results, &keywords(&["mistral"]), &[]);
    assert!(filtered.is_empty());
}

#[test]
fn test_parse_keywords_normalization() {
    assert_eq!(
        parse_keywords("gpt-5,gpt-4.1, o3 ,,o4"),
        vec!["gpt-5", "gpt-4.1", "o3", "o4"]
    );
    assert!(parse_keywords("").is_empty());
    assert!(parse_keywords(" , , ").is_empty());
}
