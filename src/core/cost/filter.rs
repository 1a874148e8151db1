//! Catalog filtering
//!
//! Two-stage keyword filter over computed cost results.

use crate::core::cost::types::CostResult;

/// Split a comma-separated keyword string into trimmed, non-empty tokens.
///
/// Original case is preserved; case folding happens only at comparison
/// time inside [`filter_results`].
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when the keyword occurs case-insensitively in the model id or name.
///
/// Plain substring search; "gpt" matches "openai/gpt-4".
fn matches_keyword(result: &CostResult, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    result.model_id.to_lowercase().contains(&needle)
        || result.model_name.to_lowercase().contains(&needle)
}

/// Filter results by inclusion and exclusion keywords.
///
/// Returns the stable subsequence of `results` whose rows pass both
/// stages: at least one include keyword matches (or `includes` is empty),
/// and no exclude keyword matches. A row matching both an include and an
/// exclude keyword is excluded. With both keyword lists empty the input
/// comes back unchanged.
pub fn filter_results(
    results: &[CostResult],
    includes: &[String],
    excludes: &[String],
) -> Vec<CostResult> {
    if includes.is_empty() && excludes.is_empty() {
        return results.to_vec();
    }

    results
        .iter()
        .filter(|result| {
            includes.is_empty() || includes.iter().any(|keyword| matches_keyword(result, keyword))
        })
        .filter(|result| {
            excludes
                .iter()
                .all(|keyword| !matches_keyword(result, keyword))
        })
        .cloned()
        .collect()
}
