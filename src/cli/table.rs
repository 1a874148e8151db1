//! Table rendering for the terminal

use colored::{ColoredString, Colorize};

use crate::core::cost::{CostResult, TOKENS_PER_MILLION, UsageProfile};
use crate::services::catalog::{CatalogEvaluation, CatalogStatistics};

/// Budget fraction at or below which a row is flagged as running low
const LOW_BUDGET_FRACTION: f64 = 0.2;

const HEADERS: [&str; 9] = [
    "Model ID",
    "Model Name",
    "Input $/1M",
    "Output $/1M",
    "Total $/1M",
    "Cost/Query",
    "Monthly Cost",
    "Budget Remaining",
    "Queries/Budget",
];

/// Format a price for display, widening precision for sub-cent values.
pub fn format_price(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1.0 {
        format!("${:.2}", value)
    } else if magnitude >= 0.01 {
        format!("${:.4}", value)
    } else {
        format!("${:.6}", value)
    }
}

/// Format the affordable query count, rounded to the nearest whole number.
fn format_queries(queries: Option<f64>) -> String {
    match queries {
        Some(queries) => format!("{:.0}", queries),
        None => "n/a".to_string(),
    }
}

/// Render the estimate table plus the filter summary line.
pub fn render_estimate(
    evaluation: &CatalogEvaluation,
    usage: &UsageProfile,
    includes: &[String],
    excludes: &[String],
) {
    if evaluation.results.is_empty() {
        println!("No models match the given keywords.");
    } else {
        print_table(&evaluation.results, usage.budget);
    }

    if let Some(summary) = filter_summary(evaluation, includes, excludes) {
        println!("{}", summary);
    }
}

/// Render catalog statistics, prices shown per million tokens.
pub fn render_statistics(stats: &CatalogStatistics) {
    println!("Models in catalog: {}", stats.total_models);

    if let Some(range) = stats.prompt_range {
        println!(
            "Prompt price ($/1M tokens): {} - {}",
            format_price(range.min * TOKENS_PER_MILLION),
            format_price(range.max * TOKENS_PER_MILLION)
        );
    }
    if let Some(range) = stats.completion_range {
        println!(
            "Completion price ($/1M tokens): {} - {}",
            format_price(range.min * TOKENS_PER_MILLION),
            format_price(range.max * TOKENS_PER_MILLION)
        );
    }
}

fn filter_summary(
    evaluation: &CatalogEvaluation,
    includes: &[String],
    excludes: &[String],
) -> Option<String> {
    if includes.is_empty() && excludes.is_empty() {
        return None;
    }

    let mut message = String::new();
    if !includes.is_empty() {
        message.push_str(&format!("Filtering models: \"{}\". ", includes.join(", ")));
    }
    if !excludes.is_empty() {
        message.push_str(&format!("Excluding models: \"{}\". ", excludes.join(", ")));
    }
    message.push_str(&format!(
        "Showing {} out of {} models.",
        evaluation.matched, evaluation.total
    ));
    Some(message)
}

fn print_table(results: &[CostResult], budget: f64) {
    let rows: Vec<[String; 9]> = results
        .iter()
        .map(|result| {
            [
                result.model_id.clone(),
                result.model_name.clone(),
                format_price(result.unit_input_price),
                format_price(result.unit_output_price),
                format_price(result.total_unit_price),
                format_price(result.cost_per_query),
                format_price(result.monthly_cost),
                format_price(result.budget_remaining),
                format_queries(result.queries_per_budget),
            ]
        })
        .collect();

    let mut widths: [usize; 9] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    println!("{}", render_row(&HEADERS.map(String::from), &widths).bold());
    for (row, result) in rows.iter().zip(results) {
        let line = render_row(row, &widths);
        println!("{}", colorize_row(line, result.budget_remaining, budget));
    }
}

fn render_row(cells: &[String; 9], widths: &[usize; 9]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<w$}", cell, w = *width))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Flag rows whose remaining budget is exhausted or running low.
fn colorize_row(line: String, budget_remaining: f64, budget: f64) -> ColoredString {
    if budget_remaining <= 0.0 {
        line.red()
    } else if budget_remaining <= budget * LOW_BUDGET_FRACTION {
        line.yellow()
    } else {
        line.normal()
    }
}
