//! Price engine
//!
//! Core cost derivation logic that the rest of the crate delegates to.

use crate::core::cost::types::{CostResult, ModelPricingRecord, UsageProfile};

/// Tokens in one display unit ("price per million tokens")
pub const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Derive all cost metrics for one model under one usage profile.
///
/// Direct evaluation of the pricing formulas over values the loader has
/// already validated; this function never fails. Per-query and monthly
/// figures stay in base currency units, the unit-price fields are scaled
/// to cost per one million tokens. A zero `cost_per_query` yields the
/// `None` sentinel for `queries_per_budget` instead of dividing.
pub fn compute_cost(record: &ModelPricingRecord, usage: &UsageProfile) -> CostResult {
    let unit_input_price = record.prompt_price * TOKENS_PER_MILLION;
    let unit_output_price = record.completion_price * TOKENS_PER_MILLION;

    let cost_per_query = usage.input_tokens as f64 * record.prompt_price
        + usage.output_tokens as f64 * record.completion_price;
    let monthly_cost = cost_per_query * usage.monthly_transactions as f64;

    // Zero-cost models are legitimate catalog entries
    let queries_per_budget = if cost_per_query == 0.0 {
        None
    } else {
        Some(usage.budget / cost_per_query)
    };

    CostResult {
        model_id: record.id.clone(),
        model_name: record.name.clone(),
        unit_input_price,
        unit_output_price,
        total_unit_price: unit_input_price + unit_output_price,
        cost_per_query,
        monthly_cost,
        budget_remaining: usage.budget - monthly_cost,
        queries_per_budget,
    }
}

/// Apply the engine to an ordered record slice, preserving order.
pub fn evaluate_catalog(records: &[ModelPricingRecord], usage: &UsageProfile) -> Vec<CostResult> {
    records
        .iter()
        .map(|record| compute_cost(record, usage))
        .collect()
}
