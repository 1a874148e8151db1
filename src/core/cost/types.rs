//! Cost calculation types
//!
//! Typed input and output records for the price engine.

use serde::{Deserialize, Serialize};

/// Validated model pricing record, the engine's per-model input
///
/// Produced by the catalog loader; both prices are guaranteed finite and
/// non-negative by the time a record reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPricingRecord {
    /// Model identifier, unique within a catalog load
    pub id: String,
    /// Human-readable model name, not guaranteed unique
    pub name: String,
    /// Cost per input token
    pub prompt_price: f64,
    /// Cost per output token
    pub completion_price: f64,
}

/// Usage profile for a calculation run
///
/// Constructed fresh per run and immutable while results are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageProfile {
    /// Input (prompt) tokens per query
    pub input_tokens: u32,
    /// Output (completion) tokens per query
    pub output_tokens: u32,
    /// Number of queries per month
    pub monthly_transactions: u32,
    /// Monthly spending ceiling in the catalog currency
    pub budget: f64,
}

impl UsageProfile {
    /// Create a usage profile
    pub fn new(
        input_tokens: u32,
        output_tokens: u32,
        monthly_transactions: u32,
        budget: f64,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            monthly_transactions,
            budget,
        }
    }
}

/// Derived cost metrics for one model under one usage profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostResult {
    /// Model identifier copied from the record
    pub model_id: String,
    /// Human-readable model name copied from the record
    pub model_name: String,
    /// Input price per one million tokens
    pub unit_input_price: f64,
    /// Output price per one million tokens
    pub unit_output_price: f64,
    /// Sum of the two unit prices
    pub total_unit_price: f64,
    /// Cost of a single query at the profiled token counts
    pub cost_per_query: f64,
    /// Cost of a month of queries
    pub monthly_cost: f64,
    /// Budget left after the monthly cost, negative when over budget
    pub budget_remaining: f64,
    /// Queries affordable within the budget; `None` for zero-cost models
    pub queries_per_budget: Option<f64>,
}
