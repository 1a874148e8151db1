//! Cost computation core
//!
//! Pure pricing derivation and result filtering; no I/O, no shared state.

pub mod calculator;
pub mod filter;
pub mod types;

pub use calculator::{TOKENS_PER_MILLION, compute_cost, evaluate_catalog};
pub use filter::{filter_results, parse_keywords};
pub use types::{CostResult, ModelPricingRecord, UsageProfile};
