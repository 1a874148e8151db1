//! # llm-pricecalc
//!
//! Estimate and compare usage costs across a catalog of LLM API offerings,
//! given expected token usage, call volume, and a monthly budget.
//!
//! ## Features
//!
//! - **Pure pricing core**: per-model cost derivation is a deterministic
//!   function of a pricing record and a usage profile
//! - **Keyword filtering**: two-stage include/exclude filtering with
//!   case-insensitive substring matching over model id and name
//! - **Catalog loading**: OpenRouter-style JSON catalogs with string or
//!   numeric price fields, validated before computation
//! - **Terminal front-end**: aligned tables, budget-threshold row
//!   highlighting, and a JSON output mode
//!
//! ## Quick Start
//!
//! ```rust
//! use llm_pricecalc::{ModelPricingRecord, UsageProfile, compute_cost};
//!
//! let record = ModelPricingRecord {
//!     id: "openai/gpt-4".to_string(),
//!     name: "GPT-4".to_string(),
//!     prompt_price: 0.00003,
//!     completion_price: 0.00006,
//! };
//! let usage = UsageProfile::new(1000, 100, 1000, 100.0);
//!
//! let result = compute_cost(&record, &usage);
//! assert!((result.monthly_cost - 36.0).abs() < 1e-9);
//! assert!((result.budget_remaining - 64.0).abs() < 1e-9);
//! ```
//!
//! ## Catalog Evaluation
//!
//! ```rust,no_run
//! use llm_pricecalc::{CatalogService, UsageProfile};
//!
//! #[tokio::main]
//! async fn main() -> llm_pricecalc::Result<()> {
//!     let service = CatalogService::new("models.json");
//!     service.initialize().await?;
//!
//!     let usage = UsageProfile::new(5000, 1000, 500, 100.0);
//!     let evaluation = service.evaluate(&usage, &["gpt".to_string()], &[]);
//!     println!("{} of {} models match", evaluation.matched, evaluation.total);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod cli;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::cost::{
    CostResult, ModelPricingRecord, UsageProfile, compute_cost, evaluate_catalog, filter_results,
    parse_keywords,
};
pub use services::catalog::{CatalogEvaluation, CatalogService, load_from_file, parse_catalog};
pub use utils::error::{CalculatorError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
