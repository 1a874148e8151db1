//! Shared utilities
//!
//! Error types and the crate-wide `Result` alias.

pub mod error;

pub use error::{CalculatorError, Result};
