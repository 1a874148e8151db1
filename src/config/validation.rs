//! Configuration validation
//!
//! Validation logic for configuration structures and the usage parameters
//! the view layer gathers before calling the core.

use super::{CalculatorConfig, Config};
use crate::core::cost::UsageProfile;
use crate::utils::error::{CalculatorError, Result};

/// Validation for configuration structures
pub trait Validate {
    /// Check the structure, returning an error for the first violated
    /// constraint.
    fn validate(&self) -> Result<()>;
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        self.calculator.validate()
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Result<()> {
        if self.catalog_path.trim().is_empty() {
            return Err(CalculatorError::config("catalog_path must not be empty"));
        }
        self.usage.to_profile().validate()
    }
}

impl Validate for UsageProfile {
    fn validate(&self) -> Result<()> {
        if self.input_tokens == 0 {
            return Err(CalculatorError::validation("input_tokens must be positive"));
        }
        if self.output_tokens == 0 {
            return Err(CalculatorError::validation(
                "output_tokens must be positive",
            ));
        }
        if self.monthly_transactions == 0 {
            return Err(CalculatorError::validation(
                "monthly_transactions must be positive",
            ));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(CalculatorError::validation(
                "budget must be a non-negative number",
            ));
        }
        Ok(())
    }
}
