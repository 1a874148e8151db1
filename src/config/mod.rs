//! Configuration management for the calculator
//!
//! This module handles loading and validation of the calculator
//! configuration.

pub mod validation;

pub use validation::Validate;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::core::cost::UsageProfile;
use crate::utils::error::{CalculatorError, Result};

/// Main configuration struct for the calculator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Calculator configuration
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CalculatorError::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| CalculatorError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }
}

/// Calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Path to the JSON model catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Default usage profile
    #[serde(default)]
    pub usage: UsageDefaults,
    /// Default filter keyword strings
    #[serde(default)]
    pub filters: FilterDefaults,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            usage: UsageDefaults::default(),
            filters: FilterDefaults::default(),
        }
    }
}

/// Default usage profile values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageDefaults {
    /// Input (prompt) tokens per query
    #[serde(default = "default_input_tokens")]
    pub input_tokens: u32,
    /// Output (completion) tokens per query
    #[serde(default = "default_output_tokens")]
    pub output_tokens: u32,
    /// Queries per month
    #[serde(default = "default_monthly_transactions")]
    pub monthly_transactions: u32,
    /// Monthly budget in the catalog currency
    #[serde(default = "default_budget")]
    pub budget: f64,
}

impl UsageDefaults {
    /// Build a usage profile from the configured defaults.
    pub fn to_profile(&self) -> UsageProfile {
        UsageProfile::new(
            self.input_tokens,
            self.output_tokens,
            self.monthly_transactions,
            self.budget,
        )
    }
}

impl Default for UsageDefaults {
    fn default() -> Self {
        Self {
            input_tokens: default_input_tokens(),
            output_tokens: default_output_tokens(),
            monthly_transactions: default_monthly_transactions(),
            budget: default_budget(),
        }
    }
}

/// Default filter keyword strings, comma-separated
///
/// Empty strings mean "no filtering"; the full catalog is shown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterDefaults {
    /// Inclusion keywords
    #[serde(default)]
    pub include: String,
    /// Exclusion keywords
    #[serde(default)]
    pub exclude: String,
}

// Default value functions
fn default_catalog_path() -> String {
    "models.json".to_string()
}

fn default_input_tokens() -> u32 {
    5000
}

fn default_output_tokens() -> u32 {
    1000
}

fn default_monthly_transactions() -> u32 {
    500
}

fn default_budget() -> f64 {
    100.0
}
