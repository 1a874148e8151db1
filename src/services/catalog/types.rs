//! Type definitions for the catalog service

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::SystemTime;

use crate::core::cost::{CostResult, ModelPricingRecord};
use crate::utils::error::{CalculatorError, Result};

/// Top-level catalog document
///
/// Matches the OpenRouter-style export: an object whose `data` field holds
/// the ordered model records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCatalog {
    /// Ordered model records
    pub data: Vec<CatalogEntry>,
}

/// One model record as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Model identifier, unique within a catalog load
    pub id: String,
    /// Human-readable model name
    pub name: String,
    /// Per-token pricing block
    pub pricing: EntryPricing,
    /// Additional metadata the calculator does not interpret
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Wire pricing block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryPricing {
    /// Cost per input token
    pub prompt: PriceValue,
    /// Cost per output token
    pub completion: PriceValue,
    /// Additional pricing fields (image, request, ...) left untouched
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Price field that catalogs serialize as either a string or a number
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    /// Numeric form
    Number(f64),
    /// Decimal-in-a-string form
    Text(String),
}

impl PriceValue {
    /// Parse into a finite, non-negative per-token price.
    pub fn as_price(&self) -> std::result::Result<f64, String> {
        let value = match self {
            PriceValue::Number(number) => *number,
            PriceValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("not a decimal number: {:?}", text))?,
        };

        if !value.is_finite() {
            return Err(format!("not a finite number: {}", value));
        }
        if value < 0.0 {
            return Err(format!("negative price: {}", value));
        }
        Ok(value)
    }
}

impl CatalogEntry {
    /// Validate the wire record into a domain record.
    ///
    /// A record whose prices are missing, unparseable, negative, or
    /// non-finite is a load-time error; the price engine never sees it.
    pub fn into_record(self) -> Result<ModelPricingRecord> {
        let prompt_price = self.pricing.prompt.as_price().map_err(|reason| {
            CalculatorError::catalog(format!("model {:?}: prompt price {}", self.id, reason))
        })?;
        let completion_price = self.pricing.completion.as_price().map_err(|reason| {
            CalculatorError::catalog(format!("model {:?}: completion price {}", self.id, reason))
        })?;

        Ok(ModelPricingRecord {
            id: self.id,
            name: self.name,
            prompt_price,
            completion_price,
        })
    }
}

/// Consolidated catalog state - single lock for records and timestamp
#[derive(Debug)]
pub(super) struct CatalogData {
    /// Ordered validated records
    pub records: Vec<ModelPricingRecord>,
    /// Last successful load time
    pub loaded_at: SystemTime,
}

impl Default for CatalogData {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loaded_at: SystemTime::UNIX_EPOCH,
        }
    }
}

/// Catalog evaluation output
#[derive(Debug, Clone)]
pub struct CatalogEvaluation {
    /// Filtered cost results, in catalog order
    pub results: Vec<CostResult>,
    /// Rows that passed the keyword filters
    pub matched: usize,
    /// Rows computed before filtering
    pub total: usize,
}

/// Catalog statistics
#[derive(Debug, Clone)]
pub struct CatalogStatistics {
    /// Total number of models in the catalog
    pub total_models: usize,
    /// Per-token prompt price range across the catalog
    pub prompt_range: Option<PriceRange>,
    /// Per-token completion price range across the catalog
    pub completion_range: Option<PriceRange>,
    /// When the catalog was last loaded
    pub loaded_at: SystemTime,
}

/// Minimum and maximum observed price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lowest price seen
    pub min: f64,
    /// Highest price seen
    pub max: f64,
}
