//! Catalog loading for the calculator
//!
//! Parses and validates the JSON model catalog before any record reaches
//! the price engine.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

use super::types::RawCatalog;
use crate::core::cost::ModelPricingRecord;
use crate::utils::error::Result;

/// Parse a catalog document into validated records.
///
/// The document must carry a top-level `data` array. Each record needs an
/// id, a name, and finite non-negative prompt/completion prices in string
/// or numeric form; one bad record fails the whole load. Duplicate ids
/// are kept in order with a warning.
pub fn parse_catalog(content: &str) -> Result<Vec<ModelPricingRecord>> {
    let raw: RawCatalog = serde_json::from_str(content)?;

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(raw.data.len());
    for entry in raw.data {
        if !seen.insert(entry.id.clone()) {
            warn!("Duplicate model id in catalog: {}", entry.id);
        }
        records.push(entry.into_record()?);
    }

    debug!("Parsed {} catalog records", records.len());
    Ok(records)
}

/// Load and parse a catalog from a local JSON file.
pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ModelPricingRecord>> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    parse_catalog(&content)
}
