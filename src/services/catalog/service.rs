//! Main catalog service implementation

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::info;

use super::loader;
use super::types::{CatalogData, CatalogEvaluation, CatalogStatistics, PriceRange};
use crate::core::cost::{self, ModelPricingRecord, UsageProfile};
use crate::utils::error::Result;

/// Catalog service holding the loaded model records
///
/// All state lives behind a single lock; `initialize`/`reload` are the
/// only writers.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Consolidated catalog state - records and load timestamp
    data: Arc<RwLock<CatalogData>>,
    /// Catalog file path
    catalog_path: String,
}

impl CatalogService {
    /// Create a new catalog service; no I/O happens until `initialize`.
    pub fn new<S: Into<String>>(catalog_path: S) -> Self {
        Self {
            data: Arc::new(RwLock::new(CatalogData::default())),
            catalog_path: catalog_path.into(),
        }
    }

    /// Load the catalog for the first time.
    pub async fn initialize(&self) -> Result<()> {
        self.reload().await
    }

    /// Reload the catalog from disk, replacing the held records.
    pub async fn reload(&self) -> Result<()> {
        info!("Loading catalog from: {}", self.catalog_path);
        let records = loader::load_from_file(&self.catalog_path).await?;
        let count = records.len();

        {
            let mut data = self.data.write();
            data.records = records;
            data.loaded_at = SystemTime::now();
        }

        info!("Catalog loaded with {} models", count);
        Ok(())
    }

    /// Snapshot of the loaded records, in catalog order.
    pub fn records(&self) -> Vec<ModelPricingRecord> {
        self.data.read().records.clone()
    }

    /// Number of loaded models.
    pub fn model_count(&self) -> usize {
        self.data.read().records.len()
    }

    /// Look up a record by model id.
    pub fn get_record(&self, id: &str) -> Option<ModelPricingRecord> {
        let data = self.data.read();
        data.records.iter().find(|record| record.id == id).cloned()
    }

    /// Run the full evaluate-then-filter pipeline.
    ///
    /// Results come back in catalog order together with the
    /// (matched, total) count pair the view layer displays.
    pub fn evaluate(
        &self,
        usage: &UsageProfile,
        includes: &[String],
        excludes: &[String],
    ) -> CatalogEvaluation {
        let records = self.records();
        let computed = cost::evaluate_catalog(&records, usage);
        let total = computed.len();
        let results = cost::filter_results(&computed, includes, excludes);
        let matched = results.len();

        CatalogEvaluation {
            results,
            matched,
            total,
        }
    }

    /// Model count and price ranges over the loaded catalog.
    pub fn statistics(&self) -> CatalogStatistics {
        let data = self.data.read();

        let range_of = |pick: fn(&ModelPricingRecord) -> f64| -> Option<PriceRange> {
            data.records
                .iter()
                .map(pick)
                .fold(None, |range, price| match range {
                    None => Some(PriceRange {
                        min: price,
                        max: price,
                    }),
                    Some(range) => Some(PriceRange {
                        min: range.min.min(price),
                        max: range.max.max(price),
                    }),
                })
        };

        CatalogStatistics {
            total_models: data.records.len(),
            prompt_range: range_of(|record| record.prompt_price),
            completion_range: range_of(|record| record.completion_price),
            loaded_at: data.loaded_at,
        }
    }
}
