//! Model catalog service
//!
//! Loads the JSON pricing catalog and drives the evaluate-then-filter
//! pipeline for callers.

mod loader;
mod service;
mod types;


// Re-export public types
pub use loader::{load_from_file, parse_catalog};
pub use service::CatalogService;
pub use types::{
    CatalogEntry, CatalogEvaluation, CatalogStatistics, EntryPricing, PriceRange, PriceValue,
    RawCatalog,
};
