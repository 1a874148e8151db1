//! Test fixtures and data factories
//!
//! Factory methods for catalog records and usage profiles with sensible
//! defaults. All factories create real objects, not mocks.

use std::io::Write;

use llm_pricecalc::{ModelPricingRecord, UsageProfile};

/// Factory for model pricing records
pub struct RecordFactory;

impl RecordFactory {
    /// GPT-4 at its documented OpenRouter prices
    pub fn gpt4() -> ModelPricingRecord {
        ModelPricingRecord {
            id: "openai/gpt-4".to_string(),
            name: "GPT-4".to_string(),
            prompt_price: 0.00003,
            completion_price: 0.00006,
        }
    }

    /// Free variant with zero pricing
    pub fn gpt4_free() -> ModelPricingRecord {
        ModelPricingRecord {
            id: "openai/gpt-4:free".to_string(),
            name: "GPT-4 (free)".to_string(),
            prompt_price: 0.0,
            completion_price: 0.0,
        }
    }

    /// Claude 3 at representative prices
    pub fn claude3() -> ModelPricingRecord {
        ModelPricingRecord {
            id: "anthropic/claude-3".to_string(),
            name: "Claude 3".to_string(),
            prompt_price: 0.000015,
            completion_price: 0.000075,
        }
    }

    /// Small three-model catalog in a fixed order
    pub fn catalog() -> Vec<ModelPricingRecord> {
        vec![Self::gpt4(), Self::gpt4_free(), Self::claude3()]
    }
}

/// Factory for usage profiles
pub struct UsageFactory;

impl UsageFactory {
    /// The worked-example profile: 1000/100 tokens, 1000 queries, $100
    pub fn example() -> UsageProfile {
        UsageProfile::new(1000, 100, 1000, 100.0)
    }

    /// A heavy profile that blows through the example budget
    pub fn over_budget() -> UsageProfile {
        UsageProfile::new(50_000, 10_000, 5_000, 100.0)
    }
}

/// JSON catalog document matching `RecordFactory::catalog`, mixing string
/// and numeric price forms
pub const CATALOG_JSON: &str = r#"{
    "data": [
        { "id": "openai/gpt-4", "name": "GPT-4",
          "pricing": { "prompt": "0.00003", "completion": "0.00006" } },
        { "id": "openai/gpt-4:free", "name": "GPT-4 (free)",
          "pricing": { "prompt": "0", "completion": "0" } },
        { "id": "anthropic/claude-3", "name": "Claude 3",
          "pricing": { "prompt": 0.000015, "completion": 0.000075 } }
    ]
}"#;

/// Write the fixture catalog to a temp file the loader can read.
pub fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp catalog file");
    file.write_all(CATALOG_JSON.as_bytes())
        .expect("write temp catalog");
    file
}
