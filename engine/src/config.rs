//! Generator configuration
//!
//! ```json
//! { "seed": 12345 }
//! { "seed_text": "campaign-7" }
//! {}
//! ```
//!
//! An explicit `seed` wins over `seed_text`; with neither, the generator is
//! seeded unpredictably.

use serde::{Deserialize, Serialize};

use crate::error::{RngError, RngResult};
use crate::rng::{RngManager, SeedSource};

/// Configuration for building an [`RngManager`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Explicit integer seed
    #[serde(default)]
    pub seed: Option<i32>,

    /// Text seed (decimal text parsed, other text hashed)
    #[serde(default)]
    pub seed_text: Option<String>,
}

impl GeneratorConfig {
    /// Parse from JSON
    pub fn from_json(json: &str) -> RngResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            RngError::Serialization(format!("Config deserialization failed: {}", e))
        })
    }

    /// The seed source this configuration describes
    pub fn seed_source(&self) -> SeedSource {
        match (&self.seed, &self.seed_text) {
            (Some(seed), _) => SeedSource::Explicit(*seed),
            (None, Some(text)) => SeedSource::Text(text.clone()),
            (None, None) => SeedSource::Entropy,
        }
    }

    pub fn build(&self) -> RngManager {
        RngManager::from_source(&self.seed_source())
    }
}
