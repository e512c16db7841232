//! Engine configuration.
//!
//! The heuristic weighting and the trainer hyperparameters are policy
//! choices, not invariants, so they live here as configurable constants with
//! defaults matching the shipped behavior.

pub mod defaults;

mod heuristic_config;
mod trainer_config;

pub use heuristic_config::HeuristicConfig;
pub use trainer_config::TrainerConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TriageError, TriageResult};

/// Top-level engine configuration, loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub heuristic: HeuristicConfig,
    pub trainer: TrainerConfig,
    /// Mixing weight in [0,1] given to the trained model over the heuristic.
    pub blend_alpha: f64,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicConfig::default(),
            trainer: TrainerConfig::default(),
            blend_alpha: defaults::DEFAULT_BLEND_ALPHA,
        }
    }
}

impl TriageConfig {
    /// Parse from TOML text. Absent keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> TriageResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TriageError::Persistence {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text).map_err(|e| TriageError::Persistence {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
