use serde::{Deserialize, Serialize};

use super::defaults;

/// Logistic-regression trainer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Fixed gradient-descent learning rate.
    pub learning_rate: f64,
    /// Fixed number of full-batch epochs. No early stopping.
    pub epochs: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            epochs: defaults::DEFAULT_EPOCHS,
        }
    }
}
