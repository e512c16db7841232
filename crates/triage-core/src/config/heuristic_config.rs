use serde::{Deserialize, Serialize};

use super::defaults;

/// Heuristic scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Weight of the interaction-rate factor.
    pub interaction_weight: f64,
    /// Weight of the recency factor.
    pub recency_weight: f64,
    /// Credit for an in-notification action click.
    pub action_weight: f64,
    /// Credit for a plain open.
    pub open_weight: f64,
    /// Penalty per dismissal.
    pub dismiss_penalty: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            interaction_weight: defaults::DEFAULT_INTERACTION_WEIGHT,
            recency_weight: defaults::DEFAULT_RECENCY_WEIGHT,
            action_weight: defaults::DEFAULT_ACTION_WEIGHT,
            open_weight: defaults::DEFAULT_OPEN_WEIGHT,
            dismiss_penalty: defaults::DEFAULT_DISMISS_PENALTY,
        }
    }
}
