//! Named default values for all configuration knobs.

/// Weight given to the interaction-rate factor in the heuristic score.
pub const DEFAULT_INTERACTION_WEIGHT: f64 = 0.7;

/// Weight given to the recency factor in the heuristic score.
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.3;

/// Credit for an in-notification action click (more than a plain open).
pub const DEFAULT_ACTION_WEIGHT: f64 = 1.5;

/// Credit for a plain open.
pub const DEFAULT_OPEN_WEIGHT: f64 = 1.0;

/// Penalty per dismissal.
pub const DEFAULT_DISMISS_PENALTY: f64 = 0.5;

/// Gradient-descent learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.15;

/// Gradient-descent epoch count.
pub const DEFAULT_EPOCHS: usize = 300;

/// Mixing weight given to the trained model over the heuristic.
pub const DEFAULT_BLEND_ALPHA: f64 = 0.6;
