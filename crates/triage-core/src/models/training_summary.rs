use serde::{Deserialize, Serialize};

/// Result summary of one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Number of event samples the model was fit on.
    pub samples: usize,
    /// Gradient-descent epochs executed.
    pub epochs: usize,
    /// Binary cross-entropy loss after the final epoch.
    pub final_loss: f64,
}
