use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_NAMES;
use crate::errors::TriageResult;
use crate::math::sigmoid;
use crate::models::FeatureVector;

/// Trained logistic-regression artifact. Produced by the trainer, owned by
/// the model store once persisted.
///
/// `feature_names` records the weight order so the stored artifact can be
/// reconstructed without ambiguity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub trained_at: DateTime<Utc>,
    pub feature_names: Vec<String>,
}

impl Model {
    pub fn new(weights: Vec<f64>, bias: f64, trained_at: DateTime<Utc>) -> Self {
        Self {
            weights,
            bias,
            trained_at,
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Model score for one feature vector: `sigmoid(w · x + b)`.
    pub fn score(&self, features: &FeatureVector) -> TriageResult<f64> {
        Ok(sigmoid(features.dot(&self.weights)? + self.bias))
    }
}
