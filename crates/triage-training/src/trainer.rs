use chrono::Utc;
use tracing::debug;

use triage_core::config::TrainerConfig;
use triage_core::constants::FEATURE_DIM;
use triage_core::math::sigmoid;
use triage_core::{FeatureVector, Model, TriageError, TriageResult};

/// How often (in epochs) the running loss is emitted at debug level.
const LOSS_LOG_INTERVAL: usize = 50;

/// Batch gradient-descent trainer for the logistic priority model.
///
/// Weights and bias start at zero, the learning rate and epoch count are
/// fixed up front, and samples are visited in input order, so training is
/// bit-reproducible for identical input.
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// Fit a model to per-event feature vectors and their importance labels.
    ///
    /// Fails with `NoTrainingData` on an empty sample set and `FeatureShape`
    /// when labels and features disagree in length. Never emits a partial
    /// model.
    pub fn fit(&self, features: &[FeatureVector], labels: &[f64]) -> TriageResult<Model> {
        if features.is_empty() {
            return Err(TriageError::NoTrainingData {
                operation: "fit",
                event_count: 0,
                domain_count: 0,
            });
        }
        if labels.len() != features.len() {
            return Err(TriageError::FeatureShape {
                expected: features.len(),
                actual: labels.len(),
            });
        }

        let n = features.len() as f64;
        let mut weights = [0.0; FEATURE_DIM];
        let mut bias = 0.0;

        for epoch in 0..self.config.epochs {
            let mut grad_w = [0.0; FEATURE_DIM];
            let mut grad_b = 0.0;

            for (x, &y) in features.iter().zip(labels) {
                let p = sigmoid(x.dot(&weights)? + bias);
                let err = p - y;
                for (g, xi) in grad_w.iter_mut().zip(x.as_slice()) {
                    *g += err * xi;
                }
                grad_b += err;
            }

            for (w, g) in weights.iter_mut().zip(grad_w) {
                *w -= self.config.learning_rate * g / n;
            }
            bias -= self.config.learning_rate * grad_b / n;

            if epoch % LOSS_LOG_INTERVAL == 0 {
                let loss =
                    crate::loss::binary_cross_entropy(&weights, bias, features, labels)?;
                debug!(epoch, loss, "training progress");
            }
        }

        Ok(Model::new(weights.to_vec(), bias, Utc::now()))
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainerConfig::default())
    }
}
