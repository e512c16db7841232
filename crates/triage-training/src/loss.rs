use triage_core::math::sigmoid;
use triage_core::{FeatureVector, TriageResult};

/// Floor/ceiling applied to predictions inside the log terms so a fully
/// saturated sigmoid cannot produce `ln(0)`.
const EPS: f64 = 1e-12;

/// Mean binary cross-entropy of a weight vector over a sample set.
pub fn binary_cross_entropy(
    weights: &[f64],
    bias: f64,
    features: &[FeatureVector],
    labels: &[f64],
) -> TriageResult<f64> {
    if features.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for (x, &y) in features.iter().zip(labels) {
        let p = sigmoid(x.dot(weights)? + bias).clamp(EPS, 1.0 - EPS);
        total -= y * p.ln() + (1.0 - y) * (1.0 - p).ln();
    }
    Ok(total / features.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::constants::FEATURE_DIM;

    #[test]
    fn zero_weights_give_ln2_loss() {
        let features = vec![FeatureVector::new([1.0, 0.0, 1.0, 0.5, 0.2]); 4];
        let labels = vec![1.0, 0.0, 1.0, 0.0];
        let loss =
            binary_cross_entropy(&[0.0; FEATURE_DIM], 0.0, &features, &labels).unwrap();
        assert!((loss - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn saturated_predictions_do_not_blow_up() {
        let features = vec![FeatureVector::new([1.0; FEATURE_DIM])];
        let labels = vec![0.0];
        // Huge positive logit against a 0 label: finite (large) loss.
        let loss = binary_cross_entropy(&[1000.0; FEATURE_DIM], 0.0, &features, &labels).unwrap();
        assert!(loss.is_finite());
    }
}
