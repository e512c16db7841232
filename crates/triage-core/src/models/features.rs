use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_DIM;
use crate::errors::{TriageError, TriageResult};

/// Fixed-dimension numeric encoding of an event (or a domain's mean over its
/// events). Feature order matches [`crate::constants::FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_DIM]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_DIM]) -> Self {
        Self(values)
    }

    /// Build from a slice, validating dimensionality at the boundary so shape
    /// mismatches surface as errors rather than silent misalignment.
    pub fn from_slice(values: &[f64]) -> TriageResult<Self> {
        let arr: [f64; FEATURE_DIM] =
            values.try_into().map_err(|_| TriageError::FeatureShape {
                expected: FEATURE_DIM,
                actual: values.len(),
            })?;
        Ok(Self(arr))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Dot product against a weight slice of matching dimensionality.
    pub fn dot(&self, weights: &[f64]) -> TriageResult<f64> {
        if weights.len() != FEATURE_DIM {
            return Err(TriageError::FeatureShape {
                expected: FEATURE_DIM,
                actual: weights.len(),
            });
        }
        Ok(self.0.iter().zip(weights).map(|(x, w)| x * w).sum())
    }

    /// Element-wise mean over a non-empty set of vectors. Returns the zero
    /// vector for empty input.
    pub fn mean(vectors: &[FeatureVector]) -> FeatureVector {
        if vectors.is_empty() {
            return Self([0.0; FEATURE_DIM]);
        }
        let mut sums = [0.0; FEATURE_DIM];
        for v in vectors {
            for (s, x) in sums.iter_mut().zip(v.0.iter()) {
                *s += x;
            }
        }
        let n = vectors.len() as f64;
        for s in sums.iter_mut() {
            *s /= n;
        }
        Self(sums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TriageError;

    #[test]
    fn from_slice_rejects_wrong_dimensionality() {
        let err = FeatureVector::from_slice(&[1.0, 2.0]).unwrap_err();
        match err {
            TriageError::FeatureShape { expected, actual } => {
                assert_eq!(expected, FEATURE_DIM);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn dot_rejects_short_weights() {
        let v = FeatureVector::new([1.0; FEATURE_DIM]);
        assert!(v.dot(&[0.5, 0.5]).is_err());
    }

    #[test]
    fn mean_averages_elementwise() {
        let a = FeatureVector::new([1.0, 0.0, 1.0, 0.5, 0.0]);
        let b = FeatureVector::new([0.0, 1.0, 1.0, 0.5, 1.0]);
        let m = FeatureVector::mean(&[a, b]);
        assert_eq!(m.as_slice(), &[0.5, 0.5, 1.0, 0.5, 0.5]);
    }
}
