//! Shared numeric helpers for the logistic model.

/// Logistic function, guarded against overflow at extreme negative logits.
pub fn sigmoid(x: f64) -> f64 {
    if x < -700.0 {
        return 0.0;
    }
    1.0 / (1.0 + (-x).exp())
}
