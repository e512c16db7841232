//! Error taxonomy for the priority engine.
//!
//! A missing trained model is deliberately *not* an error: prediction falls
//! back to heuristic-only ranking, so `ModelStore::load` returns `Ok(None)`.

/// All errors surfaced by the engine.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    /// Training was invoked on an empty or domain-less event log.
    #[error("no training data: {operation} called with {event_count} events across {domain_count} domains")]
    NoTrainingData {
        operation: &'static str,
        event_count: usize,
        domain_count: usize,
    },

    /// Feature vector dimensionality is inconsistent. Fatal to the current
    /// training attempt; never corrupts a previously persisted model.
    #[error("feature shape mismatch: expected {expected} dimensions, got {actual}")]
    FeatureShape { expected: usize, actual: usize },

    /// Persistence failure (unreadable dataset, unwritable model file, corrupt
    /// stored artifact). Raised before any overwrite, never mid-overwrite.
    #[error("persistence failure for {path}: {message}")]
    Persistence { path: String, message: String },
}

pub type TriageResult<T> = Result<T, TriageError>;
