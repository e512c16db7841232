/// Triage engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of dimensions in an event feature vector.
pub const FEATURE_DIM: usize = 5;

/// Canonical feature order. Persisted alongside trained weights so the
/// stored artifact is unambiguous about which weight belongs to which
/// feature.
pub const FEATURE_NAMES: [&str; FEATURE_DIM] =
    ["action_clicked", "opened", "dismissed", "immediacy", "recency"];
