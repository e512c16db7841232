use serde::{Deserialize, Serialize};

/// Per-domain interaction statistics, rebuilt from the full event log on
/// every training or prediction run. Never persisted, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainAggregate {
    pub event_count: usize,
    pub opened_count: usize,
    pub dismissed_count: usize,
    pub action_count: usize,
    pub mean_delay_seconds: f64,
    /// Epoch seconds of the most recent event for this domain.
    pub last_received: i64,
}
