use crate::errors::TriageResult;
use crate::models::Event;

/// Read-only view of the historical event log.
///
/// The engine never writes through this trait; resets and retraining leave
/// the underlying dataset untouched. Implementations may read a file, a
/// database, or an in-memory fixture.
pub trait EventSource: Send + Sync {
    fn events(&self) -> TriageResult<Vec<Event>>;
}
