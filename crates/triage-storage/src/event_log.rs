//! Read-only event-log sources.

use std::path::PathBuf;

use serde::Deserialize;

use triage_core::traits::EventSource;
use triage_core::{Event, TriageError, TriageResult};

/// On-disk dataset layout: `{"events":[…]}`.
#[derive(Debug, Deserialize)]
struct Dataset {
    #[serde(default)]
    events: Vec<Event>,
}

/// Event log backed by a JSON dataset file. Strictly read-only: training and
/// reset never modify it.
pub struct JsonEventLog {
    path: PathBuf,
}

impl JsonEventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn persistence_error(&self, message: impl ToString) -> TriageError {
        TriageError::Persistence {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl EventSource for JsonEventLog {
    fn events(&self) -> TriageResult<Vec<Event>> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| self.persistence_error(e))?;
        let dataset: Dataset =
            serde_json::from_str(&text).map_err(|e| self.persistence_error(e))?;
        Ok(dataset.events)
    }
}

/// In-memory event log for tests and embedded callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventLog {
    events: Vec<Event>,
}

impl MemoryEventLog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl EventSource for MemoryEventLog {
    fn events(&self) -> TriageResult<Vec<Event>> {
        Ok(self.events.clone())
    }
}
