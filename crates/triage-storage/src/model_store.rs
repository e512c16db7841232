//! Persisted model artifact: a single self-describing JSON file.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::info;

use triage_core::traits::ModelStore;
use triage_core::{Model, TriageError, TriageResult};

/// File-backed model store.
///
/// Saves serialize fully before touching disk, then write to a sibling temp
/// file and rename over the target, so readers never observe a torn
/// artifact. Save/load/clear share one mutex: the read-modify-write of the
/// persisted model is a single critical section, released on every exit path
/// by the guard.
pub struct JsonModelStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn persistence_error(&self, message: impl ToString) -> TriageError {
        TriageError::Persistence {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        // A panic while holding the lock poisons it; the store itself is
        // still consistent (writes are atomic), so recover the guard.
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ModelStore for JsonModelStore {
    fn save(&self, model: &Model) -> TriageResult<()> {
        let _guard = self.guard();

        // Serialize first: a failure here leaves any prior artifact intact.
        let text = serde_json::to_string(model).map_err(|e| self.persistence_error(e))?;

        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, text).map_err(|e| self.persistence_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.persistence_error(e))?;

        info!(path = %self.path.display(), "model saved");
        Ok(())
    }

    fn load(&self) -> TriageResult<Option<Model>> {
        let _guard = self.guard();

        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.persistence_error(e)),
        };
        let model = serde_json::from_str(&text).map_err(|e| self.persistence_error(e))?;
        Ok(Some(model))
    }

    fn clear(&self) -> TriageResult<()> {
        let _guard = self.guard();

        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "model cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.persistence_error(e)),
        }
    }
}
