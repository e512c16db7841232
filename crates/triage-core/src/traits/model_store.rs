use crate::errors::TriageResult;
use crate::models::Model;

/// Single owner of the persisted trained model.
///
/// `save` must overwrite atomically (no torn artifact visible to readers),
/// and `clear` removes only the model — never the event log. A store with no
/// model is a valid state: `load` returns `Ok(None)`, not an error.
pub trait ModelStore: Send + Sync {
    fn save(&self, model: &Model) -> TriageResult<()>;
    fn load(&self) -> TriageResult<Option<Model>>;
    fn clear(&self) -> TriageResult<()>;
}
