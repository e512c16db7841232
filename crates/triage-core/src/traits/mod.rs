//! Seams between the engine and its collaborators.

mod event_source;
mod model_store;

pub use event_source::EventSource;
pub use model_store::ModelStore;
