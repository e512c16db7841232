//! # triage-storage
//!
//! Persistence boundary of the engine: read-only event-log sources and the
//! model store. The dataset file is never written by anything in this crate;
//! the model artifact is overwritten atomically and removed on reset.

pub mod event_log;
pub mod model_store;

pub use event_log::{JsonEventLog, MemoryEventLog};
pub use model_store::JsonModelStore;
