//! # triage-core
//!
//! Foundation crate for the triage priority engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod math;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TriageConfig;
pub use errors::{TriageError, TriageResult};
pub use models::{
    DomainAggregate, Event, FeatureVector, Model, RankedDomain, Ranking, TrainingSummary,
};
