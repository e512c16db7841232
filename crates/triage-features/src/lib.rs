//! # triage-features
//!
//! Converts raw notification events into per-event and per-domain numeric
//! feature vectors, and rebuilds per-domain interaction aggregates.
//! Everything here is a pure function of the event log snapshot.

pub mod aggregate;
pub mod basis;
pub mod extract;

pub use aggregate::aggregate;
pub use basis::TimeBasis;
pub use extract::{encode, extract, training_set};
