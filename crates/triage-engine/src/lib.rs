//! # triage-engine
//!
//! Top of the pipeline: blends heuristic and trained-model scores per domain
//! into one ranking, and exposes the engine's logical operations — train,
//! predict, reset — over an event source and a model store.

pub mod blend;
pub mod engine;

pub use engine::PriorityEngine;
