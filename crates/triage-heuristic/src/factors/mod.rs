//! Individual heuristic factors, each in [0.0, 1.0].

pub mod interaction;
pub mod recency;
