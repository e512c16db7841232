//! # triage-heuristic
//!
//! Rule-based importance estimate from aggregate interaction statistics and
//! recency. No learning involved; a pure, deterministic function of the
//! event-log snapshot, usable on its own when no trained model exists.

pub mod factors;
pub mod formula;
pub mod scorer;

pub use formula::HeuristicBreakdown;
pub use scorer::HeuristicScorer;
