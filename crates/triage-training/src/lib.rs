//! # triage-training
//!
//! Fits a logistic-regression weight vector over event features with batch
//! gradient descent on binary cross-entropy. Zero-initialized and fully
//! deterministic: the same features, labels, learning rate, and epoch count
//! always reproduce the same weights.

pub mod loss;
pub mod trainer;

pub use trainer::Trainer;
