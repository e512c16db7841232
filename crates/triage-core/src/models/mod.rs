//! Data model for the priority engine.

mod aggregate;
mod event;
mod features;
mod model;
mod ranking;
mod training_summary;

pub use aggregate::DomainAggregate;
pub use event::Event;
pub use features::FeatureVector;
pub use model::Model;
pub use ranking::{RankedDomain, Ranking};
pub use training_summary::TrainingSummary;
