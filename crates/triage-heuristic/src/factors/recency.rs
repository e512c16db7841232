use triage_core::DomainAggregate;
use triage_features::TimeBasis;

/// Recency factor: normalized recency of the domain's most recent event,
/// against the same log-wide basis the feature extractor uses.
///
/// Range: 0.0 (oldest) – 1.0 (most recent).
pub fn calculate(agg: &DomainAggregate, basis: &TimeBasis) -> f64 {
    basis.recency(agg.last_received)
}
