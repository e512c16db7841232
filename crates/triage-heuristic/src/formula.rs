use triage_core::config::HeuristicConfig;
use triage_core::DomainAggregate;
use triage_features::TimeBasis;

use crate::factors;

/// Two-factor weighted heuristic.
///
/// ```text
/// score = interactionWeight × interactionRate
///       + recencyWeight × recencyFactor
/// ```
///
/// Both factors live in [0.0, 1.0]; with weights summing to 1 the score does
/// too. A zero-event aggregate scores 0.0.
pub fn compute(agg: &DomainAggregate, basis: &TimeBasis, config: &HeuristicConfig) -> f64 {
    if agg.event_count == 0 {
        return 0.0;
    }
    let interaction = factors::interaction::calculate(agg, config);
    let recency = factors::recency::calculate(agg, basis);
    config.interaction_weight * interaction + config.recency_weight * recency
}

/// Per-factor breakdown for debugging/observability.
#[derive(Debug, Clone)]
pub struct HeuristicBreakdown {
    pub interaction: f64,
    pub recency: f64,
    pub score: f64,
}

/// Compute the score with a full factor breakdown.
pub fn compute_breakdown(
    agg: &DomainAggregate,
    basis: &TimeBasis,
    config: &HeuristicConfig,
) -> HeuristicBreakdown {
    let interaction = factors::interaction::calculate(agg, config);
    let recency = factors::recency::calculate(agg, basis);
    let score = if agg.event_count == 0 {
        0.0
    } else {
        config.interaction_weight * interaction + config.recency_weight * recency
    };
    HeuristicBreakdown {
        interaction,
        recency,
        score,
    }
}
