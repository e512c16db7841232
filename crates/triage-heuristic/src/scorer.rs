use std::collections::HashMap;

use triage_core::config::HeuristicConfig;
use triage_core::{DomainAggregate, Event};
use triage_features::TimeBasis;

use crate::formula::{self, HeuristicBreakdown};

/// Heuristic scorer over per-domain aggregates.
///
/// Stateless apart from its weighting config; identical input snapshots
/// always produce identical scores.
pub struct HeuristicScorer {
    config: HeuristicConfig,
}

impl HeuristicScorer {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// Score one domain aggregate in [0.0, 1.0].
    pub fn score(&self, agg: &DomainAggregate, basis: &TimeBasis) -> f64 {
        formula::compute(agg, basis, &self.config)
    }

    /// Score with a per-factor breakdown.
    pub fn score_breakdown(&self, agg: &DomainAggregate, basis: &TimeBasis) -> HeuristicBreakdown {
        formula::compute_breakdown(agg, basis, &self.config)
    }

    /// Score every domain in a log snapshot. Empty log yields an empty map.
    pub fn score_all(
        &self,
        aggregates: &HashMap<String, DomainAggregate>,
        events: &[Event],
    ) -> HashMap<String, f64> {
        let Some(basis) = TimeBasis::of(events) else {
            return HashMap::new();
        };
        aggregates
            .iter()
            .map(|(domain, agg)| (domain.clone(), self.score(agg, &basis)))
            .collect()
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}
