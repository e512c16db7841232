use triage_core::config::HeuristicConfig;
use triage_core::DomainAggregate;

/// Interaction-rate factor.
///
/// Formula: `(open·opened + action·actions − penalty·dismissed) / count`,
/// clamped to [0,1]. Action clicks earn more credit than plain opens;
/// dismissals subtract. A domain with zero events scores 0.0.
pub fn calculate(agg: &DomainAggregate, config: &HeuristicConfig) -> f64 {
    if agg.event_count == 0 {
        return 0.0;
    }
    let credit = config.open_weight * agg.opened_count as f64
        + config.action_weight * agg.action_count as f64
        - config.dismiss_penalty * agg.dismissed_count as f64;
    (credit / agg.event_count as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(count: usize, opened: usize, dismissed: usize, actions: usize) -> DomainAggregate {
        DomainAggregate {
            event_count: count,
            opened_count: opened,
            dismissed_count: dismissed,
            action_count: actions,
            ..Default::default()
        }
    }

    #[test]
    fn zero_events_score_zero() {
        assert_eq!(calculate(&agg(0, 0, 0, 0), &HeuristicConfig::default()), 0.0);
    }

    #[test]
    fn action_outweighs_plain_open() {
        let cfg = HeuristicConfig::default();
        let opened = calculate(&agg(2, 1, 0, 0), &cfg);
        let acted = calculate(&agg(2, 0, 0, 1), &cfg);
        assert!(acted > opened);
    }

    #[test]
    fn dismissal_reduces_score() {
        let cfg = HeuristicConfig::default();
        let clean = calculate(&agg(2, 1, 0, 0), &cfg);
        let dismissed = calculate(&agg(2, 1, 1, 0), &cfg);
        assert!(dismissed < clean);
    }

    #[test]
    fn clamped_to_unit_interval() {
        let cfg = HeuristicConfig::default();
        // All events action-clicked: raw rate 1.5, clamps to 1.0.
        assert_eq!(calculate(&agg(2, 0, 0, 2), &cfg), 1.0);
        // All dismissed: raw rate negative, clamps to 0.0.
        assert_eq!(calculate(&agg(2, 0, 2, 0), &cfg), 0.0);
    }
}
