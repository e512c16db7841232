//! Per-domain aggregate statistics, rebuilt fresh from the full log on every
//! run.

use std::collections::HashMap;

use triage_core::{DomainAggregate, Event};

/// Group events by exact domain string and fold interaction counts, mean
/// delay, and the most recent timestamp. Empty input yields an empty map.
pub fn aggregate(events: &[Event]) -> HashMap<String, DomainAggregate> {
    let mut per_domain: HashMap<String, DomainAggregate> = HashMap::new();
    let mut delay_sums: HashMap<String, f64> = HashMap::new();

    for event in events {
        let agg = per_domain.entry(event.domain.clone()).or_insert_with(|| {
            DomainAggregate {
                last_received: event.received,
                ..Default::default()
            }
        });
        agg.event_count += 1;
        agg.opened_count += event.opened as usize;
        agg.dismissed_count += event.dismissed as usize;
        agg.action_count += event.action_clicked as usize;
        agg.last_received = agg.last_received.max(event.received);
        *delay_sums.entry(event.domain.clone()).or_default() += f64::from(event.delay_seconds);
    }

    for (domain, agg) in per_domain.iter_mut() {
        agg.mean_delay_seconds = delay_sums[domain] / agg.event_count as f64;
    }

    per_domain
}
