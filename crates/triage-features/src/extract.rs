//! Per-event encoding and per-domain feature extraction.

use std::collections::HashMap;

use triage_core::{Event, FeatureVector};

use crate::basis::TimeBasis;

/// Encode one event against the log-wide time basis.
///
/// Features, in canonical order: `action_clicked`, `opened`, `dismissed` as
/// 0/1, `immediacy` in [0,1], `recency` in [0,1]. Immediacy is the inverse
/// delay `1/(1+delay)` when the user reacted at all; a censored event (no
/// reaction, delay recorded as 0) scores 0 rather than looking instant.
pub fn encode(event: &Event, basis: &TimeBasis) -> FeatureVector {
    let immediacy = if event.reacted() {
        1.0 / (1.0 + f64::from(event.delay_seconds))
    } else {
        0.0
    };
    FeatureVector::new([
        event.action_clicked as u8 as f64,
        event.opened as u8 as f64,
        event.dismissed as u8 as f64,
        immediacy,
        basis.recency(event.received),
    ])
}

/// Per-domain feature vectors: element-wise mean over each domain's event
/// encodings. Empty input yields an empty map; domains with zero events never
/// appear.
pub fn extract(events: &[Event]) -> HashMap<String, FeatureVector> {
    let Some(basis) = TimeBasis::of(events) else {
        return HashMap::new();
    };

    let mut per_domain: HashMap<String, Vec<FeatureVector>> = HashMap::new();
    for event in events {
        per_domain
            .entry(event.domain.clone())
            .or_default()
            .push(encode(event, &basis));
    }

    per_domain
        .into_iter()
        .map(|(domain, vectors)| (domain, FeatureVector::mean(&vectors)))
        .collect()
}

/// Per-event feature vectors paired with training labels.
///
/// The label is the fixed importance proxy: 1.0 iff the user opened the
/// notification or clicked an action (see [`Event::label`]).
pub fn training_set(events: &[Event]) -> (Vec<FeatureVector>, Vec<f64>) {
    let Some(basis) = TimeBasis::of(events) else {
        return (Vec::new(), Vec::new());
    };
    events
        .iter()
        .map(|e| (encode(e, &basis), e.label()))
        .unzip()
}
