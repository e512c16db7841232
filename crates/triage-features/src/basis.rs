use triage_core::Event;

/// Normalization basis for recency: the oldest and newest `received`
/// timestamps across the whole event log. Both the extractor and the
/// heuristic scorer normalize against the same basis so their recency
/// features agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBasis {
    pub oldest: i64,
    pub newest: i64,
}

impl TimeBasis {
    /// Compute the basis for a log snapshot. `None` for an empty log.
    pub fn of(events: &[Event]) -> Option<Self> {
        let first = events.first()?.received;
        let (oldest, newest) = events.iter().fold((first, first), |(lo, hi), e| {
            (lo.min(e.received), hi.max(e.received))
        });
        Some(Self { oldest, newest })
    }

    /// Normalized recency of a timestamp: 0.0 at the oldest event, 1.0 at the
    /// most recent. A log spanning a single instant is all "most recent".
    pub fn recency(&self, received: i64) -> f64 {
        if self.newest == self.oldest {
            return 1.0;
        }
        let span = (self.newest - self.oldest) as f64;
        (((received - self.oldest) as f64) / span).clamp(0.0, 1.0)
    }
}
