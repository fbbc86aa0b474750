use std::time::{Duration, Instant};

/// Fixed-rate tick schedule on the monotonic clock.
pub struct TickClock {
    interval: Duration,
    next_due: Instant,
}

impl TickClock {
    /// The first tick is due right away.
    pub fn new(interval: Duration, now: Instant) -> Self {
        TickClock { interval, next_due: now }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Records a tick taken at `now`; the next one is a full interval later.
    pub fn mark(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }

    /// Pushes the next tick out by an interval plus `grace`, e.g. after a pause.
    pub fn reset(&mut self, now: Instant, grace: Duration) {
        self.next_due = now + self.interval + grace;
    }

    pub fn until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
