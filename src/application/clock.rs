use std::time::{Duration, Instant};

/// Fixed-interval step timer.
///
/// At most one step is reported per poll, however far behind the clock is:
/// a long stall produces one generation, not a burst of catch-up steps.
#[derive(Debug, Clone)]
pub struct StepClock {
    interval: Duration,
    last_step: Instant,
}

impl StepClock {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self { interval, last_step: start }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time since the last step; zero if `now` is earlier than it
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_step)
    }

    /// Returns true when a step is due at `now`, and restarts the interval from `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.elapsed(now) >= self.interval {
            self.last_step = now;
            true
        } else {
            false
        }
    }
}
