use std::time::{Duration, Instant};

/// How far behind the clock may fall before it gives up catching up.
const MAX_LAG_TICKS: u32 = 3;

/// Fixed-rate tick boundaries.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    next: Instant,
}

impl TickClock {
    pub fn new(tick_rate: u32) -> Self {
        Self::starting_at(tick_rate, Instant::now())
    }

    pub fn starting_at(tick_rate: u32, start: Instant) -> Self {
        let period = Duration::from_secs_f64(1.0 / tick_rate.max(1) as f64);
        Self {
            period,
            next: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Time left until the current boundary, zero if it already passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Moves to the next boundary. A clock that fell too far behind
    /// restarts from `now` instead of firing a burst of late ticks.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if now > self.next + self.period * MAX_LAG_TICKS {
            self.next = now + self.period;
        }
    }
}
