// High-resolution monotonic clock used to bracket each blit.

use crate::types::Ticks;
use std::time::Instant;

/// Monotonic tick source. `now` must never go backwards.
pub trait Clock {
    fn now(&self) -> Ticks;

    /// Ticks per second.
    fn frequency(&self) -> u64;
}

/// Nanosecond ticks since the clock was created.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub const FREQUENCY: u64 = 1_000_000_000;

    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Ticks {
        // u64 nanoseconds covers ~584 years of uptime.
        self.origin.elapsed().as_nanos() as Ticks
    }

    fn frequency(&self) -> u64 {
        Self::FREQUENCY
    }
}
