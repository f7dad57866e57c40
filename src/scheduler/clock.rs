/*!
 * Simulated Clock
 * Single monotonic tick counter shared by every policy loop
 */

use crate::core::types::Tick;

/// Monotonic simulated clock
///
/// Starts at zero for each run and only moves forward. Policies
/// advance it by whole slices or single ticks; it never observes
/// wall time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    now: Tick,
}

impl Clock {
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Current simulated time
    #[inline]
    pub const fn now(&self) -> Tick {
        self.now
    }

    /// Advance by a whole slice
    #[inline]
    pub fn advance(&mut self, ticks: Tick) {
        debug_assert!(ticks >= 0, "clock can only move forward");
        self.now += ticks;
    }

    /// Advance by a single tick
    #[inline]
    pub fn tick(&mut self) {
        self.now += 1;
    }
}
