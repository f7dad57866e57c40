/*!
 * Execution Timeline
 * Ordered record of every CPU grant made during a run
 */

use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Serialize};

/// One CPU grant to a single process
///
/// Granularity follows the issuing policy: a whole burst for the
/// sort-based policies, one slice for the quantum-based ones, one
/// tick for shortest-remaining-time-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Segment {
    pub pid: Pid,
    pub start: Tick,
    pub end: Tick,
}

impl Segment {
    /// Grant length in ticks
    #[inline]
    pub const fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Append-only trace of CPU ownership over a run
///
/// Segments are recorded in clock order and never overlap. Gaps
/// between consecutive segments are idle time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `pid` held the CPU from `start` until `end`
    pub(crate) fn record(&mut self, pid: Pid, start: Tick, end: Tick) {
        debug_assert!(
            self.segments.last().map_or(true, |last| last.end <= start),
            "segments must be recorded in clock order"
        );
        self.segments.push(Segment { pid, start, end });
    }

    /// Grants in clock order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total ticks spent executing processes
    pub fn busy_ticks(&self) -> Tick {
        self.segments.iter().map(Segment::duration).sum()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
