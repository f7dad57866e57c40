/*!
 * Run Statistics
 * Counters accumulated over a single policy run
 */

use crate::core::serde::{is_zero_tick, is_zero_u64};
use crate::core::types::Tick;
use serde::{Deserialize, Serialize};

/// Aggregate counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunStats {
    /// Final clock value, busy plus idle ticks
    pub total_ticks: Tick,
    /// Ticks the CPU sat idle waiting for the next arrival
    #[serde(default, skip_serializing_if = "is_zero_tick")]
    pub idle_ticks: Tick,
    /// Times a process was set aside with work still remaining
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub preemptions: u64,
    /// Processes that ran to completion
    pub completed: usize,
}
