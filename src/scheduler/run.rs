/*!
 * Run Outcome
 * Everything a policy produces for one workload
 */

use crate::process::Process;
use crate::scheduler::stats::RunStats;
use crate::scheduler::timeline::Timeline;
use serde::{Deserialize, Serialize};

/// Outcome of running one policy over one workload
///
/// `processes` carries the completed records in the policy's report
/// order: service order for the sort-based policies, input order for
/// round-robin, completion order for the preemptive policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Run {
    pub processes: Vec<Process>,
    pub stats: RunStats,
    pub timeline: Timeline,
}
