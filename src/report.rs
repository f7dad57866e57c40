/*!
 * Reporting
 * Per-policy result tables, averages, and JSON rendering
 */

use crate::core::types::{Pid, Tick};
use crate::scheduler::{Policy, Run, RunStats};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One reported process outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CompletionRow {
    pub id: Pid,
    pub waiting: Tick,
    pub turnaround: Tick,
}

/// Mean metrics over one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    pub average_waiting: f64,
    pub average_turnaround: f64,
}

impl Summary {
    fn from_rows(rows: &[CompletionRow]) -> Self {
        if rows.is_empty() {
            return Self {
                average_waiting: 0.0,
                average_turnaround: 0.0,
            };
        }
        let count = rows.len() as f64;
        Self {
            average_waiting: rows.iter().map(|r| r.waiting as f64).sum::<f64>() / count,
            average_turnaround: rows.iter().map(|r| r.turnaround as f64).sum::<f64>() / count,
        }
    }
}

/// Rendered outcome of one policy run
///
/// Rows keep the order the run reported: service order for the
/// sort-based policies, input order for round-robin, completion order
/// for the preemptive ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PolicyReport {
    pub policy: Policy,
    pub rows: Vec<CompletionRow>,
    pub summary: Summary,
    pub stats: RunStats,
}

impl PolicyReport {
    /// Capture a run's outcome
    pub fn new(policy: Policy, run: &Run) -> Self {
        let rows: Vec<CompletionRow> = run
            .processes
            .iter()
            .map(|p| CompletionRow {
                id: p.id,
                waiting: p.waiting,
                turnaround: p.turnaround,
            })
            .collect();
        let summary = Summary::from_rows(&rows);
        Self {
            policy,
            rows,
            summary,
            stats: run.stats,
        }
    }

    /// Plain-text table, one block per policy with a trailing blank line
    pub fn render_table(&self) -> String {
        let mut out = format!("Results for {}:\n", self.policy.display_name());
        out.push_str("ID\tWaiting Time\tTurnaround Time\n");
        for row in &self.rows {
            out.push_str(&format!("{}\t{}\t\t{}\n", row.id, row.waiting, row.turnaround));
        }
        out.push('\n');
        out
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_table())
    }
}
