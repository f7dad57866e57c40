/*!
 * Process Records
 * The unit of work tracked by every scheduling policy
 */

use crate::core::errors::SimError;
use crate::core::types::{Pid, Priority, SimResult, Tick};
use serde::{Deserialize, Serialize};

/// A single schedulable process
///
/// `remaining` is the working counter a policy draws down while it
/// simulates; `waiting` and `turnaround` stay zero until the process
/// completes. Completed metrics are unclamped, so a sort-based policy
/// that services a process before its arrival tick reports a negative
/// waiting time rather than hiding the anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: Pid,
    pub arrival: Tick,
    pub burst: Tick,
    pub priority: Priority,
    #[serde(default)]
    pub remaining: Tick,
    #[serde(default)]
    pub waiting: Tick,
    #[serde(default)]
    pub turnaround: Tick,
}

impl Process {
    /// Create a fresh process with `remaining` primed to the full burst
    pub const fn new(id: Pid, arrival: Tick, burst: Tick, priority: Priority) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority,
            remaining: burst,
            waiting: 0,
            turnaround: 0,
        }
    }

    /// Check the admission rules every policy applies before its clock moves
    pub fn validate(&self) -> SimResult<()> {
        if self.burst <= 0 {
            return Err(SimError::invalid_process(
                self.id,
                format!("burst time must be positive (got {})", self.burst),
            ));
        }
        if self.arrival < 0 {
            return Err(SimError::invalid_process(
                self.id,
                format!("arrival time must be non-negative (got {})", self.arrival),
            ));
        }
        if self.remaining != self.burst {
            return Err(SimError::invalid_process(
                self.id,
                format!(
                    "remaining time must equal burst before a run (remaining {}, burst {})",
                    self.remaining, self.burst
                ),
            ));
        }
        Ok(())
    }

    /// Fill in final metrics for a process that finished at tick `now`
    ///
    /// Turnaround is completion minus arrival; waiting is turnaround
    /// minus burst, which holds for preemptive and non-preemptive
    /// policies alike.
    pub fn complete_at(&mut self, now: Tick) {
        self.turnaround = now - self.arrival;
        self.waiting = self.turnaround - self.burst;
    }

    /// Whether the full burst has been served
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Restore the record to its pre-run state
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.waiting = 0;
        self.turnaround = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_primes_remaining() {
        let p = Process::new(1, 0, 6, 3);
        assert_eq!(p.remaining, 6);
        assert_eq!(p.waiting, 0);
        assert_eq!(p.turnaround, 0);
        assert!(!p.is_complete());
    }

    #[test]
    fn test_validate_accepts_fresh_process() {
        assert!(Process::new(1, 0, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_burst() {
        let p = Process::new(5, 0, 0, 1);
        let err = p.validate().unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidProcessConfiguration { pid: 5, .. }
        ));
    }

    #[test]
    fn test_validate_rejects_negative_burst() {
        let p = Process::new(2, 0, -4, 1);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_arrival() {
        let p = Process::new(3, -1, 5, 1);
        let err = p.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration for process 3: arrival time must be non-negative (got -1)"
        );
    }

    #[test]
    fn test_validate_rejects_stale_remaining() {
        let mut p = Process::new(4, 0, 5, 1);
        p.remaining = 2;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_complete_at_derives_both_metrics() {
        let mut p = Process::new(1, 2, 7, 1);
        p.remaining = 0;
        p.complete_at(21);
        assert_eq!(p.turnaround, 19);
        assert_eq!(p.waiting, 12);
    }

    #[test]
    fn test_complete_at_allows_negative_waiting() {
        // A sort-based policy may finish a process at its own arrival tick.
        let mut p = Process::new(4, 3, 3, 3);
        p.remaining = 0;
        p.complete_at(3);
        assert_eq!(p.turnaround, 0);
        assert_eq!(p.waiting, -3);
    }

    #[test]
    fn test_reset_restores_pre_run_state() {
        let mut p = Process::new(1, 0, 6, 3);
        p.remaining = 0;
        p.complete_at(9);
        p.reset();
        assert_eq!(p, Process::new(1, 0, 6, 3));
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let p: Process =
            serde_json::from_str(r#"{"id":1,"arrival":0,"burst":6,"priority":3}"#).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.burst, 6);
        // serde defaults leave remaining unprimed until a workload instantiates it
        assert_eq!(p.remaining, 0);
    }
}
