/*!
 * Workloads
 * Reusable process sets that stay immutable across policy runs
 */

use crate::process::record::Process;
use serde::{Deserialize, Serialize};

/// An immutable set of processes to feed through scheduling policies
///
/// Policies take ownership of their input and mutate it freely, so the
/// workload hands each run a fresh copy via [`Workload::instance`].
/// Serializes as a plain JSON array of process objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    /// Wrap an existing process list
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// The four-process demonstration set used by the default scenario
    ///
    /// Staggered arrivals, mixed bursts, and priorities that disagree
    /// with both arrival and burst order, so every policy produces a
    /// different schedule.
    pub fn canonical() -> Self {
        Self::new(vec![
            Process::new(1, 0, 6, 3),
            Process::new(2, 1, 8, 2),
            Process::new(3, 2, 7, 1),
            Process::new(4, 3, 3, 3),
        ])
    }

    /// Parse a workload from a JSON array of process objects
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    /// Produce a fresh, pre-run copy of every process for one policy run
    pub fn instance(&self) -> Vec<Process> {
        self.processes
            .iter()
            .map(|p| {
                let mut fresh = p.clone();
                fresh.reset();
                fresh
            })
            .collect()
    }

    /// Processes in input order
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_shape() {
        let workload = Workload::canonical();
        assert_eq!(workload.len(), 4);
        let ids: Vec<u32> = workload.processes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let bursts: Vec<i64> = workload.processes().iter().map(|p| p.burst).collect();
        assert_eq!(bursts, vec![6, 8, 7, 3]);
    }

    #[test]
    fn test_instance_is_independent() {
        let workload = Workload::canonical();
        let mut run = workload.instance();
        run[0].remaining = 0;
        run[0].complete_at(6);
        assert_eq!(workload.processes()[0].remaining, 6);
        assert_eq!(workload.processes()[0].waiting, 0);
    }

    #[test]
    fn test_instance_primes_remaining() {
        // Processes parsed from minimal JSON carry remaining == 0 until instanced.
        let workload =
            Workload::from_json(r#"[{"id":9,"arrival":0,"burst":5,"priority":1}]"#).unwrap();
        assert_eq!(workload.processes()[0].remaining, 0);
        let run = workload.instance();
        assert_eq!(run[0].remaining, 5);
        assert!(run[0].validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Workload::from_json(r#"{"id":1}"#).is_err());
    }
}
