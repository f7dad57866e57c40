/*!
 * Policy Selection
 * The six supported policies and their dispatch
 */

use crate::core::types::{SimResult, Tick};
use crate::process::Process;
use crate::scheduler::run::Run;
use crate::scheduler::{mlfq, ordered, round_robin, srtf};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Round-robin quantum used when none is configured
pub const DEFAULT_QUANTUM: Tick = 2;

/// Scheduling policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest-job-first by full burst, non-preemptive
    Sjf,
    /// Fixed-quantum FIFO with requeue on preemption
    RoundRobin { quantum: Tick },
    /// Ascending priority value, non-preemptive
    Priority,
    /// Shortest-remaining-time-first, preemptive per tick
    Srtf,
    /// Three-queue feedback with widening quanta
    Mlfq,
}

impl Policy {
    /// All six policies in presentation order
    pub const fn all(quantum: Tick) -> [Policy; 6] {
        [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::RoundRobin { quantum },
            Policy::Priority,
            Policy::Srtf,
            Policy::Mlfq,
        ]
    }

    /// Run this policy over a fresh workload instance
    pub fn run(self, processes: Vec<Process>) -> SimResult<Run> {
        match self {
            Policy::Fcfs => ordered::fcfs(processes),
            Policy::Sjf => ordered::sjf(processes),
            Policy::RoundRobin { quantum } => round_robin::round_robin(processes, quantum),
            Policy::Priority => ordered::priority(processes),
            Policy::Srtf => srtf::srtf(processes),
            Policy::Mlfq => mlfq::mlfq(processes),
        }
    }

    /// Parse from string representation
    ///
    /// Round-robin parses with the default quantum; callers override
    /// it afterwards when configured.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fcfs" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin {
                quantum: DEFAULT_QUANTUM,
            }),
            "priority" | "prio" => Ok(Self::Priority),
            "srtf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "mlfq" | "multilevel_feedback" => Ok(Self::Mlfq),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: fcfs, sjf, round_robin, priority, srtf, mlfq",
                s
            )),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin { .. } => "round_robin",
            Self::Priority => "priority",
            Self::Srtf => "srtf",
            Self::Mlfq => "mlfq",
        }
    }

    /// Header name used by the plain-text report
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin { .. } => "Round Robin",
            Self::Priority => "Priority Scheduling",
            Self::Srtf => "SRTF",
            Self::Mlfq => "MLFQ",
        }
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Workload;

    #[test]
    fn test_policy_parsing() {
        assert_eq!(Policy::from_str("fcfs").unwrap(), Policy::Fcfs);
        assert_eq!(Policy::from_str("SJF").unwrap(), Policy::Sjf);
        assert_eq!(
            Policy::from_str("rr").unwrap(),
            Policy::RoundRobin {
                quantum: DEFAULT_QUANTUM
            }
        );
        assert_eq!(Policy::from_str("priority").unwrap(), Policy::Priority);
        assert_eq!(Policy::from_str("srtf").unwrap(), Policy::Srtf);
        assert_eq!(Policy::from_str("mlfq").unwrap(), Policy::Mlfq);
        assert!(Policy::from_str("invalid").is_err());
    }

    #[test]
    fn test_policy_string_round_trip() {
        for policy in Policy::all(DEFAULT_QUANTUM) {
            let json = serde_json::to_string(&policy).unwrap();
            let back: Policy = serde_json::from_str(&json).unwrap();
            assert_eq!(policy, back);
        }
    }

    #[test]
    fn test_all_keeps_presentation_order() {
        let names: Vec<&str> = Policy::all(3).iter().map(Policy::as_str).collect();
        assert_eq!(
            names,
            vec!["fcfs", "sjf", "round_robin", "priority", "srtf", "mlfq"]
        );
        assert!(matches!(
            Policy::all(3)[2],
            Policy::RoundRobin { quantum: 3 }
        ));
    }

    #[test]
    fn test_run_dispatches_to_the_named_policy() {
        let workload = Workload::canonical();
        let direct = round_robin::round_robin(workload.instance(), 2).unwrap();
        let dispatched = Policy::RoundRobin { quantum: 2 }
            .run(workload.instance())
            .unwrap();
        assert_eq!(direct, dispatched);
    }
}
