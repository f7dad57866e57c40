/*!
 * Scenario Driver
 * Runs one workload through a policy lineup and collects reports
 */

use crate::core::types::{SimResult, Tick};
use crate::process::Workload;
use crate::report::PolicyReport;
use crate::scheduler::{Policy, DEFAULT_QUANTUM};
use log::info;

/// A workload paired with the policies to run it through
///
/// The driver hands each policy its own fresh instance of the
/// workload, so runs never observe each other's mutations and the
/// lineup could execute in any order with identical results.
#[derive(Debug, Clone)]
pub struct Scenario {
    workload: Workload,
    policies: Vec<Policy>,
}

impl Scenario {
    /// Pair a workload with the full six-policy lineup
    pub fn new(workload: Workload) -> Self {
        Self {
            workload,
            policies: Policy::all(DEFAULT_QUANTUM).to_vec(),
        }
    }

    /// The historical demonstration scenario: the canonical four
    /// processes through all six policies
    pub fn canonical() -> Self {
        Self::new(Workload::canonical())
    }

    /// Replace the policy lineup
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Override the quantum of every round-robin entry in the lineup
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        for policy in &mut self.policies {
            if let Policy::RoundRobin { quantum: q } = policy {
                *q = quantum;
            }
        }
        self
    }

    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Run every policy in the lineup and collect one report per run
    ///
    /// Fails on the first invalid configuration, before any report is
    /// produced for it.
    pub fn run(&self) -> SimResult<Vec<PolicyReport>> {
        info!(
            "scenario: running {} processes through {} policies",
            self.workload.len(),
            self.policies.len()
        );
        self.policies
            .iter()
            .map(|&policy| {
                let run = policy.run(self.workload.instance())?;
                let report = PolicyReport::new(policy, &run);
                info!(
                    "{}: average waiting {:.2}, average turnaround {:.2}",
                    policy.as_str(),
                    report.summary.average_waiting,
                    report.summary.average_turnaround
                );
                Ok(report)
            })
            .collect()
    }
}
