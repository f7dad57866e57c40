/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::{Pid, Tick};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation errors with serialization support
///
/// Every failure is a caller error detected before any clock movement,
/// so a run either completes in full or leaves no partial results.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Invalid configuration for process {pid}: {reason}")]
    #[diagnostic(
        code(workload::invalid_process),
        help("Burst times must be positive, arrivals non-negative, and remaining must equal burst before a run.")
    )]
    InvalidProcessConfiguration { pid: Pid, reason: String },

    #[error("Invalid time quantum: {quantum}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round-robin quanta must be at least one tick.")
    )]
    InvalidQuantum { quantum: Tick },
}

impl SimError {
    /// Build an invalid-process error from any displayable reason
    pub fn invalid_process(pid: Pid, reason: impl Into<String>) -> Self {
        SimError::InvalidProcessConfiguration {
            pid,
            reason: reason.into(),
        }
    }
}
