/*!
 * Multi-Level Feedback Queue Policy
 * Three fixed queues with widening quanta and demotion on preemption
 */

use crate::core::types::{SimResult, Tick};
use crate::process::Process;
use crate::scheduler::clock::Clock;
use crate::scheduler::run::Run;
use crate::scheduler::stats::RunStats;
use crate::scheduler::timeline::Timeline;
use log::{debug, info};
use std::collections::VecDeque;

/// Slice granted per turn in the high queue
pub const HIGH_QUANTUM: Tick = 2;
/// Slice granted per turn in the medium queue
pub const MEDIUM_QUANTUM: Tick = 4;
/// Slice granted per turn in the low queue
pub const LOW_QUANTUM: Tick = 8;

/// Queue residency level, highest urgency first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    const fn quantum(self) -> Tick {
        match self {
            Level::High => HIGH_QUANTUM,
            Level::Medium => MEDIUM_QUANTUM,
            Level::Low => LOW_QUANTUM,
        }
    }

    /// Next level after a preemption; the low queue keeps its members
    const fn demote(self) -> Self {
        match self {
            Level::High => Level::Medium,
            Level::Medium | Level::Low => Level::Low,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Level::High => "high",
            Level::Medium => "medium",
            Level::Low => "low",
        }
    }
}

/// Multi-level feedback queue: every process enters the high queue in
/// input order and earns a longer slice each time it is demoted
///
/// A process that exhausts its slice moves one level down; there is no
/// promotion path back up. The process's own priority field is ignored
/// here, residency alone decides the slice. Lower queues only run when
/// every queue above them is empty. Completed records are reported in
/// completion order.
pub fn mlfq(processes: Vec<Process>) -> SimResult<Run> {
    processes.iter().try_for_each(Process::validate)?;

    let capacity = processes.len();
    let mut high: VecDeque<Process> = processes.into();
    let mut medium: VecDeque<Process> = VecDeque::new();
    let mut low: VecDeque<Process> = VecDeque::new();
    let mut completed: Vec<Process> = Vec::with_capacity(capacity);
    let mut clock = Clock::new();
    let mut timeline = Timeline::new();
    let mut preemptions = 0u64;

    loop {
        let (mut process, level) = if let Some(p) = high.pop_front() {
            (p, Level::High)
        } else if let Some(p) = medium.pop_front() {
            (p, Level::Medium)
        } else if let Some(p) = low.pop_front() {
            (p, Level::Low)
        } else {
            break;
        };

        let slice = level.quantum().min(process.remaining);
        let start = clock.now();
        clock.advance(slice);
        process.remaining -= slice;
        timeline.record(process.id, start, clock.now());

        if process.is_complete() {
            process.complete_at(clock.now());
            debug!(
                "mlfq: process {} done at tick {} in {} queue (waiting {}, turnaround {})",
                process.id,
                clock.now(),
                level.as_str(),
                process.waiting,
                process.turnaround
            );
            completed.push(process);
        } else {
            let next = level.demote();
            debug!(
                "mlfq: process {} preempted at tick {} ({} -> {})",
                process.id,
                clock.now(),
                level.as_str(),
                next.as_str()
            );
            preemptions += 1;
            let target = match next {
                Level::High => &mut high,
                Level::Medium => &mut medium,
                Level::Low => &mut low,
            };
            target.push_back(process);
        }
    }

    info!(
        "mlfq run complete: {} processes in {} ticks ({} preemptions)",
        completed.len(),
        clock.now(),
        preemptions
    );
    let stats = RunStats {
        total_ticks: clock.now(),
        idle_ticks: 0,
        preemptions,
        completed: completed.len(),
    };
    Ok(Run {
        processes: completed,
        stats,
        timeline,
    })
}
