/*!
 * Ordered Policies
 * Non-preemptive scheduling by a single sort key
 */

use crate::core::types::SimResult;
use crate::process::Process;
use crate::scheduler::clock::Clock;
use crate::scheduler::run::Run;
use crate::scheduler::stats::RunStats;
use crate::scheduler::timeline::Timeline;
use log::{debug, info};

/// First-come-first-served: service in arrival order
pub fn fcfs(processes: Vec<Process>) -> SimResult<Run> {
    run_ordered("fcfs", processes, |p| p.arrival)
}

/// Shortest-job-first: service in ascending burst order
pub fn sjf(processes: Vec<Process>) -> SimResult<Run> {
    run_ordered("sjf", processes, |p| p.burst)
}

/// Priority scheduling: service in ascending priority order (lower is
/// more urgent)
pub fn priority(processes: Vec<Process>) -> SimResult<Run> {
    run_ordered("priority", processes, |p| p.priority)
}

/// Shared loop for the sort-based policies
///
/// The sort is stable, so processes with equal keys keep input order.
/// The clock starts at zero and never waits for arrivals: a process
/// sorted to the front with a late arrival begins service early and
/// reports a negative waiting time.
fn run_ordered<K, F>(label: &str, mut processes: Vec<Process>, key: F) -> SimResult<Run>
where
    K: Ord,
    F: FnMut(&Process) -> K,
{
    processes.iter().try_for_each(Process::validate)?;
    processes.sort_by_key(key);

    let mut clock = Clock::new();
    let mut timeline = Timeline::new();
    for process in &mut processes {
        let start = clock.now();
        clock.advance(process.burst);
        process.remaining = 0;
        process.complete_at(clock.now());
        timeline.record(process.id, start, clock.now());
        debug!(
            "{}: process {} done at tick {} (waiting {}, turnaround {})",
            label,
            process.id,
            clock.now(),
            process.waiting,
            process.turnaround
        );
    }

    info!(
        "{} run complete: {} processes in {} ticks",
        label,
        processes.len(),
        clock.now()
    );
    let stats = RunStats {
        total_ticks: clock.now(),
        idle_ticks: 0,
        preemptions: 0,
        completed: processes.len(),
    };
    Ok(Run {
        processes,
        stats,
        timeline,
    })
}
