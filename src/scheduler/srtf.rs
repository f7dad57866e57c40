/*!
 * Shortest-Remaining-Time-First Policy
 * Tick-granular preemptive scheduling with arrival gating
 */

use crate::core::types::{Pid, SimResult, Tick};
use crate::process::Process;
use crate::scheduler::clock::Clock;
use crate::scheduler::run::Run;
use crate::scheduler::stats::RunStats;
use crate::scheduler::timeline::Timeline;
use log::{debug, info};

/// Shortest-remaining-time-first: each tick goes to the arrived
/// process with the least work left
///
/// This is the only policy that honors arrival ticks during
/// simulation: when nothing has arrived the clock advances through an
/// idle tick. Ties on remaining work keep the earliest input position.
/// Completed records are reported in completion order.
pub fn srtf(processes: Vec<Process>) -> SimResult<Run> {
    processes.iter().try_for_each(Process::validate)?;

    let mut active = processes;
    let mut completed: Vec<Process> = Vec::with_capacity(active.len());
    let mut clock = Clock::new();
    let mut timeline = Timeline::new();
    let mut idle_ticks: Tick = 0;
    let mut preemptions = 0u64;
    let mut last_running: Option<Pid> = None;

    while !active.is_empty() {
        match pick(&active, clock.now()) {
            None => {
                clock.tick();
                idle_ticks += 1;
            }
            Some(idx) => {
                let pid = active[idx].id;
                if let Some(prev) = last_running {
                    // A switch away from a still-unfinished process is a preemption.
                    if prev != pid && active.iter().any(|p| p.id == prev) {
                        preemptions += 1;
                    }
                }
                last_running = Some(pid);

                let start = clock.now();
                clock.tick();
                timeline.record(pid, start, clock.now());
                active[idx].remaining -= 1;
                if active[idx].is_complete() {
                    let mut process = active.remove(idx);
                    process.complete_at(clock.now());
                    debug!(
                        "srtf: process {} done at tick {} (waiting {}, turnaround {})",
                        process.id,
                        clock.now(),
                        process.waiting,
                        process.turnaround
                    );
                    completed.push(process);
                }
            }
        }
    }

    info!(
        "srtf run complete: {} processes in {} ticks ({} idle, {} preemptions)",
        completed.len(),
        clock.now(),
        idle_ticks,
        preemptions
    );
    let stats = RunStats {
        total_ticks: clock.now(),
        idle_ticks,
        preemptions,
        completed: completed.len(),
    };
    Ok(Run {
        processes: completed,
        stats,
        timeline,
    })
}

/// Index of the arrived process with the least remaining work
///
/// The scan uses a strict comparison, so the earliest input position
/// wins ties.
fn pick(active: &[Process], now: Tick) -> Option<usize> {
    let mut chosen: Option<(usize, Tick)> = None;
    for (idx, process) in active.iter().enumerate() {
        if process.arrival > now {
            continue;
        }
        if chosen.map_or(true, |(_, best)| process.remaining < best) {
            chosen = Some((idx, process.remaining));
        }
    }
    chosen.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Workload;

    fn canonical() -> Vec<Process> {
        Workload::canonical().instance()
    }

    fn metrics(run: &Run) -> Vec<(u32, i64, i64)> {
        run.processes
            .iter()
            .map(|p| (p.id, p.waiting, p.turnaround))
            .collect()
    }

    #[test]
    fn test_canonical_metrics_in_completion_order() {
        let run = srtf(canonical()).unwrap();
        assert_eq!(
            metrics(&run),
            vec![(1, 0, 6), (4, 3, 6), (3, 7, 14), (2, 15, 23)]
        );
        assert_eq!(run.stats.total_ticks, 24);
        assert_eq!(run.stats.idle_ticks, 0);
        assert_eq!(run.stats.completed, 4);
    }

    #[test]
    fn test_idles_until_first_arrival() {
        let run = srtf(vec![
            Process::new(1, 5, 2, 1),
            Process::new(2, 6, 2, 1),
        ])
        .unwrap();
        assert_eq!(run.stats.idle_ticks, 5);
        assert_eq!(run.stats.total_ticks, 9);
        assert_eq!(metrics(&run), vec![(1, 0, 2), (2, 1, 3)]);
        // The trace shows the gap before the first grant.
        assert_eq!(run.timeline.segments()[0].start, 5);
    }

    #[test]
    fn test_idles_between_arrivals() {
        let run = srtf(vec![
            Process::new(1, 0, 2, 1),
            Process::new(2, 10, 1, 1),
        ])
        .unwrap();
        assert_eq!(run.stats.idle_ticks, 8);
        assert_eq!(run.stats.total_ticks, 11);
        assert_eq!(run.timeline.busy_ticks(), 3);
    }

    #[test]
    fn test_short_arrival_preempts_long_job() {
        // P1 runs alone until P2 arrives with a shorter burst.
        let run = srtf(vec![
            Process::new(1, 0, 10, 1),
            Process::new(2, 3, 2, 1),
        ])
        .unwrap();
        assert_eq!(metrics(&run), vec![(2, 0, 2), (1, 2, 12)]);
        assert_eq!(run.stats.preemptions, 1);
    }

    #[test]
    fn test_completing_process_is_not_a_preemption() {
        // The switch after a completion must not count as a preemption.
        let run = srtf(vec![
            Process::new(1, 0, 3, 1),
            Process::new(2, 0, 3, 1),
        ])
        .unwrap();
        assert_eq!(run.stats.preemptions, 0);
    }

    #[test]
    fn test_remaining_ties_keep_input_order() {
        let run = srtf(vec![
            Process::new(7, 0, 3, 1),
            Process::new(8, 0, 3, 1),
        ])
        .unwrap();
        let order: Vec<u32> = run.processes.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![7, 8]);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let first = srtf(canonical()).unwrap();
        let second = srtf(canonical()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_workload_is_a_noop() {
        let run = srtf(Vec::new()).unwrap();
        assert!(run.processes.is_empty());
        assert_eq!(run.stats, RunStats::default());
    }
}
