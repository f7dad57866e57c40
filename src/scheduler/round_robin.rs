/*!
 * Round-Robin Policy
 * Fixed-quantum FIFO scheduling with requeue on preemption
 */

use crate::core::errors::SimError;
use crate::core::types::{SimResult, Tick};
use crate::process::Process;
use crate::scheduler::clock::Clock;
use crate::scheduler::run::Run;
use crate::scheduler::stats::RunStats;
use crate::scheduler::timeline::Timeline;
use log::{debug, info};
use std::collections::VecDeque;

/// Round-robin: serve the queue head for `min(quantum, remaining)`
/// ticks, requeue at the tail if work remains
///
/// The ready queue starts in input order and admits processes without
/// regard to arrival ticks, so the CPU never idles. Completed records
/// are reported in input order.
pub fn round_robin(processes: Vec<Process>, quantum: Tick) -> SimResult<Run> {
    if quantum <= 0 {
        return Err(SimError::InvalidQuantum { quantum });
    }
    processes.iter().try_for_each(Process::validate)?;

    let count = processes.len();
    let mut queue: VecDeque<(usize, Process)> = processes.into_iter().enumerate().collect();
    let mut finished: Vec<Option<Process>> = vec![None; count];
    let mut clock = Clock::new();
    let mut timeline = Timeline::new();
    let mut preemptions = 0u64;

    while let Some((slot, mut process)) = queue.pop_front() {
        let slice = quantum.min(process.remaining);
        let start = clock.now();
        clock.advance(slice);
        process.remaining -= slice;
        timeline.record(process.id, start, clock.now());

        if process.is_complete() {
            process.complete_at(clock.now());
            debug!(
                "round_robin: process {} done at tick {} (waiting {}, turnaround {})",
                process.id,
                clock.now(),
                process.waiting,
                process.turnaround
            );
            finished[slot] = Some(process);
        } else {
            preemptions += 1;
            queue.push_back((slot, process));
        }
    }

    // Slots fill exactly once each, restoring input order.
    let processes: Vec<Process> = finished.into_iter().flatten().collect();
    info!(
        "round_robin run complete: {} processes in {} ticks (quantum {}, {} preemptions)",
        processes.len(),
        clock.now(),
        quantum,
        preemptions
    );
    let stats = RunStats {
        total_ticks: clock.now(),
        idle_ticks: 0,
        preemptions,
        completed: processes.len(),
    };
    Ok(Run {
        processes,
        stats,
        timeline,
    })
}
