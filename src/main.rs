/*!
 * Schedsim - Main Entry Point
 *
 * Offline CPU scheduling simulator that runs one workload through a
 * lineup of policies and prints one result table per run:
 * - FCFS, SJF, Priority (non-preemptive)
 * - Round Robin, SRTF, MLFQ (preemptive)
 */

use anyhow::Context;
use log::info;
use schedsim::{Policy, Scenario, Tick, Workload, DEFAULT_QUANTUM};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Schedsim starting...");
    info!("================================================");

    let workload = match std::env::var("SCHEDSIM_WORKLOAD") {
        Ok(path) => {
            info!("Loading workload from {}", path);
            let data = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read workload file '{}'", path))?;
            Workload::from_json(&data)
                .with_context(|| format!("Failed to parse workload file '{}'", path))?
        }
        Err(_) => Workload::canonical(),
    };

    let quantum: Tick = match std::env::var("SCHEDSIM_QUANTUM") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("Invalid SCHEDSIM_QUANTUM '{}'", raw))?,
        Err(_) => DEFAULT_QUANTUM,
    };

    let mut scenario = Scenario::new(workload).with_quantum(quantum);
    if let Ok(raw) = std::env::var("SCHEDSIM_POLICIES") {
        let policies = raw
            .split(',')
            .map(|name| Policy::from_str(name.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(anyhow::Error::msg)?;
        scenario = scenario.with_policies(policies).with_quantum(quantum);
    }

    info!(
        "Simulating {} processes through {} policies (round-robin quantum {})",
        scenario.workload().len(),
        scenario.policies().len(),
        quantum
    );

    let reports = scenario.run()?;

    let json_output = std::env::var("SCHEDSIM_JSON")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{}", report);
        }
    }

    info!("Simulation complete");
    Ok(())
}
