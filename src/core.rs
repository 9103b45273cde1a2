use std::panic;
use std::thread;

use log::info;

use crate::constants::{Algorithm, DEFAULT_WORKERS};
use crate::scheduler::{
    FirstComeFirstServed, Outcome, RoundRobin, Scheduler, ShortestJobNext, ShortestRemainingTime,
    TimeQuantum,
};
use crate::Workload;

/// What to simulate and how.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub algorithms: Vec<Algorithm>, // Policies to run, in report order
    pub quantum: TimeQuantum,       // Round Robin quantum
    pub workers: usize,             // Threads used to run policies side by side
    pub trace: bool,                // Print arrival/departure lines for preemptive policies
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            quantum: TimeQuantum::default(),
            workers: DEFAULT_WORKERS,
            trace: true,
        }
    }
}

pub fn scheduler_for(algorithm: Algorithm, quantum: TimeQuantum) -> Box<dyn Scheduler + Send + Sync> {
    match algorithm {
        Algorithm::FirstComeFirstServed => Box::new(FirstComeFirstServed),
        Algorithm::ShortestJobNext => Box::new(ShortestJobNext),
        Algorithm::ShortestRemainingTime => Box::new(ShortestRemainingTime),
        Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)),
    }
}

/// Runs a single policy over its own copy of `workload`.
pub fn simulate(workload: &Workload, algorithm: Algorithm, quantum: TimeQuantum) -> Outcome {
    info!("Simulating {} over {} jobs", algorithm, workload.len());
    scheduler_for(algorithm, quantum).simulate(workload)
}

/// Runs every configured policy and returns their outcomes in configuration
/// order. Runs share nothing, so with more than one worker they are spread
/// over scoped threads in batches of `workers`.
pub fn simulation(workload: &Workload, config: &SimulationConfig) -> Vec<Outcome> {
    let workers = config.workers.max(1);
    let quantum = config.quantum;

    if workers == 1 {
        return config
            .algorithms
            .iter()
            .map(|&algorithm| simulate(workload, algorithm, quantum))
            .collect();
    }

    let mut outcomes = Vec::with_capacity(config.algorithms.len());
    thread::scope(|scope| {
        for batch in config.algorithms.chunks(workers) {
            let handles: Vec<_> = batch
                .iter()
                .map(|&algorithm| scope.spawn(move || simulate(workload, algorithm, quantum)))
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(payload) => panic::resume_unwind(payload),
                }
            }
        }
    });

    outcomes
}
