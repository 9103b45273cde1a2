use log::info;

use super::scheduler::{run_to_completion, shortest_index, Scheduler};
use super::Outcome;
use crate::constants::Algorithm;
use crate::{Job, Ledger, Recorder, TimeStep, Workload};

/// Shortest Job Next: whenever the CPU frees up, the arrived job with the
/// smallest service time runs to completion. Long jobs can starve.
pub struct ShortestJobNext;

impl Scheduler for ShortestJobNext {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ShortestJobNext
    }

    fn simulate(&self, workload: &Workload) -> Outcome {
        let mut arrivals = workload.arrivals();
        let mut ledger = Ledger::new();
        let mut recorder = Recorder::new();
        let mut pool: Vec<Job> = Vec::new(); // Arrived, not yet run
        let mut finished = Vec::with_capacity(workload.len());
        let mut current_time: TimeStep = 0;

        while arrivals.has_jobs() || !pool.is_empty() {
            pool.extend(arrivals.poll_due_arrivals(current_time));

            let Some(index) = shortest_index(&pool, |job| job.service_time()) else {
                // Nothing ready: jump straight to the next arrival.
                // The loop condition guarantees one is pending.
                match arrivals.next_arrival_time() {
                    Some(next_arrival) => {
                        current_time = next_arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let job = run_to_completion(pool.remove(index), current_time, &mut ledger, &mut recorder);
            current_time += job.service_time();
            finished.push(job);
        }

        info!(
            "SJN finished {} jobs at t({})",
            finished.len(),
            current_time
        );

        let (trace, timeline) = recorder.into_parts();
        Outcome::new(self.algorithm(), finished, ledger, trace, timeline)
    }
}
