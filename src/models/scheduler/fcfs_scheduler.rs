use log::info;

use super::scheduler::{run_to_completion, Scheduler};
use super::Outcome;
use crate::constants::Algorithm;
use crate::{Ledger, Recorder, TimeStep, Workload};

/// Runs jobs strictly in arrival order, each to completion.
pub struct FirstComeFirstServed;

impl Scheduler for FirstComeFirstServed {
    fn algorithm(&self) -> Algorithm {
        Algorithm::FirstComeFirstServed
    }

    fn simulate(&self, workload: &Workload) -> Outcome {
        let mut arrivals = workload.arrivals();
        let mut ledger = Ledger::new();
        let mut recorder = Recorder::new();
        let mut finished = Vec::with_capacity(workload.len());
        let mut current_time: TimeStep = 0;

        while let Some(next_arrival) = arrivals.next_arrival_time() {
            // CPU idles until the next job shows up
            current_time = current_time.max(next_arrival);

            for job in arrivals.poll_due_arrivals(current_time) {
                let start = current_time.max(job.arrival_time());
                let job = run_to_completion(job, start, &mut ledger, &mut recorder);
                current_time = start + job.service_time();
                finished.push(job);
            }
        }

        info!(
            "FCFS finished {} jobs at t({})",
            finished.len(),
            current_time
        );

        let (trace, timeline) = recorder.into_parts();
        Outcome::new(self.algorithm(), finished, ledger, trace, timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{reference_workload, rows, sparse_workload, spans};

    #[test]
    fn test_reference_table() {
        let outcome = FirstComeFirstServed.simulate(&reference_workload());

        assert_eq!(
            rows(&outcome),
            vec![
                ("A", 0, 16, 0, 16),
                ("B", 16, 18, 13, 15),
                ("C", 18, 29, 13, 24),
                ("D", 29, 35, 20, 26),
                ("E", 35, 36, 25, 26),
                ("F", 36, 45, 24, 33),
                ("G", 45, 49, 31, 35),
                ("H", 49, 63, 33, 47),
                ("I", 63, 64, 46, 47),
                ("J", 64, 72, 45, 53),
            ]
        );
        assert_eq!(outcome.averages().waiting_time, 25.0);
        assert_eq!(outcome.averages().turnaround_time, 32.2);
    }

    #[test]
    fn test_never_preempts() {
        let workload = reference_workload();
        let outcome = FirstComeFirstServed.simulate(&workload);

        // One uninterrupted slice per job, even when a shorter job arrives mid-run
        assert_eq!(outcome.timeline().len(), workload.len());
        for job in workload.iter() {
            assert_eq!(outcome.slices_of(job.id()).count(), 1);
        }
        assert!(outcome.trace().is_empty());
    }

    #[test]
    fn test_idles_until_next_arrival() {
        let outcome = FirstComeFirstServed.simulate(&sparse_workload());

        assert_eq!(
            spans(&outcome),
            vec![("P", 2, 5), ("Q", 10, 12), ("R", 12, 13), ("S", 20, 24)]
        );
        assert_eq!(outcome.busy_ticks(), 10);
        assert_eq!(outcome.idle_ticks(), 14);
    }
}
