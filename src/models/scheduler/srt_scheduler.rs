use std::collections::HashMap;

use log::{debug, info};

use super::scheduler::{shortest_index, Scheduler};
use super::Outcome;
use crate::constants::Algorithm;
use crate::{ArrivalSource, Job, JobId, Ledger, Metric, Recorder, TimeStep, Workload};

/// Shortest Remaining Time: every tick the ready job with the least work
/// left gets the CPU, so a short arrival preempts a long running job.
pub struct ShortestRemainingTime;

impl Scheduler for ShortestRemainingTime {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ShortestRemainingTime
    }

    fn simulate(&self, workload: &Workload) -> Outcome {
        SrtRun::new(workload).run()
    }
}

/// State of one SRT simulation.
struct SrtRun {
    tick: TimeStep,
    arrivals: ArrivalSource,
    ready: Vec<Job>,                       // Arrived and unfinished, in arrival order
    remaining: HashMap<JobId, TimeStep>,   // Ticks of work left per job
    ledger: Ledger,
    recorder: Recorder,
    finished: Vec<Job>,
}

impl SrtRun {
    fn new(workload: &Workload) -> Self {
        Self {
            tick: 0,
            arrivals: workload.arrivals(),
            ready: Vec::new(),
            remaining: workload
                .iter()
                .map(|job| (job.id().to_owned(), job.service_time()))
                .collect(),
            ledger: Ledger::for_workload(workload),
            recorder: Recorder::new(),
            finished: Vec::with_capacity(workload.len()),
        }
    }

    fn has_running_jobs(&self) -> bool {
        self.remaining.values().any(|&left| left > 0)
    }

    fn remaining_of(&self, job: &Job) -> TimeStep {
        self.remaining.get(job.id()).copied().unwrap_or(0)
    }

    /// Moves every job due at the current tick into the ready list.
    fn admit(&mut self) {
        for job in self.arrivals.poll_due_arrivals(self.tick) {
            self.recorder.arrival(self.tick, &job);
            self.ready.push(job);
        }
    }

    fn run(mut self) -> Outcome {
        while self.arrivals.has_jobs() || self.has_running_jobs() {
            self.admit();

            let selected = shortest_index(&self.ready, |job| self.remaining_of(job));
            match selected {
                Some(index) => self.execute(index),
                // Nothing ready: idle one tick, a new arrival may show up
                None => self.tick += 1,
            }
        }

        info!(
            "SRT finished {} jobs at t({})",
            self.finished.len(),
            self.tick
        );

        let (trace, timeline) = self.recorder.into_parts();
        Outcome::new(
            Algorithm::ShortestRemainingTime,
            self.finished,
            self.ledger,
            trace,
            timeline,
        )
    }

    /// Gives one tick to `ready[index]` and charges a tick of waiting to
    /// every other ready job.
    fn execute(&mut self, index: usize) {
        let id = self.ready[index].id().to_owned();
        debug!("t({}) run {}", self.tick, id);

        self.ready[index].start(self.tick);
        for (i, job) in self.ready.iter().enumerate() {
            if i != index {
                self.ledger.accrue(Metric::WaitingTime, job.id(), 1);
            }
        }

        self.recorder.run(&id, self.tick, self.tick + 1);
        self.tick += 1;
        let left = match self.remaining.get_mut(&id) {
            Some(left) => {
                *left = left.saturating_sub(1);
                *left
            }
            None => 0,
        };

        // Arrivals landing on the new tick are appended, so `index` stays valid
        self.admit();

        if left == 0 {
            let mut job = self.ready.remove(index);
            job.complete(self.tick);
            self.ledger
                .set(Metric::TurnaroundTime, &id, self.tick - job.arrival_time());
            self.recorder.departure(self.tick, &job);
            self.finished.push(job);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{reference_workload, rows, sparse_workload, spans};

    #[test]
    fn test_reference_table() {
        let outcome = ShortestRemainingTime.simulate(&reference_workload());

        assert_eq!(
            rows(&outcome),
            vec![
                ("A", 0, 58, 42, 58),
                ("B", 3, 5, 0, 2),
                ("C", 5, 28, 12, 23),
                ("D", 9, 16, 1, 7),
                ("E", 10, 11, 0, 1),
                ("F", 36, 45, 24, 33),
                ("G", 16, 21, 3, 7),
                ("H", 58, 72, 42, 56),
                ("I", 17, 18, 0, 1),
                ("J", 28, 36, 9, 17),
            ]
        );
    }

    #[test]
    fn test_reference_trace() {
        let outcome = ShortestRemainingTime.simulate(&reference_workload());

        let lines: Vec<String> = outcome.trace().iter().map(|event| event.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "t(0) -> A +",
                "t(3) -> B +",
                "t(5) -> C +",
                "t(5) -> B -",
                "t(9) -> D +",
                "t(10) -> E +",
                "t(11) -> E -",
                "t(12) -> F +",
                "t(14) -> G +",
                "t(16) -> H +",
                "t(16) -> D -",
                "t(17) -> I +",
                "t(18) -> I -",
                "t(19) -> J +",
                "t(21) -> G -",
                "t(28) -> C -",
                "t(36) -> J -",
                "t(45) -> F -",
                "t(58) -> A -",
                "t(72) -> H -",
            ]
        );
    }

    #[test]
    fn test_short_arrival_preempts() {
        let workload = Workload::from_entries([("L", 0, 6), ("S", 2, 1)]).expect("valid workload");
        let outcome = ShortestRemainingTime.simulate(&workload);

        assert_eq!(spans(&outcome), vec![("L", 0, 2), ("S", 2, 3), ("L", 3, 7)]);
        assert_eq!(outcome.ledger().get(Metric::WaitingTime, "L"), Some(1));
    }

    #[test]
    fn test_equal_remaining_does_not_preempt() {
        // At t(2) both have 2 ticks left; the earlier entry keeps the CPU
        let workload = Workload::from_entries([("L", 0, 4), ("S", 2, 2)]).expect("valid workload");
        let outcome = ShortestRemainingTime.simulate(&workload);

        assert_eq!(spans(&outcome), vec![("L", 0, 4), ("S", 4, 6)]);
    }

    #[test]
    fn test_idle_ticks_until_arrival() {
        let outcome = ShortestRemainingTime.simulate(&sparse_workload());

        // At t(11) Q and R both have one tick left, Q was ready first
        assert_eq!(
            spans(&outcome),
            vec![("P", 2, 5), ("Q", 10, 12), ("R", 12, 13), ("S", 20, 24)]
        );
        assert_eq!(outcome.idle_ticks(), 14);
    }
}
