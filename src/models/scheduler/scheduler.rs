use log::debug;

use crate::constants::Algorithm;
use crate::{Job, JobStats, Ledger, Recorder, TimeStep, Workload};

use super::Outcome;

/// A scheduling policy. Each call to `simulate` is an independent run over a
/// private copy of the workload, so one policy value can be reused and
/// shared between threads.
pub trait Scheduler {
    fn algorithm(&self) -> Algorithm;

    fn simulate(&self, workload: &Workload) -> Outcome;
}

/// Index of the job with the smallest `key`. On ties the first one in slice
/// order wins.
pub fn shortest_index<F>(jobs: &[Job], mut key: F) -> Option<usize>
where
    F: FnMut(&Job) -> TimeStep,
{
    if jobs.is_empty() {
        return None;
    }

    let mut smallest = key(&jobs[0]);
    let mut index_to_ret = 0;

    for (i, job) in jobs.iter().enumerate().skip(1) {
        let current = key(job);
        if current < smallest {
            smallest = current;
            index_to_ret = i;
        }
    }

    Some(index_to_ret)
}

/// Runs `job` without interruption from `start` and books its statistics.
/// Shared by the non-preemptive policies. `Workload::new` bounds every
/// completion time, so the sums below cannot overflow.
pub(crate) fn run_to_completion(
    mut job: Job,
    start: TimeStep,
    ledger: &mut Ledger,
    recorder: &mut Recorder,
) -> Job {
    let completion = start + job.service_time();
    debug!("t({}) dispatch {} until t({})", start, job.id(), completion);

    job.start(start);
    job.complete(completion);
    recorder.run(job.id(), start, completion);
    ledger.record(
        job.id(),
        JobStats::new(start - job.arrival_time(), completion - job.arrival_time()),
    );

    job
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_index_first_wins_ties() {
        let jobs = vec![
            Job::new("A", 0, 5),
            Job::new("B", 1, 2),
            Job::new("C", 2, 2),
            Job::new("D", 3, 9),
        ];

        assert_eq!(shortest_index(&jobs, |job| job.service_time()), Some(1));
        assert_eq!(shortest_index(&jobs, |job| job.arrival_time()), Some(0));
        assert_eq!(shortest_index(&[], |job| job.service_time()), None);
    }

    #[test]
    fn test_run_to_completion_books_stats() {
        let mut ledger = Ledger::new();
        let mut recorder = Recorder::new();

        let job = run_to_completion(Job::new("B", 3, 2), 16, &mut ledger, &mut recorder);

        assert_eq!(job.start_time(), Some(16));
        assert_eq!(job.completion_time(), Some(18));
        assert_eq!(ledger.stats("B"), Some(&JobStats::new(13, 15)));
        let (trace, timeline) = recorder.into_parts();
        assert!(trace.is_empty());
        assert_eq!(timeline.len(), 1);
    }
}
