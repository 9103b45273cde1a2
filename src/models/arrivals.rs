use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::{Job, TimeStep};

/// A job waiting to arrive, tagged with its position in the workload so that
/// equal arrival times come out in workload order.
#[derive(Debug)]
struct Pending {
    order: usize,
    job: Job,
}

impl Pending {
    fn key(&self) -> (TimeStep, usize) {
        (self.job.arrival_time(), self.order)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Holds every job that has not arrived yet and hands them out once the
/// simulated clock reaches their arrival time.
#[derive(Debug)]
pub struct ArrivalSource {
    heap: BinaryHeap<Reverse<Pending>>, // Min-heap on (arrival time, workload order)
    released: usize,                    // Jobs handed out so far
}

impl ArrivalSource {
    pub fn new(jobs: Vec<Job>) -> Self {
        let heap = jobs
            .into_iter()
            .enumerate()
            .map(|(order, job)| Reverse(Pending { order, job }))
            .collect();

        Self { heap, released: 0 }
    }

    /// Whether some job is still to arrive.
    pub fn has_jobs(&self) -> bool {
        !self.heap.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.heap.len()
    }

    pub fn released(&self) -> usize {
        self.released
    }

    /// Arrival time of the earliest job still pending.
    pub fn next_arrival_time(&self) -> Option<TimeStep> {
        self.heap.peek().map(|Reverse(next)| next.job.arrival_time())
    }

    /// Removes and returns every job whose arrival time is `<= tick`, in
    /// (arrival time, workload order) order.
    pub fn poll_due_arrivals(&mut self, tick: TimeStep) -> Vec<Job> {
        let mut arrived = Vec::new();

        while self
            .heap
            .peek()
            .is_some_and(|Reverse(next)| next.job.arrival_time() <= tick)
        {
            if let Some(Reverse(due)) = self.heap.pop() {
                arrived.push(due.job);
            }
        }

        self.released += arrived.len();
        arrived
    }
}
