use crate::constants::Algorithm;
use crate::{Averages, Job, Ledger, Slice, TimeStep, TraceEvent};

/// Everything one policy run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    algorithm: Algorithm,
    jobs: Vec<Job>,          // Finished jobs, in completion order
    ledger: Ledger,          // Waiting and turnaround time per job
    trace: Vec<TraceEvent>,  // Arrivals and departures (preemptive policies only)
    timeline: Vec<Slice>,    // CPU slices in execution order
}

impl Outcome {
    pub fn new(
        algorithm: Algorithm,
        jobs: Vec<Job>,
        ledger: Ledger,
        trace: Vec<TraceEvent>,
        timeline: Vec<Slice>,
    ) -> Self {
        Self {
            algorithm,
            jobs,
            ledger,
            trace,
            timeline,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id() == id)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    pub fn timeline(&self) -> &[Slice] {
        &self.timeline
    }

    /// Slices given to one job, in order.
    pub fn slices_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Slice> + 'a {
        self.timeline.iter().filter(move |slice| slice.job_id == id)
    }

    pub fn averages(&self) -> Averages {
        self.ledger.averages()
    }

    /// Tick at which the last job finished.
    pub fn makespan(&self) -> TimeStep {
        self.timeline.last().map_or(0, |slice| slice.end)
    }

    pub fn busy_ticks(&self) -> TimeStep {
        self.timeline.iter().map(|slice| slice.len()).sum()
    }

    pub fn idle_ticks(&self) -> TimeStep {
        self.makespan() - self.busy_ticks()
    }
}
