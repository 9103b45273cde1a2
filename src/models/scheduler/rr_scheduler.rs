use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, info};

use super::scheduler::Scheduler;
use super::Outcome;
use crate::constants::{Algorithm, DEFAULT_QUANTUM};
use crate::errors::SchedulingError;
use crate::{ArrivalSource, Job, JobId, Ledger, Metric, Recorder, TimeStep, Workload};

/// Maximum number of ticks a job holds the CPU per Round Robin turn. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeQuantum(TimeStep);

impl TimeQuantum {
    pub fn new(ticks: TimeStep) -> Result<Self, SchedulingError> {
        if ticks == 0 {
            return Err(SchedulingError::InvalidQuantum(0));
        }
        Ok(Self(ticks))
    }

    pub fn get(&self) -> TimeStep {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl TryFrom<i64> for TimeQuantum {
    type Error = SchedulingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(SchedulingError::InvalidQuantum(value));
        }
        Self::new(value as TimeStep)
    }
}

/// Preemptive FIFO rotation: each job runs at most one quantum, then goes
/// back to the tail of the ready queue.
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(TimeQuantum::default())
    }
}

impl Scheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn simulate(&self, workload: &Workload) -> Outcome {
        RrRun::new(workload, self.quantum).run()
    }
}

/// State of one Round Robin simulation.
struct RrRun {
    tick: TimeStep,
    quantum: TimeQuantum,
    arrivals: ArrivalSource,
    ready: VecDeque<Job>,                // FIFO of jobs waiting for their turn
    queued: HashSet<JobId>,              // Ids currently in `ready`
    remaining: HashMap<JobId, TimeStep>, // Ticks of work left per job
    ledger: Ledger,
    recorder: Recorder,
    finished: Vec<Job>,
}

impl RrRun {
    fn new(workload: &Workload, quantum: TimeQuantum) -> Self {
        Self {
            tick: 0,
            quantum,
            arrivals: workload.arrivals(),
            ready: VecDeque::new(),
            queued: HashSet::new(),
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

    fn remaining_of(&self, id: &str) -> TimeStep {
        self.remaining.get(id).copied().unwrap_or(0)
    }

    fn enqueue(&mut self, job: Job) {
        self.queued.insert(job.id().to_owned());
        self.ready.push_back(job);
    }

    /// Appends every job due at the current tick to the ready queue.
    fn admit(&mut self) {
        for job in self.arrivals.poll_due_arrivals(self.tick) {
            self.recorder.arrival(self.tick, &job);
            self.enqueue(job);
        }
    }

    fn run(mut self) -> Outcome {
        while self.arrivals.has_jobs() || self.has_running_jobs() {
            self.admit();

            let Some(current) = self.ready.pop_front() else {
                self.tick += 1;
                continue;
            };
            self.queued.remove(current.id());
            self.turn(current);
        }

        info!(
            "Round Robin (q={}) finished {} jobs at t({})",
            self.quantum.get(),
            self.finished.len(),
            self.tick
        );

        let (trace, timeline) = self.recorder.into_parts();
        Outcome::new(
            Algorithm::RoundRobin,
            self.finished,
            self.ledger,
            trace,
            timeline,
        )
    }

    /// Runs `current` for up to one quantum, one tick at a time so that
    /// arrivals and waiting time are accounted on every tick.
    fn turn(&mut self, mut current: Job) {
        let id = current.id().to_owned();
        let time_slice = self.quantum.get().min(self.remaining_of(&id));
        debug!("t({}) dispatch {} for {} ticks", self.tick, id, time_slice);

        current.start(self.tick);
        for _ in 0..time_slice {
            for waiting in self.queued.iter() {
                self.ledger.accrue(Metric::WaitingTime, waiting, 1);
            }

            self.recorder.run(&id, self.tick, self.tick + 1);
            self.tick += 1;
            if let Some(left) = self.remaining.get_mut(&id) {
                *left = left.saturating_sub(1);
            }

            self.admit();

            if self.remaining_of(&id) == 0 {
                current.complete(self.tick);
                self.ledger
                    .set(Metric::TurnaroundTime, &id, self.tick - current.arrival_time());
                break;
            }
        }

        if self.remaining_of(&id) > 0 {
            self.enqueue(current);
        } else {
            self.recorder.departure(self.tick, &current);
            self.finished.push(current);
        }
    }
}
