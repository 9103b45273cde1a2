use std::collections::BTreeMap;
use std::fmt;

use super::{JobId, TimeStep, Workload};

/// The per-job quantities a run accounts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    WaitingTime,
    TurnaroundTime,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::WaitingTime, Metric::TurnaroundTime];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::WaitingTime => "Waiting Time",
            Metric::TurnaroundTime => "Turnaround Time",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobStats {
    pub waiting_time: TimeStep,
    pub turnaround_time: TimeStep,
}

impl JobStats {
    pub fn new(waiting_time: TimeStep, turnaround_time: TimeStep) -> Self {
        Self {
            waiting_time,
            turnaround_time,
        }
    }

    pub fn get(&self, metric: Metric) -> TimeStep {
        match metric {
            Metric::WaitingTime => self.waiting_time,
            Metric::TurnaroundTime => self.turnaround_time,
        }
    }

    pub fn set(&mut self, metric: Metric, value: TimeStep) {
        match metric {
            Metric::WaitingTime => self.waiting_time = value,
            Metric::TurnaroundTime => self.turnaround_time = value,
        }
    }
}

/// Mean of each metric over every job of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Averages {
    pub waiting_time: f64,
    pub turnaround_time: f64,
}

/// Statistics of one run, keyed by job id. Iteration is in id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: BTreeMap<JobId, JobStats>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger with a zeroed entry for every job of the workload.
    pub fn for_workload(workload: &Workload) -> Self {
        Self {
            entries: workload
                .iter()
                .map(|job| (job.id().to_owned(), JobStats::default()))
                .collect(),
        }
    }

    pub fn record(&mut self, job_id: &str, stats: JobStats) {
        self.entries.insert(job_id.to_owned(), stats);
    }

    pub fn set(&mut self, metric: Metric, job_id: &str, value: TimeStep) {
        self.entries
            .entry(job_id.to_owned())
            .or_default()
            .set(metric, value);
    }

    /// Adds `delta` to a metric, creating the entry if needed.
    pub fn accrue(&mut self, metric: Metric, job_id: &str, delta: TimeStep) {
        let stats = self.entries.entry(job_id.to_owned()).or_default();
        stats.set(metric, stats.get(metric) + delta);
    }

    pub fn get(&self, metric: Metric, job_id: &str) -> Option<TimeStep> {
        self.entries.get(job_id).map(|stats| stats.get(metric))
    }

    pub fn stats(&self, job_id: &str) -> Option<&JobStats> {
        self.entries.get(job_id)
    }

    pub fn total(&self, metric: Metric) -> TimeStep {
        self.entries.values().map(|stats| stats.get(metric)).sum()
    }

    /// Arithmetic mean of `metric` over all jobs; 0 for an empty ledger.
    pub fn average(&self, metric: Metric) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.total(metric) as f64 / self.entries.len() as f64
    }

    pub fn averages(&self) -> Averages {
        Averages {
            waiting_time: self.average(Metric::WaitingTime),
            turnaround_time: self.average(Metric::TurnaroundTime),
        }
    }

    /// Whether every job of `workload` has an entry.
    pub fn covers(&self, workload: &Workload) -> bool {
        workload.iter().all(|job| self.entries.contains_key(job.id()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JobStats)> {
        self.entries.iter().map(|(id, stats)| (id.as_str(), stats))
    }
}
