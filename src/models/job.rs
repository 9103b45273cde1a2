use super::{JobId, TimeStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    id: JobId,                         // Unique identifier for the job
    arrival_time: TimeStep,            // Tick at which the job becomes eligible to run
    service_time: TimeStep,            // Total CPU ticks the job needs
    start_time: Option<TimeStep>,      // First tick the job ran, if it ran at all
    completion_time: Option<TimeStep>, // Tick at which the job ran out of work
}

impl Job {
    pub fn new(id: impl Into<JobId>, arrival_time: TimeStep, service_time: TimeStep) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            service_time,
            start_time: None,
            completion_time: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arrival_time(&self) -> TimeStep {
        self.arrival_time
    }

    pub fn service_time(&self) -> TimeStep {
        self.service_time
    }

    pub fn start_time(&self) -> Option<TimeStep> {
        self.start_time
    }

    pub fn completion_time(&self) -> Option<TimeStep> {
        self.completion_time
    }

    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Marks the job as running at tick `t`. Only the first call sticks, so
    /// preemptive policies can call it on every dispatch.
    pub fn start(&mut self, t: TimeStep) {
        debug_assert!(t >= self.arrival_time, "job {} started before it arrived", self.id);
        if self.start_time.is_none() {
            self.start_time = Some(t);
        }
    }

    pub fn complete(&mut self, t: TimeStep) {
        debug_assert!(
            t >= self.arrival_time.saturating_add(self.service_time),
            "job {} completed before it could have run",
            self.id
        );
        self.completion_time = Some(t);
    }

    /// Completion time minus arrival time.
    pub fn turnaround_time(&self) -> Option<TimeStep> {
        self.completion_time.map(|t| t - self.arrival_time)
    }

    /// Turnaround time minus service time: ticks spent ready but not running.
    pub fn waiting_time(&self) -> Option<TimeStep> {
        self.turnaround_time().map(|t| t - self.service_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_is_unscheduled() {
        let job = Job::new("A", 0, 16);

        assert_eq!(job.id(), "A");
        assert_eq!(job.arrival_time(), 0);
        assert_eq!(job.service_time(), 16);
        assert!(!job.is_started());
        assert!(!job.is_complete());
        assert_eq!(job.turnaround_time(), None);
        assert_eq!(job.waiting_time(), None);
    }

    #[test]
    fn test_start_keeps_first_dispatch() {
        let mut job = Job::new("C", 5, 11);
        job.start(5);
        job.start(9);

        assert_eq!(job.start_time(), Some(5));
    }

    #[test]
    fn test_derived_times() {
        let mut job = Job::new("B", 3, 2);
        job.start(16);
        job.complete(18);

        assert_eq!(job.turnaround_time(), Some(15));
        assert_eq!(job.waiting_time(), Some(13));
    }

    #[test]
    fn test_complete_at_last_tick() {
        let mut job = Job::new("Z", TimeStep::MAX, 1);
        job.start(TimeStep::MAX);
        job.complete(TimeStep::MAX);

        assert_eq!(job.completion_time(), Some(TimeStep::MAX));
    }
}
