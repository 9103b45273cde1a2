use std::collections::HashSet;

use crate::errors::WorkloadError;

use super::{ArrivalSource, Job, JobId, TimeStep};

/// A validated, non-empty set of jobs. Every simulation starts from one, and
/// every policy run works on its own copy of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    jobs: Vec<Job>,
}

impl Workload {
    /// Builds a workload from already-typed jobs.
    ///
    /// # Arguments
    /// * `jobs` - The jobs in workload order. The order breaks arrival-time ties.
    ///
    /// # Returns
    /// * `Err(WorkloadError)` if the list is empty, an id repeats, a job needs no CPU time
    ///   or the schedule could run past `TimeStep::MAX`.
    pub fn new(jobs: Vec<Job>) -> Result<Self, WorkloadError> {
        if jobs.is_empty() {
            return Err(WorkloadError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(jobs.len());
        for job in jobs.iter() {
            if !seen.insert(job.id()) {
                return Err(WorkloadError::DuplicateId(job.id().to_owned()));
            }
            if job.service_time() == 0 {
                return Err(WorkloadError::NonPositiveServiceTime {
                    id: job.id().to_owned(),
                    service: 0,
                });
            }
        }

        // No completion can come later than the last arrival plus all the work.
        let latest_arrival = jobs.iter().map(|job| job.arrival_time()).max().unwrap_or(0);
        jobs.iter().try_fold(latest_arrival, |horizon, job| {
            horizon
                .checked_add(job.service_time())
                .ok_or_else(|| WorkloadError::TimeOverflow(job.id().to_owned()))
        })?;

        Ok(Self { jobs })
    }

    /// Builds a workload from raw `(id, arrival, service)` triples, as read
    /// from a file or written inline.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, WorkloadError>
    where
        I: IntoIterator<Item = (S, i64, i64)>,
        S: Into<JobId>,
    {
        let mut jobs = Vec::new();

        for (id, arrival, service) in entries {
            let id: JobId = id.into();
            if arrival < 0 {
                return Err(WorkloadError::NegativeArrivalTime { id, arrival });
            }
            if service <= 0 {
                return Err(WorkloadError::NonPositiveServiceTime { id, service });
            }
            jobs.push(Job::new(id, arrival as TimeStep, service as TimeStep));
        }

        Self::new(jobs)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id() == id)
    }

    pub fn total_service_time(&self) -> TimeStep {
        self.jobs.iter().map(|job| job.service_time()).sum()
    }

    /// A fresh arrival source over a private copy of the jobs.
    pub fn arrivals(&self) -> ArrivalSource {
        ArrivalSource::new(self.jobs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_valid() {
        let workload = Workload::from_entries([("A", 0, 16), ("B", 3, 2)]).expect("valid workload");

        assert_eq!(workload.len(), 2);
        assert_eq!(workload.total_service_time(), 18);
        assert_eq!(workload.get("B").map(|job| job.arrival_time()), Some(3));
        assert!(workload.get("Z").is_none());
    }

    #[test]
    fn test_empty_workload_rejected() {
        let result = Workload::from_entries(Vec::<(String, i64, i64)>::new());
        assert_eq!(result, Err(WorkloadError::Empty));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Workload::from_entries([("A", 0, 1), ("B", 1, 1), ("A", 2, 1)]);
        assert_eq!(result, Err(WorkloadError::DuplicateId("A".to_string())));
    }

    #[test]
    fn test_non_positive_service_rejected() {
        let result = Workload::from_entries([("A", 0, 0)]);
        assert_eq!(
            result,
            Err(WorkloadError::NonPositiveServiceTime { id: "A".to_string(), service: 0 })
        );

        let result = Workload::from_entries([("A", 0, -4)]);
        assert!(matches!(result, Err(WorkloadError::NonPositiveServiceTime { service: -4, .. })));

        let result = Workload::new(vec![Job::new("X", 2, 0)]);
        assert!(matches!(result, Err(WorkloadError::NonPositiveServiceTime { .. })));
    }

    #[test]
    fn test_negative_arrival_rejected() {
        let result = Workload::from_entries([("A", -1, 3)]);
        assert_eq!(
            result,
            Err(WorkloadError::NegativeArrivalTime { id: "A".to_string(), arrival: -1 })
        );
    }

    #[test]
    fn test_unbounded_schedule_rejected() {
        let result = Workload::new(vec![Job::new("A", TimeStep::MAX, 1)]);
        assert_eq!(result, Err(WorkloadError::TimeOverflow("A".to_string())));

        let half = TimeStep::MAX / 2 + 1;
        let result = Workload::new(vec![Job::new("A", 0, half), Job::new("B", 0, half)]);
        assert_eq!(result, Err(WorkloadError::TimeOverflow("B".to_string())));

        let workload = Workload::new(vec![Job::new("A", TimeStep::MAX - 3, 3)])
            .expect("schedule ends exactly at the last tick");
        assert_eq!(workload.total_service_time(), 3);
    }
}
