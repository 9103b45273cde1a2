use std::error::Error;
use std::fmt;

use crate::models::JobId;

/// Reasons a workload is refused before any simulation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    Empty,
    DuplicateId(JobId),
    NonPositiveServiceTime { id: JobId, service: i64 },
    NegativeArrivalTime { id: JobId, arrival: i64 },
    TimeOverflow(JobId),
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadError::Empty => write!(f, "workload has no jobs"),
            WorkloadError::DuplicateId(id) => write!(f, "job id '{}' appears more than once", id),
            WorkloadError::NonPositiveServiceTime { id, service } => {
                write!(f, "job '{}' has service time {}, expected > 0", id, service)
            }
            WorkloadError::NegativeArrivalTime { id, arrival } => {
                write!(f, "job '{}' has negative arrival time {}", id, arrival)
            }
            WorkloadError::TimeOverflow(id) => {
                write!(f, "job '{}' pushes the schedule past the largest representable tick", id)
            }
        }
    }
}

impl Error for WorkloadError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    InvalidWorkload(WorkloadError),
    InvalidQuantum(i64),
    UnknownAlgorithm(String),
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingError::InvalidWorkload(e) => write!(f, "invalid workload: {}", e),
            SchedulingError::InvalidQuantum(q) => {
                write!(f, "invalid time quantum {}, expected a positive number of ticks", q)
            }
            SchedulingError::UnknownAlgorithm(name) => write!(
                f,
                "unknown algorithm '{}', expected one of fcfs, sjn, srt, rr",
                name
            ),
        }
    }
}

impl Error for SchedulingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SchedulingError::InvalidWorkload(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WorkloadError> for SchedulingError {
    fn from(e: WorkloadError) -> Self {
        SchedulingError::InvalidWorkload(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = SchedulingError::from(WorkloadError::DuplicateId("A".to_string()));
        assert_eq!(e.to_string(), "invalid workload: job id 'A' appears more than once");
        assert!(e.source().is_some());

        let e = SchedulingError::InvalidQuantum(0);
        assert_eq!(
            e.to_string(),
            "invalid time quantum 0, expected a positive number of ticks"
        );
        assert!(e.source().is_none());

        let e = WorkloadError::TimeOverflow("H".to_string());
        assert_eq!(
            e.to_string(),
            "job 'H' pushes the schedule past the largest representable tick"
        );
    }
}
