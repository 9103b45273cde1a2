use std::fmt;
use std::str::FromStr;

use crate::errors::SchedulingError;
use crate::TimeStep;

/// Round Robin quantum used when none is given.
pub const DEFAULT_QUANTUM: TimeStep = 4;

/// Policies are simulated one after the other unless asked otherwise.
pub const DEFAULT_WORKERS: usize = 1;

/// Process exit code for an unreadable or invalid workload.
pub const EXIT_INPUT_ERROR: i32 = 5;

/// Process exit code for a bad command-line configuration.
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    FirstComeFirstServed,
    ShortestJobNext,
    ShortestRemainingTime,
    RoundRobin,
}

impl Algorithm {
    /// Every policy, in the order reports list them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::FirstComeFirstServed,
        Algorithm::ShortestJobNext,
        Algorithm::ShortestRemainingTime,
        Algorithm::RoundRobin,
    ];

    /// Short name used in the summary table.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::FirstComeFirstServed => "FCFS",
            Algorithm::ShortestJobNext => "SJN",
            Algorithm::ShortestRemainingTime => "SRT",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Heading printed above a policy's results.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::FirstComeFirstServed => "First-Come, First-Served (FCFS) Scheduling",
            Algorithm::ShortestJobNext => "Shortest Job Next (SJN) Scheduling",
            Algorithm::ShortestRemainingTime => "Shortest Remaining Time (SRT) Scheduling",
            Algorithm::RoundRobin => "Round Robin Scheduling",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::ShortestRemainingTime | Algorithm::RoundRobin
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::FirstComeFirstServed),
            "sjn" => Ok(Algorithm::ShortestJobNext),
            "srt" => Ok(Algorithm::ShortestRemainingTime),
            "rr" => Ok(Algorithm::RoundRobin),
            _ => Err(SchedulingError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
