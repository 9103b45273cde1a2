pub mod core;
pub mod models;
pub mod report;
pub mod utils;

#[cfg(test)]
mod fixtures;

pub use models::scheduler;
pub use models::{
    Averages, ArrivalSource, Job, JobId, JobStats, Ledger, Metric, Recorder, Slice, TimeStep,
    TraceEvent, TraceKind, Workload,
};
pub use utils::{constants, errors, logger};
pub use utils::{Algorithm, SchedulingError, WorkloadError};
