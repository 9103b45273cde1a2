mod job;
pub mod arrivals;
pub mod ledger;
pub mod scheduler;
pub mod trace;
pub mod workload;

pub use arrivals::ArrivalSource;
pub use job::Job;
pub use ledger::{Averages, JobStats, Ledger, Metric};
pub use trace::{Recorder, Slice, TraceEvent, TraceKind};
pub use workload::Workload;

pub type TimeStep = usize;

pub type JobId = String;
