pub mod constants;
pub mod errors;
pub mod logger;

pub use constants::Algorithm;
pub use errors::{SchedulingError, WorkloadError};
