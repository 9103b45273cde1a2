pub mod fcfs_scheduler;
pub mod outcome;
pub mod rr_scheduler;
pub mod scheduler;
pub mod sjn_scheduler;
pub mod srt_scheduler;

pub use fcfs_scheduler::FirstComeFirstServed;
pub use outcome::Outcome;
pub use rr_scheduler::{RoundRobin, TimeQuantum};
pub use scheduler::{shortest_index, Scheduler};
pub use sjn_scheduler::ShortestJobNext;
pub use srt_scheduler::ShortestRemainingTime;
