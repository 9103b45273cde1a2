//! Workloads shared by the unit tests.

use crate::scheduler::Outcome;
use crate::{TimeStep, Workload};

/// The ten-job reference workload `A..J`.
pub(crate) fn reference_workload() -> Workload {
    Workload::from_entries([
        ("A", 0, 16),
        ("B", 3, 2),
        ("C", 5, 11),
        ("D", 9, 6),
        ("E", 10, 1),
        ("F", 12, 9),
        ("G", 14, 4),
        ("H", 16, 14),
        ("I", 17, 1),
        ("J", 19, 8),
    ])
    .expect("reference workload is valid")
}

/// Jobs with gaps between them, so the CPU has to idle.
pub(crate) fn sparse_workload() -> Workload {
    Workload::from_entries([("P", 2, 3), ("Q", 10, 2), ("R", 11, 1), ("S", 20, 4)])
        .expect("sparse workload is valid")
}

/// `(id, start, completion, waiting, turnaround)` for every finished job of
/// `outcome`, sorted by id. Waiting and turnaround come from the ledger.
pub(crate) fn rows(outcome: &Outcome) -> Vec<(&str, TimeStep, TimeStep, TimeStep, TimeStep)> {
    let mut rows: Vec<_> = outcome
        .jobs()
        .iter()
        .map(|job| {
            let stats = outcome.ledger().stats(job.id()).expect("every job has stats");
            (
                job.id(),
                job.start_time().expect("job started"),
                job.completion_time().expect("job completed"),
                stats.waiting_time,
                stats.turnaround_time,
            )
        })
        .collect();
    rows.sort();
    rows
}

/// Each slice of the timeline as `(id, start, end)`.
pub(crate) fn spans(outcome: &Outcome) -> Vec<(&str, TimeStep, TimeStep)> {
    outcome
        .timeline()
        .iter()
        .map(|slice| (slice.job_id.as_str(), slice.start, slice.end))
        .collect()
}
