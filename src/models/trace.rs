use std::fmt;

use log::debug;

use super::{Job, JobId, TimeStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Arrival,
    Departure,
}

/// A job entering or leaving the system, shown as `t(3) -> B +`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub tick: TimeStep,
    pub job_id: JobId,
    pub kind: TraceKind,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            TraceKind::Arrival => '+',
            TraceKind::Departure => '-',
        };
        write!(f, "t({}) -> {} {}", self.tick, self.job_id, sign)
    }
}

/// A maximal stretch of consecutive ticks given to a single job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub job_id: JobId,
    pub start: TimeStep,
    pub end: TimeStep,
}

impl Slice {
    pub fn len(&self) -> TimeStep {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Collects the trace events and the execution timeline of one run.
#[derive(Debug, Default)]
pub struct Recorder {
    trace: Vec<TraceEvent>,
    timeline: Vec<Slice>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arrival(&mut self, tick: TimeStep, job: &Job) {
        debug!("t({}) -> {} +", tick, job.id());
        self.trace.push(TraceEvent {
            tick,
            job_id: job.id().to_owned(),
            kind: TraceKind::Arrival,
        });
    }

    pub fn departure(&mut self, tick: TimeStep, job: &Job) {
        debug!("t({}) -> {} -", tick, job.id());
        self.trace.push(TraceEvent {
            tick,
            job_id: job.id().to_owned(),
            kind: TraceKind::Departure,
        });
    }

    /// Records that `job_id` held the CPU over `[start, end)`, merging with the
    /// previous slice when the same job simply kept running.
    pub fn run(&mut self, job_id: &str, start: TimeStep, end: TimeStep) {
        if start == end {
            return;
        }
        if let Some(last) = self.timeline.last_mut() {
            if last.job_id == job_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.timeline.push(Slice {
            job_id: job_id.to_owned(),
            start,
            end,
        });
    }

    pub fn into_parts(self) -> (Vec<TraceEvent>, Vec<Slice>) {
        (self.trace, self.timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_event_display() {
        let mut recorder = Recorder::new();
        let job = Job::new("E", 10, 1);
        recorder.arrival(10, &job);
        recorder.departure(11, &job);

        let (trace, _) = recorder.into_parts();
        let lines: Vec<String> = trace.iter().map(|event| event.to_string()).collect();
        assert_eq!(lines, vec!["t(10) -> E +", "t(11) -> E -"]);
    }

    #[test]
    fn test_run_merges_contiguous_ticks() {
        let mut recorder = Recorder::new();
        recorder.run("A", 0, 1);
        recorder.run("A", 1, 2);
        recorder.run("B", 2, 3);
        recorder.run("A", 5, 6);
        recorder.run("A", 6, 6);

        let (_, timeline) = recorder.into_parts();
        let spans: Vec<(&str, TimeStep, TimeStep)> = timeline
            .iter()
            .map(|slice| (slice.job_id.as_str(), slice.start, slice.end))
            .collect();
        assert_eq!(spans, vec![("A", 0, 2), ("B", 2, 3), ("A", 5, 6)]);
    }
}
