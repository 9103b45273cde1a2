//! Console rendering of simulation outcomes. Everything here is read-only
//! over the ledger and outcome; callers decide where the text goes.

use std::iter;

use crate::scheduler::Outcome;
use crate::{Averages, Ledger, Metric, TimeStep, TraceEvent};

const KEY_NAME: &str = "Job ID";

const SUMMARY_HEADERS: [(&str, usize); 3] = [
    ("Scheduling Algorithm", 25),
    ("Average Waiting Time", 20),
    ("Average Turnaround Time", 22),
];

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn ms(value: TimeStep) -> String {
    format!("{} ms", value)
}

fn ms_avg(value: f64) -> String {
    format!("{:.2} ms", value)
}

/// One row per job (sorted by id), one column per metric.
pub fn render_table(ledger: &Ledger) -> String {
    let key_width = ledger
        .iter()
        .map(|(id, _)| id.len())
        .chain(iter::once(KEY_NAME.len()))
        .max()
        .unwrap_or(KEY_NAME.len());

    let widths: Vec<usize> = Metric::ALL
        .iter()
        .map(|&metric| {
            ledger
                .iter()
                .map(|(_, stats)| ms(stats.get(metric)).len())
                .chain(iter::once(metric.label().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    let mut header = format!("{:<w$}", KEY_NAME, w = key_width);
    for (metric, width) in Metric::ALL.iter().zip(&widths) {
        header.push_str(&format!(" | {:<w$}", metric.label(), w = *width));
    }
    push_line(&mut out, &header);

    let separator = key_width + widths.iter().sum::<usize>() + 3 * widths.len();
    push_line(&mut out, &"-".repeat(separator));

    for (id, stats) in ledger.iter() {
        let mut row = format!("{:<w$}", id, w = key_width);
        for (&metric, width) in Metric::ALL.iter().zip(&widths) {
            row.push_str(&format!(" | {:<w$}", ms(stats.get(metric)), w = *width));
        }
        push_line(&mut out, &row);
    }

    out
}

pub fn render_averages(averages: &Averages) -> String {
    format!(
        "Average Waiting Time: {}\nAverage Turnaround Time: {}\n",
        ms_avg(averages.waiting_time),
        ms_avg(averages.turnaround_time)
    )
}

pub fn render_trace(trace: &[TraceEvent]) -> String {
    trace.iter().map(|event| format!("{}\n", event)).collect()
}

/// Title, optional trace, results table and averages of one run.
pub fn render_outcome(outcome: &Outcome, show_trace: bool) -> String {
    let algorithm = outcome.algorithm();
    let mut out = String::new();

    push_line(&mut out, algorithm.title());
    if show_trace && algorithm.is_preemptive() && !outcome.trace().is_empty() {
        out.push_str(&render_trace(outcome.trace()));
        out.push('\n');
    }
    out.push_str(&render_table(outcome.ledger()));
    out.push('\n');
    out.push_str(&render_averages(&outcome.averages()));

    out
}

/// Side-by-side averages of several runs.
pub fn render_summary(outcomes: &[Outcome]) -> String {
    let mut out = String::new();

    let header: Vec<String> = SUMMARY_HEADERS
        .iter()
        .map(|(name, width)| format!("{:<w$}", name, w = *width))
        .collect();
    push_line(&mut out, &header.join(" | "));

    let separator = SUMMARY_HEADERS.iter().map(|(_, width)| width).sum::<usize>()
        + 3 * (SUMMARY_HEADERS.len() - 1);
    push_line(&mut out, &"-".repeat(separator));

    for outcome in outcomes {
        let averages = outcome.averages();
        let cells = [
            outcome.algorithm().label().to_string(),
            ms_avg(averages.waiting_time),
            ms_avg(averages.turnaround_time),
        ];
        let row: Vec<String> = cells
            .iter()
            .zip(SUMMARY_HEADERS.iter())
            .map(|(cell, (_, width))| format!("{:<w$}", cell, w = *width))
            .collect();
        push_line(&mut out, &row.join(" | "));
    }

    out
}
