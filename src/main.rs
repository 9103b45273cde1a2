use std::error::Error;
use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use csv::{ReaderBuilder, Trim};
use log::{error, info};

use jobsched::constants::{Algorithm, DEFAULT_WORKERS, EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR};
use jobsched::core::{simulation, SimulationConfig};
use jobsched::scheduler::TimeQuantum;
use jobsched::{logger, report, SchedulingError, Workload, WorkloadError};

/// The ten-job workload simulated when no file is given.
pub fn reference_workload() -> Result<Workload, WorkloadError> {
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
}

/// Reads a workload file with one `id, arrival, service` row per job
pub fn read_workload_file(file_path: &str) -> Result<Workload, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_path(file_path)?;
    let mut entries = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        let field = |index: usize, name: &str| {
            record
                .get(index)
                .ok_or_else(|| format!("line {}: missing {}", line + 1, name))
        };

        let id = field(0, "job id")?.to_owned();
        let arrival: i64 = field(1, "arrival time")?.parse()?;
        let service: i64 = field(2, "service time")?.parse()?;

        entries.push((id, arrival, service));
    }

    Ok(Workload::from_entries(entries)?)
}

pub fn build_cli_command() -> Command {
    Command::new("jobsched")
        .version("0.1.0")
        .about("Simulates FCFS, SJN, SRT and Round Robin CPU scheduling over a job workload")
        .arg(
            Arg::new("workload_file")
                .help("CSV file with `id, arrival, service` rows (reference workload if omitted)"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Policy to simulate")
                .value_parser(["fcfs", "sjn", "srt", "rr", "all"])
                .default_value("all"),
        )
        .arg(
            Arg::new("quantum")
                .short('q')
                .long("quantum")
                .help("Round Robin time quantum in ticks")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("4"),
        )
        .arg(
            Arg::new("workers")
                .short('w')
                .long("workers")
                .help("Number of threads used to run the policies")
                .value_parser(value_parser!(usize))
                .default_value("1"),
        )
        .arg(
            Arg::new("no_trace")
                .long("no-trace")
                .help("Do not print arrival/departure lines for preemptive policies")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more (-v info, -vv every dispatch)")
                .action(ArgAction::Count),
        )
}

/// Turns parsed arguments into a simulation configuration.
pub fn build_config(matches: &ArgMatches) -> Result<SimulationConfig, SchedulingError> {
    let algorithms = match matches.get_one::<String>("algorithm").map(String::as_str) {
        None | Some("all") => Algorithm::ALL.to_vec(),
        Some(name) => vec![name.parse::<Algorithm>()?],
    };

    let quantum = match matches.get_one::<i64>("quantum") {
        Some(&value) => TimeQuantum::try_from(value)?,
        None => TimeQuantum::default(),
    };

    Ok(SimulationConfig {
        algorithms,
        quantum,
        workers: matches
            .get_one::<usize>("workers")
            .copied()
            .unwrap_or(DEFAULT_WORKERS),
        trace: !matches.get_flag("no_trace"),
    })
}

fn main() {
    // cargo run [workload.csv] [-a fcfs|sjn|srt|rr|all] [-q <quantum>] [-w <workers>] [--no-trace] [-v]
    let matches: ArgMatches = build_cli_command().get_matches();

    if let Err(e) = logger::init(matches.get_count("verbose")) {
        eprintln!("Could not install logger: {}", e);
    }

    let config = match build_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let workload = match matches.get_one::<String>("workload_file") {
        Some(path) => read_workload_file(path),
        None => reference_workload().map_err(Into::into),
    };
    let workload = match workload {
        Ok(workload) => workload,
        Err(e) => {
            eprintln!("Error reading workload: {}", e);
            process::exit(EXIT_INPUT_ERROR);
        }
    };

    info!(
        "{} jobs, quantum {}, {} worker(s)",
        workload.len(),
        config.quantum.get(),
        config.workers
    );

    let outcomes = simulation(&workload, &config);

    for outcome in outcomes.iter() {
        println!("{}", report::render_outcome(outcome, config.trace));
    }

    if outcomes.len() > 1 {
        println!("Summary of Averages");
        print!("{}", report::render_summary(&outcomes));
    }
}
