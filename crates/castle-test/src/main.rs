//! Console regression harness for the castle counter.
//! Runs the worked-example table and reports the first failure.
//!
//! Exit status: 0 all passed, 1 result mismatch, 2 unexpected fault,
//! 64 bad command line.

use std::panic::{self, AssertUnwindSafe};
use std::process;

use anyhow::Result;
use castle_core::{
    castle_sites, count_castles, find_scenario, CastleSite, Scenario, ScenarioError, SCENARIOS,
};
use clap::Parser;
use serde::Serialize;

const EXIT_FATAL: i32 = 2;
/// `EX_USAGE` from sysexits.h.
const EXIT_USAGE: i32 = 64;

#[derive(Parser, Debug)]
#[command(name = "castle-test", about = "Run the castle-counting worked examples")]
struct Args {
    /// Run only this scenario (1-based).
    #[arg(short, long)]
    scenario: Option<usize>,

    /// Print every passing scenario with its castle sites.
    #[arg(short, long)]
    verbose: bool,

    /// Print a JSON report instead of the summary line.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ScenarioReport {
    number: usize,
    topography: &'static [i32],
    expected: usize,
    result: usize,
    sites: Vec<CastleSite>,
}

/// Ways a harness run can stop early.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum Failure {
    #[error("* {0}")]
    Mismatch(#[from] ScenarioError),

    #[error("Unknown fatal error. End of program.")]
    Fatal,

    #[error("no scenario #{number} (valid: 1..={max})")]
    UnknownScenario { number: usize, max: usize },
}

impl Failure {
    fn exit_code(&self) -> i32 {
        match self {
            Failure::Mismatch(e) => e.exit_code(),
            Failure::Fatal => EXIT_FATAL,
            Failure::UnknownScenario { .. } => EXIT_USAGE,
        }
    }
}

/// Exit status for a command line clap rejected. Help and version
/// requests are not errors.
fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        EXIT_USAGE
    } else {
        0
    }
}

fn select(number: Option<usize>) -> Result<Vec<&'static Scenario>, Failure> {
    match number {
        Some(n) => find_scenario(n)
            .map(|s| vec![s])
            .ok_or(Failure::UnknownScenario { number: n, max: SCENARIOS.len() }),
        None => Ok(SCENARIOS.iter().collect()),
    }
}

/// Run one scenario with `count`, turning a mismatch or a panic into a [`Failure`].
fn run_one<F>(scenario: &Scenario, count: F) -> Result<ScenarioReport, Failure>
where
    F: Fn(&[i32]) -> usize,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        scenario.check_with(&count).map(|result| (result, castle_sites(scenario.topography)))
    }));

    let (result, sites) = outcome.map_err(|_| Failure::Fatal)??;
    Ok(ScenarioReport {
        number: scenario.number,
        topography: scenario.topography,
        expected: scenario.expected,
        result,
        sites,
    })
}

fn run(args: &Args) -> Result<Vec<ScenarioReport>, Failure> {
    let mut reports = Vec::new();
    for scenario in select(args.scenario)? {
        let report = run_one(scenario, count_castles)?;
        if args.verbose {
            let idx: Vec<usize> = report.sites.iter().map(|s| s.index).collect();
            eprintln!(
                "  #{:>2} {:?} -> {} castles at {:?}",
                report.number, report.topography, report.result, idx
            );
        }
        reports.push(report);
    }
    Ok(reports)
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(parse_exit_code(&e));
        }
    };

    let reports = match run(&args) {
        Ok(reports) => reports,
        Err(f @ Failure::UnknownScenario { .. }) => {
            eprintln!("Error: {f}");
            process::exit(f.exit_code());
        }
        Err(f) => {
            println!("{f}");
            process::exit(f.exit_code());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("* Successfully passed all {} tests", reports.len());
    }

    Ok(())
}
