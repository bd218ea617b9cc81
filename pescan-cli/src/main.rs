//! Scans for the critical Péclet number at which the droplet starts moving.
//!
//! Each trial runs the simulation executable once and reads its status
//! line; the search walks toward the boundary and halves its step on every
//! verdict flip. The final critical value prints to stdout with two
//! decimal places.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pescan_sim::SimCommand;
use pescan_solve::threshold::{self, Action, Config, Event, Solution, Status};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "pescan")]
#[command(about = "Locate the critical Péclet number separating stuck from moving droplets")]
struct Cli {
    /// Starting Péclet value (defaults to the built-in seed).
    #[arg(value_name = "START")]
    start: Option<f64>,

    /// Initial step size (defaults to the built-in step).
    #[arg(value_name = "STEP")]
    step: Option<f64>,

    /// Path to the simulation executable.
    #[arg(long, default_value = "./dropMove")]
    exec: PathBuf,

    /// Write a JSON run report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunReport {
    critical: f64,
    estimate: f64,
    status: &'static str,
    iters: usize,
    evaluations: usize,
    flips: usize,
    final_step: f64,
}

impl RunReport {
    fn new(solution: &Solution) -> Self {
        Self {
            critical: solution.critical(),
            estimate: solution.estimate,
            status: status_name(solution.status),
            iters: solution.iters,
            evaluations: solution.evaluations,
            flips: solution.flips,
            final_step: solution.final_step,
        }
    }
}

fn status_name(status: Status) -> &'static str {
    match status {
        Status::Converged => "converged",
        Status::BudgetExhausted => "budget-exhausted",
        Status::StoppedByObserver => "stopped",
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let defaults = Config::default();
    let config = Config {
        start_value: cli.start.unwrap_or(defaults.start_value),
        initial_step: cli.step.unwrap_or(defaults.initial_step),
        ..defaults
    };
    let evaluator = SimCommand::new(&cli.exec);

    info!(
        exec = %evaluator.program().display(),
        start = config.start_value,
        step = config.initial_step,
        tolerance = config.tolerance,
        "starting scan"
    );

    let observer = |event: &Event| {
        match *event {
            Event::Seed { trial } => {
                info!(value = trial.value, verdict = %trial.verdict, "seed trial");
            }
            Event::Step { iter, trial, .. } => {
                info!(iter, value = trial.value, verdict = %trial.verdict, "trial");
            }
            Event::Flip {
                iter,
                trial,
                step,
                estimate,
            } => {
                info!(
                    iter,
                    value = trial.value,
                    verdict = %trial.verdict,
                    step,
                    estimate,
                    "flip"
                );
            }
        }
        None::<Action>
    };

    let solution = threshold::search(&evaluator, &config, observer)
        .context("critical Péclet scan failed")?;

    if solution.status == Status::BudgetExhausted {
        warn!(
            iters = solution.iters,
            final_step = solution.final_step,
            "iteration budget exhausted; estimate is unconverged"
        );
    }

    info!(
        evaluations = solution.evaluations,
        flips = solution.flips,
        estimate = solution.estimate,
        "scan finished"
    );

    if let Some(path) = &cli.report {
        let report = RunReport::new(&solution);
        let json = serde_json::to_string_pretty(&report).context("serialize run report")?;
        fs::write(path, json)
            .with_context(|| format!("write run report to {}", path.display()))?;
    }

    println!("{:.2}", solution.critical());

    Ok(())
}
