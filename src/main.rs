//! CLI wrapper around the tile placement solver.

use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use tilescape::{
    error::Error,
    landscape::Landscape,
    solver::{
        engine::{SearchOutcome, Solver},
        stats::render_stats_table,
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tilescape")]
#[command(about = "Backtracking CSP solver for the tile placement puzzle")]
#[command(version)]
struct Cli {
    /// Landscape input file
    input: PathBuf,

    /// Emit the placement as JSON instead of solution lines
    #[arg(long)]
    json: bool,

    /// Render search statistics after solving
    #[arg(long)]
    stats: bool,

    /// Abort the search after this many region selections
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let text = match fs::read_to_string(&cli.input) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}: {err}", cli.input.display());
            return ExitCode::from(2);
        }
    };

    let mut landscape = match Landscape::build(&text) {
        Ok(landscape) => landscape,
        Err(Error::Format { inner, .. }) => {
            eprintln!("{inner}");
            return ExitCode::from(2);
        }
    };

    let mut solver = Solver::new(&mut landscape);
    if let Some(steps) = cli.max_steps {
        solver = solver.with_step_budget(steps);
    }

    let started = Instant::now();
    let (outcome, stats) = solver.solve();
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        nodes = stats.nodes_visited,
        "run complete"
    );

    let code = match outcome {
        SearchOutcome::Solved(placement) => {
            if cli.json {
                match serde_json::to_string_pretty(&placement) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("{err}");
                        return ExitCode::from(2);
                    }
                }
            } else {
                print!("{placement}");
            }
            ExitCode::SUCCESS
        }
        SearchOutcome::Unsolvable => {
            println!("Unsolvable");
            ExitCode::from(1)
        }
        SearchOutcome::Aborted => {
            println!("Aborted");
            ExitCode::from(1)
        }
    };

    if cli.stats {
        print!("{}", render_stats_table(&stats));
    }

    code
}
