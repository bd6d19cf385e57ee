//! Command-line front end: solve a weight matrix read from a file.

use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use tsp_heuristics::config::{Config, DEFAULT_SEED};
use tsp_heuristics::error::TspError;
use tsp_heuristics::problem::WeightMatrix;
use tsp_heuristics::solution::Method;
use tsp_heuristics::utils::{
    render_log, save_json, save_report, SolveStatistics, DEFAULT_REPORT_PATH,
};
use tsp_heuristics::TspSolver;

/// Approximate a shortest closed tour over a symmetric weight matrix.
///
/// The matrix file holds one row per line, values separated by spaces or
/// commas. Set RUST_LOG (e.g. to debug) to change log verbosity.
#[derive(Debug, Parser)]
#[command(name = "tsp-solver", version, about)]
struct Cli {
    /// Path to the weight matrix file
    matrix: PathBuf,

    /// Heuristic to run
    #[arg(short, long, value_enum, default_value_t = Method::Greedy)]
    method: Method,

    /// Start node, 1-based (ignored by nearest-neighbor, which picks one at random)
    #[arg(short, long, default_value_t = 1)]
    start: usize,

    /// Seed for simulated annealing
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Where to write the plain-text report
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Also write the outcome as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Loading weight matrix from: {}", cli.matrix.display());
    let matrix = WeightMatrix::from_file(&cli.matrix)?;
    info!("Loaded {}×{} matrix", matrix.size(), matrix.size());

    if cli.method.uses_start_node() && (cli.start == 0 || cli.start > matrix.size()) {
        return Err(TspError::StartOutOfRange {
            start: cli.start,
            nodes: matrix.size(),
        }
        .into());
    }

    let config = Config::new()
        .with_start_node(cli.start.saturating_sub(1))
        .with_seed(cli.seed);

    let solver = TspSolver::new(matrix, config);
    let outcome = solver.solve(cli.method)?;

    println!("{}", outcome.summary());
    println!();
    println!("{}", render_log(&outcome));

    info!("{}", SolveStatistics::from_outcome(&outcome).format());

    save_report(&outcome, &cli.output)?;
    info!("Results saved to {}", cli.output.display());

    if let Some(json_path) = &cli.json {
        save_json(&outcome, json_path)?;
        info!("JSON outcome saved to {}", json_path.display());
    }

    Ok(())
}
