use std::path::PathBuf;

use clap::Parser;
use nonet::{
    error::Result,
    io,
    solver::{
        engine::{SearchOutcome, SearchStats, SolverEngine},
        heuristics::{
            value::ShuffledValueHeuristic, variable::MinimumRemainingValuesHeuristic,
        },
        stats::render_stats_table,
    },
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the puzzle file. Digit characters are read in sequence;
    /// everything else is ignored.
    input: PathBuf,

    /// Path the resulting grid is appended to.
    output: PathBuf,

    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the statistics as JSON instead of a table.
    #[arg(long, requires = "stats")]
    json: bool,

    /// Try candidate digits in a seeded random order instead of
    /// ascending. Runs with the same seed remain reproducible.
    #[arg(long, value_name = "SEED")]
    shuffle_seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    outcome: SearchOutcome,
    stats: SearchStats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut grid = io::read_puzzle(&args.input)?;

    let engine = match args.shuffle_seed {
        Some(seed) => SolverEngine::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(ShuffledValueHeuristic::seeded(seed)),
        ),
        None => SolverEngine::with_defaults(),
    };
    let (outcome, stats) = engine.solve(&mut grid);

    io::append_grid(&args.output, &grid)?;

    match outcome {
        SearchOutcome::Solved => println!("Solution found."),
        SearchOutcome::Unsolvable => println!("No solution exists; input grid echoed unchanged."),
    }

    if args.stats {
        if args.json {
            let report = StatsReport { outcome, stats };
            let encoded =
                serde_json::to_string_pretty(&report).expect("stats are always serializable");
            println!("{encoded}");
        } else {
            print!("{}", render_stats_table(&stats));
        }
    }

    Ok(())
}
