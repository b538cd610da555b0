use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use marmoset::{run_search, SearchConfig, SearchOutcome};

/// Search for a fixed goal string by drawing uniformly random candidates
/// over a 27-symbol alphabet, printing each new best (score, candidate)
/// pair until an exact match appears.
#[derive(Parser)]
struct Args {
    /// Seed the random source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many candidates if no exact match appears
    #[arg(long)]
    max_iters: Option<u64>,
    /// Emit a status line to stderr every this many candidates
    #[arg(long)]
    status_interval: Option<u64>,
    /// Suppress all status output on stderr
    #[arg(long)]
    quiet_status: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let defaults = SearchConfig::default();
    let config = SearchConfig {
        max_iterations: args.max_iters,
        status_interval: if args.quiet_status {
            0
        } else {
            args.status_interval.unwrap_or(defaults.status_interval)
        },
        goal: defaults.goal,
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outcome = run_search(&config, rng, |improvement| {
        println!("{} {}", improvement.score, improvement.candidate);
    })?;

    match outcome {
        SearchOutcome::Matched { .. } => Ok(()),
        SearchOutcome::Exhausted {
            iterations,
            best_score,
        } => Err(format!(
            "no exact match after {iterations} candidates (best score {best_score})"
        )
        .into()),
    }
}
