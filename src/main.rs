//! euctsp CLI: solve Euclidean TSP instances from coordinate files.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};

use euctsp::approx::ApproxRunner;
use euctsp::exact::ExactRunner;
use euctsp::io::{self, IoError};
use euctsp::local_search::{AnnealConfig, AnnealRunner};

#[derive(Parser)]
#[command(name = "euctsp")]
#[command(about = "Euclidean TSP solvers: exact, 2-approximation, simulated annealing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exhaustive optimal search (tiny instances only)
    Exact {
        /// Instance file (TSPLIB-style coordinate section)
        instance: PathBuf,

        /// Cutoff time in seconds
        #[arg(short, long)]
        time: Option<u64>,

        /// Output solution file (default: derived from the instance name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// MST-based 2-approximation
    Approx {
        /// Instance file (TSPLIB-style coordinate section)
        instance: PathBuf,

        /// Output solution file (default: derived from the instance name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Simulated annealing over the 2-opt neighborhood
    LocalSearch {
        /// Instance file (TSPLIB-style coordinate section)
        instance: PathBuf,

        /// Cutoff time in seconds
        #[arg(short, long)]
        time: Option<u64>,

        /// Random seed for reproducibility
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Output solution file (default: derived from the instance name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), IoError> {
    let start = Instant::now();

    let (instance_path, output, tour, length) = match cli.command {
        Commands::Exact { instance, time, output } => {
            let inst = io::read_instance(&instance)?;
            let result = ExactRunner::run(&inst, time.map(Duration::from_secs));
            if !result.completed {
                println!(
                    "cutoff reached after {} permutations; best tour so far",
                    result.permutations_checked
                );
            }
            let output = output.unwrap_or_else(|| default_output(&instance, "exact"));
            (instance, output, result.tour, result.length)
        }
        Commands::Approx { instance, output } => {
            let inst = io::read_instance(&instance)?;
            let result = ApproxRunner::run(&inst);
            let output = output.unwrap_or_else(|| default_output(&instance, "approx"));
            (instance, output, result.tour, result.length)
        }
        Commands::LocalSearch { instance, time, seed, output } => {
            let inst = io::read_instance(&instance)?;
            let mut config = AnnealConfig::default().with_seed(seed);
            if let Some(secs) = time {
                config = config.with_time_limit(Duration::from_secs(secs));
            }
            let result = AnnealRunner::run(&inst, &config);
            let output = output.unwrap_or_else(|| default_output(&instance, "ls"));
            (instance, output, result.tour, result.length)
        }
    };

    io::write_solution(&output, length, &tour)?;
    println!(
        "{}: tour length {length}, solution written to {}",
        instance_path.display(),
        output.display()
    );
    println!("runtime: {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// `foo.tsp` solved in mode `ls` becomes `foo_ls.sol` next to the input.
fn default_output(instance: &Path, mode: &str) -> PathBuf {
    let stem = instance
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("solution");
    instance.with_file_name(format!("{stem}_{mode}.sol"))
}
