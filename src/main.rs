//! Hangman Solver - CLI
//!
//! Solves hangman puzzles in batch from a record file or one at a time.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{run_batch, solve_puzzle},
    core::Word,
    output::{print_batch_results, print_batch_statistics, print_record_issues, print_solve_report},
    puzzles::{read_puzzles, write_results},
    solver::{CandidatePolicy, DEFAULT_MAX_ITERATIONS, Profile, Solver},
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};
use log::{LevelFilter, info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Heuristic hangman solver using positional letter statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line (default: embedded Romanian dictionary)
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Heuristic profile: romanian (default), english
    #[arg(long, global = true, default_value = "romanian")]
    profile: String,

    /// Candidate policy: narrow (default), rescan
    #[arg(long, global = true, default_value = "narrow")]
    policy: String,

    /// Break score ties randomly from this seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Per-puzzle iteration cap
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', global = true, action = clap::ArgAction::Count)]
    log_verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every puzzle in a record file and write a results file
    Batch {
        /// Input records: game_id,initial_pattern,target_word
        #[arg(short, long)]
        input: PathBuf,

        /// Results file to write
        #[arg(short, long, default_value = "results/out.csv")]
        output: PathBuf,

        /// Print a detailed block per puzzle
        #[arg(long)]
        details: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Solve a single puzzle
    Solve {
        /// Initial pattern, '*' for hidden letters (e.g. "C***")
        pattern: String,

        /// The hidden target word
        target: String,

        /// Show the selection source and candidate counts of every guess
        #[arg(long)]
        verbose: bool,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the dictionary from `path`, or the embedded one
fn load_dictionary(path: Option<&Path>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?,
        None => words_from_slice(DICTIONARY),
    };

    if words.is_empty() {
        warn!("Dictionary is empty, guesses will follow the alphabet order only");
    } else {
        info!("Loaded {} dictionary words", words.len());
    }
    Ok(words)
}

fn build_solver<'a>(cli: &Cli, dictionary: &'a [Word]) -> Result<Solver<'a>> {
    let Some(profile) = Profile::from_name(&cli.profile) else {
        bail!(
            "Unknown profile '{}' (expected one of: {})",
            cli.profile,
            Profile::NAMES.join(", ")
        );
    };
    let Some(policy) = CandidatePolicy::from_name(&cli.policy) else {
        bail!("Unknown policy '{}' (expected narrow or rescan)", cli.policy);
    };
    if cli.max_iterations == 0 {
        bail!("--max-iterations must be at least 1");
    }

    Ok(Solver::new(profile, dictionary)
        .with_policy(policy)
        .with_seed(cli.seed)
        .with_max_iterations(cli.max_iterations))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_verbosity);

    let dictionary = load_dictionary(cli.dict.as_deref())?;
    let solver = build_solver(&cli, &dictionary)?;

    match &cli.command {
        Commands::Batch {
            input,
            output,
            details,
            no_progress,
        } => run_batch_command(&solver, input, output, *details, !*no_progress),
        Commands::Solve {
            pattern,
            target,
            verbose,
        } => {
            let report = solve_puzzle(pattern, target, &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_report(&report, *verbose);
            Ok(())
        }
    }
}

fn run_batch_command(
    solver: &Solver<'_>,
    input: &Path,
    output: &Path,
    details: bool,
    show_progress: bool,
) -> Result<()> {
    let set = read_puzzles(input)
        .with_context(|| format!("Failed to read puzzles {}", input.display()))?;
    print_record_issues(&set.issues);

    if set.puzzles.is_empty() {
        bail!("No valid puzzle records found in {}", input.display());
    }

    let report = run_batch(solver, &set.puzzles, show_progress);
    print_batch_results(&report.results, details);
    print_batch_statistics(&report.statistics);

    write_results(output, &report.results)
        .with_context(|| format!("Failed to write results {}", output.display()))?;
    println!("\nResults written to {}", output.display());

    Ok(())
}
