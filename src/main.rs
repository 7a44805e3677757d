/*!
 * Brocopy - Main Entry Point
 *
 * Copies one source file to every destination whose key matches in a
 * `key,path` mapping file, logging each run to an append-only log.
 */

use brocopy::app::{generate_run_id, init_tracing, normalize_cli_path, normalize_legacy_flags};
use brocopy::core::limits::{ARENA_CAPACITY_ENV, DEFAULT_ARENA_CAPACITY, MAX_CSV_ROWS, MAX_KEYS};
use brocopy::{Config, RunLog};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info_span};

/// Brocopy - broadcast a file to the paths listed in a CSV
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to copy
    src_path: PathBuf,

    /// Mapping file: a header line, then `key,path` rows
    csv_path: PathBuf,

    /// Keys to look up (case-insensitive); required unless --all-csv-paths
    keys: Vec<String>,

    /// Append the run log to this file (also accepted as -log)
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Mirror log lines to stdout
    #[arg(short, long)]
    verbose: bool,

    /// Copy to every path in the CSV, ignoring keys
    #[arg(short = 'a', long)]
    all_csv_paths: bool,

    /// Remove the source file afterwards (also accepted as -rm)
    #[arg(long, visible_alias = "rm")]
    remove_src: bool,

    /// Arena capacity in bytes
    #[arg(long, env = ARENA_CAPACITY_ENV, default_value_t = DEFAULT_ARENA_CAPACITY)]
    arena_size: usize,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            src_path: normalize_cli_path(&cli.src_path),
            csv_path: normalize_cli_path(&cli.csv_path),
            log_path: cli.log.as_deref().map(normalize_cli_path),
            keys: cli.keys,
            verbose: cli.verbose,
            all_csv_paths: cli.all_csv_paths,
            remove_src: cli.remove_src,
            arena_capacity: cli.arena_size,
            max_keys: MAX_KEYS,
            max_rows: MAX_CSV_ROWS,
        }
    }
}

fn main() -> miette::Result<()> {
    let args = normalize_legacy_flags(std::env::args_os());
    let config: Config = Cli::parse_from(&args).into();

    let mut log = RunLog::open(config.log_path.as_deref());
    let run_id = generate_run_id();
    let shown: Vec<String> = args
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if let Err(e) = log.begin(&run_id, &shown) {
        eprintln!("warning: could not write log header: {}", e);
    }

    init_tracing(log.writer(), config.verbose);

    let span = info_span!("run", run_id = %run_id);
    let result = span.in_scope(|| brocopy::run(&config));
    if let Err(e) = &result {
        error!(error = %e, "run aborted");
    }

    if let Err(e) = log.finish() {
        eprintln!("warning: could not close log: {}", e);
    }

    result?;
    Ok(())
}
