//! dictdb — dictionary database builder
//!
//! Usage:
//!   dictdb build  --input data.json --output data.db   # full rebuild
//!   dictdb check  --input data.json                    # parse only, no write
//!   dictdb status --output data.db                     # inspect a built file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dictdb::builder;
use dictdb::config::BuildConfig;
use dictdb::error::DictError;
use dictdb::loader;
use dictdb::storage::database::Database;

#[derive(Parser)]
#[command(name = "dictdb", about = "Dictionary database builder", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the database from the source JSON file.
    Build {
        /// Path to an optional TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Source JSON file (overrides the config file).
        #[arg(long)]
        input: Option<PathBuf>,
        /// Database file to write (overrides the config file).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Fail on entries with missing fields instead of storing NULL.
        #[arg(long)]
        strict: bool,
    },
    /// Parse the source file and report the entry count without writing.
    Check {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        strict: bool,
    },
    /// Print a brief snapshot of an already built database.
    Status {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build { config, input, output, strict } => {
            run_build(config, input, output, strict);
        }
        Command::Check { config, input, strict } => {
            run_check(config, input, strict);
        }
        Command::Status { config, output } => {
            run_status(config, output);
        }
    }
}

fn load_config(
    path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) -> BuildConfig {
    let cfg = BuildConfig::load(path.as_deref())
        .and_then(|c| c.with_overrides(input, output, strict));
    match cfg {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to load config");
            std::process::exit(1);
        }
    }
}

fn run_build(
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) {
    let cfg = load_config(config, input, output, strict);

    info!(
        input = %cfg.input.display(),
        output = %cfg.output.display(),
        mode = ?cfg.mode,
        "Starting build"
    );

    match builder::build(&cfg) {
        Ok(report) => {
            info!(
                entries = report.entries_loaded,
                rows = report.rows_inserted,
                replaced_old = report.replaced_old,
                "Build complete"
            );
        }
        Err(e) => {
            error!(error = %e, "Build failed");
            std::process::exit(1);
        }
    }
}

fn run_check(config: Option<PathBuf>, input: Option<PathBuf>, strict: bool) {
    let cfg = load_config(config, input, None, strict);

    match loader::load_entries(&cfg.input, cfg.mode) {
        Ok(entries) => {
            println!("{}: {} entries, parse OK", cfg.input.display(), entries.len());
        }
        Err(e) => {
            error!(error = %e, "Check failed");
            std::process::exit(1);
        }
    }
}

fn run_status(config: Option<PathBuf>, output: Option<PathBuf>) {
    let cfg = load_config(config, None, output, false);

    if !cfg.output.exists() {
        eprintln!("Error: {}", DictError::NoDatabase(cfg.output));
        std::process::exit(1);
    }

    match print_status(&cfg.output) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_status(path: &std::path::Path) -> dictdb::error::Result<()> {
    let db = Database::open_readonly(path)?;
    let rows = db.row_count()?;
    let indexed = db.has_word_index()?;
    let size = std::fs::metadata(path)?.len();

    println!("=== Dictionary DB Status ===");
    println!("File       : {}", path.display());
    println!("Size       : {:.1} KB", size as f64 / 1024.0);
    println!("Rows       : {rows}");
    println!("Term index : {}", if indexed { "present" } else { "MISSING" });
    Ok(())
}
