//! CLI argument definitions for the record validation pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vpr",
    version,
    about = "Vehicle purchase record validator",
    long_about = "Validate comma-separated customer/vehicle-purchase exports.\n\n\
                  Applies fifteen field rules per row, sequentially or across a\n\
                  worker pool, and exports the accepted records as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an input file and export the accepted records.
    Validate(ValidateArgs),

    /// Generate a synthetic input file for load testing.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the comma-separated input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Execution strategy for the validation phase.
    #[arg(long = "strategy", value_enum, default_value = "both")]
    pub strategy: StrategyArg,

    /// Output directory for exported records.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Worker-pool size for the concurrent strategy
    /// (default: available parallelism).
    #[arg(long = "workers", value_name = "N")]
    pub workers: Option<usize>,

    /// Skip per-row rejection diagnostics; only aggregate counts are
    /// reported. Useful for benchmarking large inputs.
    #[arg(long = "no-rejection-log")]
    pub no_rejection_log: bool,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path of the file to write.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of data rows to generate.
    #[arg(long = "rows", value_name = "N", default_value_t = 10_000)]
    pub rows: u64,

    /// RNG seed for reproducible files (default: seeded from entropy).
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Which strategies a validate run executes.
#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Sequential,
    Concurrent,
    /// Run both and report them side by side.
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
