//! Command-line parsing for the NAV screening tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the analysis code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_SWING_THRESHOLD_PCT, DEFAULT_TOP_N, DEFAULT_YEARS};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "navs", version, about = "Mutual Fund NAV Analysis (CAGR rankings + swing detection)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load NAV CSVs, print rankings and swing events, and optionally export results.
    Report(ScreenArgs),
    /// Print the CAGR rankings only (useful for scripting).
    Rank(ScreenArgs),
    /// Print the swing events only.
    Swings(ScreenArgs),
}

/// Common options for the screening subcommands.
#[derive(Debug, Parser, Clone)]
pub struct ScreenArgs {
    /// Path to folder containing NAV CSV files.
    #[arg(long, value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Trailing window length in years (one year = 365 days).
    #[arg(long, default_value_t = DEFAULT_YEARS)]
    pub years: u32,

    /// Swing threshold in percent; only strictly larger jumps are reported.
    #[arg(long, default_value_t = DEFAULT_SWING_THRESHOLD_PCT)]
    pub swing_threshold: f64,

    /// Show top-N and worst-N funds in the ranking.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Export per-fund window stats and CAGR to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the run summary (rankings + swings + load counters) to JSON.
    #[arg(long = "export-summary")]
    pub export_summary: Option<PathBuf>,
}
