//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads and cleans the NAV CSV files
//! - runs the windowing, CAGR, and swing passes
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, ScreenArgs};
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `navs` binary.
pub fn run() -> Result<(), AppError> {
    // We want `navs --data-dir data` to behave like `navs report --data-dir data`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // keeping the flag-only invocation working.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_screen(args, OutputMode::Full),
        Command::Rank(args) => handle_screen(args, OutputMode::RankOnly),
        Command::Swings(args) => handle_screen(args, OutputMode::SwingsOnly),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    RankOnly,
    SwingsOnly,
}

fn handle_screen(args: ScreenArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_screen(&config)?;

    // Print terminal output. The full report leads each section with a blank
    // line; the single-section modes print bare so they pipe cleanly.
    match mode {
        OutputMode::Full => {
            println!();
            println!(
                "{}",
                crate::report::format_rankings(&run.rankings, config.top_n)
            );
            println!();
            println!(
                "{}",
                crate::report::format_swings(&run.swings, config.swing_threshold_pct)
            );
        }
        OutputMode::RankOnly => {
            println!(
                "{}",
                crate::report::format_rankings(&run.rankings, config.top_n)
            );
        }
        OutputMode::SwingsOnly => {
            println!(
                "{}",
                crate::report::format_swings(&run.swings, config.swing_threshold_pct)
            );
        }
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run.windowed, config.years)?;
    }
    if let Some(path) = &config.export_summary {
        crate::io::summary::write_summary_json(
            path,
            &config,
            &run.table,
            &run.rankings,
            &run.swings,
        )?;
    }

    Ok(())
}

pub fn run_config_from_args(args: &ScreenArgs) -> RunConfig {
    RunConfig {
        data_dir: args.data_dir.clone(),
        years: args.years,
        swing_threshold_pct: args.swing_threshold,
        top_n: args.top,
        export_results: args.export.clone(),
        export_summary: args.export_summary.clone(),
    }
}

/// Rewrite argv so `navs` defaults to `navs report`.
///
/// Rules:
/// - `navs --data-dir d ...`     -> `navs report --data-dir d ...`
/// - `navs report/rank/swings`   -> unchanged
/// - `navs --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "rank" | "swings");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
