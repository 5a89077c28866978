//! Shared screening pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV load -> trailing window -> CAGR ranking -> swing detection
//!
//! The front-end then focuses on presentation (printing vs exports).

use crate::domain::{CagrEntry, Observation, RunConfig, SwingEvent};
use crate::error::AppError;
use crate::io::ingest::{self, NavTable};

/// All computed outputs of a single screening run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The cleaned table plus load counters.
    pub table: NavTable,
    /// The table restricted to each fund's trailing window.
    pub windowed: Vec<Observation>,
    /// CAGR ranking, best first.
    pub rankings: Vec<CagrEntry>,
    /// Swing events in fund, then date order.
    pub swings: Vec<SwingEvent>,
}

/// Execute the full screening pipeline and return the computed outputs.
///
/// The passes are pure functions of the loaded table, so running twice over
/// the same directory yields identical outputs.
pub fn run_screen(config: &RunConfig) -> Result<RunOutput, AppError> {
    validate_config(config)?;

    // 1) Load and clean every CSV file in the data directory.
    let table = ingest::load_nav_table(&config.data_dir)?;

    // 2) Restrict each fund to its trailing window.
    let windowed = crate::analysis::restrict_to_trailing_years(&table.rows, config.years);

    // 3) Rank funds by CAGR over the windowed rows.
    let rankings = crate::analysis::rank_by_cagr(&windowed, config.years);

    // 4) Detect day-over-day swings above the threshold.
    let swings = crate::analysis::detect_swings(&windowed, config.swing_threshold_pct);

    Ok(RunOutput {
        table,
        windowed,
        rankings,
        swings,
    })
}

fn validate_config(config: &RunConfig) -> Result<(), AppError> {
    if config.years == 0 {
        return Err(AppError::new(2, "--years must be at least 1."));
    }
    if !config.swing_threshold_pct.is_finite() || config.swing_threshold_pct < 0.0 {
        return Err(AppError::new(
            2,
            "--swing-threshold must be a non-negative number.",
        ));
    }
    if config.top_n == 0 {
        return Err(AppError::new(2, "--top must be at least 1."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_for(dir: &Path) -> RunConfig {
        RunConfig {
            data_dir: dir.to_path_buf(),
            years: 7,
            swing_threshold_pct: 5.0,
            top_n: 2,
            export_results: None,
            export_summary: None,
        }
    }

    fn write_two_fund_fixture(dir: &Path) {
        // Alpha climbs in sub-threshold steps; Beta is flat apart from one
        // +6% jump. Every adjacent pair except Beta's jump stays under 5%.
        std::fs::write(
            dir.join("alpha.csv"),
            "Fund Name,Date,NAV\n\
             Alpha,2020-01-01,100.0\n\
             Alpha,2021-01-01,104.0\n\
             Alpha,2022-01-01,108.0\n\
             Alpha,2023-01-01,112.0\n\
             Alpha,2024-01-01,116.0\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("beta.csv"),
            "Fund Name,Date,NAV\n\
             Beta,2020-01-01,100.0\n\
             Beta,2020-06-01,100.0\n\
             Beta,2020-06-02,106.0\n\
             Beta,2024-01-01,106.0\n",
        )
        .unwrap();
    }

    #[test]
    fn end_to_end_ranking_and_swings() {
        let dir = tempfile::tempdir().unwrap();
        write_two_fund_fixture(dir.path());

        let run = run_screen(&config_for(dir.path())).unwrap();

        assert_eq!(run.table.files_read, 2);
        assert_eq!(run.table.rows_read, 9);
        assert_eq!(run.table.rows_dropped, 0);
        assert_eq!(run.windowed.len(), 9);

        // Alpha: (116/100)^(1/7) - 1 beats Beta: (106/100)^(1/7) - 1.
        let order: Vec<&str> = run.rankings.iter().map(|e| e.fund.as_str()).collect();
        assert_eq!(order, vec!["Alpha", "Beta"]);
        assert!(run.rankings[0].rate > run.rankings[1].rate);
        assert!(run.rankings[1].rate > 0.0);

        // Exactly one event: Beta's jump. Alpha's steady climb never crosses
        // the threshold on any single pair.
        assert_eq!(run.swings.len(), 1);
        let swing = &run.swings[0];
        assert_eq!(swing.fund, "Beta");
        assert_eq!(swing.date, chrono::NaiveDate::from_ymd_opt(2020, 6, 2).unwrap());
        assert_eq!(swing.prev_nav, 100.0);
        assert_eq!(swing.curr_nav, 106.0);
        assert!((swing.change_pct - 6.0).abs() < 1e-9);
    }

    #[test]
    fn window_trims_history_before_cagr() {
        let dir = tempfile::tempdir().unwrap();
        // The 2010 row is far outside a 7-year window anchored at 2024, so
        // the CAGR starts from the 2020 row, not from 50.
        std::fs::write(
            dir.path().join("gamma.csv"),
            "Fund Name,Date,NAV\n\
             Gamma,2010-01-01,50.0\n\
             Gamma,2020-01-01,100.0\n\
             Gamma,2024-01-01,200.0\n",
        )
        .unwrap();

        let run = run_screen(&config_for(dir.path())).unwrap();
        assert_eq!(run.windowed.len(), 2);
        assert_eq!(run.rankings.len(), 1);
        assert!((run.rankings[0].rate - 0.104089514).abs() < 1e-9);
    }

    #[test]
    fn rerunning_the_same_directory_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        write_two_fund_fixture(dir.path());
        let config = config_for(dir.path());

        let first = run_screen(&config).unwrap();
        let second = run_screen(&config).unwrap();

        assert_eq!(first.table.rows, second.table.rows);
        assert_eq!(first.windowed, second.windowed);
        assert_eq!(first.rankings, second.rankings);
        assert_eq!(first.swings, second.swings);
    }

    #[test]
    fn zero_years_is_rejected_before_loading() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.years = 0;

        let err = run_screen(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("--years"));
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.swing_threshold_pct = f64::NAN;

        let err = run_screen(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_directory_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir.path().join("nope"));

        let err = run_screen(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
