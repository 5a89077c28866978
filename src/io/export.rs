//! Export per-fund window stats to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts, so it carries the window endpoints alongside the CAGR rather
//! than just the ranking.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analysis::{compute_cagr, fund_series};
use crate::domain::Observation;
use crate::error::AppError;

/// Write one row per fund of the windowed table to a CSV file.
///
/// Funds appear in table (alphabetical) order, not ranking order. An
/// undefined CAGR leaves the last field empty instead of dropping the fund,
/// so the export always covers every fund that survived cleaning.
pub fn write_results_csv(path: &Path, rows: &[Observation], years: u32) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "fund,rows,first_date,last_date,start_nav,end_nav,cagr")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for series in fund_series(rows) {
        let (Some(first), Some(last)) = (series.rows.first(), series.rows.last()) else {
            continue;
        };
        let cagr = compute_cagr(first.nav, last.nav, years)
            .map(|r| format!("{r:.10}"))
            .unwrap_or_default();
        writeln!(
            file,
            "{},{},{},{},{:.4},{:.4},{}",
            series.fund,
            series.rows.len(),
            first.date,
            last.date,
            first.nav,
            last.nav,
            cagr,
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
