//! Write the run summary JSON.
//!
//! The summary is the "portable" representation of a full run:
//! - the knobs that shaped it (window years, swing threshold)
//! - load counters (files, rows, drops)
//! - the complete ranking and swing list
//!
//! The schema is defined by `domain::SummaryFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{CagrEntry, RunConfig, SummaryFile, SwingEvent};
use crate::error::AppError;
use crate::io::ingest::NavTable;

/// Write a summary JSON file.
pub fn write_summary_json(
    path: &Path,
    config: &RunConfig,
    table: &NavTable,
    rankings: &[CagrEntry],
    swings: &[SwingEvent],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create summary JSON '{}': {e}", path.display()),
        )
    })?;

    let summary = SummaryFile {
        tool: "navs".to_string(),
        years: config.years,
        swing_threshold_pct: config.swing_threshold_pct,
        files_read: table.files_read,
        rows_read: table.rows_read,
        rows_dropped: table.rows_dropped,
        funds: rankings.to_vec(),
        swings: swings.to_vec(),
    };

    serde_json::to_writer_pretty(file, &summary)
        .map_err(|e| AppError::new(2, format!("Failed to write summary JSON: {e}")))?;

    Ok(())
}
