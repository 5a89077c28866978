//! Trailing-window restriction.
//!
//! Each fund is cut down to the rows inside its own trailing window before
//! CAGR and swing detection run. The window is anchored per fund, not at a
//! global "today": a fund that stopped publishing is windowed against its
//! own final years.

use chrono::Duration;
use rayon::prelude::*;

use crate::domain::Observation;

use super::fund_series;

/// Window arithmetic counts a year as a flat 365 days; leap days are
/// deliberately ignored, so a "7 year" window is exactly 2555 days.
pub const DAYS_PER_YEAR: i64 = 365;

/// Keep, per fund, only the rows inside the trailing `years` window.
///
/// The window is `[latest - years * 365 days, latest]` with an inclusive
/// lower bound, where `latest` is that fund's own maximum date. Funds with a
/// shorter history than the window pass through untouched. Output order is
/// the input's (fund, date) order.
pub fn restrict_to_trailing_years(rows: &[Observation], years: u32) -> Vec<Observation> {
    let series = fund_series(rows);

    // Filter each fund independently (parallel); collecting per fund and
    // flattening afterwards preserves table order.
    let kept: Vec<Vec<Observation>> = series
        .par_iter()
        .map(|series| {
            let latest = series.rows[series.rows.len() - 1].date;
            let cutoff = latest - Duration::days(DAYS_PER_YEAR * i64::from(years));
            series
                .rows
                .iter()
                .filter(|o| o.date >= cutoff)
                .cloned()
                .collect()
        })
        .collect();

    kept.into_iter().flatten().collect()
}
