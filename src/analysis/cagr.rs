//! Compound annual growth rate per fund, and the best-to-worst ranking.

use std::cmp::Ordering;

use crate::domain::{CagrEntry, Observation};

use super::fund_series;

/// CAGR from the first to the last NAV of a window:
/// `(end / start)^(1 / years) - 1`.
///
/// Returns `None` when the rate is undefined: a non-positive starting NAV
/// (the ratio has no real `years`-th root, and a zero start divides by
/// zero), or a non-finite result such as a negative ending NAV raised to a
/// fractional power.
pub fn compute_cagr(start_nav: f64, end_nav: f64, years: u32) -> Option<f64> {
    if start_nav <= 0.0 {
        return None;
    }
    let rate = (end_nav / start_nav).powf(1.0 / f64::from(years)) - 1.0;
    rate.is_finite().then_some(rate)
}

/// Compute each fund's CAGR over its windowed rows and sort best-first.
///
/// The windowed table is assumed (fund, date)-sorted, so first/last row per
/// fund are the window's start and end NAV. Funds with an undefined CAGR are
/// omitted. Ordering is rate descending; exact ties fall back to fund name
/// ascending so the ranking is reproducible run to run.
pub fn rank_by_cagr(rows: &[Observation], years: u32) -> Vec<CagrEntry> {
    let mut entries: Vec<CagrEntry> = fund_series(rows)
        .iter()
        .filter_map(|series| {
            let start = series.rows.first()?;
            let end = series.rows.last()?;
            compute_cagr(start.nav, end.nav, years).map(|rate| CagrEntry {
                fund: series.fund.to_string(),
                rate,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.rate
            .partial_cmp(&a.rate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.fund.cmp(&b.fund))
    });
    entries
}
