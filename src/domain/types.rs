//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - used in-memory during the analysis passes
//! - serialized into the summary export where needed
//! - constructed directly in tests without fixture files

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default trailing-window length, in 365-day years.
pub const DEFAULT_YEARS: u32 = 7;

/// Default single-day swing threshold, in percent.
pub const DEFAULT_SWING_THRESHOLD_PCT: f64 = 5.0;

/// Default number of funds shown on each side of the ranking.
pub const DEFAULT_TOP_N: usize = 2;

/// One cleaned NAV record: fund identifier, valuation date, NAV value.
///
/// Invariants established by the loader:
/// - `fund` is trimmed and non-empty
/// - `nav` is finite
///
/// Duplicate (fund, date) pairs are tolerated; the stable (fund, date) sort
/// keeps them in file-merge order and downstream passes simply see both.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub fund: String,
    pub date: NaiveDate,
    pub nav: f64,
}

/// Annualized growth for one fund over the configured window.
///
/// Funds whose CAGR is undefined (non-positive starting NAV, or a non-finite
/// result) never get an entry; they are omitted from the ranking entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CagrEntry {
    pub fund: String,
    /// Annualized rate as a decimal (`0.1041` means 10.41% per year).
    pub rate: f64,
}

/// One day-over-day NAV jump above the configured threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingEvent {
    pub fund: String,
    /// Date of the jump (the later day of the pair).
    pub date: NaiveDate,
    pub prev_nav: f64,
    pub curr_nav: f64,
    /// Day-over-day change in percent (always `> threshold`, hence positive).
    pub change_pct: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory scanned for `*.csv` files.
    pub data_dir: PathBuf,
    /// Trailing window length in 365-day years.
    pub years: u32,
    /// Swing threshold in percent; a pair qualifies only when strictly above.
    pub swing_threshold_pct: f64,
    /// Number of funds printed per ranking side.
    pub top_n: usize,

    pub export_results: Option<PathBuf>,
    pub export_summary: Option<PathBuf>,
}

/// A saved run summary (JSON).
///
/// The load counters make the otherwise-silent row drops visible after the
/// fact, which is the only place they surface outside of tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryFile {
    pub tool: String,
    pub years: u32,
    pub swing_threshold_pct: f64,
    pub files_read: usize,
    pub rows_read: usize,
    pub rows_dropped: usize,
    /// Ranked descending by rate; omitted funds are absent.
    pub funds: Vec<CagrEntry>,
    /// In fund, then date order.
    pub swings: Vec<SwingEvent>,
}
