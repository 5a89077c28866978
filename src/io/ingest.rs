//! CSV ingest and normalization.
//!
//! This module turns a directory of heterogeneous NAV exports into one clean,
//! (fund, date)-sorted table of `Observation`s.
//!
//! Design goals:
//! - **Explicit schema mapping**: raw headers classify into a closed set of
//!   roles (`ColumnRole`); a file missing a required role fails fast with a
//!   clear error instead of an opaque column lookup failure (exit code 2)
//! - **Row-level tolerance**: a row with an empty fund id or an unparseable
//!   date/NAV is dropped and counted, never fatal
//! - **Deterministic behavior**: file paths are sorted before merging, so the
//!   output does not depend on platform directory iteration order
//! - **Separation of concerns**: no windowing or analysis logic here

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::Observation;
use crate::error::AppError;

/// Accepted date formats, tried in order. Day-first forms take precedence
/// over month-first for the ambiguous slash/dash layouts.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d", "%m/%d/%Y"];

/// Role a raw CSV header plays in the canonical three-column schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Fund,
    Date,
    Nav,
    Unmapped,
}

/// Classify one raw header by normalized substring match.
///
/// Normalization: trim, strip a UTF-8 BOM prefix (Excel exports often carry
/// one on the first header), lowercase. Priority order is fund, then date,
/// then NAV, so a header like `NAV Date` maps to the date role. The phrase
/// `net asset value` is accepted alongside the `nav` substring because many
/// exports spell the column out in full.
pub fn classify_header(raw: &str) -> ColumnRole {
    let name = raw.trim().trim_start_matches('\u{feff}').to_ascii_lowercase();
    if name.contains("fund") {
        ColumnRole::Fund
    } else if name.contains("date") {
        ColumnRole::Date
    } else if name.contains("nav") || name.contains("net asset value") {
        ColumnRole::Nav
    } else {
        ColumnRole::Unmapped
    }
}

/// Resolved column indexes for one file's header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    fund: usize,
    date: usize,
    nav: usize,
}

/// Loader output: the merged, cleaned, (fund, date)-sorted table plus load
/// statistics.
///
/// Row-level drops are silent per the cleaning contract, so only counters are
/// kept; they feed tests and the summary export rather than stdout.
#[derive(Debug, Clone)]
pub struct NavTable {
    pub rows: Vec<Observation>,
    /// Number of CSV files merged.
    pub files_read: usize,
    /// Data rows seen across all files (headers excluded).
    pub rows_read: usize,
    /// Rows discarded: empty fund id, unparseable date or NAV, undecodable record.
    pub rows_dropped: usize,
}

/// Load every `*.csv` file under `data_dir` into one sorted table.
pub fn load_nav_table(data_dir: &Path) -> Result<NavTable, AppError> {
    let files = list_csv_files(data_dir)?;
    if files.is_empty() {
        return Err(AppError::new(
            3,
            format!("No CSV files found in {}", data_dir.display()),
        ));
    }

    let mut rows = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_dropped = 0usize;
    for path in &files {
        let (read, dropped) = read_nav_file(path, &mut rows)?;
        rows_read += read;
        rows_dropped += dropped;
    }

    if rows.is_empty() {
        return Err(AppError::new(
            3,
            format!(
                "No valid NAV rows remain after cleaning {} CSV file(s) in {}",
                files.len(),
                data_dir.display()
            ),
        ));
    }

    // Stable sort: duplicate (fund, date) rows keep their file-merge order.
    rows.sort_by(|a, b| a.fund.cmp(&b.fund).then_with(|| a.date.cmp(&b.date)));

    Ok(NavTable {
        rows,
        files_read: files.len(),
        rows_read,
        rows_dropped,
    })
}

/// Enumerate regular files ending in `.csv` (case-insensitive), sorted by
/// path so the merge order is the same on every platform.
fn list_csv_files(data_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = std::fs::read_dir(data_dir).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to read data directory '{}': {e}", data_dir.display()),
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            AppError::new(
                2,
                format!("Failed to list data directory '{}': {e}", data_dir.display()),
            )
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.to_ascii_lowercase().ends_with(".csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Read one CSV file, appending valid rows. Returns (rows read, rows dropped).
fn read_nav_file(path: &Path, rows: &mut Vec<Observation>) -> Result<(usize, usize), AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| {
            AppError::new(
                2,
                format!("Failed to read CSV header from '{}': {e}", path.display()),
            )
        })?
        .clone();

    let columns = map_columns(&headers, path)?;

    let mut read = 0usize;
    let mut dropped = 0usize;
    for result in reader.records() {
        read += 1;
        let Ok(record) = result else {
            dropped += 1;
            continue;
        };
        match parse_row(&record, columns) {
            Some(obs) => rows.push(obs),
            None => dropped += 1,
        }
    }

    Ok((read, dropped))
}

/// Resolve the three required roles from a header row.
///
/// The leftmost header matching a role claims it; later matches for an
/// already-claimed role are ignored like any other extra column.
fn map_columns(headers: &StringRecord, path: &Path) -> Result<ColumnMap, AppError> {
    let mut fund = None;
    let mut date = None;
    let mut nav = None;

    for (idx, raw) in headers.iter().enumerate() {
        match classify_header(raw) {
            ColumnRole::Fund => {
                fund.get_or_insert(idx);
            }
            ColumnRole::Date => {
                date.get_or_insert(idx);
            }
            ColumnRole::Nav => {
                nav.get_or_insert(idx);
            }
            ColumnRole::Unmapped => {}
        }
    }

    let missing = |role: &str| {
        AppError::new(
            2,
            format!("{}: no column matching `{role}` in header", path.display()),
        )
    };

    Ok(ColumnMap {
        fund: fund.ok_or_else(|| missing("fund"))?,
        date: date.ok_or_else(|| missing("date"))?,
        nav: nav.ok_or_else(|| missing("nav"))?,
    })
}

/// Coerce one record to an `Observation`; `None` means the row is dropped.
fn parse_row(record: &StringRecord, columns: ColumnMap) -> Option<Observation> {
    let fund = record.get(columns.fund)?.trim();
    if fund.is_empty() {
        return None;
    }
    let date = parse_date(record.get(columns.date)?)?;
    let nav = parse_nav(record.get(columns.nav)?)?;

    Some(Observation {
        fund: fund.to_string(),
        date,
        nav,
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_nav(s: &str) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}
