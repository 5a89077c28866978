//! NAV analysis passes.
//!
//! Responsibilities:
//!
//! - group the sorted table into per-fund series (`fund_series`)
//! - restrict each fund to its trailing window (`window`)
//! - compute and rank CAGR (`cagr`)
//! - detect day-over-day swings (`swing`)
//!
//! Every pass consumes the (fund, date)-sorted table produced by the loader;
//! funds are independent of each other throughout, which is what makes the
//! per-fund parallelism in `window` and `swing` safe.

pub mod cagr;
pub mod swing;
pub mod window;

pub use cagr::*;
pub use swing::*;
pub use window::*;

use crate::domain::Observation;

/// One fund's contiguous run of rows inside a (fund, date)-sorted table.
#[derive(Debug, Clone, Copy)]
pub struct FundSeries<'a> {
    pub fund: &'a str,
    /// Date-ascending, never empty.
    pub rows: &'a [Observation],
}

/// Split a (fund, date)-sorted table into per-fund series, in table order.
///
/// Sorting already made each fund's rows contiguous, so grouping is a single
/// linear scan with no hashing and no allocation per row.
pub fn fund_series(rows: &[Observation]) -> Vec<FundSeries<'_>> {
    rows.chunk_by(|a, b| a.fund == b.fund)
        .map(|rows| FundSeries {
            fund: rows[0].fund.as_str(),
            rows,
        })
        .collect()
}
