//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - normalized NAV observations (`Observation`)
//! - analysis outputs (`CagrEntry`, `SwingEvent`)
//! - the resolved run configuration (`RunConfig`) and its defaults
//! - the summary export schema (`SummaryFile`)

pub mod types;

pub use types::*;
