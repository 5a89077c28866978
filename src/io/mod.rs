//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - per-fund results export (CSV) (`export`)
//! - run summary export (JSON) (`summary`)

pub mod export;
pub mod ingest;
pub mod summary;

pub use export::*;
pub use ingest::*;
pub use summary::*;
