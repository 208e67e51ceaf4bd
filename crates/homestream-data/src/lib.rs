//! Dataset ingestion and preprocessing for homestream.
//!
//! The data path is a short, linear pipeline:
//!
//! 1. [`download`] fetches the Ames housing TSV and writes a column subset
//!    as CSV (skipped when the raw file already exists — the trainer
//!    orchestrates that check).
//! 2. [`preprocess`] maps the "Central Air" column to a 0/1 indicator and
//!    drops every row with a missing value in any column.
//! 3. [`load_processed`] reads the cleaned file into a numeric [`Table`].

pub mod download;
pub mod error;
pub mod preprocess;
pub mod table;

pub use download::{download, AMES_URL, SELECTED_COLUMNS};
pub use error::{DataError, Result};
pub use preprocess::{preprocess, CENTRAL_AIR};
pub use table::{load_processed, Table};
