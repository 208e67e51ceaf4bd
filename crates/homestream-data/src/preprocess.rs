//! Raw dataset cleaning.
//!
//! Cleaning is deliberately coarse, matching the training pipeline's needs:
//! map the two-valued "Central Air" column to a 0/1 indicator, then drop any
//! row with a missing or unparsable value in any column.

use std::path::Path;

use tracing::info;

use crate::error::{DataError, Result};

/// The categorical column mapped to an indicator during cleaning.
pub const CENTRAL_AIR: &str = "Central Air";

/// Cleans `raw_path` and writes a fully numeric CSV to `processed_path`.
///
/// Fails if the raw file is absent or lacks the [`CENTRAL_AIR`] column.
/// Returns the number of rows written.
pub fn preprocess(raw_path: &Path, processed_path: &Path) -> Result<usize> {
    if let Some(parent) = processed_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DataError::io(parent, e))?;
    }

    let mut reader = csv::Reader::from_path(raw_path).map_err(|e| {
        if e.is_io_error() {
            DataError::io(raw_path, std::io::Error::new(std::io::ErrorKind::NotFound, e))
        } else {
            DataError::Csv(e)
        }
    })?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let air_idx = headers
        .iter()
        .position(|h| h == CENTRAL_AIR)
        .ok_or_else(|| DataError::MissingColumn {
            column: CENTRAL_AIR.to_string(),
            path: raw_path.to_path_buf(),
        })?;

    let mut writer = csv::Writer::from_path(processed_path)?;
    writer.write_record(&headers)?;

    let mut kept = 0usize;
    let mut dropped = 0usize;
    'rows: for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = Vec::with_capacity(headers.len());
        for (idx, value) in record.iter().enumerate() {
            let value = value.trim();
            let mapped = if idx == air_idx {
                match value {
                    "N" => Some(0.0),
                    "Y" => Some(1.0),
                    _ => None,
                }
            } else {
                value.parse::<f64>().ok()
            };
            match mapped {
                Some(v) => row.push(format_value(v)),
                None => {
                    dropped += 1;
                    continue 'rows;
                }
            }
        }
        writer.write_record(&row)?;
        kept += 1;
    }
    writer.flush().map_err(|e| DataError::io(processed_path, e))?;

    info!(
        path = %processed_path.display(),
        kept,
        dropped,
        "preprocessed dataset"
    );
    Ok(kept)
}

/// Formats a cleaned value without a trailing `.0` for integral numbers.
fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
