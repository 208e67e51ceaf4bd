//! One-shot download of the Ames housing dataset subset.

use std::path::Path;

use tracing::info;

use crate::error::{DataError, Result};

/// Source of the Ames housing dataset (tab-separated).
pub const AMES_URL: &str = "http://jse.amstat.org/v19n3/decock/AmesHousing.txt";

/// Columns retained from the full dataset.
pub const SELECTED_COLUMNS: [&str; 6] = [
    "Overall Qual",
    "Overall Cond",
    "Gr Liv Area",
    "Central Air",
    "Total Bsmt SF",
    "SalePrice",
];

/// Fetches the tab-separated dataset at `url`, keeps only `columns`, and
/// writes a comma-delimited file to `output_path`.
///
/// Creates parent directories as needed. Fails on any network, HTTP, or
/// parse error; there is no retry.
pub fn download(url: &str, output_path: &Path, columns: &[&str]) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DataError::io(parent, e))?;
    }

    info!(url, path = %output_path.display(), "downloading dataset");
    let response = reqwest::blocking::get(url).map_err(|e| DataError::Download {
        url: url.to_string(),
        source: e,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().map_err(|e| DataError::Download {
        url: url.to_string(),
        source: e,
    })?;

    write_column_subset(body.as_bytes(), b'\t', output_path, columns)
}

/// Parses delimited `input`, keeps `columns` in the requested order, and
/// writes them as comma-delimited CSV to `output_path`.
pub(crate) fn write_column_subset(
    input: &[u8],
    delimiter: u8,
    output_path: &Path,
    columns: &[&str],
) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let indices: Vec<usize> = columns
        .iter()
        .map(|col| {
            headers
                .iter()
                .position(|h| h == *col)
                .ok_or_else(|| DataError::MissingColumn {
                    column: col.to_string(),
                    path: output_path.to_path_buf(),
                })
        })
        .collect::<Result<_>>()?;

    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(columns)?;
    for record in reader.records() {
        let record = record?;
        let row: Vec<&str> = indices
            .iter()
            .map(|&i| record.get(i).unwrap_or(""))
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush().map_err(|e| DataError::io(output_path, e))?;
    Ok(())
}
