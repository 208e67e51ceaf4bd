//! Column-major numeric table loaded from a processed CSV file.

use std::path::Path;

use crate::error::{DataError, Result};

/// A fully numeric table with named columns.
///
/// Columns are stored column-major; all columns have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    /// Builds a table from headers and column vectors.
    ///
    /// All columns must have the same length as the first.
    pub fn new(headers: Vec<String>, columns: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(headers.len(), columns.len());
        if let Some(first) = columns.first() {
            debug_assert!(columns.iter().all(|c| c.len() == first.len()));
        }
        Self { headers, columns }
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(&self.columns[idx])
    }

    /// Returns the named columns in the requested order.
    ///
    /// Fails on the first name with no matching column.
    pub fn select(&self, names: &[String], path_hint: &Path) -> Result<Vec<&[f64]>> {
        names
            .iter()
            .map(|name| {
                self.column(name).ok_or_else(|| DataError::MissingColumn {
                    column: name.clone(),
                    path: path_hint.to_path_buf(),
                })
            })
            .collect()
    }

    /// Collects one row as a vector of values in header order.
    pub fn row(&self, index: usize) -> Vec<f64> {
        self.columns.iter().map(|c| c[index]).collect()
    }
}

/// Reads a cleaned numeric CSV file into a [`Table`].
///
/// Fails if the file is absent or any value does not parse as a number.
pub fn load_processed(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        if e.is_io_error() {
            DataError::io(path, std::io::Error::new(std::io::ErrorKind::NotFound, e))
        } else {
            DataError::Csv(e)
        }
    })?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record?;
        for (idx, value) in record.iter().enumerate() {
            let parsed: f64 = value.trim().parse().map_err(|_| DataError::BadValue {
                value: value.to_string(),
                column: headers[idx].clone(),
                path: path.to_path_buf(),
            })?;
            columns[idx].push(parsed);
        }
    }

    Ok(Table::new(headers, columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_processed_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clean.csv");
        fs::write(&path, "a,b\n1,2.5\n3,4.5\n").unwrap();

        let table = load_processed(&path).unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_cols(), 2);
        assert_eq!(table.column("a").unwrap(), &[1.0, 3.0]);
        assert_eq!(table.column("b").unwrap(), &[2.5, 4.5]);
        assert_eq!(table.row(1), vec![3.0, 4.5]);
    }

    #[test]
    fn test_load_processed_rejects_non_numeric() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clean.csv");
        fs::write(&path, "a,b\n1,oops\n").unwrap();

        let err = load_processed(&path).unwrap_err();
        assert!(matches!(err, DataError::BadValue { .. }));
    }

    #[test]
    fn test_load_processed_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_processed(&dir.path().join("absent.csv")).is_err());
    }

    #[test]
    fn test_select_reports_missing_column() {
        let table = Table::new(vec!["a".into()], vec![vec![1.0]]);
        let err = table
            .select(&["b".to_string()], Path::new("clean.csv"))
            .unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { .. }));
    }
}
