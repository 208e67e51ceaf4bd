//! Append-only JSON-lines log of enriched events.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::state::HistoryRecord;

/// Line-oriented event log: one JSON object per event.
#[derive(Debug)]
pub struct EventLog {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl EventLog {
    /// Opens the log for appending, creating parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| AppError::io(path, e))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Appends one record and flushes it to disk.
    pub fn append(&mut self, record: &HistoryRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;
        writeln!(self.writer, "{line}").map_err(|e| AppError::io(&self.path, e))?;
        self.writer.flush().map_err(|e| AppError::io(&self.path, e))?;
        Ok(())
    }

    /// The log file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn record(prediction: f64) -> HistoryRecord {
        HistoryRecord {
            timestamp: Utc::now(),
            payload: BTreeMap::from([("area".to_string(), 1500.0)]),
            prediction,
        }
    }

    #[test]
    fn test_append_writes_one_json_line_per_event() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("events.jsonl");

        let mut log = EventLog::open(&path).unwrap();
        log.append(&record(100.0)).unwrap();
        log.append(&record(200.0)).unwrap();
        drop(log);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: HistoryRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.prediction, 200.0);
    }

    #[test]
    fn test_reopen_appends_instead_of_truncating() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.jsonl");

        EventLog::open(&path).unwrap().append(&record(1.0)).unwrap();
        EventLog::open(&path).unwrap().append(&record(2.0)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
