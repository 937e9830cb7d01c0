//! Append-only weight history.
//!
//! Each saved weight becomes one JSON line in `weight_history.jsonl` under
//! the data directory. Appends take an exclusive file lock, reads a shared one.

use crate::Result;
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const WEIGHT_LOG_FILE: &str = "weight_history.jsonl";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub weight_kg: f64,
}

impl WeightEntry {
    pub fn new(weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            weight_kg,
        }
    }
}

/// Destination for weight readings
pub trait WeightSink {
    fn append(&mut self, entry: &WeightEntry) -> Result<()>;
}

/// JSONL weight log with file locking
pub struct JsonlWeightLog {
    path: PathBuf,
}

impl JsonlWeightLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log stored in the standard file under `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(WEIGHT_LOG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl WeightSink for JsonlWeightLog {
    fn append(&mut self, entry: &WeightEntry) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(entry)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        file.unlock()?;

        tracing::debug!("Recorded weight {} kg ({})", entry.weight_kg, entry.id);
        Ok(())
    }
}

/// Read every weight entry, oldest first
///
/// Malformed lines are skipped with a warning.
pub fn read_weight_history(path: &Path) -> Result<Vec<WeightEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut entries = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<WeightEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Skipping weight entry at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;

    // Appends are chronological, but a clock change can reorder them
    entries.sort_by_key(|e| e.recorded_at);
    tracing::debug!("Read {} weight entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_append_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut log = JsonlWeightLog::in_dir(temp_dir.path());

        let entry = WeightEntry::new(72.5);
        log.append(&entry).unwrap();
        log.append(&WeightEntry::new(71.8)).unwrap();

        let entries = read_weight_history(log.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, entry.id);
        assert_eq!(entries[1].weight_kg, 71.8);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entries = read_weight_history(&temp_dir.path().join("none.jsonl")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_skips_malformed_lines_and_sorts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(WEIGHT_LOG_FILE);

        let later = WeightEntry::new(80.0);
        let earlier = WeightEntry {
            recorded_at: later.recorded_at - Duration::days(3),
            ..WeightEntry::new(82.0)
        };
        let contents = format!(
            "{}\nnot json\n\n{}\n",
            serde_json::to_string(&later).unwrap(),
            serde_json::to_string(&earlier).unwrap()
        );
        std::fs::write(&path, contents).unwrap();

        let entries = read_weight_history(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].weight_kg, 82.0);
        assert_eq!(entries[1].weight_kg, 80.0);
    }
}
