//! CSV export of the weight history.

use crate::weight_log::{read_weight_history, WeightEntry};
use crate::{Error, Result};
use std::fs::File;
use std::path::Path;

#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    recorded_at: String,
    weight_kg: f64,
}

impl From<&WeightEntry> for CsvRow {
    fn from(entry: &WeightEntry) -> Self {
        CsvRow {
            id: entry.id.to_string(),
            recorded_at: entry.recorded_at.to_rfc3339(),
            weight_kg: entry.weight_kg,
        }
    }
}

/// Write the whole weight log to `csv_path`, replacing any existing file
///
/// Returns the number of rows written. The header is written even when the
/// log is empty.
pub fn export_weight_csv(log_path: &Path, csv_path: &Path) -> Result<usize> {
    let entries = read_weight_history(log_path)?;

    if let Some(parent) = csv_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(csv_path)?;
    let mut writer = csv::Writer::from_writer(file);

    if entries.is_empty() {
        writer.write_record(["id", "recorded_at", "weight_kg"])?;
    }
    for entry in &entries {
        writer.serialize(CsvRow::from(entry))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?;
    file.sync_all()?;

    tracing::info!("Exported {} weight entries to {:?}", entries.len(), csv_path);
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight_log::{JsonlWeightLog, WeightSink};

    #[test]
    fn test_export_writes_header_and_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut log = JsonlWeightLog::in_dir(temp_dir.path());
        let first = WeightEntry::new(68.0);
        log.append(&first).unwrap();
        log.append(&WeightEntry::new(67.4)).unwrap();

        let csv_path = temp_dir.path().join("export").join("weights.csv");
        let count = export_weight_csv(log.path(), &csv_path).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,recorded_at,weight_kg");
        assert!(lines[1].starts_with(&first.id.to_string()));
        assert!(lines[2].ends_with(",67.4"));
    }

    #[test]
    fn test_export_empty_log() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("weights.csv");

        let count = export_weight_csv(&temp_dir.path().join("missing.jsonl"), &csv_path).unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            std::fs::read_to_string(&csv_path).unwrap().trim(),
            "id,recorded_at,weight_kg"
        );
    }
}
