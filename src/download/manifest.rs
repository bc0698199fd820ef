//! Run manifest: the JSON log of everything queued for download.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::Result;
use crate::fs::ensure_dir;
use crate::media::ImageRecord;

/// Manifest file name for a run started at `now`.
pub fn manifest_filename(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%d_%H-%M-%S.json").to_string()
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    #[serde(flatten)]
    record: &'a ImageRecord,
    filename: String,
}

/// Write `records` as a JSON array into `log_directory`.
///
/// Records are written as queued, before any download is attempted.
/// Returns the path of the manifest.
pub async fn write_manifest(
    log_directory: &Path,
    records: &[ImageRecord],
    now: &DateTime<Local>,
) -> Result<PathBuf> {
    ensure_dir(log_directory).await?;

    let entries: Vec<ManifestEntry<'_>> = records
        .iter()
        .map(|record| ManifestEntry {
            record,
            filename: record.filename(),
        })
        .collect();

    let path = log_directory.join(manifest_filename(now));
    let json = serde_json::to_vec_pretty(&entries)?;
    tokio::fs::write(&path, json).await?;

    tracing::debug!("Wrote manifest with {} records to {}", records.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::record::tests::sample_record;
    use chrono::TimeZone;

    #[test]
    fn test_manifest_filename() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(manifest_filename(&now), "2024-03-09_07-05-01.json");
    }

    #[tokio::test]
    async fn test_write_manifest_contents() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        let now = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let records = vec![sample_record("one", 10, 20), sample_record("two", 0, 20)];

        let path = write_manifest(&logs, &records, &now).await.unwrap();

        assert_eq!(path, logs.join("2024-01-02_03-04-05.json"));
        let value: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "one");
        assert_eq!(entries[0]["filename"], "one_jdoe_10x20.jpg");
        assert_eq!(entries[0]["website"], "https://unsplash.com/photos/one");
        // Invalid records are still listed
        assert_eq!(entries[1]["width"], 0);
    }

    #[tokio::test]
    async fn test_empty_queue_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let now = Local::now();

        let path = write_manifest(dir.path(), &[], &now).await.unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }
}
