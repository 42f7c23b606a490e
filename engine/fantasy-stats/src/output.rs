//! JSON persistence
//!
//! The document is written to a sibling temporary file and renamed into place,
//! so readers see either the previous document or the complete new one.

use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{PipelineError, Result};
use crate::types::StatsDocument;

/// Write the statistics document as pretty-printed UTF-8 JSON
pub fn write_document(path: &Path, document: &StatsDocument) -> Result<()> {
    write_json_atomic(path, document)?;
    info!("Saved {} players to {}", document.players.len(), path.display());
    Ok(())
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;
    }

    let tmp_path = temporary_path(path);

    let written = write_to(&tmp_path, value)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(|e| PipelineError::io(path, e)));

    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    written
}

fn write_to<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n").map_err(|e| PipelineError::io(path, e))?;

    let file = writer.into_inner().map_err(|e| PipelineError::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| PipelineError::io(path, e))
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{PlayerStats, ScoredPlayer};

    fn document() -> StatsDocument {
        let stats = PlayerStats::new(
            7,
            "Vinícius Júnior".to_string(),
            "Real Madrid".to_string(),
            Position::Forward,
        );

        StatsDocument {
            updated_at: "2025-05-25T03:00:00.000000Z".to_string(),
            season: "2024-25".to_string(),
            league: "La Liga".to_string(),
            source: "FBref.com".to_string(),
            players: vec![ScoredPlayer { stats, points: 61 }],
        }
    }

    #[test]
    fn test_write_document_creates_parent_and_keeps_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("laliga-stats.json");

        write_document(&path, &document()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"name\": \"Vinícius Júnior\""));
        assert!(text.contains("\"updatedAt\": \"2025-05-25T03:00:00.000000Z\""));
        assert!(!dir.path().join("data").join("laliga-stats.json.tmp").exists());

        let parsed: StatsDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.players, document().players);
        assert_eq!(parsed.league, "La Liga");
    }

    #[test]
    fn test_write_document_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        fs::write(&path, "old").unwrap();

        write_document(&path, &document()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with('{'));
    }

    #[test]
    fn test_write_failure_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        // Target is an existing directory, so the final rename fails
        let path = dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let result = write_document(&path, &document());

        assert!(matches!(result, Err(PipelineError::Io { .. })));
        assert!(!dir.path().join("occupied.tmp").exists());
    }
}
