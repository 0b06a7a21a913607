// File: src/persistence.rs
use crate::core::index::CompletionStats;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Exported index and statistics. Feeding it back into
/// [`Dictionary::build`](crate::Dictionary::build) together with the same word
/// list skips tokenization entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub index: Vec<(String, Vec<String>)>,
    pub completion: CompletionStats,
}

impl IndexSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Writes the snapshot atomically: a temp file in the target directory is
/// persisted over `path` only once fully written.
pub fn save_snapshot(snapshot: &IndexSnapshot, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), token_lists = snapshot.index.len(), "snapshot saved");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<IndexSnapshot> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: IndexSnapshot = bincode::deserialize_from(reader)?;
    info!(path = %path.display(), token_lists = snapshot.index.len(), "snapshot loaded");
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Lang;

    fn sample() -> IndexSnapshot {
        let mut completion = CompletionStats::new();
        completion.insert(Lang::En, "66.7".to_string());
        IndexSnapshot {
            index: vec![("1-isv".to_string(), vec!["voda".to_string()])],
            completion,
        }
    }

    #[test]
    fn test_bytes_and_json() {
        let snapshot = sample();
        assert_eq!(IndexSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap(), snapshot);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"en\":\"66.7\""));
        assert_eq!(IndexSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("index.bin");
        save_snapshot(&sample(), &path).unwrap();
        assert_eq!(load_snapshot(&path).unwrap(), sample());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_snapshot(&dir.path().join("missing.bin")).is_err());
    }
}
