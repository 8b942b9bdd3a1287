//! # Snapshot Storage
//!
//! CSV load/save for the per-stage snapshot files, plus a JSON export of
//! any snapshot. Each stage owns exactly one output file and reads
//! exactly one input file, so the API is a pair of generic functions.

use crate::error::PipelineError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use csv::{Reader, Writer};
use std::fs::File;
use std::path::Path;

/// Load all records from a CSV snapshot
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PipelineError> {
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(file);
    let mut records = Vec::new();

    for result in reader.deserialize() {
        let record: T = result?;
        records.push(record);
    }

    Ok(records)
}

/// Write all records to a CSV snapshot, creating the parent directory
/// if absent. The file is replaced wholesale; snapshots are immutable
/// once written.
pub fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Export a snapshot as pretty-printed JSON
pub fn export_json<T: Serialize>(path: &Path, records: &[T]) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, records)?;
    Ok(())
}

/// Map an absent input file to a `MissingInput` error naming the
/// upstream stage that should be rerun.
pub fn require_input(path: &Path, upstream: &'static str) -> Result<(), PipelineError> {
    if path.exists() {
        Ok(())
    } else {
        Err(PipelineError::MissingInput {
            path: path.to_path_buf(),
            upstream,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawPost;
    use tempfile::tempdir;

    fn sample_posts() -> Vec<RawPost> {
        vec![
            RawPost {
                id: "a1".to_string(),
                title: "First post".to_string(),
                score: 10,
                num_comments: 2,
                created_utc: 1_700_000_000.0,
                url: "https://example.com/a1".to_string(),
                text: "body, with a comma".to_string(),
                comments: String::new(),
            },
            RawPost {
                id: "b2".to_string(),
                title: String::new(),
                score: -3,
                num_comments: 0,
                created_utc: 1_700_000_100.0,
                url: String::new(),
                text: "line one\nline two".to_string(),
                comments: "a comment".to_string(),
            },
        ]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reddit_data.csv");

        save_records(&path, &sample_posts()).unwrap();
        let loaded: Vec<RawPost> = load_records(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].text, "body, with a comma");
        assert_eq!(loaded[1].text, "line one\nline two");
        assert_eq!(loaded[1].title, "");
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/data/reddit_data.csv");

        save_records(&path, &sample_posts()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_require_input_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        let err = require_input(&path, "collect").unwrap_err();
        match err {
            PipelineError::MissingInput { upstream, .. } => assert_eq!(upstream, "collect"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_export_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");

        export_json(&path, &sample_posts()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"id\": \"a1\""));
    }
}
