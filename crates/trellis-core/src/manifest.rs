//! Manifest document model
//!
//! The manifest is a JSON document listing the track files of one run:
//! `{ "question": "...", "files": ["a.csv", {"file_name": "b.csv", "title": "B"}] }`.
//! Entries may be bare file names or objects with an optional display title.
//! Only `.csv` entries are accepted; everything else is dropped with a log
//! line. Paths resolve under the data directory plus an optional base path.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LoadError;

/// Parsed manifest document.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Optional prompt/question the tracks were decoded for.
    #[serde(default)]
    pub question: Option<String>,
    /// Track file entries, in display order.
    pub files: Vec<ManifestEntry>,
}

/// One manifest entry: a bare path or an object with a title.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ManifestEntry {
    Path(String),
    Detailed {
        file_name: String,
        #[serde(default)]
        title: Option<String>,
    },
}

impl ManifestEntry {
    fn file_name(&self) -> &str {
        match self {
            ManifestEntry::Path(name) => name,
            ManifestEntry::Detailed { file_name, .. } => file_name,
        }
    }

    fn title(&self) -> Option<&str> {
        match self {
            ManifestEntry::Path(_) => None,
            ManifestEntry::Detailed { title, .. } => title.as_deref(),
        }
    }
}

/// A resolved, accepted track reference ready for loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRef {
    pub path: PathBuf,
    pub title: String,
}

impl Manifest {
    /// Parse manifest JSON. Any shape problem (non-JSON, missing `files`)
    /// reads as a malformed manifest.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text).map_err(|e| LoadError::ManifestMalformed(e.to_string()))
    }

    /// Resolve the accepted track references, in manifest order.
    ///
    /// Non-`.csv` entries are rejected here. The title falls back to the file
    /// stem when the entry carries none.
    pub fn track_refs(&self, data_dir: &Path, base_path: Option<&str>) -> Vec<TrackRef> {
        self.files
            .iter()
            .filter_map(|entry| {
                let file_name = entry.file_name();
                if !file_name.ends_with(".csv") {
                    log::warn!("[MANIFEST] Rejecting non-csv entry '{}'", file_name);
                    return None;
                }

                let mut path = data_dir.to_path_buf();
                if let Some(base) = base_path {
                    path.push(base);
                }
                path.push(file_name);

                let title = entry
                    .title()
                    .map(str::to_string)
                    .unwrap_or_else(|| file_stem(file_name));

                Some(TrackRef { path, title })
            })
            .collect()
    }
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_entries() {
        let m = Manifest::parse(
            r#"{"question": "why?", "files": ["a.csv", {"file_name": "b.csv", "title": "Run B"}]}"#,
        )
        .unwrap();
        assert_eq!(m.question.as_deref(), Some("why?"));
        assert_eq!(m.files.len(), 2);
    }

    #[test]
    fn test_parse_rejects_non_json_and_missing_files() {
        assert!(matches!(
            Manifest::parse("not json"),
            Err(LoadError::ManifestMalformed(_))
        ));
        assert!(matches!(
            Manifest::parse(r#"{"question": "only"}"#),
            Err(LoadError::ManifestMalformed(_))
        ));
    }

    #[test]
    fn test_track_refs_filter_and_titles() {
        let m = Manifest::parse(
            r#"{"files": ["a.csv", "notes.txt", {"file_name": "b.csv", "title": "Run B"}]}"#,
        )
        .unwrap();
        let refs = m.track_refs(Path::new("/data"), None);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].path, PathBuf::from("/data/a.csv"));
        assert_eq!(refs[0].title, "a");
        assert_eq!(refs[1].title, "Run B");
    }

    #[test]
    fn test_track_refs_base_path() {
        let m = Manifest::parse(r#"{"files": ["a.csv"]}"#).unwrap();
        let refs = m.track_refs(Path::new("/data"), Some("run-7"));
        assert_eq!(refs[0].path, PathBuf::from("/data/run-7/a.csv"));
    }

    #[test]
    fn test_all_entries_rejected_yields_empty() {
        let m = Manifest::parse(r#"{"files": ["a.txt", "b.json"]}"#).unwrap();
        assert!(m.track_refs(Path::new("/data"), None).is_empty());
    }
}
