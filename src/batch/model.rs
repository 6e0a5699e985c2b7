use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::clean::CleanStats;

// ---------------------------------------------------------------------------
// BatchOptions – what to clean and where to put it
// ---------------------------------------------------------------------------

/// Inputs to [`super::run`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory scanned (non-recursively) for input files.
    pub input_dir: PathBuf,
    /// Directory receiving cleaned files under their original names.
    /// Created if missing.
    pub output_dir: PathBuf,
    /// File extension to pick up, compared case-insensitively.
    pub extension: String,
    /// Worker threads; `None` uses rayon's global pool.
    pub jobs: Option<usize>,
    /// Optional CSV manifest with one row per processed file.
    pub manifest: Option<PathBuf>,
}

impl BatchOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            extension: "txt".to_string(),
            jobs: None,
            manifest: None,
        }
    }
}

// ---------------------------------------------------------------------------
// FileReport – one cleaned file
// ---------------------------------------------------------------------------

/// Outcome for a single cleaned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file_name: String,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub stats: CleanStats,
}

// ---------------------------------------------------------------------------
// BatchSummary – the whole run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Reports sorted by file name.
    pub files: Vec<FileReport>,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Number of files cleaned.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total lines removed across all files and stages.
    pub fn lines_removed(&self) -> usize {
        self.files
            .iter()
            .map(|f| f.stats.lines_removed())
            .sum()
    }
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
