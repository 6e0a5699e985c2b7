use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BatchError;

// ---------------------------------------------------------------------------
// Input discovery
// ---------------------------------------------------------------------------

/// List regular files directly inside `dir` whose extension matches
/// `extension` (case-insensitive, without the dot). Sorted by path.
pub fn list_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BatchError> {
    let list_err = |source| BatchError::ListInput {
        path: dir.to_path_buf(),
        source,
    };

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        if path.is_file() && has_extension(&path, extension) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read a file as text, silently dropping byte sequences that are not valid
/// UTF-8.
pub fn read_text(path: &Path) -> Result<String, BatchError> {
    let bytes = fs::read(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_dropping_invalid(&bytes))
}

/// UTF-8 decode that skips invalid sequences instead of substituting U+FFFD.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
