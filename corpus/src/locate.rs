//! Field file discovery.
//!
//! A field file is any non-directory entry whose path ends in
//! `data_stream/<stream>/fields/<name>`. The stream name is unconstrained
//! and the file name is not filtered by extension.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::{DATA_STREAM_DIR, FIELDS_DIR};
use crate::error::Result;

/// Recursively collects every field file under `root`.
///
/// Entries are visited in lexical order at every directory level, so the
/// returned list is deterministic. Any traversal error, including a missing
/// `root`, aborts the walk.
///
/// # Errors
///
/// Returns [`CorpusError::Walk`](crate::CorpusError::Walk) if `root` or any
/// directory below it cannot be read.
pub fn find_field_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if is_field_file(entry.path()) {
            debug!(path = %entry.path().display(), "Located field file");
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

/// Returns `true` if `path` matches `.../data_stream/*/fields/*`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use field_audit_corpus::is_field_file;
///
/// assert!(is_field_file(Path::new("packages/foo/data_stream/bar/fields/baz.yml")));
/// assert!(!is_field_file(Path::new("packages/foo/fields/baz.yml")));
/// ```
pub fn is_field_file(path: &Path) -> bool {
    let components: Vec<&OsStr> = path.components().map(|c| c.as_os_str()).collect();
    let len = components.len();
    len >= 4 && components[len - 2] == FIELDS_DIR && components[len - 4] == DATA_STREAM_DIR
}
