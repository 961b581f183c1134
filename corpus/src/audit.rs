//! End-to-end audit of a field corpus.
//!
//! Files are processed in the order the locator returns them. Each file is
//! decoded, flattened, and registered before the next one is opened. A file
//! that fails to decode is recorded and skipped; only a locator failure
//! aborts the run.
//!
//! Decode failures and conflicts are collected into separate lists rather
//! than emitted as they occur. A caller that prints one list after the other
//! keeps the order within each stream, but when stdout and stderr share a
//! terminal the two streams are no longer interleaved by file.

use std::fmt;
use std::path::{Path, PathBuf};

use field_audit_core::{Conflict, ConsistencyPolicy, Registry, Severity, flatten};
use tracing::{debug, info};

use crate::config::AuditConfig;
use crate::decode::decode_file;
use crate::error::{CorpusError, Result};
use crate::locate::find_field_files;

/// A field file that could not be decoded.
#[derive(Debug)]
pub struct DecodeFailure {
    /// File that failed.
    pub path: PathBuf,
    /// Why it failed.
    pub error: CorpusError,
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file: {}, error: {}", self.path.display(), self.error)
    }
}

/// Result of one audit run.
#[derive(Debug)]
pub struct AuditOutcome {
    /// Number of field files located.
    pub files_scanned: usize,
    /// Files skipped because they could not be decoded, in processing order.
    pub failures: Vec<DecodeFailure>,
    /// Conflicts found, in processing order.
    pub conflicts: Vec<Conflict>,
    /// Registry of first-seen definitions.
    pub registry: Registry,
}

impl AuditOutcome {
    /// Number of external-mismatch warnings reported.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of type-mismatch errors reported.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    fn count(&self, severity: Severity) -> usize {
        self.conflicts
            .iter()
            .filter(|c| c.severity() == severity)
            .count()
    }
}

/// Locates every field file under the configured scan root and audits them.
///
/// # Errors
///
/// Returns [`CorpusError::Walk`] if the scan root cannot be traversed.
/// Decode errors are not returned; they are collected in
/// [`AuditOutcome::failures`].
pub fn run_audit(config: &AuditConfig) -> Result<AuditOutcome> {
    let scan_root = config.scan_root();
    let files = find_field_files(&scan_root)?;
    debug!(root = %scan_root.display(), files = files.len(), "Scanning field files");
    Ok(audit_files(&files, config.policy()))
}

/// Audits an explicit, already ordered list of field files.
pub fn audit_files<P: AsRef<Path>>(files: &[P], policy: ConsistencyPolicy) -> AuditOutcome {
    let mut registry = Registry::with_policy(policy);
    let mut failures = Vec::new();
    let mut conflicts = Vec::new();

    for path in files {
        let path = path.as_ref();
        let defs = match decode_file(path) {
            Ok(defs) => defs,
            Err(error) => {
                debug!(path = %path.display(), error = %error, "Skipping undecodable field file");
                failures.push(DecodeFailure {
                    path: path.to_path_buf(),
                    error,
                });
                continue;
            }
        };

        conflicts.extend(registry.register_all(flatten(&defs, "")));
    }

    let outcome = AuditOutcome {
        files_scanned: files.len(),
        failures,
        conflicts,
        registry,
    };

    info!(
        files = outcome.files_scanned,
        fields = outcome.registry.len(),
        failures = outcome.failures.len(),
        warnings = outcome.warning_count(),
        errors = outcome.error_count(),
        "Field audit complete"
    );

    outcome
}
