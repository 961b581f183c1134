//! Audit run configuration.
//!
//! An integrations repository keeps one directory per package under
//! `packages/`, and each data stream declares its fields in
//! `data_stream/<stream>/fields/*.yml`:
//!
//! ```text
//! <root>/
//!   packages/
//!     nginx/
//!       data_stream/
//!         access/
//!           fields/
//!             base-fields.yml
//!             ecs.yml
//! ```

use std::path::{Path, PathBuf};

use field_audit_core::ConsistencyPolicy;

/// Directory under the repository root that holds all packages.
pub const PACKAGES_DIR: &str = "packages";

/// Directory that groups the data streams of a package.
pub const DATA_STREAM_DIR: &str = "data_stream";

/// Directory inside a data stream that holds field files.
pub const FIELDS_DIR: &str = "fields";

/// Settings for one audit run.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use field_audit_corpus::AuditConfig;
///
/// let config = AuditConfig::new("/src/integrations").with_external_warnings(true);
/// assert_eq!(config.scan_root(), Path::new("/src/integrations/packages"));
/// assert!(config.policy().report_external);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Root of the integrations repository.
    pub root: PathBuf,
    /// Report fields whose `external` value differs between files.
    pub report_external: bool,
}

impl AuditConfig {
    /// Creates a configuration for `root` with external warnings off.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            report_external: false,
        }
    }

    /// Enables or disables external-mismatch warnings.
    pub fn with_external_warnings(mut self, enabled: bool) -> Self {
        self.report_external = enabled;
        self
    }

    /// Directory the locator walks: `<root>/packages`.
    pub fn scan_root(&self) -> PathBuf {
        self.root.join(PACKAGES_DIR)
    }

    /// Root of the integrations repository.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Consistency policy handed to the registry.
    pub fn policy(&self) -> ConsistencyPolicy {
        ConsistencyPolicy {
            report_external: self.report_external,
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::new("./")
    }
}
