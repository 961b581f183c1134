//! Field corpus scanning for integration packages.
//!
//! This crate connects the [`field_audit_core`] logic to the file system:
//!
//! - [`find_field_files`] walks a directory tree and returns every file at
//!   `.../data_stream/<stream>/fields/<name>`.
//! - [`decode_file`] parses one YAML field document.
//! - [`run_audit`] locates, decodes, flattens, and registers every field
//!   file under `<root>/packages`, collecting conflicts and decode failures.
//!
//! # Quick start
//!
//! ```no_run
//! use field_audit_corpus::{AuditConfig, run_audit};
//!
//! let config = AuditConfig::new("../integrations").with_external_warnings(true);
//! let outcome = run_audit(&config).unwrap();
//! for failure in &outcome.failures {
//!     eprintln!("{failure}");
//! }
//! for conflict in &outcome.conflicts {
//!     println!("{conflict}");
//! }
//! ```

mod audit;
mod config;
mod decode;
mod error;
mod locate;

pub use audit::{AuditOutcome, DecodeFailure, audit_files, run_audit};
pub use config::{AuditConfig, DATA_STREAM_DIR, FIELDS_DIR, PACKAGES_DIR};
pub use decode::decode_file;
pub use error::{CorpusError, Result};
pub use locate::{find_field_files, is_field_file};
