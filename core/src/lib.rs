//! Field definition model and consistency checks.
//!
//! This crate holds the logic of the field audit, independent of any file
//! system access:
//!
//! - [`FieldDefinition`]: one record of a fields document, possibly a group
//!   with nested sub-fields.
//! - [`flatten`]: expands nested definitions into [`QualifiedField`] leaves
//!   named by their dotted path.
//! - [`Registry`]: keeps the first definition seen for every qualified name
//!   and reports [`Conflict`]s when later definitions disagree.
//!
//! # Example
//!
//! ```
//! use field_audit_core::*;
//!
//! let base = vec![
//!     FieldDefinition::group("dns", vec![FieldDefinition::leaf("id", "keyword")])
//!         .with_source("base.yml"),
//! ];
//! let other = vec![
//!     FieldDefinition::group("dns", vec![FieldDefinition::leaf("id", "long")])
//!         .with_source("other.yml"),
//! ];
//!
//! let mut registry = Registry::with_policy(ConsistencyPolicy { report_external: true });
//! assert!(registry.register_all(flatten(&base, "")).is_empty());
//!
//! let conflicts = registry.register_all(flatten(&other, ""));
//! assert_eq!(conflicts.len(), 1);
//! assert_eq!(conflicts[0].name(), "dns.id");
//! ```

mod flatten;
mod registry;
mod types;

pub use flatten::flatten;
pub use registry::{ConsistencyPolicy, Conflict, FieldOrigin, Registry, Severity};
pub use types::{FieldDefinition, QualifiedField};
