//! Cross-file consistency registry.
//!
//! The [`Registry`] keeps the first definition seen for every qualified
//! field name. Later definitions of the same name are compared against it
//! and produce a [`Conflict`] when they disagree; they never replace the
//! stored entry.
//!
//! The `external` classification is compared before `type`. An external
//! mismatch is a warning and is only reported when
//! [`ConsistencyPolicy::report_external`] is set. A type mismatch is an
//! error and is always reported.
//!
//! # Example
//!
//! ```
//! use field_audit_core::*;
//!
//! let mut registry = Registry::new();
//!
//! let first = flatten(&[FieldDefinition::leaf("host.ip", "ip").with_source("a.yml")], "");
//! let second = flatten(&[FieldDefinition::leaf("host.ip", "keyword").with_source("b.yml")], "");
//!
//! assert!(registry.register_all(first).is_empty());
//! let conflicts = registry.register_all(second);
//! assert_eq!(conflicts.len(), 1);
//! assert_eq!(conflicts[0].severity(), Severity::Error);
//! assert_eq!(registry.get("host.ip").unwrap().field_type, "ip");
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::QualifiedField;

/// Controls which conflict kinds the registry reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsistencyPolicy {
    /// Report fields whose `external` value differs between files.
    pub report_external: bool,
}

/// How serious a [`Conflict`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Data-quality warning (external mismatch).
    Warning,
    /// Data-quality error (type mismatch).
    Error,
}

/// One side of a conflict: where a value came from and what it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOrigin {
    /// File that declared the value.
    pub source_file: PathBuf,
    /// The compared value (`external` or `type`).
    pub value: String,
}

/// A disagreement between the registered definition and a later one.
///
/// `first` always describes the registered (first-seen) definition and
/// `second` the incoming one. The `Display` text is the diagnostic block
/// printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Conflict {
    /// The two definitions defer to different external schemas.
    #[error(
        "{name}: mismatch in definitions\n\t{} external is {}\n\t{} external is {}",
        .first.source_file.display(),
        .first.value,
        .second.source_file.display(),
        .second.value
    )]
    ExternalMismatch {
        name: String,
        first: FieldOrigin,
        second: FieldOrigin,
    },
    /// The two definitions declare different data types.
    #[error(
        "{name}: error in types\n\t{} type is {}\n\t{} type is {}",
        .first.source_file.display(),
        .first.value,
        .second.source_file.display(),
        .second.value
    )]
    TypeMismatch {
        name: String,
        first: FieldOrigin,
        second: FieldOrigin,
    },
}

impl Conflict {
    /// Qualified name of the conflicting field.
    pub fn name(&self) -> &str {
        match self {
            Self::ExternalMismatch { name, .. } | Self::TypeMismatch { name, .. } => name,
        }
    }

    /// Warning for external mismatches, error for type mismatches.
    pub fn severity(&self) -> Severity {
        match self {
            Self::ExternalMismatch { .. } => Severity::Warning,
            Self::TypeMismatch { .. } => Severity::Error,
        }
    }

    fn external(existing: &QualifiedField, incoming: &QualifiedField) -> Self {
        Self::ExternalMismatch {
            name: incoming.name.clone(),
            first: FieldOrigin {
                source_file: existing.source_file.clone(),
                value: existing.external.clone(),
            },
            second: FieldOrigin {
                source_file: incoming.source_file.clone(),
                value: incoming.external.clone(),
            },
        }
    }

    fn field_type(existing: &QualifiedField, incoming: &QualifiedField) -> Self {
        Self::TypeMismatch {
            name: incoming.name.clone(),
            first: FieldOrigin {
                source_file: existing.source_file.clone(),
                value: existing.field_type.clone(),
            },
            second: FieldOrigin {
                source_file: incoming.source_file.clone(),
                value: incoming.field_type.clone(),
            },
        }
    }
}

/// Run-scoped map from qualified name to its first-seen definition.
#[derive(Debug, Default)]
pub struct Registry {
    fields: HashMap<String, QualifiedField>,
    policy: ConsistencyPolicy,
}

impl Registry {
    /// Creates an empty registry that suppresses external mismatches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with an explicit policy.
    pub fn with_policy(policy: ConsistencyPolicy) -> Self {
        Self {
            fields: HashMap::new(),
            policy,
        }
    }

    /// Registers one definition, returning the conflict it raises, if any.
    ///
    /// An unseen name is stored as-is. A known name is checked against the
    /// stored entry; the stored entry is never modified.
    pub fn register(&mut self, field: QualifiedField) -> Option<Conflict> {
        let Some(existing) = self.fields.get(&field.name) else {
            self.fields.insert(field.name.clone(), field);
            return None;
        };

        if existing.external != field.external {
            if !self.policy.report_external {
                debug!(field = %field.name, file = %field.source_file.display(), "Suppressed external mismatch");
                return None;
            }
            return Some(Conflict::external(existing, &field));
        }

        if existing.field_type != field.field_type {
            return Some(Conflict::field_type(existing, &field));
        }

        None
    }

    /// Registers every definition in order and collects the conflicts.
    pub fn register_all<I>(&mut self, fields: I) -> Vec<Conflict>
    where
        I: IntoIterator<Item = QualifiedField>,
    {
        fields
            .into_iter()
            .filter_map(|field| self.register(field))
            .collect()
    }

    /// Looks up the registered definition for a qualified name.
    pub fn get(&self, name: &str) -> Option<&QualifiedField> {
        self.fields.get(name)
    }

    /// Returns `true` if `name` has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of distinct qualified names.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, field_type: &str, external: &str, file: &str) -> QualifiedField {
        QualifiedField {
            name: name.to_string(),
            field_type: field_type.to_string(),
            external: external.to_string(),
            source_file: PathBuf::from(file),
        }
    }

    fn reporting_external() -> Registry {
        Registry::with_policy(ConsistencyPolicy {
            report_external: true,
        })
    }

    #[test]
    fn test_register_new_name_inserts() {
        let mut registry = Registry::new();
        assert!(registry.register(field("a.b", "long", "", "x.yml")).is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("a.b"));
    }

    #[test]
    fn test_register_identical_definition_is_silent() {
        let mut registry = reporting_external();
        registry.register(field("a.b", "long", "", "x.yml"));
        assert!(registry.register(field("a.b", "long", "", "y.yml")).is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("a.b").unwrap().source_file,
            PathBuf::from("x.yml")
        );
    }

    #[test]
    fn test_register_type_mismatch_reports_both_files() {
        let mut registry = Registry::new();
        registry.register(field("a.b", "long", "", "x.yml"));
        let conflict = registry
            .register(field("a.b", "keyword", "", "y.yml"))
            .unwrap();

        assert_eq!(
            conflict,
            Conflict::TypeMismatch {
                name: "a.b".to_string(),
                first: FieldOrigin {
                    source_file: PathBuf::from("x.yml"),
                    value: "long".to_string(),
                },
                second: FieldOrigin {
                    source_file: PathBuf::from("y.yml"),
                    value: "keyword".to_string(),
                },
            }
        );
        assert_eq!(conflict.severity(), Severity::Error);
        assert_eq!(registry.get("a.b").unwrap().field_type, "long");
    }

    #[test]
    fn test_type_mismatch_reported_without_external_policy() {
        let mut registry = Registry::new();
        registry.register(field("a.b", "long", "ecs", "x.yml"));
        let conflict = registry.register(field("a.b", "keyword", "ecs", "y.yml"));
        assert!(matches!(conflict, Some(Conflict::TypeMismatch { .. })));
    }

    #[test]
    fn test_external_mismatch_suppressed_by_default() {
        let mut registry = Registry::new();
        registry.register(field("ecs.version", "keyword", "ecs", "x.yml"));
        assert!(
            registry
                .register(field("ecs.version", "keyword", "", "y.yml"))
                .is_none()
        );
        assert_eq!(registry.get("ecs.version").unwrap().external, "ecs");
    }

    #[test]
    fn test_external_mismatch_reported_when_enabled() {
        let mut registry = reporting_external();
        registry.register(field("ecs.version", "keyword", "ecs", "x.yml"));
        let conflict = registry
            .register(field("ecs.version", "keyword", "", "y.yml"))
            .unwrap();

        assert_eq!(conflict.severity(), Severity::Warning);
        assert_eq!(conflict.name(), "ecs.version");
        assert_eq!(registry.get("ecs.version").unwrap().source_file, PathBuf::from("x.yml"));
    }

    #[test]
    fn test_external_checked_before_type() {
        let mut registry = reporting_external();
        registry.register(field("f", "long", "ecs", "x.yml"));
        let conflict = registry.register(field("f", "keyword", "", "y.yml"));
        assert!(matches!(conflict, Some(Conflict::ExternalMismatch { .. })));

        let mut quiet = Registry::new();
        quiet.register(field("f", "long", "ecs", "x.yml"));
        assert!(quiet.register(field("f", "keyword", "", "y.yml")).is_none());
    }

    #[test]
    fn test_first_seen_wins_across_many_definitions() {
        let mut registry = Registry::new();
        let conflicts = registry.register_all(vec![
            field("f", "long", "", "a.yml"),
            field("f", "keyword", "", "b.yml"),
            field("f", "ip", "", "c.yml"),
        ]);

        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.iter().all(|c| match c {
            Conflict::TypeMismatch { first, .. } => first.value == "long",
            Conflict::ExternalMismatch { .. } => false,
        }));
        assert_eq!(registry.get("f").unwrap().field_type, "long");
    }

    #[test]
    fn test_conflict_display_matches_report_format() {
        let mut registry = reporting_external();
        registry.register(field("a.b", "long", "", "x.yml"));
        let types = registry.register(field("a.b", "keyword", "", "y.yml")).unwrap();
        assert_eq!(
            types.to_string(),
            "a.b: error in types\n\tx.yml type is long\n\ty.yml type is keyword"
        );

        registry.register(field("c", "", "ecs", "x.yml"));
        let external = registry.register(field("c", "", "", "y.yml")).unwrap();
        assert_eq!(
            external.to_string(),
            "c: mismatch in definitions\n\tx.yml external is ecs\n\ty.yml external is "
        );
    }

    #[test]
    fn test_names_lists_registered_fields() {
        let mut registry = Registry::new();
        registry.register_all(vec![
            field("b", "long", "", "x.yml"),
            field("a", "long", "", "x.yml"),
            field("b", "long", "", "y.yml"),
        ]);
        let mut names: Vec<&str> = registry.names().collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
        assert!(!registry.is_empty());
    }
}
