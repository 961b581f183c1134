//! Field definition types.
//!
//! [`FieldDefinition`] mirrors one record of a `fields/*.yml` document and
//! may nest further definitions. [`QualifiedField`] is the flattened leaf
//! form produced by [`flatten`](crate::flatten), keyed by its dotted path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

/// One schema field as declared in a source document.
///
/// Every key is optional in the document. Missing keys and explicit `null`
/// values both decode to the zero value (empty string, empty list).
///
/// # Examples
///
/// ```
/// use field_audit_core::FieldDefinition;
///
/// let dns = FieldDefinition::group(
///     "dns",
///     vec![FieldDefinition::leaf("id", "keyword")],
/// );
/// assert!(dns.is_group());
/// assert!(!dns.children[0].is_group());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldDefinition {
    /// Local (non-qualified) name as written in the document.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Declared data type, e.g. `keyword` or `long`. Empty means unspecified.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub field_type: String,
    /// Name of the external schema this field defers to. Empty means none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub external: String,
    /// Nested sub-fields. Non-empty for group nodes.
    #[serde(rename = "fields", default, deserialize_with = "null_as_default")]
    pub children: Vec<FieldDefinition>,
    /// File this definition was read from. Attached after decoding.
    #[serde(skip)]
    pub source_file: PathBuf,
}

impl FieldDefinition {
    /// Creates a leaf definition with a name and type.
    pub fn leaf(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    /// Creates a group definition holding `children`.
    pub fn group(name: impl Into<String>, children: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            children,
            ..Self::default()
        }
    }

    /// Sets the external schema name.
    pub fn with_external(mut self, external: impl Into<String>) -> Self {
        self.external = external.into();
        self
    }

    /// Sets the source file on this definition and all of its descendants.
    pub fn with_source(mut self, path: impl AsRef<Path>) -> Self {
        self.attach_source(path.as_ref());
        self
    }

    /// Returns `true` when this definition has sub-fields.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Recursively records `path` as the origin of this definition.
    pub fn attach_source(&mut self, path: &Path) {
        self.source_file = path.to_path_buf();
        for child in &mut self.children {
            child.attach_source(path);
        }
    }
}

/// A leaf field whose name is the dotted path from the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualifiedField {
    /// Fully-qualified name, e.g. `dns.question.name`.
    pub name: String,
    /// Declared data type.
    pub field_type: String,
    /// External schema name, empty when not external.
    pub external: String,
    /// File the leaf was read from.
    pub source_file: PathBuf,
}

impl QualifiedField {
    /// Builds a qualified leaf from a definition and its computed name.
    pub fn from_leaf(def: &FieldDefinition, name: String) -> Self {
        Self {
            name,
            field_type: def.field_type.clone(),
            external: def.external.clone(),
            source_file: def.source_file.clone(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_nested_document() {
        let yaml = r#"
- name: dns
  type: group
  fields:
    - name: id
      type: keyword
    - name: question
      type: group
      fields:
        - name: name
          type: keyword
- name: ecs.version
  external: ecs
"#;
        let defs: Vec<FieldDefinition> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, "dns");
        assert_eq!(defs[0].children.len(), 2);
        assert_eq!(defs[0].children[1].children[0].name, "name");
        assert_eq!(defs[1].external, "ecs");
        assert_eq!(defs[1].field_type, "");
    }

    #[test]
    fn test_decode_ignores_unknown_keys_and_nulls() {
        let yaml = r#"
- name: message
  type:
  description: Log message
  example: hello
  fields:
"#;
        let defs: Vec<FieldDefinition> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(defs[0].name, "message");
        assert_eq!(defs[0].field_type, "");
        assert!(defs[0].children.is_empty());
    }

    #[test]
    fn test_attach_source_reaches_descendants() {
        let mut def = FieldDefinition::group(
            "a",
            vec![FieldDefinition::group(
                "b",
                vec![FieldDefinition::leaf("c", "long")],
            )],
        );
        def.attach_source(Path::new("fields/base.yml"));

        assert_eq!(def.source_file, PathBuf::from("fields/base.yml"));
        assert_eq!(
            def.children[0].children[0].source_file,
            PathBuf::from("fields/base.yml")
        );
    }
}
