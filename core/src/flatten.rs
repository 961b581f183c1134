//! Path-qualified flattening of nested field definitions.
//!
//! Group nodes disappear; every leaf is emitted once, named by the dotted
//! path of local names leading to it. Input order is kept at every level.
//!
//! A local name that already contains a `.` yields the same qualified name
//! as the equivalent nesting would. Both spellings land on one registry key.
//!
//! # Example
//!
//! ```
//! use field_audit_core::{FieldDefinition, flatten};
//!
//! let defs = vec![FieldDefinition::group(
//!     "a",
//!     vec![
//!         FieldDefinition::leaf("b", "long"),
//!         FieldDefinition::leaf("c", "keyword"),
//!     ],
//! )];
//!
//! let flat = flatten(&defs, "");
//! let names: Vec<&str> = flat.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, vec!["a.b", "a.c"]);
//! assert_eq!(flat[0].field_type, "long");
//! ```

use crate::{FieldDefinition, QualifiedField};

/// Flattens `defs` into leaf fields qualified under `prefix`.
///
/// Pass an empty `prefix` for a document's top level.
pub fn flatten(defs: &[FieldDefinition], prefix: &str) -> Vec<QualifiedField> {
    let mut out = Vec::new();
    flatten_into(defs, prefix, &mut out);
    out
}

fn flatten_into(defs: &[FieldDefinition], prefix: &str, out: &mut Vec<QualifiedField>) {
    for def in defs {
        let qualified = qualify(prefix, &def.name);
        if def.is_group() {
            flatten_into(&def.children, &qualified, out);
        } else {
            out.push(QualifiedField::from_leaf(def, qualified));
        }
    }
}

fn qualify(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
