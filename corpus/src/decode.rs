//! YAML field document decoding.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use field_audit_core::FieldDefinition;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CorpusError, Result};

/// Reads one field file into its top-level definitions.
///
/// Only the first YAML document of the file is read; any further documents
/// are ignored. That document must be a sequence of field records, or
/// `null` for no records. Every returned definition, nested children
/// included, has its `source_file` set to `path`. The file is closed before
/// this function returns.
///
/// # Errors
///
/// Returns [`CorpusError::Io`] if the file cannot be opened,
/// [`CorpusError::EmptyDocument`] if it holds no document at all, or
/// [`CorpusError::Yaml`] if the first document is not a valid field
/// document.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Vec<FieldDefinition>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let Some(document) = serde_yaml::Deserializer::from_reader(reader).next() else {
        return Err(CorpusError::EmptyDocument);
    };
    let mut defs = Option::<Vec<FieldDefinition>>::deserialize(document)?.unwrap_or_default();

    for def in &mut defs {
        def.attach_source(path);
    }

    debug!(path = %path.display(), definitions = defs.len(), "Decoded field file");
    Ok(defs)
}
