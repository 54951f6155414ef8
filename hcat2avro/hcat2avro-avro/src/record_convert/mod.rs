//! Conversion from an [`InterchangeValue`] tree to a [`GenericRecord`].
//!
//! The walk is driven by the target schema, not by the tree: every schema
//! field is visited, missing entries become absent, and entries the schema
//! does not name are ignored.

mod build;
mod scalar;

use hcat2avro_core::{FieldPath, InterchangeValue};

use crate::{error::TranscodeError, record::GenericRecord, schema::RecordSchema};

/// Build a record conforming to `schema` from an interchange tree.
///
/// `value` must be an `Object` (as produced by
/// [`serialize_record`](hcat2avro_core::serialize_record)).
///
/// # Errors
/// - [`TranscodeError::SchemaMismatch`] when the tree's shape disagrees with
///   the schema (a sequence where a scalar is expected, a null for a
///   non-nullable element, ...).
/// - [`TranscodeError::Conversion`] when a scalar's text does not parse as
///   the declared primitive.
pub fn build_record(
    value: &InterchangeValue,
    schema: &RecordSchema,
) -> Result<GenericRecord, TranscodeError> {
    let mut path = FieldPath::root();
    match value {
        InterchangeValue::Object(_) => build::build_fields(value, schema, &mut path),
        other => Err(TranscodeError::SchemaMismatch {
            path: path.to_string(),
            detail: format!("expected object, got {}", other.kind_name()),
        }),
    }
}
