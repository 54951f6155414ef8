//! Routing-key validation against a derived schema.

use crate::{error::TranscodeError, schema::RecordSchema};

/// Checks that `key_field` names a top-level field of primitive type.
///
/// Meant to run once at setup, before any record is processed: a missing or
/// compound key field is a configuration error.
pub fn validate_key(schema: &RecordSchema, key_field: &str) -> Result<(), TranscodeError> {
    let field = schema
        .field(key_field)
        .ok_or_else(|| TranscodeError::UnsupportedKeyType {
            field: key_field.to_string(),
            detail: format!("record '{}' has no top-level field '{key_field}'", schema.name),
        })?;

    if !field.element.avro_type.is_primitive() {
        return Err(TranscodeError::UnsupportedKeyType {
            field: key_field.to_string(),
            detail: format!(
                "key must be a primitive, found {}",
                field.element.avro_type.type_name()
            ),
        });
    }
    Ok(())
}
