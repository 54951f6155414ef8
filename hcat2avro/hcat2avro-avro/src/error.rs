use hcat2avro_core::ShapeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranscodeError {
    /// The routing key resolves to a non-primitive (or missing) field, or a
    /// catalog map uses non-string keys. Raised at setup time.
    #[error("unsupported key type for '{field}': {detail}")]
    UnsupportedKeyType { field: String, detail: String },

    /// A value tree disagrees with the schema it is checked against.
    #[error("schema mismatch at '{path}': {detail}")]
    SchemaMismatch { path: String, detail: String },

    /// A scalar's text cannot be parsed as its declared primitive type.
    #[error("cannot convert {text:?} at '{path}' to {expected}")]
    Conversion {
        path: String,
        text: String,
        expected: &'static str,
    },
}

impl From<ShapeError> for TranscodeError {
    fn from(e: ShapeError) -> Self {
        TranscodeError::SchemaMismatch {
            path: e.path,
            detail: e.detail,
        }
    }
}
