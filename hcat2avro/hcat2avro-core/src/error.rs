//! Error types for the catalog layer.

/// Error returned by [`parse_type`](crate::parse_type) for malformed catalog
/// type strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeParseError {
    /// The type string is not valid catalog type syntax.
    #[error("invalid type '{type_string}' at offset {offset}")]
    Syntax { type_string: String, offset: usize },

    /// The type string nests complex types beyond
    /// [`MAX_TYPE_NESTING`](crate::MAX_TYPE_NESTING).
    #[error("type '{type_string}' nests deeper than {max_depth} levels")]
    TooDeep {
        type_string: String,
        max_depth: usize,
    },

    /// A `struct<...>` declares the same member twice.
    #[error("duplicate struct member '{name}' in type '{type_string}'")]
    DuplicateField { type_string: String, name: String },
}

/// A value (or schema walk) disagrees with the shape the schema declares.
///
/// `path` is the rendered [`FieldPath`](crate::FieldPath) of the offending
/// node.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("value at '{path}' does not match schema: {detail}")]
pub struct ShapeError {
    pub path: String,
    pub detail: String,
}

impl ShapeError {
    pub fn new(path: impl ToString, detail: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            detail: detail.into(),
        }
    }
}
