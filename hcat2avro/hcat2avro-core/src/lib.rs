//! Target-agnostic core types for `hcat2avro`.
//!
//! This crate owns the catalog side of the transcoding pipeline:
//! - the source schema model ([`FieldDefs`] / [`FieldKind`] / [`PrimitiveType`]),
//!   including a parser for catalog type strings such as `map<string,array<int>>`;
//! - source record values ([`SourceRecord`] / [`Value`]);
//! - the generic [`InterchangeValue`] tree and [`serialize_record`], which
//!   flattens a source record into that tree.
//!
//! Nothing here knows about the target schema model. Target-specific crates
//! consume [`InterchangeValue`] and reuse [`PrimitiveType`] as the shared
//! primitive vocabulary.

mod error;
mod interchange;
mod path;
mod scalar;
mod schema;
mod serialize;
mod value;

pub use error::{ShapeError, TypeParseError};
pub use interchange::InterchangeValue;
pub use path::{FieldPath, MAX_DEPTH, Segment};
pub use scalar::{BASE64, encode_scalar};
pub use schema::{
    FieldDef, FieldDefs, FieldKind, MAX_TYPE_NESTING, PrimitiveType, format_field_defs, parse_type,
};
pub use serialize::serialize_record;
pub use value::{SourceRecord, Value};
