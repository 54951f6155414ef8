//! Avro-style target layer for `hcat2avro`.
//!
//! This crate focuses on three responsibilities:
//! 1. Derive a target [`RecordSchema`] from a catalog [`FieldDefs`] schema
//!    ([`derive_schema`]).
//! 2. Check that a designated routing-key field derives to a primitive
//!    ([`validate_key`]).
//! 3. Build a [`GenericRecord`] from an [`InterchangeValue`] tree, driven by
//!    the derived schema ([`build_record`]).
//!
//! Both the schema and the records follow the conventions used by this
//! project:
//! - Every field, array element and map value is nullable.
//! - Nested records are named after their field path (`outer_inner`).
//!
//! # Typical Flow
//! ```rust
//! use hcat2avro_avro::{build_record, derive_schema, validate_key};
//! use hcat2avro_core::{FieldDef, FieldDefs, PrimitiveType, SourceRecord, Value, serialize_record};
//!
//! let source: FieldDefs = vec![FieldDef::primitive("a", PrimitiveType::Int32)].into();
//! let schema = derive_schema(&source, "MyRecord").unwrap();
//! validate_key(&schema, "a").unwrap();
//!
//! let tree = serialize_record(&SourceRecord::new(vec![Value::Int32(7)]), &source).unwrap();
//! let record = build_record(&tree, &schema).unwrap();
//! assert_eq!(record.get("a").and_then(|v| v.as_i32()), Some(7));
//! ```
//!
//! [`FieldDefs`]: hcat2avro_core::FieldDefs
//! [`InterchangeValue`]: hcat2avro_core::InterchangeValue

pub mod error;
pub mod key;
pub mod record;
pub mod record_convert;
pub mod schema;
pub mod schema_convert;

/// Re-export of [`error::TranscodeError`].
pub use error::TranscodeError;
/// Re-export of [`key::validate_key`].
pub use key::validate_key;
/// Re-exports from [`record`].
pub use record::{AvroValue, GenericRecord};
/// Re-export of [`record_convert::build_record`].
pub use record_convert::build_record;
/// Re-exports from [`schema`].
pub use schema::{
    AvroField, AvroType, ElementDef, RecordSchema, format_record_schema, primitive_name,
};
/// Re-export of [`schema_convert::derive_schema`].
pub use schema_convert::derive_schema;
