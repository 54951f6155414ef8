//! Transcode catalog records into keyed Avro-style records.
//!
//! A partition is set up once from the table's column schema and an
//! [`ExportConfig`]: the target schema is derived and the routing-key column
//! validated. Every record is then serialized into the interchange tree,
//! rebuilt against the target schema and handed to an [`OutputChannel`]
//! together with its key.
//!
//! ```rust
//! use hcat2avro::{ChannelError, ExportConfig, ExportPartition, GenericRecord};
//! use hcat2avro::core::{FieldDef, FieldDefs, PrimitiveType, SourceRecord, Value};
//!
//! let columns: FieldDefs = vec![
//!     FieldDef::primitive("id", PrimitiveType::Int64),
//!     FieldDef::primitive("name", PrimitiveType::String),
//! ]
//! .into();
//! let config = ExportConfig::builder("User").with_key_field("id").build();
//! let partition = ExportPartition::new(columns, &config).unwrap();
//!
//! let mut sent: Vec<(Option<Vec<u8>>, GenericRecord)> = Vec::new();
//! let summary = partition
//!     .run(
//!         [SourceRecord::new(vec![Value::Int64(1), Value::string("ada")])],
//!         &mut |key: Option<Vec<u8>>, record: GenericRecord| -> Result<(), ChannelError> {
//!             sent.push((key, record));
//!             Ok(())
//!         },
//!     )
//!     .unwrap();
//!
//! assert_eq!(summary.sent, 1);
//! assert_eq!(sent[0].0.as_deref(), Some(&b"1"[..]));
//! ```

mod catalog;
mod channel;
mod config;
mod error;
mod partition;
mod transcoder;

pub use catalog::{TableDescriptor, record_from_json, record_from_str};
pub use channel::{ChannelError, OutputChannel};
pub use config::{ErrorPolicy, ExportConfig, ExportConfigBuilder};
pub use error::ExportError;
pub use hcat2avro_avro as avro;
pub use hcat2avro_avro::{AvroValue, GenericRecord, RecordSchema, TranscodeError};
pub use hcat2avro_core as core;
pub use partition::{ExportPartition, ExportSummary};
#[allow(deprecated)]
pub use transcoder::convert_record;
pub use transcoder::{Transcoder, key_bytes};
