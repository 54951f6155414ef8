//! Per-partition transcoding facade.

use hcat2avro_avro::{
    AvroValue, GenericRecord, RecordSchema, TranscodeError, build_record, derive_schema,
    validate_key,
};
use hcat2avro_core::{FieldDefs, InterchangeValue, SourceRecord, serialize_record};
use tracing::debug;

use crate::config::ExportConfig;

/// Derived target schema and routing key, fixed at setup and reused for
/// every record of a partition.
///
/// Immutable after [`Transcoder::new`]; share it across threads freely.
#[derive(Debug, Clone)]
pub struct Transcoder {
    source: FieldDefs,
    target: RecordSchema,
    key_field: Option<String>,
}

impl Transcoder {
    /// Derive the target schema for `source` and validate the configured key.
    ///
    /// # Errors
    /// [`TranscodeError::UnsupportedKeyType`] for a missing or non-primitive
    /// key column or a map with non-string keys; [`TranscodeError::SchemaMismatch`]
    /// for colliding nested record names or excessive nesting.
    pub fn new(source: FieldDefs, config: &ExportConfig) -> Result<Self, TranscodeError> {
        let target = derive_schema(&source, config.record_name())?;
        if let Some(key) = config.key_field() {
            validate_key(&target, key)?;
        }
        debug!(
            record = %target.name,
            columns = source.len(),
            key = config.key_field().unwrap_or("<none>"),
            "transcoder ready"
        );
        Ok(Self {
            source,
            target,
            key_field: config.key_field().map(str::to_string),
        })
    }

    pub fn source_schema(&self) -> &FieldDefs {
        &self.source
    }

    pub fn target_schema(&self) -> &RecordSchema {
        &self.target
    }

    pub fn key_field(&self) -> Option<&str> {
        self.key_field.as_deref()
    }

    /// Serialize `record` into the interchange tree without building a
    /// target record.
    pub fn interchange(&self, record: &SourceRecord) -> Result<InterchangeValue, TranscodeError> {
        Ok(serialize_record(record, &self.source)?)
    }

    /// Serialize `record`, build the target record and extract the message
    /// key.
    ///
    /// The key is `None` when no key column is configured or the record's key
    /// value is absent.
    pub fn transcode(
        &self,
        record: &SourceRecord,
    ) -> Result<(Option<Vec<u8>>, GenericRecord), TranscodeError> {
        let tree = self.interchange(record)?;
        let value = build_record(&tree, &self.target)?;
        let key = self
            .key_field
            .as_deref()
            .and_then(|name| value.get(name))
            .and_then(key_bytes);
        Ok((key, value))
    }
}

/// External form of a primitive key value: numbers and booleans as UTF-8
/// text, strings as UTF-8, bytes unchanged. `None` for absent and compound
/// values.
pub fn key_bytes(value: &AvroValue) -> Option<Vec<u8>> {
    Some(match value {
        AvroValue::Int(v) => v.to_string().into_bytes(),
        AvroValue::Long(v) => v.to_string().into_bytes(),
        AvroValue::Float(v) => v.to_string().into_bytes(),
        AvroValue::Double(v) => v.to_string().into_bytes(),
        AvroValue::Boolean(v) => v.to_string().into_bytes(),
        AvroValue::String(v) => v.as_bytes().to_vec(),
        AvroValue::Bytes(v) => v.clone(),
        AvroValue::Null | AvroValue::Array(_) | AvroValue::Map(_) | AvroValue::Record(_) => {
            return None;
        }
    })
}

/// Convert one record without a [`Transcoder`], deriving the schema on every
/// call.
#[deprecated(note = "use `Transcoder::transcode`, which caches the derived schema")]
pub fn convert_record(
    record: &SourceRecord,
    source: &FieldDefs,
    record_name: &str,
) -> Result<GenericRecord, TranscodeError> {
    let target = derive_schema(source, record_name)?;
    let tree = serialize_record(record, source)?;
    build_record(&tree, &target)
}
