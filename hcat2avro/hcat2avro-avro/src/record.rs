//! Target record instances.

use base64::Engine;
use hcat2avro_core::BASE64;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Value bound to a target schema field. `Null` is the absent branch of a
/// nullable union.
#[derive(Debug, Clone, PartialEq)]
pub enum AvroValue {
    Null,
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    String(String),
    Bytes(Vec<u8>),
    Array(Vec<AvroValue>),
    Map(Vec<(String, AvroValue)>),
    Record(GenericRecord),
}

impl AvroValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AvroValue::Null)
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            AvroValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AvroValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AvroValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            AvroValue::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&GenericRecord> {
        match self {
            AvroValue::Record(v) => Some(v),
            _ => None,
        }
    }

    /// Value stored under `key` in a `Map`.
    pub fn map_get(&self, key: &str) -> Option<&AvroValue> {
        match self {
            AvroValue::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Record instance: field values in schema order, looked up by name.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericRecord {
    name: String,
    fields: Vec<(String, AvroValue)>,
}

impl GenericRecord {
    pub fn new(name: impl Into<String>, fields: Vec<(String, AvroValue)>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Name of the record schema this instance was built against.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, field: &str) -> Option<&AvroValue> {
        self.fields.iter().find(|(k, _)| k == field).map(|(_, v)| v)
    }

    pub fn fields(&self) -> &[(String, AvroValue)] {
        &self.fields
    }
}

/// JSON-shaped view: records and maps become objects, bytes become base64
/// strings, absent values become `null`. Non-finite floats become the
/// strings `"NaN"`, `"inf"` and `"-inf"`.
impl Serialize for AvroValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AvroValue::Null => serializer.serialize_none(),
            AvroValue::Int(v) => serializer.serialize_i32(*v),
            AvroValue::Long(v) => serializer.serialize_i64(*v),
            AvroValue::Float(v) if v.is_finite() => serializer.serialize_f32(*v),
            AvroValue::Double(v) if v.is_finite() => serializer.serialize_f64(*v),
            AvroValue::Float(v) => serializer.serialize_str(&v.to_string()),
            AvroValue::Double(v) => serializer.serialize_str(&v.to_string()),
            AvroValue::Boolean(v) => serializer.serialize_bool(*v),
            AvroValue::String(v) => serializer.serialize_str(v),
            AvroValue::Bytes(v) => serializer.serialize_str(&BASE64.encode(v)),
            AvroValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            AvroValue::Map(entries) => serialize_entries(entries, serializer),
            AvroValue::Record(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for GenericRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_entries(&self.fields, serializer)
    }
}

fn serialize_entries<S: Serializer>(
    entries: &[(String, AvroValue)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (k, v) in entries {
        map.serialize_entry(k, v)?;
    }
    map.end()
}
