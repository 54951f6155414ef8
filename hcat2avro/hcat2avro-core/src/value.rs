//! Catalog record values, addressed by position.

use std::sync::Arc;

use crate::schema::PrimitiveType;

/// Value read from a catalog record.
/// All types are explicit; no lossy conversions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Boolean(bool),
    String(Arc<str>),
    Binary(Arc<[u8]>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// Struct members in schema order.
    Struct(Vec<Value>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn binary(b: impl AsRef<[u8]>) -> Self {
        Self::Binary(Arc::from(b.as_ref()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Primitive kind of a scalar value; `None` for null and compound values.
    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        Some(match self {
            Value::Int32(_) => PrimitiveType::Int32,
            Value::Int64(_) => PrimitiveType::Int64,
            Value::Float32(_) => PrimitiveType::Float32,
            Value::Float64(_) => PrimitiveType::Float64,
            Value::Boolean(_) => PrimitiveType::Boolean,
            Value::String(_) => PrimitiveType::String,
            Value::Binary(_) => PrimitiveType::Binary,
            Value::Null | Value::List(_) | Value::Map(_) | Value::Struct(_) => return None,
        })
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Float32(_) => "Float32",
            Value::Float64(_) => "Float64",
            Value::Boolean(_) => "Boolean",
            Value::String(_) => "String",
            Value::Binary(_) => "Binary",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Struct(_) => "Struct",
        }
    }
}

/// One catalog row: top-level column values in schema order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceRecord(Vec<Value>);

impl SourceRecord {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Option<&Value> {
        self.0.get(position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Value>> for SourceRecord {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}
