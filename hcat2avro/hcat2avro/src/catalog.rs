//! JSON representations of catalog tables and rows.
//!
//! A table descriptor names the table and lists its columns with catalog
//! type strings:
//!
//! ```json
//! {"name": "users", "columns": [{"name": "id", "type": "bigint"},
//!                               {"name": "tags", "type": "map<string,array<int>>"}]}
//! ```
//!
//! Rows are JSON objects keyed by column name (missing columns are null,
//! members naming no column are skipped with a debug event) or arrays in
//! column order. Binary values are standard base64 strings. Numbers that
//! overflow a `float` column are rejected.

use base64::Engine;
use hcat2avro_core::{
    BASE64, FieldDef, FieldDefs, FieldKind, FieldPath, PrimitiveType, Segment, ShapeError,
    SourceRecord, Value, parse_type,
};
use serde::Deserialize;
use serde_json::Value as Json;
use tracing::debug;

use crate::error::ExportError;

#[derive(Deserialize)]
struct RawTable {
    name: String,
    columns: Vec<RawColumn>,
}

#[derive(Deserialize)]
struct RawColumn {
    name: String,
    #[serde(rename = "type")]
    type_string: String,
}

/// A catalog table: its name and column schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescriptor {
    name: String,
    columns: FieldDefs,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>, columns: FieldDefs) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Parse a JSON table descriptor, including every column's type string.
    pub fn from_json(text: &str) -> Result<Self, ExportError> {
        let raw: RawTable = serde_json::from_str(text).map_err(ExportError::Descriptor)?;

        let mut columns = Vec::with_capacity(raw.columns.len());
        for column in raw.columns {
            let kind =
                parse_type(&column.type_string).map_err(|source| ExportError::ColumnType {
                    column: column.name.clone(),
                    source,
                })?;
            columns.push(FieldDef::new(column.name, kind));
        }

        let columns = FieldDefs::from(columns);
        if let Some(column) = columns.duplicate_name() {
            return Err(ExportError::DuplicateColumn {
                table: raw.name,
                column: column.to_string(),
            });
        }
        Ok(Self::new(raw.name, columns))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &FieldDefs {
        &self.columns
    }

    pub fn into_columns(self) -> FieldDefs {
        self.columns
    }
}

/// Read one JSON row into a positional [`SourceRecord`] following `columns`.
pub fn record_from_json(value: &Json, columns: &FieldDefs) -> Result<SourceRecord, ExportError> {
    let mut path = FieldPath::root();
    let values = struct_values(value, columns, &mut path)?;
    Ok(SourceRecord::new(values))
}

/// Parse a single JSON row from text.
pub fn record_from_str(text: &str, columns: &FieldDefs) -> Result<SourceRecord, ExportError> {
    let value: Json = serde_json::from_str(text).map_err(ExportError::MalformedRecord)?;
    record_from_json(&value, columns)
}

fn struct_values(
    value: &Json,
    fields: &FieldDefs,
    path: &mut FieldPath,
) -> Result<Vec<Value>, ShapeError> {
    match value {
        Json::Object(members) => {
            for name in members.keys().filter(|name| fields.position(name).is_none()) {
                debug!(path = %path, member = %name, "ignoring member that names no column");
            }
            fields
                .iter()
                .map(|field| {
                    path.scoped(Segment::field(&field.name), |path| {
                        match members.get(&field.name) {
                            Some(member) => column_value(member, &field.kind, path),
                            None => Ok(Value::Null),
                        }
                    })
                })
                .collect()
        }
        Json::Array(items) if items.len() == fields.len() => fields
            .iter()
            .zip(items)
            .map(|(field, item)| {
                path.scoped(Segment::field(&field.name), |path| {
                    column_value(item, &field.kind, path)
                })
            })
            .collect(),
        Json::Array(items) => Err(ShapeError::new(
            &*path,
            format!("expected {} values, got {}", fields.len(), items.len()),
        )),
        other => Err(mismatch(path, "object", other)),
    }
}

fn column_value(value: &Json, kind: &FieldKind, path: &mut FieldPath) -> Result<Value, ShapeError> {
    match (kind, value) {
        (_, Json::Null) => Ok(Value::Null),
        (FieldKind::Primitive(ty), _) => primitive_value(value, *ty, path),
        (FieldKind::List(elem), Json::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| path.scoped(Segment::Index(idx), |path| column_value(item, elem, path)))
            .collect::<Result<_, _>>()
            .map(Value::List),
        (FieldKind::Map { key, value: item_kind }, Json::Object(members)) => members
            .iter()
            .map(|(k, v)| {
                let key_value = parse_key(k, *key).ok_or_else(|| {
                    ShapeError::new(
                        &*path,
                        format!("map key {k:?} is not a valid {}", key.type_name()),
                    )
                })?;
                let item = path.scoped(Segment::Key(k.clone()), |path| {
                    column_value(v, item_kind, path)
                })?;
                Ok((key_value, item))
            })
            .collect::<Result<_, _>>()
            .map(Value::Map),
        (FieldKind::Struct(fields), Json::Object(_) | Json::Array(_)) => {
            struct_values(value, fields, path).map(Value::Struct)
        }
        (FieldKind::List(_), other) => Err(mismatch(path, "array", other)),
        (FieldKind::Map { .. } | FieldKind::Struct(_), other) => {
            Err(mismatch(path, "object", other))
        }
    }
}

fn primitive_value(value: &Json, ty: PrimitiveType, path: &FieldPath) -> Result<Value, ShapeError> {
    let parsed = match ty {
        PrimitiveType::Int32 => value
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Value::Int32),
        PrimitiveType::Int64 => value.as_i64().map(Value::Int64),
        PrimitiveType::Float32 => match float_value(value) {
            Some(v) => {
                let narrowed = narrow_f32(v).ok_or_else(|| {
                    ShapeError::new(path, format!("{v} is out of range for float32"))
                })?;
                Some(Value::Float32(narrowed))
            }
            None => None,
        },
        PrimitiveType::Float64 => float_value(value).map(Value::Float64),
        PrimitiveType::Boolean => value.as_bool().map(Value::Boolean),
        PrimitiveType::String => value.as_str().map(Value::string),
        PrimitiveType::Binary => value
            .as_str()
            .and_then(|text| BASE64.decode(text).ok())
            .map(Value::binary),
    };
    parsed.ok_or_else(|| mismatch(path, ty.type_name(), value))
}

/// JSON has no literal for non-finite numbers, so `"NaN"`, `"inf"` and
/// `"-inf"` are accepted as strings.
fn float_value(value: &Json) -> Option<f64> {
    match value {
        Json::Number(n) => n.as_f64(),
        Json::String(text) => text.parse::<f64>().ok().filter(|v| !v.is_finite()),
        _ => None,
    }
}

/// `None` when a finite value overflows `f32`.
fn narrow_f32(v: f64) -> Option<f32> {
    let narrowed = v as f32;
    (!narrowed.is_infinite() || v.is_infinite()).then_some(narrowed)
}

/// Float map keys: finite text that overflows to infinity is rejected.
fn parse_float_key(text: &str) -> Option<f64> {
    let v: f64 = text.parse().ok()?;
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let names_infinity =
        unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
    (!v.is_infinite() || names_infinity).then_some(v)
}

fn parse_key(text: &str, ty: PrimitiveType) -> Option<Value> {
    Some(match ty {
        PrimitiveType::Int32 => Value::Int32(text.parse().ok()?),
        PrimitiveType::Int64 => Value::Int64(text.parse().ok()?),
        PrimitiveType::Float32 => Value::Float32(narrow_f32(parse_float_key(text)?)?),
        PrimitiveType::Float64 => Value::Float64(parse_float_key(text)?),
        PrimitiveType::Boolean => Value::Boolean(text.parse().ok()?),
        PrimitiveType::String => Value::string(text),
        PrimitiveType::Binary => Value::binary(BASE64.decode(text).ok()?),
    })
}

fn mismatch(path: &FieldPath, expected: &str, found: &Json) -> ShapeError {
    let found = match found {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    };
    ShapeError::new(path, format!("expected {expected}, got {found}"))
}
