use hcat2avro_core::{FieldPath, InterchangeValue, Segment};

use super::scalar::parse_scalar;
use crate::{
    error::TranscodeError,
    record::{AvroValue, GenericRecord},
    schema::{AvroType, ElementDef, RecordSchema},
};

pub(super) fn build_fields(
    object: &InterchangeValue,
    schema: &RecordSchema,
    path: &mut FieldPath,
) -> Result<GenericRecord, TranscodeError> {
    let mut fields = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        let value = match object.get(&field.name) {
            Some(item) => path.scoped(Segment::field(&field.name), |path| {
                build_value(item, &field.element, path)
            })?,
            None => absent(&field.element, path, &field.name)?,
        };
        fields.push((field.name.clone(), value));
    }
    Ok(GenericRecord::new(schema.name.clone(), fields))
}

fn absent(elem: &ElementDef, path: &FieldPath, name: &str) -> Result<AvroValue, TranscodeError> {
    if elem.nullable {
        return Ok(AvroValue::Null);
    }
    let at = match path.depth() {
        0 => name.to_string(),
        _ => format!("{path}.{name}"),
    };
    Err(TranscodeError::SchemaMismatch {
        path: at,
        detail: "missing value for non-nullable field".to_string(),
    })
}

fn build_value(
    value: &InterchangeValue,
    elem: &ElementDef,
    path: &mut FieldPath,
) -> Result<AvroValue, TranscodeError> {
    match (value, &elem.avro_type) {
        (InterchangeValue::Null, _) if elem.nullable => Ok(AvroValue::Null),
        (InterchangeValue::Null, ty) => Err(mismatch(
            path,
            format!("null for non-nullable {}", ty.type_name()),
        )),
        (InterchangeValue::Scalar(text), AvroType::Primitive(ty)) => parse_scalar(text, *ty, path),
        (InterchangeValue::Sequence(items), AvroType::Array(item_elem)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                out.push(path.scoped(Segment::Index(i), |path| {
                    build_value(item, item_elem, path)
                })?);
            }
            Ok(AvroValue::Array(out))
        }
        (InterchangeValue::Object(entries), AvroType::Map(value_elem)) => {
            let mut out = Vec::with_capacity(entries.len());
            for (key, item) in entries {
                let converted = path.scoped(Segment::Key(key.clone()), |path| {
                    build_value(item, value_elem, path)
                })?;
                out.push((key.clone(), converted));
            }
            Ok(AvroValue::Map(out))
        }
        (InterchangeValue::Object(_), AvroType::Record(record)) => {
            build_fields(value, record, path).map(AvroValue::Record)
        }
        (other, ty) => Err(mismatch(
            path,
            format!("expected {}, got {}", ty.type_name(), other.kind_name()),
        )),
    }
}

fn mismatch(path: &FieldPath, detail: String) -> TranscodeError {
    TranscodeError::SchemaMismatch {
        path: path.to_string(),
        detail,
    }
}
