//! Catalog record → [`InterchangeValue`] serialization.

use crate::{
    error::ShapeError,
    interchange::InterchangeValue,
    path::{FieldPath, Segment},
    scalar::encode_scalar,
    schema::{FieldDefs, FieldKind},
    value::{SourceRecord, Value},
};

/// Flatten `record` into an interchange tree, walking `schema` and the
/// record's values side by side.
///
/// The result is always an `Object` keyed by column name. A null value at any
/// level becomes `Null` without descending into it.
///
/// Returns a [`ShapeError`] naming the offending path when a value does not
/// have the kind its column declares or a struct has the wrong arity.
pub fn serialize_record(
    record: &SourceRecord,
    schema: &FieldDefs,
) -> Result<InterchangeValue, ShapeError> {
    let mut path = FieldPath::root();
    serialize_struct(record.values(), schema, &mut path)
}

fn serialize_struct(
    values: &[Value],
    fields: &FieldDefs,
    path: &mut FieldPath,
) -> Result<InterchangeValue, ShapeError> {
    if values.len() != fields.len() {
        return Err(ShapeError::new(
            &*path,
            format!("expected {} fields, got {}", fields.len(), values.len()),
        ));
    }

    let mut entries = Vec::with_capacity(fields.len());
    for (field, value) in fields.iter().zip(values) {
        let item = path.scoped(Segment::field(&field.name), |path| {
            serialize_value(value, &field.kind, path)
        })?;
        entries.push((field.name.clone(), item));
    }
    Ok(InterchangeValue::Object(entries))
}

fn serialize_value(
    value: &Value,
    kind: &FieldKind,
    path: &mut FieldPath,
) -> Result<InterchangeValue, ShapeError> {
    match (kind, value) {
        (_, Value::Null) => Ok(InterchangeValue::Null),
        (FieldKind::Primitive(ty), _) => encode_scalar(*ty, value)
            .map(InterchangeValue::Scalar)
            .ok_or_else(|| mismatch(path, ty.type_name(), value)),
        (FieldKind::List(elem), Value::List(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                out.push(path.scoped(Segment::Index(i), |path| {
                    serialize_value(item, elem, path)
                })?);
            }
            Ok(InterchangeValue::Sequence(out))
        }
        (FieldKind::Map { key: key_ty, value: value_kind }, Value::Map(entries)) => {
            let mut out = Vec::with_capacity(entries.len());
            for (key, item) in entries {
                let key_text = encode_scalar(*key_ty, key).ok_or_else(|| {
                    ShapeError::new(
                        &*path,
                        format!(
                            "map key must be {}, got {}",
                            key_ty.type_name(),
                            key.variant_name()
                        ),
                    )
                })?;
                let converted = path.scoped(Segment::Key(key_text.clone()), |path| {
                    serialize_value(item, value_kind, path)
                })?;
                out.push((key_text, converted));
            }
            Ok(InterchangeValue::Object(out))
        }
        (FieldKind::Struct(fields), Value::Struct(children)) => {
            serialize_struct(children, fields, path)
        }
        _ => Err(mismatch(path, kind.type_name(), value)),
    }
}

fn mismatch(path: &FieldPath, expected: &str, value: &Value) -> ShapeError {
    ShapeError::new(
        path,
        format!("expected {expected}, got {}", value.variant_name()),
    )
}
