use std::collections::HashSet;

use hcat2avro_core::{FieldDefs, FieldKind, FieldPath, PrimitiveType, Segment};

use crate::{
    error::TranscodeError,
    schema::{AvroField, AvroType, ElementDef, RecordSchema},
};

// ---------------------------------------------------------------------------
// Derive the target record schema from catalog FieldDefs
// ---------------------------------------------------------------------------

/// Derives the target [`RecordSchema`] named `record_name` from a catalog
/// schema.
///
/// The result is a pure function of its inputs and preserves field order.
/// Every field, array element and map value is nullable. Each nested struct
/// becomes its own record, named after the field path leading to it
/// (`outer_inner`); list and map levels do not add to the name.
///
/// # Errors
/// - [`TranscodeError::UnsupportedKeyType`] if a catalog map has non-string keys.
/// - [`TranscodeError::SchemaMismatch`] if two nested records would share a
///   name, or nesting exceeds [`MAX_DEPTH`](hcat2avro_core::MAX_DEPTH).
pub fn derive_schema(source: &FieldDefs, record_name: &str) -> Result<RecordSchema, TranscodeError> {
    let mut path = FieldPath::root();
    let mut names = HashSet::from([record_name.to_string()]);
    let schema = derive_record(record_name.to_string(), source, &mut path, &mut names)?;

    tracing::debug!(
        record = record_name,
        fields = schema.fields.len(),
        nested_records = names.len() - 1,
        "derived target schema"
    );
    Ok(schema)
}

fn derive_record(
    name: String,
    fields: &FieldDefs,
    path: &mut FieldPath,
    names: &mut HashSet<String>,
) -> Result<RecordSchema, TranscodeError> {
    let mut out = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        let element = path.scoped(Segment::field(&field.name), |path| {
            derive_element(&field.kind, path, names)
        })?;
        out.push(AvroField {
            name: field.name.clone(),
            element,
        });
    }
    Ok(RecordSchema::new(name, out))
}

fn derive_element(
    kind: &FieldKind,
    path: &mut FieldPath,
    names: &mut HashSet<String>,
) -> Result<ElementDef, TranscodeError> {
    let avro_type = match kind {
        FieldKind::Primitive(p) => AvroType::Primitive(*p),
        FieldKind::List(elem) => {
            let item = path.scoped(Segment::Element, |path| derive_element(elem, path, names))?;
            AvroType::Array(Box::new(item))
        }
        FieldKind::Map { key, value } => {
            if *key != PrimitiveType::String {
                return Err(TranscodeError::UnsupportedKeyType {
                    field: path.to_string(),
                    detail: format!("map keys must be string, found {}", key.type_name()),
                });
            }
            let item = path.scoped(Segment::Element, |path| derive_element(value, path, names))?;
            AvroType::Map(Box::new(item))
        }
        FieldKind::Struct(fields) => {
            let name = path.type_name();
            if !names.insert(name.clone()) {
                return Err(TranscodeError::SchemaMismatch {
                    path: path.to_string(),
                    detail: format!("record name '{name}' is already defined"),
                });
            }
            AvroType::Record(derive_record(name, fields, path, names)?)
        }
    };
    Ok(ElementDef::nullable(avro_type))
}
