use hcat2avro_avro::{TranscodeError, derive_schema, validate_key};
use hcat2avro_core::{FieldDef, FieldDefs, FieldKind, PrimitiveType};

fn source() -> FieldDefs {
    vec![
        FieldDef::primitive("id", PrimitiveType::Int64),
        FieldDef::primitive("name", PrimitiveType::String),
        FieldDef::primitive("raw", PrimitiveType::Binary),
        FieldDef::new(
            "tags",
            FieldKind::list(FieldKind::Primitive(PrimitiveType::String)),
        ),
        FieldDef::new(
            "attrs",
            FieldKind::map(PrimitiveType::String, FieldKind::Primitive(PrimitiveType::Int32)),
        ),
        FieldDef::new(
            "s",
            FieldKind::Struct(vec![FieldDef::primitive("x", PrimitiveType::Int32)].into()),
        ),
    ]
    .into()
}

#[test]
fn primitive_key_fields_are_accepted() {
    let schema = derive_schema(&source(), "MyRecord").unwrap();
    for key in ["id", "name", "raw"] {
        assert_eq!(validate_key(&schema, key), Ok(()), "key {key}");
    }
}

#[test]
fn compound_key_fields_are_rejected() {
    let schema = derive_schema(&source(), "MyRecord").unwrap();
    for (key, found) in [("tags", "array"), ("attrs", "map"), ("s", "record")] {
        assert_eq!(
            validate_key(&schema, key),
            Err(TranscodeError::UnsupportedKeyType {
                field: key.to_string(),
                detail: format!("key must be a primitive, found {found}"),
            })
        );
    }
}

#[test]
fn missing_key_field_is_rejected() {
    let schema = derive_schema(&source(), "MyRecord").unwrap();
    assert!(matches!(
        validate_key(&schema, "x"),
        Err(TranscodeError::UnsupportedKeyType { ref field, .. }) if field == "x"
    ));
}
