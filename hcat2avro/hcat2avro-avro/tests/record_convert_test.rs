use hcat2avro_avro::{
    AvroField, AvroType, AvroValue, GenericRecord, RecordSchema, TranscodeError, build_record,
    derive_schema,
};
use hcat2avro_core::{
    FieldDef, FieldDefs, FieldKind, InterchangeValue, PrimitiveType, SourceRecord, Value,
    serialize_record,
};

fn obj(entries: Vec<(&str, InterchangeValue)>) -> InterchangeValue {
    InterchangeValue::object(entries)
}

fn scalar(text: &str) -> InterchangeValue {
    InterchangeValue::scalar(text)
}

fn prim(ty: PrimitiveType) -> FieldKind {
    FieldKind::Primitive(ty)
}

#[test]
fn int_field_builds_present_value() {
    let source: FieldDefs = vec![FieldDef::primitive("a", PrimitiveType::Int32)].into();
    let schema = derive_schema(&source, "MyRecord").unwrap();

    let tree = serialize_record(&SourceRecord::new(vec![Value::Int32(7)]), &source).unwrap();
    let record = build_record(&tree, &schema).unwrap();

    assert_eq!(record.name(), "MyRecord");
    assert_eq!(record.get("a"), Some(&AvroValue::Int(7)));
}

#[test]
fn map_of_strings_passes_through_interchange() {
    let source: FieldDefs = vec![FieldDef::new(
        "m",
        FieldKind::map(PrimitiveType::String, prim(PrimitiveType::String)),
    )]
    .into();
    let schema = derive_schema(&source, "MyRecord").unwrap();
    let record_in = SourceRecord::new(vec![Value::Map(vec![(
        Value::string("k1"),
        Value::string("v1"),
    )])]);

    let tree = serialize_record(&record_in, &source).unwrap();
    assert_eq!(tree, obj(vec![("m", obj(vec![("k1", scalar("v1"))]))]));

    let record = build_record(&tree, &schema).unwrap();
    assert_eq!(
        record.get("m"),
        Some(&AvroValue::Map(vec![(
            "k1".to_string(),
            AvroValue::String("v1".to_string())
        )]))
    );
}

#[test]
fn struct_field_builds_nested_record() {
    let source: FieldDefs = vec![FieldDef::new(
        "s",
        FieldKind::Struct(vec![FieldDef::primitive("x", PrimitiveType::Int32)].into()),
    )]
    .into();
    let schema = derive_schema(&source, "MyRecord").unwrap();

    let tree = serialize_record(
        &SourceRecord::new(vec![Value::Struct(vec![Value::Int32(3)])]),
        &source,
    )
    .unwrap();
    let record = build_record(&tree, &schema).unwrap();

    let nested = record.get("s").and_then(AvroValue::as_record).unwrap();
    assert_eq!(nested.name(), "s");
    assert_eq!(nested.get("x"), Some(&AvroValue::Int(3)));
}

#[test]
fn map_of_map_builds_two_levels_deep() {
    let source: FieldDefs = vec![FieldDef::new(
        "mm",
        FieldKind::map(
            PrimitiveType::String,
            FieldKind::map(PrimitiveType::String, prim(PrimitiveType::Int32)),
        ),
    )]
    .into();
    let schema = derive_schema(&source, "MyRecord").unwrap();
    let record_in = SourceRecord::new(vec![Value::Map(vec![(
        Value::string("outer"),
        Value::Map(vec![(Value::string("inner"), Value::Int32(5))]),
    )])]);

    let tree = serialize_record(&record_in, &source).unwrap();
    let record = build_record(&tree, &schema).unwrap();

    let inner = record
        .get("mm")
        .and_then(|v| v.map_get("outer"))
        .and_then(|v| v.map_get("inner"));
    assert_eq!(inner, Some(&AvroValue::Int(5)));
}

#[test]
fn non_numeric_text_for_int_is_a_conversion_error() {
    let source: FieldDefs = vec![FieldDef::primitive("n", PrimitiveType::Int32)].into();
    let schema = derive_schema(&source, "MyRecord").unwrap();

    let err = build_record(&obj(vec![("n", scalar("abc"))]), &schema).unwrap_err();
    assert_eq!(
        err,
        TranscodeError::Conversion {
            path: "n".to_string(),
            text: "abc".to_string(),
            expected: "int",
        }
    );
}

#[test]
fn primitives_round_trip_exactly() {
    let source: FieldDefs = vec![
        FieldDef::primitive("i", PrimitiveType::Int32),
        FieldDef::primitive("l", PrimitiveType::Int64),
        FieldDef::primitive("f", PrimitiveType::Float32),
        FieldDef::primitive("d", PrimitiveType::Float64),
        FieldDef::primitive("b", PrimitiveType::Boolean),
        FieldDef::primitive("s", PrimitiveType::String),
        FieldDef::primitive("bin", PrimitiveType::Binary),
    ]
    .into();
    let schema = derive_schema(&source, "MyRecord").unwrap();
    let record_in = SourceRecord::new(vec![
        Value::Int32(i32::MIN),
        Value::Int64(i64::MAX),
        Value::Float32(0.1),
        Value::Float64(std::f64::consts::PI),
        Value::Boolean(false),
        Value::string("a \"quoted\" ∑ string"),
        Value::binary([0u8, 255, 10, 13]),
    ]);

    let tree = serialize_record(&record_in, &source).unwrap();
    let record = build_record(&tree, &schema).unwrap();

    assert_eq!(record.get("i"), Some(&AvroValue::Int(i32::MIN)));
    assert_eq!(record.get("l"), Some(&AvroValue::Long(i64::MAX)));
    assert_eq!(record.get("f"), Some(&AvroValue::Float(0.1)));
    assert_eq!(record.get("d"), Some(&AvroValue::Double(std::f64::consts::PI)));
    assert_eq!(record.get("b"), Some(&AvroValue::Boolean(false)));
    assert_eq!(
        record.get("s").and_then(AvroValue::as_str),
        Some("a \"quoted\" ∑ string")
    );
    assert_eq!(
        record.get("bin").and_then(AvroValue::as_bytes),
        Some(&[0u8, 255, 10, 13][..])
    );
}

#[test]
fn nulls_build_to_absent_values() {
    let source: FieldDefs = vec![
        FieldDef::primitive("n", PrimitiveType::Int32),
        FieldDef::new("l", FieldKind::list(prim(PrimitiveType::Int32))),
        FieldDef::new(
            "s",
            FieldKind::Struct(vec![FieldDef::primitive("x", PrimitiveType::Int32)].into()),
        ),
        FieldDef::new(
            "m",
            FieldKind::map(PrimitiveType::String, prim(PrimitiveType::Int64)),
        ),
    ]
    .into();
    let schema = derive_schema(&source, "MyRecord").unwrap();
    let record_in = SourceRecord::new(vec![
        Value::Null,
        Value::List(vec![Value::Int32(1), Value::Null]),
        Value::Struct(vec![Value::Null]),
        Value::Null,
    ]);

    let tree = serialize_record(&record_in, &source).unwrap();
    let record = build_record(&tree, &schema).unwrap();

    assert_eq!(record.get("n"), Some(&AvroValue::Null));
    assert_eq!(
        record.get("l"),
        Some(&AvroValue::Array(vec![AvroValue::Int(1), AvroValue::Null]))
    );
    let nested = record.get("s").and_then(AvroValue::as_record).unwrap();
    assert_eq!(nested.get("x"), Some(&AvroValue::Null));
    assert_eq!(record.get("m"), Some(&AvroValue::Null));
}

#[test]
fn missing_entries_are_absent_and_extra_entries_ignored() {
    let source: FieldDefs = vec![
        FieldDef::primitive("a", PrimitiveType::Int32),
        FieldDef::primitive("b", PrimitiveType::String),
    ]
    .into();
    let schema = derive_schema(&source, "MyRecord").unwrap();

    let record = build_record(
        &obj(vec![("b", scalar("x")), ("unknown", scalar("1"))]),
        &schema,
    )
    .unwrap();

    assert_eq!(
        record.fields(),
        &[
            ("a".to_string(), AvroValue::Null),
            ("b".to_string(), AvroValue::String("x".to_string())),
        ]
    );
}

#[test]
fn shape_disagreements_are_schema_mismatches() {
    let source: FieldDefs = vec![
        FieldDef::primitive("p", PrimitiveType::Int32),
        FieldDef::new("l", FieldKind::list(prim(PrimitiveType::Int32))),
        FieldDef::new(
            "s",
            FieldKind::Struct(vec![FieldDef::primitive("x", PrimitiveType::Int32)].into()),
        ),
    ]
    .into();
    let schema = derive_schema(&source, "MyRecord").unwrap();

    let cases = [
        (
            obj(vec![("p", InterchangeValue::Sequence(vec![]))]),
            "p",
            "expected int, got sequence",
        ),
        (obj(vec![("p", obj(vec![]))]), "p", "expected int, got object"),
        (obj(vec![("l", scalar("1"))]), "l", "expected array, got scalar"),
        (
            obj(vec![("l", InterchangeValue::Sequence(vec![obj(vec![])]))]),
            "l[0]",
            "expected int, got object",
        ),
        (
            obj(vec![("s", InterchangeValue::Sequence(vec![]))]),
            "s",
            "expected record, got sequence",
        ),
    ];

    for (tree, path, detail) in cases {
        assert_eq!(
            build_record(&tree, &schema),
            Err(TranscodeError::SchemaMismatch {
                path: path.to_string(),
                detail: detail.to_string(),
            })
        );
    }
}

#[test]
fn top_level_must_be_object() {
    let schema = RecordSchema::new("Empty", vec![]);
    assert!(matches!(
        build_record(&InterchangeValue::Null, &schema),
        Err(TranscodeError::SchemaMismatch { .. })
    ));
}

#[test]
fn non_nullable_fields_reject_null_and_missing() {
    let schema = RecordSchema::new(
        "Strict",
        vec![AvroField::new(
            "n",
            AvroType::Primitive(PrimitiveType::Int32),
            false,
        )],
    );

    assert!(matches!(
        build_record(&obj(vec![("n", InterchangeValue::Null)]), &schema),
        Err(TranscodeError::SchemaMismatch { ref path, .. }) if path == "n"
    ));
    assert!(matches!(
        build_record(&obj(vec![]), &schema),
        Err(TranscodeError::SchemaMismatch { ref path, .. }) if path == "n"
    ));
}

#[test]
fn same_inner_names_build_independently() {
    let inner = || {
        FieldKind::Struct(
            vec![FieldDef::new(
                "inner",
                FieldKind::Struct(vec![FieldDef::primitive("v", PrimitiveType::Int32)].into()),
            )]
            .into(),
        )
    };
    let source: FieldDefs = vec![FieldDef::new("s1", inner()), FieldDef::new("s2", inner())].into();
    let schema = derive_schema(&source, "MyRecord").unwrap();
    let record_in = SourceRecord::new(vec![
        Value::Struct(vec![Value::Struct(vec![Value::Int32(1)])]),
        Value::Struct(vec![Value::Struct(vec![Value::Int32(2)])]),
    ]);

    let tree = serialize_record(&record_in, &source).unwrap();
    let record = build_record(&tree, &schema).unwrap();

    let inner_of = |name: &str| {
        record
            .get(name)
            .and_then(AvroValue::as_record)
            .and_then(|r| r.get("inner"))
            .and_then(AvroValue::as_record)
            .cloned()
            .unwrap()
    };
    let a = inner_of("s1");
    let b = inner_of("s2");
    assert_eq!(a.name(), "s1_inner");
    assert_eq!(b.name(), "s2_inner");
    assert_eq!(a.get("v"), Some(&AvroValue::Int(1)));
    assert_eq!(b.get("v"), Some(&AvroValue::Int(2)));
}

#[test]
fn records_serialize_to_json() {
    let source: FieldDefs = vec![
        FieldDef::primitive("a", PrimitiveType::Int32),
        FieldDef::primitive("bin", PrimitiveType::Binary),
        FieldDef::new("l", FieldKind::list(prim(PrimitiveType::Boolean))),
        FieldDef::primitive("n", PrimitiveType::String),
    ]
    .into();
    let schema = derive_schema(&source, "MyRecord").unwrap();
    let record_in = SourceRecord::new(vec![
        Value::Int32(7),
        Value::binary([1u8, 2]),
        Value::List(vec![Value::Boolean(true)]),
        Value::Null,
    ]);

    let tree = serialize_record(&record_in, &source).unwrap();
    let record = build_record(&tree, &schema).unwrap();
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"a":7,"bin":"AQI=","l":[true],"n":null}"#
    );
}

#[test]
fn non_finite_floats_serialize_as_text_not_null() {
    let record = GenericRecord::new(
        "Floats",
        vec![
            ("nan".to_string(), AvroValue::Float(f32::NAN)),
            ("pos".to_string(), AvroValue::Double(f64::INFINITY)),
            ("neg".to_string(), AvroValue::Float(f32::NEG_INFINITY)),
            ("finite".to_string(), AvroValue::Double(0.5)),
            ("absent".to_string(), AvroValue::Null),
        ],
    );

    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"nan":"NaN","pos":"inf","neg":"-inf","finite":0.5,"absent":null}"#
    );
}
