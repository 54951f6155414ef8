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

#[test]
fn primitives_are_text_encoded() {
    let schema: FieldDefs = vec![
        FieldDef::primitive("i", PrimitiveType::Int32),
        FieldDef::primitive("l", PrimitiveType::Int64),
        FieldDef::primitive("f", PrimitiveType::Float32),
        FieldDef::primitive("d", PrimitiveType::Float64),
        FieldDef::primitive("b", PrimitiveType::Boolean),
        FieldDef::primitive("s", PrimitiveType::String),
        FieldDef::primitive("bin", PrimitiveType::Binary),
    ]
    .into();
    let record = SourceRecord::new(vec![
        Value::Int32(-7),
        Value::Int64(9_000_000_000),
        Value::Float32(1.5),
        Value::Float64(0.1),
        Value::Boolean(true),
        Value::string("héllo"),
        Value::binary([0u8, 159, 146, 150]),
    ]);

    let tree = serialize_record(&record, &schema).unwrap();
    assert_eq!(
        tree,
        obj(vec![
            ("i", scalar("-7")),
            ("l", scalar("9000000000")),
            ("f", scalar("1.5")),
            ("d", scalar("0.1")),
            ("b", scalar("true")),
            ("s", scalar("héllo")),
            ("bin", scalar("AJ+Slg==")),
        ])
    );
}

#[test]
fn null_complex_values_serialize_to_null_not_empty_containers() {
    let schema: FieldDefs = vec![
        FieldDef::new("l", FieldKind::list(FieldKind::Primitive(PrimitiveType::Int32))),
        FieldDef::new(
            "m",
            FieldKind::map(PrimitiveType::String, FieldKind::Primitive(PrimitiveType::Int32)),
        ),
        FieldDef::new(
            "s",
            FieldKind::Struct(vec![FieldDef::primitive("x", PrimitiveType::Int32)].into()),
        ),
        FieldDef::primitive("p", PrimitiveType::String),
    ]
    .into();
    let record = SourceRecord::new(vec![Value::Null, Value::Null, Value::Null, Value::Null]);

    let tree = serialize_record(&record, &schema).unwrap();
    assert_eq!(
        tree,
        obj(vec![
            ("l", InterchangeValue::Null),
            ("m", InterchangeValue::Null),
            ("s", InterchangeValue::Null),
            ("p", InterchangeValue::Null),
        ])
    );
}

#[test]
fn nested_lists_maps_and_structs() {
    let inner = FieldKind::Struct(
        vec![
            FieldDef::primitive("x", PrimitiveType::Int32),
            FieldDef::new("tags", FieldKind::list(FieldKind::Primitive(PrimitiveType::String))),
        ]
        .into(),
    );
    let schema: FieldDefs = vec![FieldDef::new(
        "mm",
        FieldKind::map(
            PrimitiveType::String,
            FieldKind::map(PrimitiveType::String, inner),
        ),
    )]
    .into();
    let record = SourceRecord::new(vec![Value::Map(vec![(
        Value::string("outer"),
        Value::Map(vec![(
            Value::string("inner"),
            Value::Struct(vec![
                Value::Int32(5),
                Value::List(vec![Value::string("a"), Value::Null]),
            ]),
        )]),
    )])]);

    let tree = serialize_record(&record, &schema).unwrap();
    assert_eq!(
        tree,
        obj(vec![(
            "mm",
            obj(vec![(
                "outer",
                obj(vec![(
                    "inner",
                    obj(vec![
                        ("x", scalar("5")),
                        (
                            "tags",
                            InterchangeValue::Sequence(vec![scalar("a"), InterchangeValue::Null]),
                        ),
                    ]),
                )]),
            )]),
        )])
    );
}

#[test]
fn value_of_wrong_kind_reports_path() {
    let schema: FieldDefs = vec![FieldDef::new(
        "s",
        FieldKind::Struct(
            vec![FieldDef::new(
                "l",
                FieldKind::list(FieldKind::Primitive(PrimitiveType::Int64)),
            )]
            .into(),
        ),
    )]
    .into();
    let record = SourceRecord::new(vec![Value::Struct(vec![Value::List(vec![
        Value::Int64(1),
        Value::string("two"),
    ])])]);

    let err = serialize_record(&record, &schema).unwrap_err();
    assert_eq!(err.path, "s.l[1]");
    assert_eq!(err.detail, "expected int64, got String");
}

#[test]
fn wrong_arity_is_rejected() {
    let schema: FieldDefs = vec![
        FieldDef::primitive("a", PrimitiveType::Int32),
        FieldDef::primitive("b", PrimitiveType::Int32),
    ]
    .into();
    let record = SourceRecord::new(vec![Value::Int32(1)]);

    let err = serialize_record(&record, &schema).unwrap_err();
    assert_eq!(err.path, "<root>");
    assert_eq!(err.detail, "expected 2 fields, got 1");
}

#[test]
fn non_string_map_keys_are_coerced_to_text() {
    let schema: FieldDefs = vec![FieldDef::new(
        "m",
        FieldKind::map(PrimitiveType::Int32, FieldKind::Primitive(PrimitiveType::Boolean)),
    )]
    .into();
    let record = SourceRecord::new(vec![Value::Map(vec![
        (Value::Int32(1), Value::Boolean(false)),
        (Value::Int32(2), Value::Boolean(true)),
    ])]);

    let tree = serialize_record(&record, &schema).unwrap();
    assert_eq!(
        tree.get("m"),
        Some(&obj(vec![("1", scalar("false")), ("2", scalar("true"))]))
    );
}

#[test]
fn interchange_tree_serializes_as_json() {
    let tree = obj(vec![
        ("n", InterchangeValue::Null),
        ("s", scalar("7")),
        ("l", InterchangeValue::Sequence(vec![scalar("a")])),
    ]);
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, r#"{"n":null,"s":"7","l":["a"]}"#);
}
