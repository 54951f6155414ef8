//! Target schema model: named records with nullable fields.

use std::fmt::{Display, Error, Formatter, Result, Write as _};

use hcat2avro_core::PrimitiveType;

/// Target data type. Primitives reuse the catalog [`PrimitiveType`] vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum AvroType {
    Primitive(PrimitiveType),
    Array(Box<ElementDef>),
    /// Keys are always strings.
    Map(Box<ElementDef>),
    Record(RecordSchema),
}

impl AvroType {
    pub fn is_primitive(&self) -> bool {
        matches!(self, AvroType::Primitive(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AvroType::Primitive(p) => primitive_name(*p),
            AvroType::Array(_) => "array",
            AvroType::Map(_) => "map",
            AvroType::Record(_) => "record",
        }
    }
}

/// Avro spelling of a primitive.
pub fn primitive_name(ty: PrimitiveType) -> &'static str {
    match ty {
        PrimitiveType::Int32 => "int",
        PrimitiveType::Int64 => "long",
        PrimitiveType::Float32 => "float",
        PrimitiveType::Float64 => "double",
        PrimitiveType::Boolean => "boolean",
        PrimitiveType::String => "string",
        PrimitiveType::Binary => "bytes",
    }
}

/// Type plus nullability, used for fields, array elements and map values.
///
/// A nullable element corresponds to the union `["null", T]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDef {
    pub avro_type: AvroType,
    pub nullable: bool,
}

impl ElementDef {
    pub fn new(avro_type: AvroType, nullable: bool) -> Self {
        Self {
            avro_type,
            nullable,
        }
    }

    pub fn nullable(avro_type: AvroType) -> Self {
        Self::new(avro_type, true)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvroField {
    pub name: String,
    pub element: ElementDef,
}

impl AvroField {
    pub fn new(name: impl Into<String>, avro_type: AvroType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            element: ElementDef::new(avro_type, nullable),
        }
    }
}

/// Named record type. The top-level target schema and every nested struct
/// are records.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<AvroField>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>, fields: Vec<AvroField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&AvroField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of this record and every record nested in it, depth-first.
    pub fn record_names(&self) -> Vec<&str> {
        fn walk<'a>(ty: &'a AvroType, out: &mut Vec<&'a str>) {
            match ty {
                AvroType::Primitive(_) => {}
                AvroType::Array(elem) | AvroType::Map(elem) => walk(&elem.avro_type, out),
                AvroType::Record(record) => {
                    out.push(&record.name);
                    for field in &record.fields {
                        walk(&field.element.avro_type, out);
                    }
                }
            }
        }

        let mut out = vec![self.name.as_str()];
        for field in &self.fields {
            walk(&field.element.avro_type, &mut out);
        }
        out
    }
}

impl Display for RecordSchema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = format_record_schema(self)?;
        f.write_str(&text)
    }
}

/// Format a record schema in a readable style:
/// primitive fields are rendered in one line, compound fields are pretty-printed.
pub fn format_record_schema(schema: &RecordSchema) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "name: {}", schema.name)?;
    writeln!(out, "fields:")?;
    for field in &schema.fields {
        format_labeled_type(&field.name, &field.element, 4, &mut out)?;
    }
    Ok(out)
}

fn format_element(elem: &ElementDef, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", elem.avro_type.type_name())?;
    writeln!(out, "{pad}nullable: {}", elem.nullable)?;

    match &elem.avro_type {
        AvroType::Record(record) => {
            writeln!(out, "{pad}name: {}", record.name)?;
            writeln!(out, "{pad}fields:")?;
            for child in &record.fields {
                format_labeled_type(&child.name, &child.element, indent + 4, out)?;
            }
        }
        AvroType::Array(item) => format_labeled_type("item", item, indent, out)?,
        AvroType::Map(value) => format_labeled_type("value", value, indent, out)?,
        AvroType::Primitive(_) => unreachable!("{:?} is not a compound type", elem.avro_type),
    }

    Ok(())
}

fn format_labeled_type(label: &str, elem: &ElementDef, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if elem.avro_type.is_primitive() {
        writeln!(
            out,
            "{pad}{label}: {{ type: {}, nullable: {} }}",
            elem.avro_type.type_name(),
            elem.nullable
        )?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_element(elem, indent + 4, out)?;
    }
    Ok(())
}
