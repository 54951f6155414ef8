use std::fmt::{Error, Result, Write as _};

use super::{FieldDef, FieldKind};

/// Format catalog field definitions in a readable style:
/// primitive fields are rendered in one line, compound fields are pretty-printed.
/// Nested fields follow the same rule.
pub fn format_field_defs(fields: impl AsRef<[FieldDef]>) -> std::result::Result<String, Error> {
    let mut out = String::new();
    for field in fields.as_ref() {
        format_labeled_kind(&field.name, &field.kind, 0, &mut out)?;
    }
    Ok(out)
}

fn format_kind(kind: &FieldKind, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", kind.type_name())?;

    match kind {
        FieldKind::Struct(fields) => {
            writeln!(out, "{pad}fields:")?;
            for child in fields.iter() {
                format_labeled_kind(&child.name, &child.kind, indent + 4, out)?;
            }
        }
        FieldKind::List(elem) => format_labeled_kind("item", elem, indent, out)?,
        FieldKind::Map { key, value } => {
            writeln!(out, "{pad}key: {}", key.type_name())?;
            format_labeled_kind("value", value, indent, out)?;
        }
        FieldKind::Primitive(_) => unreachable!("{kind:?} is not a compound type"),
    }

    Ok(())
}

fn format_labeled_kind(label: &str, kind: &FieldKind, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if let FieldKind::Primitive(p) = kind {
        writeln!(out, "{pad}{label}: {}", p.type_name())?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_kind(kind, indent + 4, out)?;
    }
    Ok(())
}
