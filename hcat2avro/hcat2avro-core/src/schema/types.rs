use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// Primitive kinds shared by the catalog and target schema models.
///
/// Variant names mirror [`Value`](crate::Value) for consistency (values ↔ types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    String,
    Binary,
}

impl PrimitiveType {
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::String => "string",
            PrimitiveType::Binary => "binary",
        }
    }

    /// Catalog spelling, as accepted by [`parse_type`](crate::parse_type).
    pub fn catalog_name(&self) -> &'static str {
        match self {
            PrimitiveType::Int32 => "int",
            PrimitiveType::Int64 => "bigint",
            PrimitiveType::Float32 => "float",
            PrimitiveType::Float64 => "double",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::String => "string",
            PrimitiveType::Binary => "binary",
        }
    }
}

/// Kind of a catalog column or struct member.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Primitive(PrimitiveType),
    List(Box<FieldKind>),
    /// Catalog maps carry a primitive key kind; only `String` keys can be
    /// carried over to the target model.
    Map {
        key: PrimitiveType,
        value: Box<FieldKind>,
    },
    Struct(FieldDefs),
}

impl FieldKind {
    pub fn list(elem: FieldKind) -> Self {
        Self::List(Box::new(elem))
    }

    pub fn map(key: PrimitiveType, value: FieldKind) -> Self {
        Self::Map {
            key,
            value: Box::new(value),
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, FieldKind::Primitive(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Primitive(p) => p.type_name(),
            FieldKind::List(_) => "list",
            FieldKind::Map { .. } => "map",
            FieldKind::Struct(_) => "struct",
        }
    }
}

/// Renders the catalog type string, e.g. `map<string,array<int>>`.
impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FieldKind::Primitive(p) => f.write_str(p.catalog_name()),
            FieldKind::List(elem) => write!(f, "array<{elem}>"),
            FieldKind::Map { key, value } => write!(f, "map<{},{value}>", key.catalog_name()),
            FieldKind::Struct(fields) => {
                f.write_str("struct<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{}", field.name, field.kind)?;
                }
                f.write_str(">")
            }
        }
    }
}

/// Named catalog column or struct member.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn primitive(name: impl Into<String>, ty: PrimitiveType) -> Self {
        Self::new(name, FieldKind::Primitive(ty))
    }
}

/// Ordered collection of [`FieldDef`] used for table schemas and struct members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDefs(pub Vec<FieldDef>);

impl FieldDefs {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[FieldDef] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.0.iter()
    }

    /// Position of the member called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|f| f.name == name)
    }

    /// First name that appears more than once at this level.
    pub fn duplicate_name(&self) -> Option<&str> {
        self.0.iter().enumerate().find_map(|(i, f)| {
            self.0[..i]
                .iter()
                .any(|prev| prev.name == f.name)
                .then_some(f.name.as_str())
        })
    }
}

impl From<Vec<FieldDef>> for FieldDefs {
    fn from(value: Vec<FieldDef>) -> Self {
        Self(value)
    }
}

impl From<FieldDefs> for Vec<FieldDef> {
    fn from(value: FieldDefs) -> Self {
        value.0
    }
}

impl AsRef<[FieldDef]> for FieldDefs {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for FieldDefs {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for FieldDefs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_field_defs(self.as_slice())?;
        f.write_str(&text)
    }
}
