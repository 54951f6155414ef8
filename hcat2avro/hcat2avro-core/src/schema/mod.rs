//! Catalog-side schema model.

mod format;
mod parse;
mod types;

pub use format::format_field_defs;
pub use parse::{MAX_TYPE_NESTING, parse_type};
pub use types::{FieldDef, FieldDefs, FieldKind, PrimitiveType};
