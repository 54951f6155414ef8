//! Text encoding of primitive values used inside the interchange tree.

use base64::{Engine, engine::GeneralPurpose, engine::general_purpose};

use crate::{schema::PrimitiveType, value::Value};

/// Engine used for `Binary` scalars: standard alphabet with padding.
pub const BASE64: GeneralPurpose = general_purpose::STANDARD;

/// Encode a primitive value as interchange text.
///
/// Integers and floats use Rust's canonical decimal form (shortest string that
/// parses back to the same value; `NaN`, `inf`, `-inf` for non-finite floats),
/// booleans are `true`/`false`, binary is base64 and strings pass through.
///
/// Returns `None` if `value` is not a non-null value of kind `ty`.
pub fn encode_scalar(ty: PrimitiveType, value: &Value) -> Option<String> {
    Some(match (ty, value) {
        (PrimitiveType::Int32, Value::Int32(v)) => v.to_string(),
        (PrimitiveType::Int64, Value::Int64(v)) => v.to_string(),
        (PrimitiveType::Float32, Value::Float32(v)) => v.to_string(),
        (PrimitiveType::Float64, Value::Float64(v)) => v.to_string(),
        (PrimitiveType::Boolean, Value::Boolean(v)) => v.to_string(),
        (PrimitiveType::String, Value::String(v)) => v.to_string(),
        (PrimitiveType::Binary, Value::Binary(v)) => BASE64.encode(v),
        _ => return None,
    })
}
