use base64::Engine;
use hcat2avro_core::{BASE64, FieldPath, PrimitiveType};

use crate::{error::TranscodeError, record::AvroValue, schema::primitive_name};

/// Parse interchange text into a primitive of type `ty`.
///
/// Parsing is exact: booleans accept only `true`/`false`, binary must be
/// padded standard base64, and finite float text that overflows the target
/// width is rejected rather than turned into infinity.
pub(super) fn parse_scalar(
    text: &str,
    ty: PrimitiveType,
    path: &FieldPath,
) -> Result<AvroValue, TranscodeError> {
    let parsed = match ty {
        PrimitiveType::Int32 => text.parse().ok().map(AvroValue::Int),
        PrimitiveType::Int64 => text.parse().ok().map(AvroValue::Long),
        PrimitiveType::Float32 => text
            .parse::<f32>()
            .ok()
            .filter(|v| !v.is_infinite() || names_infinity(text))
            .map(AvroValue::Float),
        PrimitiveType::Float64 => text
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_infinite() || names_infinity(text))
            .map(AvroValue::Double),
        PrimitiveType::Boolean => text.parse().ok().map(AvroValue::Boolean),
        PrimitiveType::String => Some(AvroValue::String(text.to_string())),
        PrimitiveType::Binary => BASE64.decode(text).ok().map(AvroValue::Bytes),
    };

    parsed.ok_or_else(|| TranscodeError::Conversion {
        path: path.to_string(),
        text: text.to_string(),
        expected: primitive_name(ty),
    })
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
