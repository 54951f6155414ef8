//! Catalog type-string parser built on nom parser combinators.
//!
//! Accepted grammar (keywords are case-insensitive, whitespace between tokens
//! is ignored):
//!
//! ```text
//! type      := primitive | array | map | struct
//! primitive := tinyint | smallint | int | integer | bigint | float | double
//!            | boolean | string | varchar(N) | char(N) | binary
//! array     := array<type>
//! map       := map<primitive,type>
//! struct    := struct<name:type, ...>
//! ```
//!
//! `tinyint` and `smallint` widen to `Int32`; `varchar(N)` and `char(N)` are
//! plain strings. Every other catalog type is rejected.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map, recognize, value},
    error::{Error, ErrorKind},
    multi::separated_list0,
    sequence::{delimited, separated_pair, terminated, tuple},
};

use super::{FieldDef, FieldDefs, FieldKind, PrimitiveType};
use crate::{MAX_DEPTH, TypeParseError};

/// Deepest `<...>` nesting accepted in a column type. The column itself
/// takes one [`FieldPath`](crate::FieldPath) segment, so every accepted type
/// stays within [`MAX_DEPTH`] segments when walked.
pub const MAX_TYPE_NESTING: usize = MAX_DEPTH - 1;

/// Parse a catalog type string such as `map<string,array<struct<a:int>>>`.
pub fn parse_type(type_string: &str) -> Result<FieldKind, TypeParseError> {
    if nesting_depth(type_string) > MAX_TYPE_NESTING {
        return Err(TypeParseError::TooDeep {
            type_string: type_string.to_string(),
            max_depth: MAX_TYPE_NESTING,
        });
    }

    let kind = match all_consuming(delimited(ws, field_kind, ws))(type_string) {
        Ok((_, kind)) => kind,
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
            return Err(TypeParseError::Syntax {
                type_string: type_string.to_string(),
                offset: type_string.len() - e.input.len(),
            });
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(TypeParseError::Syntax {
                type_string: type_string.to_string(),
                offset: type_string.len(),
            });
        }
    };

    if let Some(name) = first_duplicate_member(&kind) {
        return Err(TypeParseError::DuplicateField {
            type_string: type_string.to_string(),
            name: name.to_string(),
        });
    }
    Ok(kind)
}

fn nesting_depth(s: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    for c in s.chars() {
        match c {
            '<' => {
                depth += 1;
                max = max.max(depth);
            }
            '>' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

fn first_duplicate_member(kind: &FieldKind) -> Option<&str> {
    match kind {
        FieldKind::Primitive(_) => None,
        FieldKind::List(elem) => first_duplicate_member(elem),
        FieldKind::Map { value, .. } => first_duplicate_member(value),
        FieldKind::Struct(fields) => fields
            .duplicate_name()
            .or_else(|| fields.iter().find_map(|f| first_duplicate_member(&f.kind))),
    }
}

fn field_kind(input: &str) -> IResult<&str, FieldKind> {
    alt((
        array_kind,
        map_kind,
        struct_kind,
        map(primitive_type, FieldKind::Primitive),
    ))(input)
}

fn primitive_type(input: &str) -> IResult<&str, PrimitiveType> {
    terminated(
        alt((
            value(
                PrimitiveType::Int32,
                alt((
                    tag_no_case("tinyint"),
                    tag_no_case("smallint"),
                    tag_no_case("integer"),
                    tag_no_case("int"),
                )),
            ),
            value(PrimitiveType::Int64, tag_no_case("bigint")),
            value(PrimitiveType::Float32, tag_no_case("float")),
            value(PrimitiveType::Float64, tag_no_case("double")),
            value(PrimitiveType::Boolean, tag_no_case("boolean")),
            value(
                PrimitiveType::String,
                alt((
                    bounded("varchar"),
                    bounded("char"),
                    tag_no_case("string"),
                )),
            ),
            value(PrimitiveType::Binary, tag_no_case("binary")),
        )),
        keyword_boundary,
    )(input)
}

/// Parse `name(N)`, e.g. `varchar(64)`.
fn bounded<'a>(name: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    recognize(tuple((
        tag_no_case(name),
        ws,
        char('('),
        ws,
        digit1,
        ws,
        char(')'),
    )))
}

/// Parse `array<T>`
fn array_kind(input: &str) -> IResult<&str, FieldKind> {
    map(
        delimited(
            tuple((tag_no_case("array"), ws, char('<'), ws)),
            field_kind,
            tuple((ws, char('>'))),
        ),
        FieldKind::list,
    )(input)
}

/// Parse `map<K,V>`; the key must be primitive.
fn map_kind(input: &str) -> IResult<&str, FieldKind> {
    map(
        delimited(
            tuple((tag_no_case("map"), ws, char('<'), ws)),
            separated_pair(primitive_type, tuple((ws, char(','), ws)), field_kind),
            tuple((ws, char('>'))),
        ),
        |(key, value)| FieldKind::map(key, value),
    )(input)
}

/// Parse `struct<a:T,b:U>`
fn struct_kind(input: &str) -> IResult<&str, FieldKind> {
    map(
        delimited(
            tuple((tag_no_case("struct"), ws, char('<'), ws)),
            separated_list0(tuple((ws, char(','), ws)), struct_member),
            tuple((ws, char('>'))),
        ),
        |fields| FieldKind::Struct(FieldDefs::new(fields)),
    )(input)
}

fn struct_member(input: &str) -> IResult<&str, FieldDef> {
    map(
        separated_pair(identifier, tuple((ws, char(':'), ws)), field_kind),
        |(name, kind)| FieldDef::new(name, kind),
    )(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_ident_continue)(input)
}

fn ws(input: &str) -> IResult<&str, ()> {
    value((), multispace0)(input)
}

fn keyword_boundary(input: &str) -> IResult<&str, ()> {
    if input.chars().next().is_some_and(is_ident_continue) {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((input, ()))
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
