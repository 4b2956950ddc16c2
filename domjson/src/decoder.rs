// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

use crate::cursor::Cursor;
use crate::escape::unescape_quoted;
use crate::parse_error::{ParseError, ParseErrorKind};
use crate::value::Value;

/// Maximum container nesting accepted by both `decode` and `validate`.
///
/// The grammar itself imposes no limit, but every nesting level is a stack
/// frame in the recursive descent, so adversarial input has to be cut off
/// before it exhausts the call stack.
pub const MAX_DEPTH: usize = 128;

/// Decodes a JSON document into a [`Value`] tree.
///
/// Fails fast: the first grammar violation propagates straight out and no
/// partial tree is returned. Bytes after the top-level value are not
/// examined here; [`validate`](crate::validate) rejects them.
pub fn decode(input: &[u8]) -> Result<Value, ParseError> {
    log::trace!("decoding {} bytes", input.len());
    let mut cursor = Cursor::new(input);
    decode_value(&mut cursor, 0)
}

fn decode_value(cursor: &mut Cursor, depth: usize) -> Result<Value, ParseError> {
    cursor.skip_whitespace();
    match cursor.current() {
        b'n' => decode_literal(cursor, "null", Value::Null),
        b't' => decode_literal(cursor, "true", Value::Bool(true)),
        b'f' => decode_literal(cursor, "false", Value::Bool(false)),
        b'0'..=b'9' | b'-' => decode_number(cursor),
        b'"' => Ok(Value::String(decode_string(cursor)?)),
        b'[' => decode_array(cursor, depth),
        b'{' => decode_object(cursor, depth),
        _ => Err(ParseError::at(cursor, ParseErrorKind::UnknownValueType)),
    }
}

/// Walks the keyword byte by byte, failing on the first divergence without
/// advancing past it, so the error position points at the offending byte.
fn decode_literal(
    cursor: &mut Cursor,
    literal: &'static str,
    value: Value,
) -> Result<Value, ParseError> {
    for &expected in literal.as_bytes() {
        if cursor.current() != expected {
            return Err(ParseError::at(cursor, ParseErrorKind::InvalidLiteral(literal)));
        }
        cursor.advance();
    }
    Ok(value)
}

/// Scans the numeral grammar, then parses the whole matched slice in one go
/// with the standard library's integer or float parser. A `.` or exponent
/// marker anywhere in the numeral makes it a `Float`.
fn decode_number(cursor: &mut Cursor) -> Result<Value, ParseError> {
    let start = cursor.pos();
    let mut is_float = false;

    if matches!(cursor.current(), b'-' | b'+') {
        cursor.advance();
        if !cursor.current().is_ascii_digit() {
            return Err(ParseError::at(cursor, ParseErrorKind::InvalidNumber));
        }
    }
    cursor.skip_digits();

    if cursor.current() == b'.' {
        is_float = true;
        cursor.advance();
        if !cursor.current().is_ascii_digit() {
            return Err(ParseError::at(cursor, ParseErrorKind::InvalidNumber));
        }
        cursor.skip_digits();
    }

    if matches!(cursor.current(), b'e' | b'E') {
        is_float = true;
        cursor.advance();
        if matches!(cursor.current(), b'-' | b'+') {
            cursor.advance();
        }
        if !cursor.current().is_ascii_digit() {
            return Err(ParseError::at(cursor, ParseErrorKind::InvalidNumber));
        }
        cursor.skip_digits();
    }

    let raw = cursor.slice_from(start);
    let text =
        core::str::from_utf8(raw).map_err(|_| ParseError::at(cursor, ParseErrorKind::InvalidNumber))?;
    if is_float {
        text.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ParseError::at(cursor, ParseErrorKind::InvalidNumber))
    } else {
        text.parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| ParseError::at(cursor, ParseErrorKind::InvalidNumber))
    }
}

/// Two-pass string decode: scan forward to the closing quote, stepping over
/// `\`-escaped pairs without interpreting them, then hand the whole quoted
/// slice to the unescape routine.
pub(crate) fn decode_string(cursor: &mut Cursor) -> Result<String, ParseError> {
    cursor.skip_whitespace();
    let start = cursor.pos();
    cursor.expect(b'"')?;
    if cursor.current() == b'"' {
        cursor.advance();
        return Ok(String::new());
    }
    while cursor.has_next() && cursor.current() != b'"' {
        if cursor.current() == b'\\' {
            cursor.advance();
        }
        cursor.advance();
    }
    if !cursor.has_next() {
        return Err(ParseError::at(cursor, ParseErrorKind::UnterminatedString));
    }
    cursor.advance();
    unescape_quoted(cursor.slice_from(start)).map_err(|kind| ParseError::at(cursor, kind))
}

fn decode_array(cursor: &mut Cursor, depth: usize) -> Result<Value, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::at(cursor, ParseErrorKind::MaxDepthExceeded));
    }
    cursor.expect(b'[')?;
    let mut items = Vec::new();
    cursor.skip_whitespace();
    if cursor.current() == b']' {
        cursor.advance();
        return Ok(Value::Array(items));
    }
    while cursor.has_next() {
        items.push(decode_value(cursor, depth + 1)?);
        cursor.skip_whitespace();
        if cursor.current() == b']' {
            break;
        }
        cursor.expect(b',')?;
    }
    cursor.expect(b']')?;
    Ok(Value::Array(items))
}

fn decode_object(cursor: &mut Cursor, depth: usize) -> Result<Value, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::at(cursor, ParseErrorKind::MaxDepthExceeded));
    }
    cursor.expect(b'{')?;
    let mut entries = IndexMap::new();
    cursor.skip_whitespace();
    if cursor.current() == b'}' {
        cursor.advance();
        return Ok(Value::Object(entries));
    }
    while cursor.has_next() {
        cursor.skip_whitespace();
        if cursor.current() != b'"' {
            return Err(ParseError::at(cursor, ParseErrorKind::NonStringKey));
        }
        let key = decode_string(cursor)?;
        cursor.expect(b':')?;
        let value = decode_value(cursor, depth + 1)?;
        // Last write wins on duplicate keys.
        entries.insert(key, value);
        cursor.skip_whitespace();
        if cursor.current() == b'}' {
            break;
        }
        cursor.expect(b',')?;
    }
    cursor.expect(b'}')?;
    Ok(Value::Object(entries))
}
