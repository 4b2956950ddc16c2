// SPDX-License-Identifier: Apache-2.0

use crate::context::render_context;
use crate::cursor::Cursor;
use crate::decoder::MAX_DEPTH;
use crate::escape::unescape_quoted;
use crate::parse_error::ParseError;

/// A well-formedness failure: a human-readable message plus the byte
/// position it points at.
///
/// Unlike the decoder's [`ParseError`], this is a plain value the caller can
/// inspect programmatically; `validate` never panics and threads the result
/// through every frame of the descent.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    message: String,
    position: usize,
    context: String,
}

impl ValidationError {
    fn at(cursor: &Cursor, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: cursor.pos(),
            context: render_context(cursor),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the input at which validation failed.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "there is an error around `{}`: {}",
            self.context, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

// Cursor-level failures (from `expect`) carry a ParseError; fold them into
// the validator's result style.
impl From<ParseError> for ValidationError {
    fn from(err: ParseError) -> Self {
        Self {
            message: err.kind().to_string(),
            position: err.position(),
            context: err.context().to_string(),
        }
    }
}

/// Checks that `input` holds exactly one well-formed JSON document.
///
/// Mirrors the decoder's grammar without building a value tree, with two
/// differences: numeric digit-adjacency rules get dedicated messages, and
/// any non-whitespace bytes after the top-level value are rejected.
pub fn validate(input: &[u8]) -> Result<(), ValidationError> {
    log::trace!("validating {} bytes", input.len());
    let mut cursor = Cursor::new(input);
    validate_value(&mut cursor, 0)?;
    cursor.skip_whitespace();
    if cursor.has_next() {
        return Err(ValidationError::at(
            &cursor,
            "there are extra characters at the end of the document",
        ));
    }
    Ok(())
}

fn validate_value(cursor: &mut Cursor, depth: usize) -> Result<(), ValidationError> {
    cursor.skip_whitespace();
    match cursor.current() {
        b'n' => validate_literal(cursor, "null"),
        b't' => validate_literal(cursor, "true"),
        b'f' => validate_literal(cursor, "false"),
        b'0'..=b'9' | b'-' => validate_number(cursor),
        b'"' => validate_string(cursor),
        b'[' => validate_array(cursor, depth),
        b'{' => validate_object(cursor, depth),
        _ => Err(ValidationError::at(
            cursor,
            "cannot determine the value type here",
        )),
    }
}

fn validate_literal(cursor: &mut Cursor, literal: &'static str) -> Result<(), ValidationError> {
    for &expected in literal.as_bytes() {
        if cursor.current() != expected {
            return Err(ValidationError::at(
                cursor,
                format!("there was an error while reading in {literal}"),
            ));
        }
        cursor.advance();
    }
    Ok(())
}

/// Character-class walk over the numeral grammar. Each optional part that
/// was started must be followed by at least one digit, and each violation
/// names the rule it broke.
fn validate_number(cursor: &mut Cursor) -> Result<(), ValidationError> {
    if matches!(cursor.current(), b'-' | b'+') {
        cursor.advance();
        if !cursor.current().is_ascii_digit() {
            return Err(ValidationError::at(
                cursor,
                "there needs to be a digit after - or +",
            ));
        }
    }
    cursor.skip_digits();

    if cursor.current() == b'.' {
        cursor.advance();
        if !cursor.current().is_ascii_digit() {
            return Err(ValidationError::at(
                cursor,
                "there needs to be a digit after a decimal point",
            ));
        }
        cursor.skip_digits();
    }

    if matches!(cursor.current(), b'e' | b'E') {
        cursor.advance();
        if matches!(cursor.current(), b'-' | b'+') {
            cursor.advance();
        }
        if !cursor.current().is_ascii_digit() {
            return Err(ValidationError::at(
                cursor,
                "there needs to be at least one digit after e or E",
            ));
        }
        cursor.skip_digits();
    }
    Ok(())
}

/// Same scan as the decoder's string routine; the matched slice is still
/// round-tripped through the unescape routine so bad escapes are caught,
/// the result is just dropped.
fn validate_string(cursor: &mut Cursor) -> Result<(), ValidationError> {
    cursor.skip_whitespace();
    let start = cursor.pos();
    cursor.expect(b'"')?;
    if cursor.current() == b'"' {
        cursor.advance();
        return Ok(());
    }
    while cursor.has_next() && cursor.current() != b'"' {
        if cursor.current() == b'\\' {
            cursor.advance();
        }
        cursor.advance();
    }
    if !cursor.has_next() {
        return Err(ValidationError::at(cursor, "this string is never closed"));
    }
    cursor.advance();
    unescape_quoted(cursor.slice_from(start))
        .map(drop)
        .map_err(|kind| ValidationError::at(cursor, kind.to_string()))
}

fn validate_array(cursor: &mut Cursor, depth: usize) -> Result<(), ValidationError> {
    if depth >= MAX_DEPTH {
        return Err(ValidationError::at(cursor, "values are nested too deeply"));
    }
    cursor.expect(b'[')?;
    cursor.skip_whitespace();
    if cursor.current() == b']' {
        cursor.advance();
        return Ok(());
    }
    while cursor.has_next() {
        validate_value(cursor, depth + 1)?;
        cursor.skip_whitespace();
        if cursor.current() == b']' {
            break;
        }
        cursor.expect(b',')?;
    }
    cursor.expect(b']')?;
    Ok(())
}

fn validate_object(cursor: &mut Cursor, depth: usize) -> Result<(), ValidationError> {
    if depth >= MAX_DEPTH {
        return Err(ValidationError::at(cursor, "values are nested too deeply"));
    }
    cursor.expect(b'{')?;
    cursor.skip_whitespace();
    if cursor.current() == b'}' {
        cursor.advance();
        return Ok(());
    }
    while cursor.has_next() {
        cursor.skip_whitespace();
        if cursor.current() != b'"' {
            return Err(ValidationError::at(
                cursor,
                "object keys can only be strings",
            ));
        }
        validate_string(cursor)?;
        cursor.expect(b':')?;
        validate_value(cursor, depth + 1)?;
        cursor.skip_whitespace();
        if cursor.current() == b'}' {
            break;
        }
        cursor.expect(b',')?;
    }
    cursor.expect(b'}')?;
    Ok(())
}
