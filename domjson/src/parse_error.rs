// SPDX-License-Identifier: Apache-2.0

use crate::context::render_context;
use crate::cursor::Cursor;

/// What went wrong while decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The grammar required a specific byte and something else was found.
    /// `found` is `None` when the input ended instead.
    UnexpectedByte { expected: u8, found: Option<u8> },
    /// The byte at the current position starts no JSON value.
    UnknownValueType,
    /// One of `null`, `true`, `false` diverged mid-keyword.
    InvalidLiteral(&'static str),
    /// Sign/digit/fraction/exponent adjacency rules were violated, or the
    /// numeral slice failed integer/float parsing.
    InvalidNumber,
    /// The closing quote was never found.
    UnterminatedString,
    /// A backslash was followed by a character that names no escape.
    InvalidEscapeSequence,
    /// Invalid hex digits in a `\u` escape.
    InvalidUnicodeHex,
    /// Valid hex in a `\u` escape, but not a valid Unicode scalar value.
    InvalidUnicodeCodepoint,
    /// A decoded string was not valid UTF-8.
    InvalidUtf8,
    /// Object keys must be strings.
    NonStringKey,
    /// Container nesting exceeded [`MAX_DEPTH`](crate::MAX_DEPTH).
    MaxDepthExceeded,
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseErrorKind::UnexpectedByte {
                expected,
                found: Some(found),
            } => write!(
                f,
                "was expecting '{}' but got '{}' instead",
                *expected as char, *found as char
            ),
            ParseErrorKind::UnexpectedByte {
                expected,
                found: None,
            } => write!(
                f,
                "was expecting '{}' but reached the end of the input",
                *expected as char
            ),
            ParseErrorKind::UnknownValueType => {
                write!(f, "cannot determine the value type here")
            }
            ParseErrorKind::InvalidLiteral(literal) => {
                write!(f, "there was an error while reading in {literal}")
            }
            ParseErrorKind::InvalidNumber => write!(f, "this is not a valid number"),
            ParseErrorKind::UnterminatedString => write!(f, "this string is never closed"),
            ParseErrorKind::InvalidEscapeSequence => {
                write!(f, "this escape sequence is not recognized")
            }
            ParseErrorKind::InvalidUnicodeHex => {
                write!(f, "a \\u escape needs four hex digits")
            }
            ParseErrorKind::InvalidUnicodeCodepoint => {
                write!(f, "this \\u escape does not name a valid codepoint")
            }
            ParseErrorKind::InvalidUtf8 => write!(f, "this string is not valid UTF-8"),
            ParseErrorKind::NonStringKey => write!(f, "object keys can only be strings"),
            ParseErrorKind::MaxDepthExceeded => write!(f, "values are nested too deeply"),
        }
    }
}

/// A decode failure: what went wrong, where, and a rendered window of the
/// surrounding input.
///
/// The decoder propagates the first failure straight up to the caller; no
/// partial value tree survives it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: usize,
    context: String,
}

impl ParseError {
    /// Captures `kind` at the cursor's current position, rendering the
    /// surrounding input for the message.
    pub(crate) fn at(cursor: &Cursor, kind: ParseErrorKind) -> Self {
        Self {
            kind,
            position: cursor.pos(),
            context: render_context(cursor),
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Byte offset into the input at which decoding failed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The rendered input window around the failure.
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "there is an error around `{}`: {}",
            self.context, self.kind
        )
    }
}

impl std::error::Error for ParseError {}
