// SPDX-License-Identifier: Apache-2.0

//! Escape-sequence processing shared by the decoder and the validator.
//!
//! The string scan finds the closing quote without interpreting escapes;
//! the whole quoted slice is then handed here in a second pass.

use crate::parse_error::ParseErrorKind;

/// Resolves the escape sequences in a quoted string slice.
///
/// `quoted` must include both surrounding `"` bytes, exactly as sliced out
/// by the string scan. Returns the unescaped contents as an owned string,
/// independent of the input buffer.
pub(crate) fn unescape_quoted(quoted: &[u8]) -> Result<String, ParseErrorKind> {
    let inner = quoted
        .strip_prefix(b"\"")
        .and_then(|rest| rest.strip_suffix(b"\""))
        .ok_or(ParseErrorKind::UnterminatedString)?;

    let mut out = Vec::with_capacity(inner.len());
    let mut i = 0;
    while i < inner.len() {
        let byte = inner[i];
        if byte != b'\\' {
            // Raw bytes pass through untouched; UTF-8 is checked once at
            // the end.
            out.push(byte);
            i += 1;
            continue;
        }
        let escape = *inner
            .get(i + 1)
            .ok_or(ParseErrorKind::InvalidEscapeSequence)?;
        if escape == b'u' {
            let hex = inner
                .get(i + 2..i + 6)
                .ok_or(ParseErrorKind::InvalidUnicodeHex)?;
            let ch = unescape_unicode(hex)?;
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            i += 6;
        } else {
            out.push(simple_escape(escape)?);
            i += 2;
        }
    }
    String::from_utf8(out).map_err(|_| ParseErrorKind::InvalidUtf8)
}

/// Maps the character following a backslash to the byte it denotes.
fn simple_escape(escape: u8) -> Result<u8, ParseErrorKind> {
    match escape {
        b'"' => Ok(b'"'),
        b'\\' => Ok(b'\\'),
        b'/' => Ok(b'/'),
        b'b' => Ok(0x08),
        b'f' => Ok(0x0C),
        b'n' => Ok(b'\n'),
        b'r' => Ok(b'\r'),
        b't' => Ok(b'\t'),
        _ => Err(ParseErrorKind::InvalidEscapeSequence),
    }
}

/// Numeric value of a single hex digit.
fn hex_digit(byte: u8) -> Result<u32, ParseErrorKind> {
    match byte {
        b'0'..=b'9' => Ok((byte - b'0') as u32),
        b'a'..=b'f' => Ok((byte - b'a' + 10) as u32),
        b'A'..=b'F' => Ok((byte - b'A' + 10) as u32),
        _ => Err(ParseErrorKind::InvalidUnicodeHex),
    }
}

/// Decodes the four hex digits of a `\uXXXX` escape into a scalar value.
///
/// Surrogate halves are rejected here; pair reassembly across two escapes
/// is not supported.
fn unescape_unicode(hex: &[u8]) -> Result<char, ParseErrorKind> {
    let mut codepoint = 0u32;
    for &byte in hex {
        codepoint = (codepoint << 4) | hex_digit(byte)?;
    }
    char::from_u32(codepoint).ok_or(ParseErrorKind::InvalidUnicodeCodepoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_escapes() {
        assert_eq!(simple_escape(b'n').unwrap(), b'\n');
        assert_eq!(simple_escape(b't').unwrap(), b'\t');
        assert_eq!(simple_escape(b'r').unwrap(), b'\r');
        assert_eq!(simple_escape(b'\\').unwrap(), b'\\');
        assert_eq!(simple_escape(b'"').unwrap(), b'"');
        assert_eq!(simple_escape(b'/').unwrap(), b'/');
        assert_eq!(simple_escape(b'b').unwrap(), 0x08);
        assert_eq!(simple_escape(b'f').unwrap(), 0x0C);
    }

    #[test]
    fn invalid_simple_escapes() {
        assert!(simple_escape(b'x').is_err());
        assert!(simple_escape(b'q').is_err());
        assert!(simple_escape(b'1').is_err());
    }

    #[test]
    fn hex_digit_values() {
        assert_eq!(hex_digit(b'0').unwrap(), 0);
        assert_eq!(hex_digit(b'9').unwrap(), 9);
        assert_eq!(hex_digit(b'a').unwrap(), 10);
        assert_eq!(hex_digit(b'f').unwrap(), 15);
        assert_eq!(hex_digit(b'A').unwrap(), 10);
        assert_eq!(hex_digit(b'F').unwrap(), 15);
        assert!(hex_digit(b'g').is_err());
        assert!(hex_digit(b' ').is_err());
    }

    #[test]
    fn passthrough_and_escapes_mix() {
        assert_eq!(unescape_quoted(br#""""#).unwrap(), "");
        assert_eq!(unescape_quoted(br#""abc""#).unwrap(), "abc");
        assert_eq!(unescape_quoted(br#""a\tb""#).unwrap(), "a\tb");
        assert_eq!(unescape_quoted(br#""she said \"a\"""#).unwrap(), "she said \"a\"");
        assert_eq!(unescape_quoted(br#""\\""#).unwrap(), "\\");
        assert_eq!(unescape_quoted(br#""a\/b""#).unwrap(), "a/b");
    }

    #[test]
    fn unicode_escapes() {
        assert_eq!(unescape_quoted(br#""\u0041""#).unwrap(), "A");
        assert_eq!(unescape_quoted(br#""\u1234""#).unwrap(), "\u{1234}");
        assert_eq!(unescape_quoted(br#""\u03B1""#).unwrap(), "\u{3b1}");
        assert_eq!(unescape_quoted(br#""\u0000""#).unwrap(), "\0");
    }

    #[test]
    fn raw_multibyte_utf8_passes_through() {
        assert_eq!(unescape_quoted("\"héllo\"".as_bytes()).unwrap(), "héllo");
    }

    #[test]
    fn invalid_unicode_escapes() {
        assert_eq!(
            unescape_quoted(br#""\uZZZZ""#).unwrap_err(),
            ParseErrorKind::InvalidUnicodeHex
        );
        // Truncated before four hex digits were seen.
        assert_eq!(
            unescape_quoted(br#""\u12""#).unwrap_err(),
            ParseErrorKind::InvalidUnicodeHex
        );
        // A lone surrogate half is not a scalar value.
        assert_eq!(
            unescape_quoted(br#""\uD800""#).unwrap_err(),
            ParseErrorKind::InvalidUnicodeCodepoint
        );
    }

    #[test]
    fn truncated_escape_is_rejected() {
        assert_eq!(
            unescape_quoted(br#""abc\""#).unwrap_err(),
            ParseErrorKind::InvalidEscapeSequence
        );
    }

    #[test]
    fn missing_quotes_are_rejected() {
        assert_eq!(
            unescape_quoted(b"abc").unwrap_err(),
            ParseErrorKind::UnterminatedString
        );
        assert_eq!(
            unescape_quoted(b"\"abc").unwrap_err(),
            ParseErrorKind::UnterminatedString
        );
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert_eq!(
            unescape_quoted(b"\"\x80\"").unwrap_err(),
            ParseErrorKind::InvalidUtf8
        );
    }
}
