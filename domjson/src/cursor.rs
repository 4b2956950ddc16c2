// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ParseError, ParseErrorKind};

/// Tracks the read position over an immutable input slice.
///
/// The buffer is never mutated and the position only moves forward. Every
/// higher-level routine reads the input through this interface instead of
/// touching the slice directly.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Byte at the current position, or `0` once the input is exhausted.
    ///
    /// The sentinel never collides with real input: a raw NUL byte is not
    /// valid anywhere in the JSON grammar, so callers only need a paired
    /// `has_next()` check where exhaustion itself matters.
    pub fn current(&self) -> u8 {
        self.data.get(self.pos).copied().unwrap_or(0)
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.data.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Moves one byte forward, saturating at the end of the input.
    pub fn advance(&mut self) {
        if self.pos < self.data.len() {
            self.pos = self.pos.saturating_add(1);
        }
    }

    /// Slice of the input with `end` clamped to the buffer length.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.data.len());
        let start = start.min(end);
        &self.data[start..end]
    }

    /// Everything from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    pub fn skip_whitespace(&mut self) {
        while is_space(self.current()) {
            self.advance();
        }
    }

    pub fn skip_digits(&mut self) {
        while self.current().is_ascii_digit() {
            self.advance();
        }
    }

    /// Skips leading whitespace, then advances past `expected` or fails with
    /// a positioned error naming what was found instead.
    pub fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.has_next() && self.current() == expected {
            self.advance();
            Ok(())
        } else {
            let found = if self.has_next() {
                Some(self.current())
            } else {
                None
            };
            Err(ParseError::at(
                self,
                ParseErrorKind::UnexpectedByte { expected, found },
            ))
        }
    }
}

pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
