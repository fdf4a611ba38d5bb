//! Forward-only character stream with single-character lookahead.
//!
//! The tokenizer never consumes speculatively: it peeks one character, makes
//! a decision, and then consumes through [`CharStream::bump`], which verifies
//! that the consumed character matches what was peeked. A mismatch means the
//! underlying stream is internally desynchronized and aborts the run.

use crate::error::CheckerError;
use std::io::BufRead;

/// A forward-only character source over any buffered reader. No seeking, no
/// rewinding; at most one character is held back by a pending peek.
pub struct CharStream<R: BufRead> {
    reader: R,
    peeked: Option<Option<char>>,
}

impl<R: BufRead> CharStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
        }
    }

    fn read_one(&mut self) -> Result<Option<char>, CheckerError> {
        let buf = self.reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let byte = buf[0];
        self.reader.consume(1);
        Ok(Some(byte as char))
    }

    /// Returns the next character without consuming it, or `None` at end of
    /// stream. Repeated peeks return the same character.
    pub fn peek(&mut self) -> Result<Option<char>, CheckerError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.read_one()?);
        }
        Ok(self.peeked.unwrap_or(None))
    }

    /// Consumes one character and checks it against `expected`, the
    /// character the caller previously peeked. `None` consumes the end of
    /// stream. Any mismatch is an unrecoverable internal desynchronization.
    pub fn bump(&mut self, expected: Option<char>) -> Result<Option<char>, CheckerError> {
        let consumed = match self.peeked.take() {
            Some(held) => held,
            None => self.read_one()?,
        };
        if consumed != expected {
            return Err(CheckerError::StreamDesync(format!(
                "peeked {expected:?} but consumed {consumed:?}"
            )));
        }
        Ok(consumed)
    }
}
