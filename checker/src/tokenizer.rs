//! # Tokenizer Module
//!
//! A forward-only scanner that classifies characters into [`Token`]s while
//! collapsing insignificant trailing whitespace. It operates on one
//! character of lookahead at a time and never consumes speculatively.
//!
//! Collapse rules: a newline immediately before end-of-stream is swallowed,
//! a space immediately before end-of-stream is swallowed, and a space
//! immediately before a newline collapses into that newline. As a
//! consequence `"a \n"` and `"a\n"` produce the same token sequence.
//!
//! The tokenizer is a two-state machine. It starts `Active` and becomes
//! `Exhausted` after producing an `EndOfFile` or `Invalid` token; requesting
//! another token from an exhausted tokenizer is a programming-contract
//! violation caught by an assertion, not a recoverable error.

use crate::error::CheckerError;
use crate::stream::CharStream;
use crate::token::{Token, TokenKind};
use crate::traits::value_spec::ValueSpec;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Active,
    Exhausted,
}

/// A stateful scanner producing tokens from one exclusively-owned character
/// stream under a given value spec. Created per input stream and discarded
/// once the stream is exhausted or found invalid.
pub struct Tokenizer<'a, R: BufRead, S: ValueSpec> {
    spec: &'a S,
    stream: CharStream<R>,
    state: State,
    line: u32,
    index: u32,
}

impl<'a, R: BufRead, S: ValueSpec> Tokenizer<'a, R, S> {
    pub fn new(reader: R, spec: &'a S) -> Self {
        Self {
            spec,
            stream: CharStream::new(reader),
            state: State::Active,
            line: 1,
            index: 1,
        }
    }

    /// Whether the tokenizer may still produce tokens.
    pub fn is_active(&self) -> bool {
        self.state == State::Active
    }

    /// Produces the next token.
    ///
    /// # Panics
    ///
    /// Panics if the tokenizer is exhausted; the caller must stop after an
    /// `EndOfFile` or `Invalid` token.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError`] on I/O failure or stream
    /// desynchronization. These abort the comparison; they are never a
    /// grading outcome.
    pub fn next_token(&mut self) -> Result<Token<S::Value>, CheckerError> {
        assert!(
            self.state == State::Active,
            "token requested from an exhausted tokenizer"
        );

        let Some(c) = self.stream.peek()? else {
            return self.finish_stream();
        };

        if c == '\n' {
            self.stream.bump(Some('\n'))?;
            return self.after_newline();
        }

        if c == ' ' {
            self.stream.bump(Some(' '))?;
            return match self.stream.peek()? {
                None => self.finish_stream(),
                Some('\n') => {
                    // Trailing space before a newline is insignificant.
                    self.stream.bump(Some('\n'))?;
                    self.after_newline()
                }
                Some(_) => Ok(Token::of_kind(TokenKind::Space, self.line, self.index)),
            };
        }

        match self.spec.parse(&mut self.stream)? {
            Some(scanned) if self.spec.accepts(&scanned.value) => {
                let token = Token::valid(scanned.value, scanned.literal, self.line, self.index);
                self.index += 1;
                Ok(token)
            }
            _ => {
                self.state = State::Exhausted;
                Ok(Token::of_kind(TokenKind::Invalid, self.line, self.index))
            }
        }
    }

    /// A newline was just consumed: swallow it if the stream ends here,
    /// otherwise emit the newline and advance to the next line.
    fn after_newline(&mut self) -> Result<Token<S::Value>, CheckerError> {
        match self.stream.peek()? {
            None => self.finish_stream(),
            Some(_) => {
                let token = Token::of_kind(TokenKind::Newline, self.line, self.index);
                self.line += 1;
                self.index = 1;
                Ok(token)
            }
        }
    }

    fn finish_stream(&mut self) -> Result<Token<S::Value>, CheckerError> {
        self.stream.bump(None)?;
        self.state = State::Exhausted;
        Ok(Token::of_kind(TokenKind::EndOfFile, self.line, self.index))
    }
}
