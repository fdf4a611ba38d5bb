//! # Token Module
//!
//! This module defines the [`Token`] value type: one classified lexical unit
//! produced by the tokenizer, carrying a kind, an optional value, the exact
//! text it consumed, and its position within the stream.

use crate::traits::value_spec::ValueSpec;

/// Classification of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A well-formed value of the profile's base type.
    Valid,
    /// A significant single space between tokens.
    Space,
    /// A significant line break.
    Newline,
    /// End of the stream; the producing tokenizer is exhausted.
    EndOfFile,
    /// A malformed or rejected lexeme; the producing tokenizer is exhausted.
    Invalid,
}

/// One immutable token with its position. Created once by the tokenizer,
/// owned by the caller.
///
/// Invariant: a `Valid` token always carries a value; any other kind never
/// does, and reading the value of a non-`Valid` token is a contract
/// violation.
#[derive(Debug, Clone)]
pub struct Token<V> {
    kind: TokenKind,
    value: Option<V>,
    literal: String,
    line: u32,
    index: u32,
}

impl<V> Token<V> {
    /// Creates a `Valid` token carrying `value`. `literal` is the exact text
    /// consumed from the stream for this value.
    pub fn valid(value: V, literal: String, line: u32, index: u32) -> Self {
        Self {
            kind: TokenKind::Valid,
            value: Some(value),
            literal,
            line,
            index,
        }
    }

    /// Creates a token of any non-`Valid` kind.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is [`TokenKind::Valid`]; valid tokens must be built
    /// through [`Token::valid`] so they carry a value.
    pub fn of_kind(kind: TokenKind, line: u32, index: u32) -> Self {
        assert!(
            kind != TokenKind::Valid,
            "a Valid token must carry a value"
        );
        let literal = match kind {
            TokenKind::Space => " ",
            TokenKind::Newline => "\n",
            _ => "",
        };
        Self {
            kind,
            value: None,
            literal: literal.to_string(),
            line,
            index,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's value.
    ///
    /// # Panics
    ///
    /// Panics if the token is not `Valid`.
    pub fn value(&self) -> &V {
        self.value
            .as_ref()
            .expect("value read from a non-Valid token")
    }

    /// 1-based line of the token, non-decreasing across a stream.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based index of the token within its line.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Human-diagnostic rendering: the quoted literal for a `Valid` token, a
    /// bracketed kind name otherwise.
    pub fn long_form(&self) -> String {
        match self.kind {
            TokenKind::Valid => format!("'{}'", self.literal),
            TokenKind::Space => "<space>".to_string(),
            TokenKind::Newline => "<newline>".to_string(),
            TokenKind::EndOfFile => "<end>".to_string(),
            TokenKind::Invalid => "<invalid-format>".to_string(),
        }
    }

    /// The literal text this token consumed, used to reconstruct exactly
    /// what was read when echoing the claimed output. Empty for
    /// `EndOfFile` and `Invalid`.
    pub fn short_form(&self) -> &str {
        &self.literal
    }

    /// Token equality: kinds must match, and two `Valid` tokens additionally
    /// defer to the profile's equality predicate with `self` as the claimed
    /// token and `other` as the ground truth. Non-`Valid` tokens of the same
    /// kind are equal unconditionally.
    pub fn matches<S>(&self, other: &Token<V>, spec: &S) -> bool
    where
        S: ValueSpec<Value = V>,
    {
        if self.kind != other.kind {
            return false;
        }
        match (self.value.as_ref(), other.value.as_ref()) {
            (Some(claimed), Some(expected)) => spec.matches(claimed, expected),
            _ => true,
        }
    }
}
