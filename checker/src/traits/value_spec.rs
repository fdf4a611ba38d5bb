use crate::error::CheckerError;
use crate::stream::CharStream;
use std::io::BufRead;

/// A value parsed from the stream together with the exact text consumed to
/// produce it. The literal is what the diagnostic echo reconstructs.
pub struct Scanned<V> {
    pub value: V,
    pub literal: String,
}

/// ValueSpec is a strategy trait bundling the three collaborators that make
/// a token profile: a value parser, a validity check, and an equality check.
/// The tokenizer and the judge are generic over it; each concrete profile
/// (characters, tolerant reals) supplies its own implementation.
pub trait ValueSpec {
    type Value;

    /// Parse exactly one value from the stream, starting at the current
    /// (already peeked, non-whitespace) character.
    ///
    /// Returns `Ok(None)` when the lexeme is malformed for this base type;
    /// the stream may be partially consumed in that case, which is fine
    /// because the tokenizer becomes exhausted on it. `Err` is reserved for
    /// I/O failures and stream desynchronization.
    fn parse<R: BufRead>(
        &self,
        stream: &mut CharStream<R>,
    ) -> Result<Option<Scanned<Self::Value>>, CheckerError>;

    /// Whether a successfully parsed value is acceptable (e.g. finite, in
    /// the printable range). Rejected values become invalid tokens.
    fn accepts(&self, value: &Self::Value) -> bool;

    /// Whether a claimed value matches the expected ground-truth value.
    /// Tolerance-based rules anchor on `expected`.
    fn matches(&self, claimed: &Self::Value, expected: &Self::Value) -> bool;
}
