//! Checker Error Types
//!
//! This module defines the [`CheckerError`] enum covering every
//! environment-attributable failure of a grading run. Contestant-attributable
//! problems (missing output file, token mismatch, malformed output) are never
//! errors: they flow through the normal grading protocol as a zero grade.
//! A `CheckerError` means the run itself is unusable — no grade line may be
//! produced and the process must exit with a failure status.

use std::fmt;

/// Represents all environment-attributable error types in the checker.
#[derive(Debug)]
pub enum CheckerError {
    /// The ground-truth answer file could not be opened or read.
    AnswerUnreadable(String),
    /// The ground-truth answer stream produced an invalid token. The answer
    /// is assumed always well-formed, so this indicates a corrupt grading
    /// setup.
    AnswerMalformed { line: u32, token: u32 },
    /// A previously peeked character did not match the character actually
    /// consumed from the stream. Defensive invariant; expected never to
    /// occur under correct stream semantics.
    StreamDesync(String),
    /// I/O error while reading one of the streams mid-comparison.
    Io(String),
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::AnswerUnreadable(detail) => {
                write!(f, "cannot read the answer file: {detail}")
            }
            CheckerError::AnswerMalformed { line, token } => {
                write!(
                    f,
                    "the answer file is malformed at line {line}, token {token}"
                )
            }
            CheckerError::StreamDesync(detail) => {
                write!(f, "stream desynchronized: {detail}")
            }
            CheckerError::Io(detail) => write!(f, "I/O failure: {detail}"),
        }
    }
}

impl std::error::Error for CheckerError {}

impl From<std::io::Error> for CheckerError {
    fn from(err: std::io::Error) -> Self {
        CheckerError::Io(err.to_string())
    }
}
