//! # Checker Library
//!
//! This crate provides the core logic for grading a contestant's submitted
//! output against a known-correct answer file, token by token. It scans both
//! files as streams of typed lexical tokens with insignificant trailing
//! whitespace collapsed, compares the two token sequences in lock-step under
//! a pluggable equality rule, and produces a pass/fail verdict with a
//! diagnostic message whose verbosity depends on whether the test case is
//! hidden.
//!
//! ## Key Concepts
//! - **Token**: one classified lexical unit with a kind, optional value and
//!   position.
//! - **Tokenizer**: forward-only scanner producing a token sequence from a
//!   character stream.
//! - **ValueSpec**: pluggable strategy supplying the value parser, validity
//!   check and equality check for one token profile.
//! - **Profile**: a value spec together with its look-ahead count and
//!   display toggles.
//! - **Judge**: drives two tokenizers in lock-step and decides the grade.

pub mod error;
pub mod judge;
pub mod profiles;
pub mod stream;
pub mod token;
pub mod tokenizer;
pub mod traits;

pub use crate::error::CheckerError;
pub use crate::judge::{Grade, Verdict};
pub use crate::profiles::{Profile, ProfileSettings};
pub use crate::token::{Token, TokenKind};
pub use crate::tokenizer::Tokenizer;
pub use crate::traits::value_spec::{Scanned, ValueSpec};
