//! The character profile: one token per printable ASCII character, compared
//! by exact identity.

use crate::error::CheckerError;
use crate::stream::CharStream;
use crate::traits::value_spec::{Scanned, ValueSpec};
use std::io::BufRead;

pub struct CharTokens;

impl ValueSpec for CharTokens {
    type Value = char;

    fn parse<R: BufRead>(
        &self,
        stream: &mut CharStream<R>,
    ) -> Result<Option<Scanned<char>>, CheckerError> {
        let Some(c) = stream.peek()? else {
            return Ok(None);
        };
        stream.bump(Some(c))?;
        Ok(Some(Scanned {
            value: c,
            literal: c.to_string(),
        }))
    }

    fn accepts(&self, value: &char) -> bool {
        ('!'..='~').contains(value)
    }

    fn matches(&self, claimed: &char, expected: &char) -> bool {
        claimed == expected
    }
}
