//! The real-number profile: one token per whitespace-delimited word, parsed
//! as a finite decimal number and compared under a tolerance.

use crate::error::CheckerError;
use crate::stream::CharStream;
use crate::traits::value_spec::{Scanned, ValueSpec};
use std::io::BufRead;

/// Absolute error allowed between two equal numbers. Matches six-digit
/// float printing.
const ABS_TOLERANCE: f64 = 1e-5;

pub struct RealTokens;

impl ValueSpec for RealTokens {
    type Value = f64;

    /// Consumes the maximal run of non-whitespace characters and parses it
    /// as one decimal number. A word that is not a number is malformed.
    fn parse<R: BufRead>(
        &self,
        stream: &mut CharStream<R>,
    ) -> Result<Option<Scanned<f64>>, CheckerError> {
        let mut literal = String::new();
        while let Some(c) = stream.peek()? {
            if c == ' ' || c == '\n' {
                break;
            }
            stream.bump(Some(c))?;
            literal.push(c);
        }
        if literal.is_empty() {
            return Ok(None);
        }
        match literal.parse::<f64>() {
            Ok(value) => Ok(Some(Scanned { value, literal })),
            Err(_) => Ok(None),
        }
    }

    fn accepts(&self, value: &f64) -> bool {
        value.is_finite()
    }

    /// Equal within an absolute error of `1e-5`, or within 1% of the
    /// expected value, sign-aware.
    fn matches(&self, claimed: &f64, expected: &f64) -> bool {
        if (claimed - expected).abs() <= ABS_TOLERANCE {
            return true;
        }
        if *expected >= 0.0 {
            expected * 0.99 <= *claimed && *claimed <= expected * 1.01
        } else {
            expected * 1.01 <= *claimed && *claimed <= expected * 0.99
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_tolerance_path() {
        assert!(RealTokens.matches(&1.000001, &1.0));
        assert!(RealTokens.matches(&1.0, &1.000001));
        assert!(!RealTokens.matches(&1.5, &1.0));
    }

    #[test]
    fn test_relative_tolerance_positive() {
        assert!(RealTokens.matches(&101.0, &100.0));
        assert!(RealTokens.matches(&99.0, &100.0));
        assert!(!RealTokens.matches(&102.0, &100.0));
    }

    #[test]
    fn test_relative_tolerance_sign_aware() {
        assert!(RealTokens.matches(&-101.0, &-100.0));
        assert!(RealTokens.matches(&-99.0, &-100.0));
        assert!(!RealTokens.matches(&-102.0, &-100.0));
        // Opposite signs outside the absolute tolerance never match.
        assert!(!RealTokens.matches(&100.0, &-100.0));
    }

    #[test]
    fn test_matches_is_reflexive_and_symmetric() {
        for v in [0.0, 1.0, -273.15, 1e9] {
            assert!(RealTokens.matches(&v, &v));
        }
        assert_eq!(
            RealTokens.matches(&101.0, &100.0),
            RealTokens.matches(&100.0, &101.0)
        );
        assert_eq!(
            RealTokens.matches(&-101.0, &-100.0),
            RealTokens.matches(&-100.0, &-101.0)
        );
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(!RealTokens.accepts(&f64::INFINITY));
        assert!(!RealTokens.accepts(&f64::NEG_INFINITY));
        assert!(!RealTokens.accepts(&f64::NAN));
        assert!(RealTokens.accepts(&0.0));
    }
}
