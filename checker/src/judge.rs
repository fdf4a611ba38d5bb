//! # Judge Module
//!
//! The comparison engine. It owns one tokenizer per stream (claimed output
//! and ground-truth answer), pulls one token from each per iteration, and
//! applies the grading protocol: strict, position-synchronized
//! token-for-token comparison that stops at the first divergence. No edit
//! distance, no alignment.
//!
//! The outcome of a run is a [`Verdict`]: a grade of 0 or 1 plus a message,
//! and optionally a diagnostic-echo line reconstructing the claimed output
//! as it was parsed. For hidden test cases both the message and the echo are
//! redacted so no expected content or position leaks.

use crate::error::CheckerError;
use crate::profiles::Profile;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;
use crate::traits::value_spec::ValueSpec;
use log::{debug, warn};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A grading ratio. The protocol line format admits fractional ratios, but
/// this checker only ever emits the two extremes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade(f64);

impl Grade {
    pub fn full() -> Self {
        Grade(1.0)
    }

    pub fn zero() -> Self {
        Grade(0.0)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The outcome of one grading run.
#[derive(Debug)]
pub struct Verdict {
    pub grade: Grade,
    pub message: String,
    /// Optional second output line echoing the claimed output as parsed.
    pub echo: Option<String>,
}

impl Verdict {
    fn accepted() -> Self {
        Verdict {
            grade: Grade::full(),
            message: "Correct output.".to_string(),
            echo: None,
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Verdict {
            grade: Grade::zero(),
            message: message.into(),
            echo: None,
        }
    }

    /// The `<grade>|<message>` line of the standard-output protocol.
    pub fn protocol_line(&self) -> String {
        format!("{}|{}", self.grade, self.message)
    }
}

/// Grades the claimed output file against the ground-truth answer file.
///
/// # Arguments
///
/// * `profile` - Token profile (value spec, look-ahead, display toggles).
/// * `claimed_path` - The contestant's output file.
/// * `answer_path` - The assumed-correct answer file.
/// * `hidden` - Whether diagnostics must be redacted for this test case.
///
/// # Returns
///
/// * `Ok(Verdict)` whenever the checker ran to completion, including every
///   contestant-attributable failure (unopenable claimed file, mismatch,
///   malformed claimed output) — those grade 0 through the normal protocol.
/// * `Err(CheckerError)` for environment-attributable failures (unreadable
///   or malformed answer file, I/O errors, stream desynchronization); no
///   grade line may be produced for these.
pub fn grade<S: ValueSpec>(
    profile: &Profile<S>,
    claimed_path: &Path,
    answer_path: &Path,
    hidden: bool,
) -> Result<Verdict, CheckerError> {
    let claimed = match File::open(claimed_path) {
        Ok(file) => file,
        Err(err) => {
            // Missing output is the contestant's problem, not ours.
            warn!("cannot open claimed output {claimed_path:?}: {err}");
            return Ok(Verdict::rejected("Error opening the output file."));
        }
    };

    let answer = File::open(answer_path)
        .map_err(|err| CheckerError::AnswerUnreadable(format!("{answer_path:?}: {err}")))?;

    compare(
        profile,
        BufReader::new(claimed),
        BufReader::new(answer),
        hidden,
    )
}

/// Compares two already-opened streams under the given profile. Split out
/// from [`grade`] so the protocol is testable on in-memory streams.
pub fn compare<S, C, A>(
    profile: &Profile<S>,
    claimed: C,
    answer: A,
    hidden: bool,
) -> Result<Verdict, CheckerError>
where
    S: ValueSpec,
    C: BufRead,
    A: BufRead,
{
    let mut claimed_tokens = Tokenizer::new(claimed, &profile.spec);
    let mut answer_tokens = Tokenizer::new(answer, &profile.spec);
    let mut parsed = String::new();

    loop {
        let got = claimed_tokens.next_token()?;
        let want = answer_tokens.next_token()?;

        if want.kind() == TokenKind::Invalid {
            return Err(CheckerError::AnswerMalformed {
                line: want.line(),
                token: want.index(),
            });
        }

        parsed.push_str(got.short_form());

        if !got.matches(&want, &profile.spec) {
            debug!(
                "mismatch at line {}, token {}: got {}, want {}",
                got.line(),
                got.index(),
                got.long_form(),
                want.long_form()
            );
            return finish_mismatch(profile, &mut claimed_tokens, &got, &want, parsed, hidden);
        }

        if want.kind() == TokenKind::EndOfFile {
            return Ok(Verdict::accepted());
        }
    }
}

/// Builds the terminal grade-0 verdict for a mismatch, honoring the display
/// toggles and the hidden-case redaction rule.
fn finish_mismatch<S, C>(
    profile: &Profile<S>,
    claimed_tokens: &mut Tokenizer<'_, C, S>,
    got: &Token<S::Value>,
    want: &Token<S::Value>,
    mut parsed: String,
    hidden: bool,
) -> Result<Verdict, CheckerError>
where
    S: ValueSpec,
    C: BufRead,
{
    let settings = &profile.settings;

    let message = if !settings.show_diff {
        "Wrong output.".to_string()
    } else if hidden {
        "Wrong output. (Mismatch intentionally hidden.)".to_string()
    } else {
        format!(
            "Unexpected {} at line {}, token {}, while expecting {}.",
            got.long_form(),
            got.line(),
            got.index(),
            want.long_form()
        )
    };

    let echo = if !settings.show_output {
        None
    } else if hidden {
        Some("(Claimed output intentionally hidden.)".to_string())
    } else {
        // Pull a few more claimed tokens purely for display. The tokenizer
        // is exhausted after EndOfFile or Invalid, so stop there.
        let mut last_kind = got.kind();
        let mut pulled = 0;
        while pulled < settings.look_ahead
            && last_kind != TokenKind::EndOfFile
            && last_kind != TokenKind::Invalid
        {
            let token = claimed_tokens.next_token()?;
            parsed.push_str(token.short_form());
            last_kind = token.kind();
            pulled += 1;
        }
        let marker = match last_kind {
            TokenKind::Invalid => "..?..",
            TokenKind::EndOfFile => "",
            // The window filled while the stream still had content.
            _ => ".....",
        };
        Some(format!("Claimed output (as parsed): {parsed}{marker}"))
    };

    let mut verdict = Verdict::rejected(message);
    verdict.echo = echo;
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{CharTokens, RealTokens};
    use std::io::Cursor;

    fn compare_chars(
        profile: &Profile<CharTokens>,
        claimed: &str,
        answer: &str,
        hidden: bool,
    ) -> Verdict {
        compare(
            profile,
            Cursor::new(claimed.to_string()),
            Cursor::new(answer.to_string()),
            hidden,
        )
        .expect("comparison should complete")
    }

    #[test]
    fn test_scenario_correct_output() {
        let profile = Profile::chars().with_diff(true);
        let verdict = compare_chars(&profile, "1 2 3\n", "1 2 3\n", false);
        assert_eq!(verdict.protocol_line(), "1|Correct output.");
        assert!(verdict.echo.is_none());
    }

    #[test]
    fn test_scenario_visible_mismatch_names_tokens() {
        let profile = Profile::chars().with_diff(true);
        let verdict = compare_chars(&profile, "1 2 4\n", "1 2 3\n", false);
        assert_eq!(
            verdict.protocol_line(),
            "0|Unexpected '4' at line 1, token 3, while expecting '3'."
        );
    }

    #[test]
    fn test_scenario_hidden_mismatch_is_redacted() {
        let profile = Profile::chars().with_diff(true).with_output_echo(true);
        let verdict = compare_chars(&profile, "1 2 4\n", "1 2 3\n", true);
        assert_eq!(
            verdict.protocol_line(),
            "0|Wrong output. (Mismatch intentionally hidden.)"
        );
        // No position or content leaks through the echo either.
        assert_eq!(
            verdict.echo.as_deref(),
            Some("(Claimed output intentionally hidden.)")
        );
    }

    #[test]
    fn test_diff_detail_off_is_generic() {
        let profile = Profile::chars();
        let verdict = compare_chars(&profile, "a", "b", false);
        assert_eq!(verdict.protocol_line(), "0|Wrong output.");
        let hidden_verdict = compare_chars(&profile, "a", "b", true);
        assert_eq!(hidden_verdict.protocol_line(), "0|Wrong output.");
    }

    #[test]
    fn test_trailing_whitespace_is_insignificant() {
        let profile = Profile::chars().with_diff(true);
        let verdict = compare_chars(&profile, "abc \n", "abc\n", false);
        assert_eq!(verdict.protocol_line(), "1|Correct output.");
    }

    #[test]
    fn test_missing_line_is_a_mismatch() {
        let profile = Profile::chars().with_diff(true);
        let verdict = compare_chars(&profile, "ab\n", "ab\ncd\n", false);
        assert_eq!(verdict.grade, Grade::zero());
        assert!(verdict.message.contains("Unexpected <end>"));
    }

    #[test]
    fn test_extra_content_is_a_mismatch() {
        let profile = Profile::chars().with_diff(true);
        let verdict = compare_chars(&profile, "ab\ncd\n", "ab\n", false);
        assert_eq!(verdict.grade, Grade::zero());
        assert!(verdict.message.contains("while expecting <end>"));
    }

    #[test]
    fn test_echo_reconstructs_claimed_output_exactly() {
        // Mismatch on the first token; the whole claimed stream fits into
        // the look-ahead window, so there is no truncation marker.
        let profile = Profile::chars().with_output_echo(true);
        let verdict = compare_chars(&profile, "x y\n", "a y\n", false);
        assert_eq!(
            verdict.echo.as_deref(),
            Some("Claimed output (as parsed): x y")
        );
    }

    #[test]
    fn test_echo_marks_truncated_output() {
        let profile = Profile::chars().with_output_echo(true).with_look_ahead(2);
        let verdict = compare_chars(&profile, "xabcdefg\n", "yabcdefg\n", false);
        assert_eq!(
            verdict.echo.as_deref(),
            Some("Claimed output (as parsed): xab.....")
        );
    }

    #[test]
    fn test_echo_marks_invalid_tail() {
        // The tab is rejected by the char profile during the look-ahead.
        let profile = Profile::chars().with_output_echo(true);
        let verdict = compare_chars(&profile, "xa\tb\n", "ya\n", false);
        assert_eq!(
            verdict.echo.as_deref(),
            Some("Claimed output (as parsed): xa..?..")
        );
    }

    #[test]
    fn test_claimed_invalid_token_is_a_plain_rejection() {
        let profile = Profile::chars().with_diff(true);
        let verdict = compare_chars(&profile, "\tx\n", "ax\n", false);
        assert_eq!(verdict.grade, Grade::zero());
        assert!(verdict.message.contains("<invalid-format>"));
    }

    #[test]
    fn test_malformed_answer_is_an_environment_error() {
        let profile = Profile::chars();
        let result = compare(
            &profile,
            Cursor::new("a\n".to_string()),
            Cursor::new("\t\n".to_string()),
            false,
        );
        assert!(matches!(
            result,
            Err(CheckerError::AnswerMalformed { line: 1, token: 1 })
        ));
    }

    #[test]
    fn test_real_profile_tolerates_close_values() {
        let profile = Profile::reals().with_diff(true);
        let verdict = compare(
            &profile,
            Cursor::new("1.000001 100.5\n".to_string()),
            Cursor::new("1.0 100\n".to_string()),
            false,
        )
        .unwrap();
        assert_eq!(verdict.protocol_line(), "1|Correct output.");
    }

    #[test]
    fn test_real_profile_rejects_distant_values() {
        let profile = Profile::reals().with_diff(true);
        let verdict = compare(
            &profile,
            Cursor::new("1.5\n".to_string()),
            Cursor::new("1.0\n".to_string()),
            false,
        )
        .unwrap();
        assert_eq!(
            verdict.protocol_line(),
            "0|Unexpected '1.5' at line 1, token 1, while expecting '1.0'."
        );
    }

    #[test]
    fn test_empty_streams_match() {
        let profile = Profile::chars();
        let verdict = compare_chars(&profile, "", "", false);
        assert_eq!(verdict.protocol_line(), "1|Correct output.");
    }

    #[test]
    fn test_mismatch_position_spans_lines() {
        let profile = Profile::chars().with_diff(true);
        let verdict = compare_chars(&profile, "ab\ncx\n", "ab\ncd\n", false);
        assert_eq!(
            verdict.protocol_line(),
            "0|Unexpected 'x' at line 2, token 2, while expecting 'd'."
        );
    }

    mod files {
        use super::*;
        use std::fs;

        #[test]
        fn test_missing_claimed_file_is_a_soft_failure() {
            let dir = tempfile::tempdir().unwrap();
            let answer_path = dir.path().join("answer.txt");
            fs::write(&answer_path, "1 2 3\n").unwrap();
            let missing = dir.path().join("does_not_exist.txt");

            let profile = Profile::chars().with_diff(true);
            let verdict = grade(&profile, &missing, &answer_path, false).unwrap();
            assert_eq!(verdict.protocol_line(), "0|Error opening the output file.");
        }

        #[test]
        fn test_missing_answer_file_is_an_environment_error() {
            let dir = tempfile::tempdir().unwrap();
            let claimed_path = dir.path().join("output.txt");
            fs::write(&claimed_path, "1 2 3\n").unwrap();
            let missing = dir.path().join("does_not_exist.txt");

            let profile = Profile::chars();
            let result = grade(&profile, &claimed_path, &missing, false);
            assert!(matches!(result, Err(CheckerError::AnswerUnreadable(_))));
        }

        #[test]
        fn test_grading_from_disk() {
            let dir = tempfile::tempdir().unwrap();
            let claimed_path = dir.path().join("output.txt");
            let answer_path = dir.path().join("answer.txt");
            fs::write(&claimed_path, "1 2 3\n").unwrap();
            fs::write(&answer_path, "1 2 3\n").unwrap();

            let profile = Profile::chars();
            let verdict = grade(&profile, &claimed_path, &answer_path, false).unwrap();
            assert_eq!(verdict.protocol_line(), "1|Correct output.");
        }
    }
}
