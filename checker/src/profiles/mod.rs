//! # Profiles Module
//!
//! A profile bundles a [`ValueSpec`] with the runtime settings of a grading
//! run: the diagnostic look-ahead count and the two display toggles. Two
//! concrete profiles are provided, mirroring the two checker variants used
//! in judging: exact printable characters and tolerance-compared decimal
//! numbers.

pub mod char_tokens;
pub mod real_tokens;

pub use char_tokens::CharTokens;
pub use real_tokens::RealTokens;

use crate::traits::value_spec::ValueSpec;

/// Runtime display configuration of a profile.
#[derive(Debug, Clone)]
pub struct ProfileSettings {
    /// How many extra claimed tokens to echo for diagnostics after a
    /// mismatch.
    pub look_ahead: usize,
    /// Whether the grade message names the diverging tokens.
    pub show_diff: bool,
    /// Whether a mismatch echoes the claimed output as parsed.
    pub show_output: bool,
}

/// A value spec together with its display settings.
pub struct Profile<S: ValueSpec> {
    pub spec: S,
    pub settings: ProfileSettings,
}

impl Profile<CharTokens> {
    /// The character profile: single printable ASCII characters compared by
    /// identity, with a look-ahead of 10.
    pub fn chars() -> Self {
        Profile {
            spec: CharTokens,
            settings: ProfileSettings {
                look_ahead: 10,
                show_diff: false,
                show_output: false,
            },
        }
    }
}

impl Profile<RealTokens> {
    /// The real-number profile: finite decimal numbers compared under an
    /// absolute and relative tolerance, with a look-ahead of 3.
    pub fn reals() -> Self {
        Profile {
            spec: RealTokens,
            settings: ProfileSettings {
                look_ahead: 3,
                show_diff: false,
                show_output: false,
            },
        }
    }
}

impl<S: ValueSpec> Profile<S> {
    /// Toggles naming the diverging tokens in the grade message.
    pub fn with_diff(mut self, show: bool) -> Self {
        self.settings.show_diff = show;
        self
    }

    /// Toggles echoing the claimed output after a mismatch.
    pub fn with_output_echo(mut self, show: bool) -> Self {
        self.settings.show_output = show;
        self
    }

    /// Overrides the diagnostic look-ahead count.
    pub fn with_look_ahead(mut self, count: usize) -> Self {
        self.settings.look_ahead = count;
        self
    }
}
