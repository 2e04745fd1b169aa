//! Display mode tokens and normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// A resolved display mode.
///
/// `Light` is the built-in fallback used when neither an explicit user
/// choice nor an OS preference exists. The unset states of those two inputs
/// are represented as `Option<Mode>` throughout the crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Parse a persisted token.
    ///
    /// Only the literal tokens `light` and `dark` are recognized,
    /// case-insensitively; any other content (empty string, `"null"`,
    /// arbitrary text) reads as no value.
    pub fn parse(raw: &str) -> Option<Mode> {
        if raw.eq_ignore_ascii_case("light") {
            Some(Mode::Light)
        } else if raw.eq_ignore_ascii_case("dark") {
            Some(Mode::Dark)
        } else {
            None
        }
    }

    /// Lowercase token, used both for persistence writes and as the
    /// `color-scheme` style value.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// The opposite mode.
    pub fn inverse(self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    /// Map the two independent `prefers-color-scheme` booleans to a
    /// preference. Ambiguous states (neither or both set) yield `None`.
    pub fn from_flags(dark: bool, light: bool) -> Option<Mode> {
        match (dark, light) {
            (true, false) => Some(Mode::Dark),
            (false, true) => Some(Mode::Light),
            _ => None,
        }
    }

    /// True for `Mode::Dark`.
    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
