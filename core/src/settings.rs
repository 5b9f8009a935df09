//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Prefix character used when no other is configured.
pub const DEFAULT_PREFIX: char = '-';

/// Which error is reported when a scan error and a missing required value
/// occur in the same parse.
///
/// Scanning stops at the first structural error; the required-value check
/// runs afterwards over the commands seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPrecedence {
    /// The required-value check always runs and replaces a scan error.
    #[default]
    RequiredCheckWins,
    /// The required-value check is skipped once scanning failed.
    FirstErrorWins,
}

/// Settings for an [`ArgumentParser`](crate::ArgumentParser).
///
/// # Examples
///
/// ```
/// use flagline_core::{ErrorPrecedence, ParserSettings};
///
/// let settings = ParserSettings::default();
/// assert_eq!(settings.prefix, '-');
/// assert_eq!(settings.error_precedence, ErrorPrecedence::RequiredCheckWins);
///
/// let windows = ParserSettings::default().with_prefix('/');
/// assert_eq!(windows.prefix, '/');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserSettings {
    /// Character that marks a token as a command.
    pub prefix: char,
    /// Error reporting policy.
    #[serde(default)]
    pub error_precedence: ErrorPrecedence,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX,
            error_precedence: ErrorPrecedence::default(),
        }
    }
}

impl ParserSettings {
    /// Replaces the prefix character.
    pub fn with_prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }

    /// Replaces the error precedence policy.
    pub fn with_error_precedence(mut self, precedence: ErrorPrecedence) -> Self {
        self.error_precedence = precedence;
        self
    }
}
