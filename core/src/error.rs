//! Error types for registration and parsing.

use thiserror::Error;

/// A problem found while scanning an argument vector.
///
/// The `Display` text is the message meant for the end user.
///
/// # Examples
///
/// ```
/// use flagline_core::{ParseError, ParseErrorKind};
///
/// let err = ParseError::UnexpectedValue { token: "file.txt".into() };
/// assert_eq!(err.to_string(), "Unexpected value \"file.txt\". Did you miss a command?");
/// assert_eq!(err.kind(), ParseErrorKind::UnexpectedValue);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A prefixed token matched no key or alias.
    #[error("Command \"{token}\" was not recognized. See help text for command list.")]
    UnrecognizedCommand { token: String },
    /// Two commands that exclude each other were both supplied.
    #[error("The commands \"{first}\" and \"{second}\" are mutually exclusive.")]
    MutuallyExclusive { first: String, second: String },
    /// A value token appeared before any command.
    #[error("Unexpected value \"{token}\". Did you miss a command?")]
    UnexpectedValue { token: String },
    /// A value token followed a command that takes none.
    #[error("The command \"{command}\" does not allow parameters.")]
    ParameterNotAllowed { command: String },
    /// A command requiring values received none.
    #[error("The command \"{command}\" is missing required parameters.")]
    MissingRequiredParameter { command: String },
}

/// Field-less discriminant of [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnrecognizedCommand,
    MutuallyExclusive,
    UnexpectedValue,
    ParameterNotAllowed,
    MissingRequiredParameter,
}

impl ParseError {
    /// Returns the error category.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::UnrecognizedCommand { .. } => ParseErrorKind::UnrecognizedCommand,
            Self::MutuallyExclusive { .. } => ParseErrorKind::MutuallyExclusive,
            Self::UnexpectedValue { .. } => ParseErrorKind::UnexpectedValue,
            Self::ParameterNotAllowed { .. } => ParseErrorKind::ParameterNotAllowed,
            Self::MissingRequiredParameter { .. } => ParseErrorKind::MissingRequiredParameter,
        }
    }

    /// Whether this error stops scanning, as opposed to the post-scan check.
    pub fn is_scan_error(&self) -> bool {
        !matches!(self, Self::MissingRequiredParameter { .. })
    }
}

/// Registration rejected by [`ArgumentParser::register`](crate::ArgumentParser::register).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Key is empty or whitespace-only.
    #[error("command key cannot be empty")]
    EmptyKey,
    /// Key or alias starts with the prefix character and could never match.
    #[error("command name must not start with the prefix character: {0}")]
    PrefixedName(String),
    /// Alias is already used as a key or alias by another command.
    #[error("alias '{alias}' is already used by command '{existing}'")]
    AliasConflict { alias: String, existing: String },
    /// Key is already used as an alias by another command.
    #[error("key '{key}' is already an alias of command '{existing}'")]
    KeyConflict { key: String, existing: String },
}

/// Convenience alias for registration results.
pub type Result<T> = std::result::Result<T, RegistrationError>;
