//! Parse results.
//!
//! [`CommandSet`] holds the commands that appeared on the command line, in the
//! order they were first seen, together with the generated documentation.
//! [`ParseOutcome`] pairs it with the error, if any.

use std::str::FromStr;

use serde::Serialize;

use crate::{Command, ParseError};

/// Commands encountered during a parse.
///
/// # Examples
///
/// ```
/// use flagline_core::{ArgumentParser, Command, Necessity};
///
/// let mut parser = ArgumentParser::new(["-n", "42", "-v"], "app", "An app");
/// parser
///     .register(Command::new("n").with_necessity(Necessity::Required))?
///     .register(Command::new("v").with_alias("verbose"))?;
///
/// let commands = parser.parse().into_result()?;
/// assert_eq!(commands.len(), 2);
/// assert!(commands.contains("verbose"));
/// assert_eq!(commands.get_as::<u32>("n"), Some(42));
/// assert_eq!(commands.try_get::<u32>("missing"), (false, 0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandSet {
    commands: Vec<Command>,
    documentation: String,
}

impl CommandSet {
    pub(crate) fn new(commands: Vec<Command>, documentation: String) -> Self {
        Self {
            commands,
            documentation,
        }
    }

    /// Returns `true` if no command was encountered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of distinct commands encountered.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Finds an encountered command by key or alias.
    pub fn get(&self, key: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.matches(key))
    }

    /// Whether a command with this key or alias was encountered.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Parses the primary value of a command as `T`.
    pub fn get_as<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|c| c.value_as())
    }

    /// Parses the primary value of a command as `T`, reporting success as a flag.
    ///
    /// Yields `(false, T::default())` when the command was not encountered,
    /// has no value, or the value does not convert.
    pub fn try_get<T: FromStr + Default>(&self, key: &str) -> (bool, T) {
        match self.get_as(key) {
            Some(value) => (true, value),
            None => (false, T::default()),
        }
    }

    /// Iterates the commands in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Generated help text: app name, description, then one line per
    /// documented command.
    pub fn documentation(&self) -> &str {
        &self.documentation
    }
}

impl<'a> IntoIterator for &'a CommandSet {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl IntoIterator for CommandSet {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

/// Result of [`ArgumentParser::parse`](crate::ArgumentParser::parse).
///
/// The command set is available even when parsing failed; it then holds the
/// commands seen before scanning stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    commands: CommandSet,
    error: Option<ParseError>,
}

impl ParseOutcome {
    pub(crate) fn new(commands: CommandSet, error: Option<ParseError>) -> Self {
        Self { commands, error }
    }

    /// The encountered commands, possibly incomplete if [`error`](Self::error) is set.
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// The parse error, if any.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Returns `true` if no error was reported.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Converts into a `Result`, dropping the partial command set on error.
    pub fn into_result(self) -> Result<CommandSet, ParseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.commands),
        }
    }

    /// Splits into the command set and the error.
    pub fn into_parts(self) -> (CommandSet, Option<ParseError>) {
        (self.commands, self.error)
    }
}
