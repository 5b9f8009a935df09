//! The argument parser.
//!
//! [`ArgumentParser`] owns a registry of [`Command`]s and the raw argument
//! vector. [`ArgumentParser::parse`] walks the vector once, left to right:
//!
//! - a token starting with the prefix character names a command (all leading
//!   prefix characters are stripped, so `--out` and `-out` both mean `out`);
//! - any other token is a value for the most recent command.
//!
//! Scanning stops at the first structural problem. Afterwards every
//! encountered command declared [`Necessity::Required`] is checked for values.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{RegistrationError, Result};
use crate::{
    Command, CommandSet, ErrorPrecedence, Necessity, ParseError, ParseOutcome, ParserSettings,
};

/// Command registry plus the arguments to parse.
///
/// # Examples
///
/// ```
/// use flagline_core::{ArgumentParser, Command, Necessity, ParseErrorKind};
///
/// let mut parser = ArgumentParser::new(["-out", "file.txt", "-v"], "backup", "Copies files");
/// parser
///     .register(Command::new("help").with_help("Show this text"))?
///     .register(Command::new("out").with_help("Output file").with_necessity(Necessity::Required))?
///     .register(Command::new("verbose").with_alias("v"))?;
///
/// let outcome = parser.parse();
/// assert!(outcome.is_success());
///
/// let keys: Vec<&str> = outcome.commands().iter().map(|c| c.key.as_str()).collect();
/// assert_eq!(keys, ["out", "verbose"]);
/// assert_eq!(
///     outcome.commands().documentation(),
///     "backup\nCopies files\n-help - Show this text\n-out - Output file"
/// );
///
/// let parser = ArgumentParser::new(["stray"], "backup", "Copies files");
/// let err = parser.parse().into_result().unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::UnexpectedValue);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    args: Vec<String>,
    app_name: String,
    app_description: String,
    settings: ParserSettings,
    registry: IndexMap<String, Command>,
}

impl ArgumentParser {
    /// Creates a parser with default [`ParserSettings`].
    pub fn new<I, S>(
        args: I,
        app_name: impl Into<String>,
        app_description: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_settings(args, app_name, app_description, ParserSettings::default())
    }

    /// Creates a parser with explicit settings.
    pub fn with_settings<I, S>(
        args: I,
        app_name: impl Into<String>,
        app_description: impl Into<String>,
        settings: ParserSettings,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            app_name: app_name.into(),
            app_description: app_description.into(),
            settings,
            registry: IndexMap::new(),
        }
    }

    /// Creates a parser over the process arguments, without the program name.
    pub fn from_env(app_name: impl Into<String>, app_description: impl Into<String>) -> Self {
        Self::new(std::env::args().skip(1), app_name, app_description)
    }

    /// Registers a command, replacing any earlier one with the same key.
    ///
    /// The stored definition starts with no values. Names that would make
    /// lookups ambiguous are rejected and leave the registry unchanged:
    ///
    /// ```
    /// use flagline_core::{ArgumentParser, Command, RegistrationError};
    ///
    /// let mut parser = ArgumentParser::new(Vec::<String>::new(), "app", "");
    /// parser.register(Command::new("verbose").with_alias("v"))?;
    ///
    /// let err = parser.register(Command::new("version").with_alias("v")).unwrap_err();
    /// assert!(matches!(err, RegistrationError::AliasConflict { .. }));
    /// assert_eq!(parser.len(), 1);
    /// # Ok::<(), RegistrationError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::EmptyKey`] for a blank key.
    /// - [`RegistrationError::PrefixedName`] if the key or alias starts with
    ///   the prefix character.
    /// - [`RegistrationError::AliasConflict`] if the alias is another
    ///   command's key or alias.
    /// - [`RegistrationError::KeyConflict`] if the key is another command's
    ///   alias.
    pub fn register(&mut self, mut command: Command) -> Result<&mut Self> {
        self.check_names(&command)?;

        command.set_prefix(self.settings.prefix);
        command.clear_values();
        debug!(
            key = %command.key,
            alias = ?command.alias(),
            necessity = ?command.necessity,
            "registered command"
        );
        self.registry.insert(command.key.clone(), command);
        Ok(self)
    }

    /// Registers every command in order, stopping at the first rejection.
    pub fn register_all<I>(&mut self, commands: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.register(command)?;
        }
        Ok(self)
    }

    fn check_names(&self, command: &Command) -> Result<()> {
        let prefix = self.settings.prefix;
        let key = command.key.as_str();

        if key.trim().is_empty() {
            return Err(RegistrationError::EmptyKey);
        }
        if key.starts_with(prefix) {
            return Err(RegistrationError::PrefixedName(key.to_string()));
        }

        // The entry being replaced does not count as a conflict.
        let others = || self.registry.values().filter(move |c| c.key != key);

        if let Some(existing) = others().find(|c| c.alias() == Some(key)) {
            return Err(RegistrationError::KeyConflict {
                key: key.to_string(),
                existing: existing.key.clone(),
            });
        }

        if let Some(alias) = command.alias() {
            if alias.starts_with(prefix) {
                return Err(RegistrationError::PrefixedName(alias.to_string()));
            }
            if let Some(existing) = others().find(|c| c.matches(alias)) {
                return Err(RegistrationError::AliasConflict {
                    alias: alias.to_string(),
                    existing: existing.key.clone(),
                });
            }
        }

        Ok(())
    }

    /// The raw arguments this parser was built with.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_description(&self) -> &str {
        &self.app_description
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.registry.values()
    }

    /// Looks up a registered command by key.
    pub fn get(&self, key: &str) -> Option<&Command> {
        self.registry.get(key)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Builds the help text: app name, app description, then the
    /// documentation line of every command that has help text.
    pub fn documentation(&self) -> String {
        let mut lines = vec![self.app_name.clone(), self.app_description.clone()];
        lines.extend(
            self.registry
                .values()
                .filter(|c| c.has_help_text())
                .map(Command::documentation_line),
        );
        lines.join("\n")
    }

    /// Exact key match first, then exact alias match.
    fn lookup(&self, name: &str) -> Option<&Command> {
        self.registry
            .get(name)
            .or_else(|| self.registry.values().find(|c| c.alias() == Some(name)))
    }

    /// Parses the arguments against the registry.
    ///
    /// Works on copies of the registered commands, so calling it again gives
    /// the same outcome.
    pub fn parse(&self) -> ParseOutcome {
        let prefix = self.settings.prefix;
        let mut encountered: Vec<Command> = Vec::new();
        let mut current: Option<usize> = None;
        let mut error: Option<ParseError> = None;

        for token in &self.args {
            if token.starts_with(prefix) {
                let name = token.trim_start_matches(prefix);
                let Some(command) = self.lookup(name) else {
                    error = Some(ParseError::UnrecognizedCommand {
                        token: token.clone(),
                    });
                    break;
                };

                if let Some(other) = find_exclusion(command, &encountered) {
                    error = Some(ParseError::MutuallyExclusive {
                        first: command.key_string(),
                        second: other.key_string(),
                    });
                    break;
                }

                trace!(token = %token, key = %command.key, "command token");
                let index = match encountered.iter().position(|c| c.key == command.key) {
                    Some(index) => index,
                    None => {
                        encountered.push(command.clone());
                        encountered.len() - 1
                    }
                };
                current = Some(index);
            } else {
                let Some(index) = current else {
                    error = Some(ParseError::UnexpectedValue {
                        token: token.clone(),
                    });
                    break;
                };

                let command = &mut encountered[index];
                if !command.necessity.allows_values() {
                    error = Some(ParseError::ParameterNotAllowed {
                        command: command.key_string(),
                    });
                    break;
                }
                trace!(token = %token, key = %command.key, "value token");
                command.push_value(token);
            }
        }

        let check_required = match self.settings.error_precedence {
            ErrorPrecedence::RequiredCheckWins => true,
            ErrorPrecedence::FirstErrorWins => error.is_none(),
        };
        if check_required {
            let missing = encountered
                .iter()
                .find(|c| c.necessity == Necessity::Required && c.values().is_empty());
            if let Some(command) = missing {
                error = Some(ParseError::MissingRequiredParameter {
                    command: command.key_string(),
                });
            }
        }

        debug!(
            args = self.args.len(),
            encountered = encountered.len(),
            error = ?error,
            "parsed arguments"
        );

        ParseOutcome::new(CommandSet::new(encountered, self.documentation()), error)
    }
}

/// Finds an encountered command that excludes `command` or is excluded by it.
fn find_exclusion<'a>(command: &Command, encountered: &'a [Command]) -> Option<&'a Command> {
    encountered.iter().find(|seen| {
        command.excludes() == Some(seen.key.as_str())
            || seen.excludes() == Some(command.key.as_str())
    })
}

/// Turns an argument list into an [`ArgumentParser`].
///
/// # Examples
///
/// ```
/// use flagline_core::IntoParser;
///
/// let parser = vec!["-v".to_string()].into_parser("app", "An app");
/// assert_eq!(parser.args(), ["-v"]);
/// assert_eq!(parser.app_name(), "app");
/// ```
pub trait IntoParser {
    fn into_parser(
        self,
        app_name: impl Into<String>,
        app_description: impl Into<String>,
    ) -> ArgumentParser;
}

impl<I> IntoParser for I
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn into_parser(
        self,
        app_name: impl Into<String>,
        app_description: impl Into<String>,
    ) -> ArgumentParser {
        ArgumentParser::new(self, app_name, app_description)
    }
}
