//! Command definition types.
//!
//! A [`Command`] describes one flag an application understands: its key, an
//! optional alias, help text, a mutual-exclusion rule, and whether values may
//! follow it on the command line. The same type carries the values collected
//! for it during a parse, which is how results are reported back through
//! [`CommandSet`](crate::CommandSet).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::settings::DEFAULT_PREFIX;

/// Whether a command accepts trailing value tokens.
///
/// # Examples
///
/// ```
/// use flagline_core::Necessity;
///
/// assert_eq!(Necessity::default(), Necessity::None);
/// assert!(Necessity::Required.allows_values());
/// assert!(!Necessity::None.allows_values());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Necessity {
    /// No value is allowed (the default).
    #[default]
    None,
    /// At least one value must follow the command.
    Required,
    /// Values may follow the command.
    Optional,
}

impl Necessity {
    /// Returns `true` if value tokens may be bound to a command with this policy.
    pub fn allows_values(self) -> bool {
        !matches!(self, Self::None)
    }
}

fn default_prefix() -> char {
    DEFAULT_PREFIX
}

/// A registered command and the values supplied for it.
///
/// Build one with [`Command::new`] and the `with_*` methods, then hand it to
/// [`ArgumentParser::register`](crate::ArgumentParser::register).
///
/// # Examples
///
/// ```
/// use flagline_core::{Command, Necessity};
///
/// let out = Command::new("out")
///     .with_alias("o")
///     .with_help("Output file")
///     .with_necessity(Necessity::Required);
///
/// assert_eq!(out.key_string(), "-out -o");
/// assert_eq!(out.documentation_line(), "-out -o - Output file");
/// assert!(out.matches("o"));
/// assert!(out.value().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Canonical identifier, written without the prefix.
    pub key: String,
    /// Secondary identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Description shown in the generated documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Key of a command that may not appear together with this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excludes: Option<String>,
    /// Value policy.
    #[serde(default)]
    pub necessity: Necessity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<String>,
    #[serde(skip, default = "default_prefix")]
    prefix: char,
}

impl Command {
    /// Creates a command with no alias, no help text, no exclusion and
    /// [`Necessity::None`].
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            alias: None,
            help: None,
            excludes: None,
            necessity: Necessity::None,
            values: Vec::new(),
            prefix: DEFAULT_PREFIX,
        }
    }

    /// Sets the alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Declares the key of a mutually exclusive command.
    pub fn with_excludes(mut self, key: impl Into<String>) -> Self {
        self.excludes = Some(key.into());
        self
    }

    /// Sets the value policy.
    pub fn with_necessity(mut self, necessity: Necessity) -> Self {
        self.necessity = necessity;
        self
    }

    /// Returns the alias if it holds anything besides whitespace.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// Returns the excluded key if it holds anything besides whitespace.
    pub fn excludes(&self) -> Option<&str> {
        self.excludes.as_deref().filter(|e| !e.trim().is_empty())
    }

    /// Display form: the prefixed key, followed by the prefixed alias if any.
    pub fn key_string(&self) -> String {
        match self.alias() {
            Some(alias) => format!(
                "{p}{key} {p}{alias}",
                p = self.prefix,
                key = self.key,
                alias = alias
            ),
            None => format!("{}{}", self.prefix, self.key),
        }
    }

    /// The line this command contributes to the generated documentation.
    pub fn documentation_line(&self) -> String {
        format!(
            "{} - {}",
            self.key_string(),
            self.help.as_deref().unwrap_or_default()
        )
    }

    /// Whether the help text is present and not whitespace-only.
    pub fn has_help_text(&self) -> bool {
        self.help.as_deref().is_some_and(|h| !h.trim().is_empty())
    }

    /// Exact match against the key or the alias.
    ///
    /// ```
    /// use flagline_core::Command;
    ///
    /// let verbose = Command::new("v").with_alias("verbose");
    /// assert!(verbose.matches("v"));
    /// assert!(verbose.matches("verbose"));
    /// assert!(!verbose.matches("verb"));
    /// ```
    pub fn matches(&self, name: &str) -> bool {
        self.key == name || self.alias() == Some(name)
    }

    /// The primary value: the first one collected.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// All values collected, in input order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Parses the primary value as `T`.
    ///
    /// Returns `None` if there is no value or it does not parse.
    pub fn value_as<T: FromStr>(&self) -> Option<T> {
        self.value().and_then(|v| v.parse().ok())
    }

    /// The prefix character used by [`key_string`](Self::key_string).
    pub fn prefix(&self) -> char {
        self.prefix
    }

    pub(crate) fn set_prefix(&mut self, prefix: char) {
        self.prefix = prefix;
    }

    pub(crate) fn push_value(&mut self, value: &str) {
        self.values.push(value.to_string());
    }

    pub(crate) fn clear_values(&mut self) {
        self.values.clear();
    }
}
