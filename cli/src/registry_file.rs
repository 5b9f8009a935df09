//! Registry files describing an application's commands.
//!
//! A registry file is YAML (`.yaml`/`.yml`) or JSON (any other extension):
//!
//! ```yaml
//! name: backup
//! description: Copies files somewhere safe
//! prefix: "-"
//! error_precedence: required-check-wins
//! commands:
//!   - key: out
//!     alias: o
//!     help: Output file
//!     necessity: required
//!   - key: verbose
//!     alias: v
//!     help: Chatty output
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use flagline_core::{
    ArgumentParser, Command, DEFAULT_PREFIX, ErrorPrecedence, ParserSettings, validate_registry,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};

/// On-disk description of a command registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Application name, first line of the documentation.
    pub name: String,
    /// Application description, second line of the documentation.
    #[serde(default)]
    pub description: String,
    /// Prefix character, written as a one-character string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default)]
    pub error_precedence: ErrorPrecedence,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl RegistryFile {
    /// Loads a registry file, choosing the format from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let registry: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_reader(reader)?,
            _ => serde_json::from_reader(reader)?,
        };
        debug!(
            path = %path.display(),
            commands = registry.commands.len(),
            "loaded registry file"
        );
        Ok(registry)
    }

    /// Parser settings described by the file.
    pub fn settings(&self) -> Result<ParserSettings> {
        let prefix = match self.prefix.as_deref() {
            None => DEFAULT_PREFIX,
            Some(raw) => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_whitespace() => c,
                    _ => {
                        return Err(CliError::InvalidRegistry(format!(
                            "prefix must be a single non-space character, got {raw:?}"
                        )));
                    }
                }
            }
        };

        Ok(ParserSettings::default()
            .with_prefix(prefix)
            .with_error_precedence(self.error_precedence))
    }

    /// Builds a parser over `args` with every command registered.
    ///
    /// Exclusion rules are checked as well, so a parser returned from here
    /// has a consistent registry.
    pub fn build_parser<I, S>(&self, args: I) -> Result<ArgumentParser>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parser =
            ArgumentParser::with_settings(args, &self.name, &self.description, self.settings()?);
        parser.register_all(self.commands.iter().cloned())?;

        let problems = validate_registry(&parser);
        if !problems.is_empty() {
            let joined = problems
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CliError::InvalidRegistry(joined));
        }

        Ok(parser)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flagline_core::Necessity;

    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "registry.yaml",
            r#"
name: backup
description: Copies files
error_precedence: first-error-wins
commands:
  - key: out
    alias: o
    help: Output file
    necessity: required
  - key: verbose
"#,
        );

        let registry = RegistryFile::load(&path).unwrap();
        assert_eq!(registry.name, "backup");
        assert_eq!(registry.commands.len(), 2);
        assert_eq!(registry.commands[0].necessity, Necessity::Required);
        assert_eq!(registry.commands[1].necessity, Necessity::None);

        let settings = registry.settings().unwrap();
        assert_eq!(settings.prefix, '-');
        assert_eq!(settings.error_precedence, ErrorPrecedence::FirstErrorWins);
    }

    #[test]
    fn test_load_json_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "registry.json",
            r#"{"name": "tool", "prefix": "/", "commands": [{"key": "q", "help": "Quiet"}]}"#,
        );

        let registry = RegistryFile::load(&path).unwrap();
        let parser = registry.build_parser(["/q"]).unwrap();
        assert_eq!(parser.settings().prefix, '/');
        assert_eq!(parser.documentation(), "tool\n\n/q - Quiet");
        assert!(parser.parse().is_success());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = RegistryFile::load("/nonexistent/registry.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/registry.yaml"));
    }

    #[test]
    fn test_invalid_prefix_is_rejected() {
        let registry = RegistryFile {
            name: "tool".into(),
            description: String::new(),
            prefix: Some("--".into()),
            error_precedence: ErrorPrecedence::default(),
            commands: Vec::new(),
        };
        assert!(matches!(
            registry.settings(),
            Err(CliError::InvalidRegistry(_))
        ));
    }

    #[test]
    fn test_build_parser_rejects_dangling_exclusion() {
        let registry = RegistryFile {
            name: "tool".into(),
            description: String::new(),
            prefix: None,
            error_precedence: ErrorPrecedence::default(),
            commands: vec![Command::new("fast").with_excludes("slow")],
        };
        let err = registry.build_parser(Vec::<String>::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid registry: command 'fast' excludes unknown command 'slow'"
        );
    }

    #[test]
    fn test_build_parser_rejects_alias_conflict() {
        let registry = RegistryFile {
            name: "tool".into(),
            description: String::new(),
            prefix: None,
            error_precedence: ErrorPrecedence::default(),
            commands: vec![
                Command::new("verbose").with_alias("v"),
                Command::new("version").with_alias("v"),
            ],
        };
        assert!(matches!(
            registry.build_parser(Vec::<String>::new()),
            Err(CliError::Registration(_))
        ));
    }
}
