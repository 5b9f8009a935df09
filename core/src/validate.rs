//! Registry validation.
//!
//! Registration already rejects names that would make lookups ambiguous.
//! Exclusion rules can only be checked once the whole registry is known,
//! since a command may exclude one that is registered after it.
//!
//! # Examples
//!
//! ```
//! use flagline_core::*;
//!
//! let mut parser = ArgumentParser::new(Vec::<String>::new(), "app", "");
//! parser
//!     .register(Command::new("quiet").with_excludes("verbose"))?
//!     .register(Command::new("verbose"))?;
//! assert!(validate_registry(&parser).is_empty());
//!
//! parser.register(Command::new("fast").with_excludes("slow"))?;
//! assert_eq!(
//!     validate_registry(&parser),
//!     vec![ValidationError::UnknownExclusion {
//!         key: "fast".into(),
//!         excludes: "slow".into(),
//!     }]
//! );
//! # Ok::<(), RegistrationError>(())
//! ```

use thiserror::Error;

use crate::ArgumentParser;

/// Registry configuration problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A command excludes a key that is not registered.
    #[error("command '{key}' excludes unknown command '{excludes}'")]
    UnknownExclusion { key: String, excludes: String },
    /// A command excludes itself, so it can only be given once.
    #[error("command '{0}' excludes itself")]
    SelfExclusion(String),
}

/// Checks every exclusion rule in the registry.
///
/// Returns all problems found, in registration order. An empty vector means
/// the registry is consistent.
pub fn validate_registry(parser: &ArgumentParser) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for command in parser.commands() {
        let Some(excludes) = command.excludes() else {
            continue;
        };

        if excludes == command.key {
            errors.push(ValidationError::SelfExclusion(command.key.clone()));
        } else if parser.get(excludes).is_none() {
            errors.push(ValidationError::UnknownExclusion {
                key: command.key.clone(),
                excludes: excludes.to_string(),
            });
        }
    }

    errors
}
