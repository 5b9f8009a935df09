//! Declarative command-line flag parsing.
//!
//! This crate lets an application describe the flags it understands and then
//! parse an argument vector against that description:
//!
//! - [`Command`] — one flag: key, optional alias, help text, an optional
//!   mutually exclusive key, and a [`Necessity`] saying whether values may
//!   follow it.
//! - [`ArgumentParser`] — the registry of commands plus the raw arguments;
//!   [`ArgumentParser::parse`] produces a [`ParseOutcome`].
//! - [`CommandSet`] — the commands actually given, in input order, with
//!   lookup by key or alias, typed value access, and generated help text.
//!
//! Parsing reports at most one [`ParseError`]. Registration rejects
//! ambiguous names with a [`RegistrationError`], and [`validate_registry`]
//! checks exclusion rules across the whole registry.
//!
//! # Example
//!
//! ```
//! use flagline_core::*;
//!
//! let args = ["--out", "report.txt", "-n", "3"];
//! let mut parser = args.into_parser("report", "Writes a report");
//! parser
//!     .register(Command::new("out").with_alias("o").with_necessity(Necessity::Required))?
//!     .register(Command::new("n").with_help("Repeat count").with_necessity(Necessity::Optional))?
//!     .register(Command::new("quiet").with_excludes("verbose"))?
//!     .register(Command::new("verbose"))?;
//! assert!(validate_registry(&parser).is_empty());
//!
//! let commands = parser.parse().into_result()?;
//! assert_eq!(commands.get("o").and_then(Command::value), Some("report.txt"));
//! assert_eq!(commands.try_get::<u8>("n"), (true, 3));
//! assert!(!commands.contains("quiet"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod commands;
mod error;
mod parser;
mod settings;
mod types;
mod validate;

pub use commands::{CommandSet, ParseOutcome};
pub use error::{ParseError, ParseErrorKind, RegistrationError};
pub use parser::{ArgumentParser, IntoParser};
pub use settings::{DEFAULT_PREFIX, ErrorPrecedence, ParserSettings};
pub use types::*;
pub use validate::{ValidationError, validate_registry};
