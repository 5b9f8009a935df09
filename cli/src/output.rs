//! Output formatting for parse results.

use flagline_core::CommandSet;

use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Formats the encountered commands in the requested output format.
pub fn format_commands(commands: &CommandSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(commands_to_text(commands)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(commands)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(commands)?),
    }
}

/// One line per command: its key string, then its values if any.
fn commands_to_text(commands: &CommandSet) -> String {
    let mut out = String::new();

    for command in commands {
        out.push_str(&command.key_string());
        if !command.values().is_empty() {
            out.push_str(": ");
            out.push_str(&command.values().join(" "));
        }
        out.push('\n');
    }

    out
}
