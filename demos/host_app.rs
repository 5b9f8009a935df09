//! A host application wired up the way a small tool would use flagline.
//!
//! Registers a handful of commands, parses the process arguments and either
//! acts on them or prints the error and the generated help text.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p flagline-demos --example host_app -- -out backup.tar -v
//! cargo run -p flagline-demos --example host_app -- -help
//! RUST_LOG=debug cargo run -p flagline-demos --example host_app -- -quiet -v
//! ```

use flagline_core::{ArgumentParser, Command, Necessity, validate_registry};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut parser = ArgumentParser::from_env("backup", "Copies files somewhere safe");
    parser
        .register(Command::new("help").with_alias("h").with_help("Show this text"))?
        .register(
            Command::new("out")
                .with_alias("o")
                .with_help("Archive to write")
                .with_necessity(Necessity::Required),
        )?
        .register(
            Command::new("include")
                .with_alias("i")
                .with_help("Extra paths to include")
                .with_necessity(Necessity::Optional),
        )?
        .register(Command::new("verbose").with_alias("v").with_help("Chatty output"))?
        .register(
            Command::new("quiet")
                .with_alias("q")
                .with_help("Print nothing")
                .with_excludes("verbose"),
        )?;

    for problem in validate_registry(&parser) {
        eprintln!("registry problem: {problem}");
    }

    let outcome = parser.parse();
    if let Some(err) = outcome.error() {
        eprintln!("{err}");
        eprintln!();
        eprintln!("{}", outcome.commands().documentation());
        std::process::exit(1);
    }

    let commands = outcome.commands();
    if commands.is_empty() || commands.contains("help") {
        println!("{}", commands.documentation());
        return Ok(());
    }

    let archive = commands.get("out").and_then(Command::value).unwrap_or("backup.tar");
    let extra = commands.get("include").map(Command::values).unwrap_or_default();

    if !commands.contains("quiet") {
        println!("Writing {archive}");
        for path in extra {
            println!("  including {path}");
        }
    }
    if commands.contains("v") {
        println!("Encountered commands, in order:");
        for command in commands {
            println!("  {}", command.key_string());
        }
    }

    Ok(())
}
