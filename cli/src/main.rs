mod error;
mod output;
mod registry_file;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use flagline_core::ErrorPrecedence;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{CliError, Result};
use crate::output::{OutputFormat, format_commands};
use crate::registry_file::RegistryFile;

#[derive(Debug, Parser)]
#[command(name = "flagline", version)]
#[command(about = "Parse argument lists against a flag registry file")]
struct Cli {
    /// Emit debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse arguments given after `--` against a registry file.
    Parse(ParseArgs),
    /// Check one or more registry files.
    Validate(ValidateArgs),
    /// Print the documentation generated from a registry file.
    Doc(DocArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Registry file (YAML or JSON).
    #[arg(long)]
    registry: PathBuf,
    /// Output format for the parsed commands.
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Report the first scan error even when a required value is also missing.
    #[arg(long)]
    first_error_wins: bool,
    /// Arguments to parse.
    #[arg(last = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Registry files to check.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct DocArgs {
    /// Registry file (YAML or JSON).
    #[arg(long)]
    registry: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Validate(args) => run_validate(args),
        Command::Doc(args) => run_doc(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run_parse(args: ParseArgs) -> Result<()> {
    let mut registry = RegistryFile::load(&args.registry)?;
    if args.first_error_wins {
        registry.error_precedence = ErrorPrecedence::FirstErrorWins;
    }

    let parser = registry.build_parser(args.args)?;
    debug!(args = ?parser.args(), "parsing");

    let (commands, error) = parser.parse().into_parts();
    if let Some(error) = error {
        return Err(CliError::Parse {
            error,
            documentation: commands.documentation().to_string(),
        });
    }

    print!("{}", format_commands(&commands, args.format)?);
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let mut failures = Vec::new();

    for path in &args.inputs {
        match validate_file(path) {
            Ok(count) => println!("{}: ok ({count} command(s))", path.display()),
            Err(err) => {
                println!("{}: {err}", path.display());
                failures.push(path.display().to_string());
            }
        }
    }

    info!(
        files = args.inputs.len(),
        failed = failures.len(),
        "validated registry files"
    );

    if failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidRegistry(format!(
            "{} of {} file(s) failed validation",
            failures.len(),
            args.inputs.len()
        )))
    }
}

fn validate_file(path: &Path) -> Result<usize> {
    let registry = RegistryFile::load(path)?;
    let parser = registry.build_parser(Vec::<String>::new())?;
    Ok(parser.len())
}

fn run_doc(args: DocArgs) -> Result<()> {
    let registry = RegistryFile::load(&args.registry)?;
    let parser = registry.build_parser(Vec::<String>::new())?;
    println!("{}", parser.documentation());
    Ok(())
}
