//! Typed access to parsed values.
//!
//! Parses a fixed argument list and reads values back as numbers, booleans
//! and strings. Conversion failures are reported per lookup and never turn
//! into parse errors.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p flagline-demos --example typed_values
//! ```

use flagline_core::{Command, IntoParser, Necessity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ["-port", "8080", "-ratio", "0.75", "-dry-run", "true", "-name", "edge", "-retries", "lots"];

    let mut parser = args.into_parser("serve", "Starts a server");
    for key in ["port", "ratio", "dry-run", "name", "retries"] {
        parser.register(Command::new(key).with_necessity(Necessity::Required))?;
    }

    let commands = parser.parse().into_result()?;

    let (ok, port) = commands.try_get::<u16>("port");
    println!("port     -> ok={ok} value={port}");

    let (ok, ratio) = commands.try_get::<f64>("ratio");
    println!("ratio    -> ok={ok} value={ratio}");

    let (ok, dry_run) = commands.try_get::<bool>("dry-run");
    println!("dry-run  -> ok={ok} value={dry_run}");

    let (ok, name) = commands.try_get::<String>("name");
    println!("name     -> ok={ok} value={name}");

    // "lots" is not a number, so this reports failure with the default value.
    let (ok, retries) = commands.try_get::<u32>("retries");
    println!("retries  -> ok={ok} value={retries}");

    let (ok, missing) = commands.try_get::<i64>("timeout");
    println!("timeout  -> ok={ok} value={missing}");

    Ok(())
}
