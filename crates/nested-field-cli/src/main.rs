//! `nfield` CLI: read and write nested fields in JSON/YAML documents.
//!
//! ## Usage
//!
//! ```sh
//! # Read a field (stdin → stdout)
//! echo '{"jenkins":{"clouds":[{"name":"one"},{"name":"two"}]}}' | nfield get 'jenkins.clouds[1].name'
//!
//! # Print a string without JSON quotes
//! nfield get 'jenkins.clouds[1].name' -i casc.json --raw
//!
//! # Update a field, creating intermediate maps, and write the result to a file
//! nfield set jenkins.numExecutors 4 -i casc.yaml -o casc.yaml
//!
//! # Force the new value to be a string even if it parses as JSON
//! nfield set build.version 1.10 --string -i build.json
//!
//! # Show the type of the value at a path
//! nfield type jenkins.clouds -i casc.yaml
//! ```
//!
//! Exit codes: `0` success, `1` path not found (`get`, `type`), `2` any error.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use nested_field::{Path, Value};
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nfield",
    version,
    about = "Read and write nested fields in JSON/YAML documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a path
    Get {
        /// Dotted path, e.g. `jenkins.clouds[1].name`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Document format (inferred from the input extension, else json)
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Print strings without quotes
        #[arg(long)]
        raw: bool,
    },
    /// Assign a value at a path and print the updated document
    Set {
        /// Dotted path, e.g. `jenkins.clouds[0].name`
        path: String,
        /// New value, parsed as JSON when possible
        value: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Document format (inferred from the input extension, else json)
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Always treat VALUE as a string
        #[arg(long)]
        string: bool,
    },
    /// Print the type of the value at a path
    Type {
        /// Dotted path, e.g. `jenkins.clouds`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Document format (inferred from the input extension, else json)
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Execute one subcommand. `Ok(false)` means the path resolved to nothing.
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Get {
            path,
            input,
            format,
            raw,
        } => {
            let format = resolve_format(format, input.as_deref());
            let doc = read_document(input.as_deref(), format)?;
            let path = parse_path(&path)?;

            let Some(resolved) = nested_field::get(&doc, &path)
                .with_context(|| format!("Failed to read `{path}`"))?
            else {
                eprintln!("not found: {path}");
                return Ok(false);
            };

            match resolved.as_str() {
                Some(s) if raw => println!("{s}"),
                _ => print!("{}", render(&resolved.to_value(), format)?),
            }
        }
        Commands::Set {
            path,
            value,
            input,
            output,
            format,
            string,
        } => {
            let format = resolve_format(format, input.as_deref());
            let mut doc = read_document(input.as_deref(), format)?;
            let path = parse_path(&path)?;
            let target = parse_target(value, string);

            tracing::debug!(%path, kind = target.type_name(), "assigning value");
            nested_field::set_value(&mut doc, target, &path)
                .with_context(|| format!("Failed to write `{path}`"))?;

            write_output(output.as_deref(), &render(&doc, format)?)?;
        }
        Commands::Type {
            path,
            input,
            format,
        } => {
            let format = resolve_format(format, input.as_deref());
            let doc = read_document(input.as_deref(), format)?;
            let path = parse_path(&path)?;

            let Some(resolved) = nested_field::get(&doc, &path)
                .with_context(|| format!("Failed to read `{path}`"))?
            else {
                eprintln!("not found: {path}");
                return Ok(false);
            };
            println!("{}", resolved.type_name());
        }
    }

    Ok(true)
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// An explicit `--format` wins; otherwise `.yaml`/`.yml` inputs are YAML and
/// everything else (stdin included) is JSON.
fn resolve_format(explicit: Option<Format>, input: Option<&str>) -> Format {
    if let Some(format) = explicit {
        return format;
    }
    match input {
        Some(path) if path.ends_with(".yaml") || path.ends_with(".yml") => Format::Yaml,
        _ => Format::Json,
    }
}

fn parse_path(raw: &str) -> Result<Path> {
    Path::from_dotted(raw).with_context(|| format!("Invalid path: '{raw}'"))
}

/// Parse VALUE as JSON so `4`, `true` and `{"a":1}` keep their types; anything
/// that isn't valid JSON is taken as a plain string.
fn parse_target(raw: String, force_string: bool) -> Value {
    if force_string {
        return Value::String(raw);
    }
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "value is not JSON, using it as a string");
            Value::String(raw)
        }
    }
}

fn read_document(input: Option<&str>, format: Format) -> Result<Value> {
    let text = read_input(input)?;
    match format {
        Format::Json => serde_json::from_str(&text).context("Failed to parse JSON document"),
        Format::Yaml => serde_yaml::from_str(&text).context("Failed to parse YAML document"),
    }
}

fn render(value: &Value, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut out = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
            out.push('\n');
            Ok(out)
        }
        Format::Yaml => serde_yaml::to_string(value).context("Failed to encode YAML"),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
