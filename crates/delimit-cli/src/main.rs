//! Delimit CLI - convert between delimited text and JSON

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use delimit::prelude::*;
use delimit::{parse_value, unparse_value};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "delimit")]
#[command(
    author,
    version,
    about = "Convert between delimited text and JSON"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse delimited text and print the result envelope as JSON
    Parse {
        /// Input text file (default: stdin)
        input: Option<PathBuf>,

        /// Treat the first row as field names
        #[arg(long)]
        header: bool,

        /// Coerce numbers and booleans
        #[arg(long)]
        dynamic_typing: bool,

        /// Drop blank lines
        #[arg(long)]
        skip_empty_lines: bool,

        /// Read the input as a JSON string document instead of raw text
        #[arg(long)]
        json: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Serialize a JSON array of arrays or objects to delimited text
    Unparse {
        /// Input JSON file (default: stdin)
        input: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Args)]
struct FormatArgs {
    /// Field delimiter (default: comma)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Line separator; accepts \n, \r\n, \r and \t escapes (default: \n)
    #[arg(long)]
    newline: Option<String>,

    /// JSON options file (camelCase keys, any subset)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl FormatArgs {
    /// Defaults, then the config file, then explicit flags
    fn options(&self) -> Result<CsvOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => CsvOptions::default(),
        };
        if let Some(delimiter) = self.delimiter {
            options.delimiter = delimiter;
        }
        if let Some(newline) = &self.newline {
            options.newline = unescape(newline);
        }
        Ok(options)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse {
            input,
            header,
            dynamic_typing,
            skip_empty_lines,
            json,
            pretty,
            format,
        } => {
            let mut options = format.options()?;
            options.header |= header;
            options.dynamic_typing |= dynamic_typing;
            options.skip_empty_lines |= skip_empty_lines;
            run_parse(input.as_deref(), &options, json, pretty)
        }
        Commands::Unparse { input, format } => run_unparse(input.as_deref(), &format.options()?),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_parse(
    input: Option<&Path>,
    options: &CsvOptions,
    json_input: bool,
    pretty: bool,
) -> Result<ExitCode> {
    let text = read_input(input)?;
    tracing::debug!(?options, bytes = text.len(), "parsing input");
    let result = if json_input {
        let value: serde_json::Value =
            serde_json::from_str(&text).context("Input is not valid JSON")?;
        parse_value(&value, options)
    } else {
        parse(&text, options)
    };

    let json = if pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .context("Failed to encode parse result")?;
    println!("{}", json);

    if result.is_fatal() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_unparse(input: Option<&Path>, options: &CsvOptions) -> Result<ExitCode> {
    let text = read_input(input)?;
    let value: serde_json::Value =
        serde_json::from_str(&text).context("Input is not valid JSON")?;
    tracing::debug!(?options, "serializing input");
    let result = unparse_value(&value, options);

    match &result.result {
        Some(output) => {
            io::stdout()
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let errors =
                serde_json::to_string(&result.errors).context("Failed to encode errors")?;
            eprintln!("{}", errors);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(text)
        }
    }
}

fn load_options(path: &Path) -> Result<CsvOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Config '{}' is not valid JSON", path.display()))?;
    if !value.is_object() {
        bail!("Config '{}' must be a JSON object", path.display());
    }
    serde_json::from_value(value)
        .with_context(|| format!("Invalid options in '{}'", path.display()))
}

/// Expand the escape sequences a shell makes awkward to pass literally
fn unescape(s: &str) -> String {
    s.replace("\\r", "\r").replace("\\n", "\n").replace("\\t", "\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("\\r\\n"), "\r\n");
        assert_eq!(unescape("\\t"), "\t");
        assert_eq!(unescape(";"), ";");
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "delimit",
            "parse",
            "--header",
            "--dynamic-typing",
            "-d",
            ";",
            "--newline",
            "\\r\\n",
        ])
        .unwrap();
        match cli.command {
            Commands::Parse {
                header,
                dynamic_typing,
                skip_empty_lines,
                format,
                ..
            } => {
                assert!(header && dynamic_typing && !skip_empty_lines);
                let options = format.options().unwrap();
                assert_eq!(options.delimiter, ';');
                assert_eq!(options.newline, "\r\n");
            }
            Commands::Unparse { .. } => panic!("expected parse command"),
        }
    }
}
