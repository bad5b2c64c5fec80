//! json5 CLI - a command-line front end for the json5 codec.
//!
//! Reads JSON5 from a file or stdin, parses it, and writes it back out
//! either compactly or indented. Useful for linting and reformatting
//! JSON5 documents from a shell.

mod error;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{CliError, Result};

/// Parse and reformat a JSON5 document.
#[derive(Parser, Debug)]
#[command(name = "json5")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse and reformat JSON5 documents", long_about = None)]
struct Cli {
    /// Input file; reads stdin if omitted.
    input: Option<PathBuf>,

    /// Output file; writes stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent width in spaces; omit for compact output.
    #[arg(short, long)]
    indent: Option<usize>,

    /// Enable verbose logging.
    #[arg(short, long, global = true, env = "JSON5_VERBOSE")]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let text = read_input(cli.input.as_deref())?;
    let value = json5::parse(&text)?;
    tracing::debug!("parsed document into a value tree");

    let formatted = json5::format(&value, cli.indent)?;
    write_output(cli.output.as_deref(), &formatted)?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    Ok(())
}

/// Reads the input document from `path`, or stdin if `path` is `None`.
fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    let mut text = String::new();
    match path {
        Some(path) => {
            let mut file = File::open(path).map_err(|source| CliError::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;
            file.read_to_string(&mut text)?;
        }
        None => {
            io::stdin().read_to_string(&mut text)?;
        }
    }
    Ok(text)
}

/// Writes `text` to `path`, or stdout if `path` is `None`.
fn write_output(path: Option<&std::path::Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path).map_err(|source| CliError::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;
            file.write_all(text.as_bytes())?;
        }
        None => {
            io::stdout().write_all(text.as_bytes())?;
            io::stdout().write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["json5"]);
        assert_eq!(cli.input, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.indent, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_with_input_and_indent() {
        let cli = Cli::parse_from(["json5", "input.json5", "--indent", "2"]);
        assert_eq!(cli.input, Some(PathBuf::from("input.json5")));
        assert_eq!(cli.indent, Some(2));
    }

    #[test]
    fn test_cli_parse_with_output() {
        let cli = Cli::parse_from(["json5", "--output", "out.json"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["json5", "--verbose"]);
        assert!(cli.verbose);
    }
}
