//! Command-line interface for turtle
//! This binary tokenizes and parses turtle scripts and prints the result in one of
//! the processor's formats.
//!
//! Usage:
//!   turtle tokens `<path>` [--format `<format>`]   - Print the token stream
//!   turtle parse `<path>` [--format `<format>`]    - Print the parsed tree
//!   turtle list-formats                        - List all available formats
//!
//! A path of `-` reads the script from stdin.

use clap::{ArgAction, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use turtle::turtle::config::{Loader, TurtleConfig};
use turtle::turtle::processor::{
    available_formats, process_source, ProcessingSpec, ProcessingStage,
};

#[derive(Debug, Parser)]
#[command(
    name = "turtle",
    version,
    about = "A tool for inspecting turtle-graphics scripts"
)]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the token stream of a script
    Tokens {
        /// Path to the script, or `-` for stdin
        path: String,
        /// Output format (token-simple, token-json)
        #[arg(long, short, default_value = "token-simple")]
        format: String,
    },
    /// Parse a script and print its tree
    Parse {
        /// Path to the script, or `-` for stdin
        path: String,
        /// Output format (ast-tag, ast-treeviz, ast-json); defaults to the configured one
        #[arg(long, short)]
        format: Option<String>,
    },
    /// List available output formats
    ListFormats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let format_override = match &cli.command {
        Command::Parse { format, .. } => format.as_deref(),
        _ => None,
    };
    let config = match load_config(cli.config.as_deref(), format_override) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Tokens { path, format } => {
            handle_process_command(&path, &format, ProcessingStage::Token, &config)
        }
        Command::Parse { path, .. } => {
            handle_process_command(&path, &config.output.format, ProcessingStage::Ast, &config)
        }
        Command::ListFormats => {
            handle_list_formats_command();
            ExitCode::SUCCESS
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "turtle=warn",
        1 => "turtle=debug",
        _ => "turtle=trace",
    }
}

/// Defaults, then the `--config` file, then command-line overrides
fn load_config(
    path: Option<&std::path::Path>,
    format: Option<&str>,
) -> Result<TurtleConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader.set_override("output.format", format)?;
    }
    loader.build()
}

/// Resolve `format` and check it belongs to the subcommand's stage
fn spec_for_stage(format: &str, stage: ProcessingStage) -> Result<ProcessingSpec, String> {
    let spec = ProcessingSpec::from_string(format).map_err(|e| e.to_string())?;
    if spec.stage != stage {
        let prefix = match stage {
            ProcessingStage::Token => "token-",
            ProcessingStage::Ast => "ast-",
        };
        return Err(format!("'{}' is not one of the {}* formats", format, prefix));
    }
    Ok(spec)
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the tokens and parse commands
fn handle_process_command(
    path: &str,
    format: &str,
    stage: ProcessingStage,
    config: &TurtleConfig,
) -> ExitCode {
    let spec = match spec_for_stage(format, stage) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Available formats: {}", available_formats().join(", "));
            return ExitCode::FAILURE;
        }
    };

    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    match process_source(&source, &spec, &config.output) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
