//! numcheck - check, parse and scan numeric literals.
//!
//! This is the main entry point for the numcheck CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_check, run_parse, run_scan, CheckArgs, ParseArgs, ParseMode, ScanArgs,
};
use config::Config;
use error::{NumcheckError, Result};

/// numcheck - validate and evaluate numeric literals
///
/// Accepts decimal, hexadecimal (0x), octal (0o) and binary (0b) integers
/// with `'` digit separators, and decimal or hexadecimal floats.
/// Literals that start with `-` and are not plain numbers must follow `--`.
#[derive(Parser, Debug)]
#[command(name = "numcheck")]
#[command(author = "Numlex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate and evaluate numeric literals", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "NUMCHECK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "NUMCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "NUMCHECK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the numcheck CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether literals are valid
    ///
    /// Prints `valid integer`, `valid float` or `invalid` for each literal
    /// and fails if any literal is invalid.
    Check(CheckCommand),

    /// Parse literals into values
    ///
    /// Prints each value with its type (u64, i64 or f64), or the error that
    /// rejected it, and fails if any literal is rejected.
    Parse(ParseCommand),

    /// Lex a file of literals
    ///
    /// Literals may be separated by whitespace, `,` or `;`. Tokens go to
    /// stdout and diagnostics to stderr; fails if any literal is invalid.
    Scan(ScanCommand),
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Literals to check
    #[arg(required = true, allow_negative_numbers = true)]
    literals: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the parse subcommand.
#[derive(Parser, Debug)]
struct ParseCommand {
    /// Literals to parse
    #[arg(required = true, allow_negative_numbers = true)]
    literals: Vec<String>,

    /// Parse every literal as a float
    #[arg(long, conflicts_with = "unsigned")]
    float: bool,

    /// Parse every literal as an unsigned 64-bit integer
    #[arg(long)]
    unsigned: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// File to scan (default: stdin)
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Main entry point for the numcheck CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, cli.no_color, &config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that command output on stdout stays
/// machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| NumcheckError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, no_color: bool, config: &Config) -> Result<()> {
    match command {
        Commands::Check(args) => execute_check(args, config),
        Commands::Parse(args) => execute_parse(args, config),
        Commands::Scan(args) => execute_scan(args, no_color, config),
    }
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: &Config) -> Result<()> {
    let check_args = CheckArgs {
        literals: args.literals,
        json: args.json,
    };
    run_check(check_args, config)
}

/// Execute the parse command.
fn execute_parse(args: ParseCommand, config: &Config) -> Result<()> {
    let mode = if args.float {
        ParseMode::Float
    } else if args.unsigned {
        ParseMode::Unsigned
    } else {
        ParseMode::Auto
    };
    let parse_args = ParseArgs {
        literals: args.literals,
        mode,
        json: args.json,
    };
    run_parse(parse_args, config)
}

/// Execute the scan command.
fn execute_scan(args: ScanCommand, no_color: bool, config: &Config) -> Result<()> {
    let scan_args = ScanArgs {
        file: args.file,
        json: args.json,
        no_color,
    };
    run_scan(scan_args, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["numcheck", "check", "0x1F", "1.5"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.literals, vec!["0x1F", "1.5"]);
            assert!(!args.json);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_requires_literal() {
        assert!(Cli::try_parse_from(["numcheck", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_negative_literal() {
        let cli = Cli::parse_from(["numcheck", "parse", "-42", "-1.5"]);
        if let Commands::Parse(args) = cli.command {
            assert_eq!(args.literals, vec!["-42", "-1.5"]);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_hyphen_literal_after_separator() {
        let cli = Cli::parse_from(["numcheck", "parse", "--", "-0x10"]);
        if let Commands::Parse(args) = cli.command {
            assert_eq!(args.literals, vec!["-0x10"]);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_float_flag() {
        let cli = Cli::parse_from(["numcheck", "parse", "--float", "1"]);
        if let Commands::Parse(args) = cli.command {
            assert!(args.float);
            assert!(!args.unsigned);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_float_conflicts_with_unsigned() {
        let result = Cli::try_parse_from(["numcheck", "parse", "--float", "--unsigned", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_scan_stdin() {
        let cli = Cli::parse_from(["numcheck", "scan"]);
        if let Commands::Scan(args) = cli.command {
            assert!(args.file.is_none());
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_file_json() {
        let cli = Cli::parse_from(["numcheck", "scan", "numbers.txt", "--json"]);
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("numbers.txt")));
            assert!(args.json);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["numcheck", "--verbose", "check", "1"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["numcheck", "--config", "/path/to/numcheck.toml", "scan"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/numcheck.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color_after_subcommand() {
        let cli = Cli::parse_from(["numcheck", "scan", "--no-color"]);
        assert!(cli.no_color);
    }
}
