//! Parse command implementation.
//!
//! Parses literals into values and reports either the value and its type
//! or the rejection with its diagnostic code.

use std::io::Write;

use numlex_lex::{looks_like_float, parse_float, parse_integer, parse_u64, NumberError};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{
    check_for_failures, integer_json, integer_type, write_json, OutputFormat,
};
use crate::commands::traits::{self, Command};
use crate::config::Config;
use crate::error::Result;

/// What a literal is parsed as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Float if the literal has a `.` or exponent, integer otherwise
    #[default]
    Auto,
    /// Always a float
    Float,
    /// Always an unsigned integer
    Unsigned,
}

/// Arguments for the parse command.
#[derive(Debug, Clone, Default)]
pub struct ParseArgs {
    /// Literals to parse.
    pub literals: Vec<String>,
    /// How to interpret the literals.
    pub mode: ParseMode,
    /// Emit JSON instead of text.
    pub json: bool,
}

/// Result of parsing one literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    /// The literal as given
    pub literal: String,
    /// `u64`, `i64` or `f64` on success
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<&'static str>,
    /// The parsed value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Diagnostic code on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Suggested fix on failure, when one applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl ParseOutcome {
    fn success(literal: &str, value_type: &'static str, value: serde_json::Value) -> Self {
        Self {
            literal: literal.to_string(),
            value_type: Some(value_type),
            value: Some(value),
            code: None,
            error: None,
            help: None,
        }
    }

    fn failure(literal: &str, err: &NumberError) -> Self {
        Self {
            literal: literal.to_string(),
            value_type: None,
            value: None,
            code: Some(err.code().as_str()),
            error: Some(err.to_string()),
            help: err.help(),
        }
    }

    /// Returns true if the literal was parsed.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Parses a single literal according to `mode`.
pub fn parse_literal(literal: &str, mode: ParseMode) -> ParseOutcome {
    let float = mode == ParseMode::Float || (mode == ParseMode::Auto && looks_like_float(literal));

    let result = if float {
        parse_float(literal).map(|v| ParseOutcome::success(literal, "f64", v.into()))
    } else if mode == ParseMode::Unsigned {
        parse_u64(literal).map(|v| ParseOutcome::success(literal, "u64", v.into()))
    } else {
        let signed = literal.starts_with('+') || literal.starts_with('-');
        parse_integer(literal, signed)
            .map(|v| ParseOutcome::success(literal, integer_type(v), integer_json(v)))
    };

    result.unwrap_or_else(|err| ParseOutcome::failure(literal, &err))
}

/// Parse command handler.
pub struct ParseCommand {
    args: ParseArgs,
    format: OutputFormat,
}

impl ParseCommand {
    /// Writes the report and returns the number of rejected literals.
    pub fn write_report(&self, out: &mut dyn Write) -> Result<usize> {
        let outcomes: Vec<ParseOutcome> = self
            .args
            .literals
            .iter()
            .map(|literal| parse_literal(literal, self.args.mode))
            .collect();
        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        debug!(total = outcomes.len(), failed, mode = ?self.args.mode, "parsed literals");

        match self.format {
            OutputFormat::Json => write_json(out, &outcomes)?,
            OutputFormat::Text => {
                for outcome in &outcomes {
                    write_outcome(out, outcome)?;
                }
            },
        }
        Ok(failed)
    }
}

fn write_outcome(out: &mut dyn Write, outcome: &ParseOutcome) -> Result<()> {
    match (&outcome.value, outcome.value_type) {
        (Some(value), Some(value_type)) => {
            let shown = match value.as_f64() {
                Some(v) if value_type == "f64" => format!("{:?}", v),
                _ => value.to_string(),
            };
            writeln!(out, "{} = {} ({})", outcome.literal, shown, value_type)?;
        },
        _ => {
            writeln!(
                out,
                "{}: error[{}]: {}",
                outcome.literal,
                outcome.code.as_deref().unwrap_or("?"),
                outcome.error.as_deref().unwrap_or_default()
            )?;
            if let Some(help) = &outcome.help {
                writeln!(out, "  = help: {}", help)?;
            }
        },
    }
    Ok(())
}

impl Command for ParseCommand {
    type Args = ParseArgs;

    fn new(args: Self::Args, config: &Config) -> Self {
        let format = OutputFormat::resolve(args.json, config.output.format);
        Self { args, format }
    }

    fn execute(&self) -> Result<()> {
        let failed = self.write_report(&mut std::io::stdout().lock())?;
        check_for_failures(failed, self.args.literals.len(), "literals")
    }

    fn name() -> &'static str {
        "parse"
    }
}

/// Run the parse command.
pub fn run_parse(args: ParseArgs, config: &Config) -> Result<()> {
    traits::run::<ParseCommand>(args, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(literals: &[&str], mode: ParseMode, json: bool) -> (String, usize) {
        let args = ParseArgs {
            literals: literals.iter().map(|l| l.to_string()).collect(),
            mode,
            json,
        };
        let command = ParseCommand::new(args, &Config::default());
        let mut out = Vec::new();
        let failed = command.write_report(&mut out).unwrap();
        (String::from_utf8(out).unwrap(), failed)
    }

    #[test]
    fn test_parse_literal_auto() {
        let outcome = parse_literal("0xFF", ParseMode::Auto);
        assert_eq!(outcome.value_type, Some("u64"));
        assert_eq!(outcome.value, Some(serde_json::json!(255)));

        let outcome = parse_literal("-0x10", ParseMode::Auto);
        assert_eq!(outcome.value_type, Some("i64"));
        assert_eq!(outcome.value, Some(serde_json::json!(-16)));

        let outcome = parse_literal("0x1.8p1", ParseMode::Auto);
        assert_eq!(outcome.value_type, Some("f64"));
        assert_eq!(outcome.value, Some(serde_json::json!(3.0)));
    }

    #[test]
    fn test_parse_literal_forced_float() {
        let outcome = parse_literal("42", ParseMode::Float);
        assert_eq!(outcome.value_type, Some("f64"));
        assert_eq!(outcome.value, Some(serde_json::json!(42.0)));
    }

    #[test]
    fn test_parse_literal_unsigned_rejects_sign() {
        let outcome = parse_literal("-1", ParseMode::Unsigned);
        assert!(!outcome.is_ok());
        assert_eq!(outcome.code.as_deref(), Some("E1003"));
    }

    #[test]
    fn test_parse_literal_overflow() {
        let outcome = parse_literal("18446744073709551616", ParseMode::Auto);
        assert_eq!(outcome.code.as_deref(), Some("E1005"));
        assert!(outcome.help.is_some());
    }

    #[test]
    fn test_text_report() {
        let (text, failed) = report(&["1'000", "2.5", "0o9"], ParseMode::Auto, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1'000 = 1000 (u64)");
        assert_eq!(lines[1], "2.5 = 2.5 (f64)");
        assert!(lines[2].starts_with("0o9: error[E1003]: "));
        assert_eq!(failed, 1);
    }

    #[test]
    fn test_text_report_whole_float() {
        let (text, _) = report(&["1e3"], ParseMode::Auto, false);
        assert_eq!(text, "1e3 = 1000.0 (f64)\n");
    }

    #[test]
    fn test_json_report() {
        let (text, failed) = report(&["7", "0x"], ParseMode::Auto, true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["type"], "u64");
        assert_eq!(value[0]["value"], 7);
        assert!(value[0].get("error").is_none());
        assert_eq!(value[1]["code"], "E1003");
        assert!(value[1]["error"].as_str().unwrap().contains("`0x`"));
        assert_eq!(failed, 1);
    }
}
