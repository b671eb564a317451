//! Check command implementation.
//!
//! Validates literals without computing their values.

use std::io::Write;

use numlex_lex::{is_valid_float, is_valid_integer};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{check_for_failures, write_json, OutputFormat};
use crate::commands::traits::{self, Command};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Literals to validate.
    pub literals: Vec<String>,
    /// Emit JSON instead of text.
    pub json: bool,
}

/// Validation result for one literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict<'a> {
    /// The literal as given
    pub literal: &'a str,
    /// Whether it is a valid integer or float literal
    pub valid: bool,
    /// `"integer"` or `"float"` for valid literals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl<'a> Verdict<'a> {
    /// Classifies `literal`, preferring integer over float.
    pub fn of(literal: &'a str) -> Self {
        let kind = if is_valid_integer(literal) {
            Some("integer")
        } else if is_valid_float(literal) {
            Some("float")
        } else {
            None
        };
        Self {
            literal,
            valid: kind.is_some(),
            kind,
        }
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    format: OutputFormat,
}

impl CheckCommand {
    /// Writes the report and returns the number of invalid literals.
    pub fn write_report(&self, out: &mut dyn Write) -> Result<usize> {
        let verdicts: Vec<Verdict<'_>> = self.args.literals.iter().map(|l| Verdict::of(l)).collect();
        let invalid = verdicts.iter().filter(|v| !v.valid).count();
        debug!(total = verdicts.len(), invalid, "checked literals");

        match self.format {
            OutputFormat::Json => write_json(out, &verdicts)?,
            OutputFormat::Text => {
                for verdict in &verdicts {
                    match verdict.kind {
                        Some(kind) => writeln!(out, "{}: valid {}", verdict.literal, kind)?,
                        None => writeln!(out, "{}: invalid", verdict.literal)?,
                    }
                }
            },
        }
        Ok(invalid)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: Self::Args, config: &Config) -> Self {
        let format = OutputFormat::resolve(args.json, config.output.format);
        Self { args, format }
    }

    fn execute(&self) -> Result<()> {
        let invalid = self.write_report(&mut std::io::stdout().lock())?;
        check_for_failures(invalid, self.args.literals.len(), "literals")
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<()> {
    traits::run::<CheckCommand>(args, config)
}
