//! Common types and utilities for numcheck commands.

use std::io::{IsTerminal, Write};

use numlex_lex::IntegerValue;
use numlex_util::ColorConfig;
use serde::{Deserialize, Serialize};

use crate::error::{NumcheckError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per item
    #[default]
    Text,
    /// A single pretty-printed JSON document
    Json,
}

impl OutputFormat {
    /// `Json` when `--json` was passed, otherwise the configured format.
    pub fn resolve(json_flag: bool, configured: OutputFormat) -> Self {
        if json_flag {
            OutputFormat::Json
        } else {
            configured
        }
    }
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Whether diagnostics written to stderr should be colored.
pub fn use_color(color: ColorConfig, no_color: bool) -> bool {
    !no_color && color.use_color(std::io::stderr().is_terminal())
}

/// JSON form of a parsed integer.
pub fn integer_json(value: IntegerValue) -> serde_json::Value {
    match value {
        IntegerValue::Unsigned(v) => v.into(),
        IntegerValue::Signed(v) => v.into(),
    }
}

/// Type name reported for a parsed integer.
pub fn integer_type(value: IntegerValue) -> &'static str {
    match value {
        IntegerValue::Unsigned(_) => "u64",
        IntegerValue::Signed(_) => "i64",
    }
}

/// Turns a count of rejected items into the command's exit status.
pub fn check_for_failures(failed: usize, total: usize, what: &str) -> Result<()> {
    if failed > 0 {
        return Err(NumcheckError::Validation(format!(
            "{} of {} {} rejected",
            failed, total, what
        )));
    }
    Ok(())
}
