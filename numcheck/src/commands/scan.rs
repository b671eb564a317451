//! Scan command implementation.
//!
//! Runs the lexer over a whole file (or stdin) and lists every token,
//! followed by the diagnostics the lexer produced.

use std::io::{Read, Write};
use std::path::PathBuf;

use numlex_lex::{LexOptions, Lexer, Token};
use numlex_util::{Diagnostic, Handler};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{
    check_for_failures, integer_json, use_color, write_json, OutputFormat,
};
use crate::commands::traits::{self, Command};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the scan command.
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    /// File to scan; stdin when absent.
    pub file: Option<PathBuf>,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Disable colored diagnostics.
    pub no_color: bool,
}

/// A token together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedToken {
    /// Line of the token's first character (1-based)
    pub line: u32,
    /// Column of the token's first character (1-based)
    pub column: u32,
    /// Source text of the token
    pub text: String,
    /// The token itself
    pub token: Token,
}

/// Everything the lexer produced for one source.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Tokens in source order, without the end marker
    pub tokens: Vec<ScannedToken>,
    /// Diagnostics in emission order
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanReport {
    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_error()).count()
    }

    /// Number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_warning()).count()
    }
}

/// Lexes `source` to the end.
pub fn scan_source(source: &str, options: LexOptions) -> ScanReport {
    let handler = Handler::new();
    let mut tokens = Vec::new();
    {
        let mut lexer = Lexer::with_options(source, &handler, options);
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            let span = lexer.token_span();
            tokens.push(ScannedToken {
                line: span.line,
                column: span.column,
                text: source.get(span.start..span.end).unwrap_or_default().to_string(),
                token,
            });
        }
    }
    ScanReport {
        tokens,
        diagnostics: handler.diagnostics(),
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    line: u32,
    column: u32,
    kind: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct DiagnosticRecord<'a> {
    level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    message: &'a str,
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    help: &'a [String],
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    tokens: Vec<TokenRecord<'a>>,
    diagnostics: Vec<DiagnosticRecord<'a>>,
    errors: usize,
    warnings: usize,
}

impl<'a> From<&'a ScannedToken> for TokenRecord<'a> {
    fn from(scanned: &'a ScannedToken) -> Self {
        let value = match &scanned.token {
            Token::Integer(value) => Some(integer_json(*value)),
            Token::Float(value) => Some((*value).into()),
            Token::Invalid(_) | Token::Eof => None,
        };
        Self {
            line: scanned.line,
            column: scanned.column,
            kind: scanned.token.kind_name(),
            text: &scanned.text,
            value,
        }
    }
}

impl<'a> From<&'a Diagnostic> for DiagnosticRecord<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        Self {
            level: diagnostic.level.name(),
            code: diagnostic.code.map(|code| code.as_str()),
            message: &diagnostic.message,
            line: diagnostic.span.line,
            column: diagnostic.span.column,
            help: &diagnostic.helps,
        }
    }
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
    format: OutputFormat,
    options: LexOptions,
    color: bool,
}

impl ScanCommand {
    fn read_source(&self) -> Result<String> {
        match &self.args.file {
            Some(path) => {
                debug!(path = %path.display(), "reading source file");
                Ok(std::fs::read_to_string(path)?)
            },
            None => {
                let mut source = String::new();
                std::io::stdin().read_to_string(&mut source)?;
                Ok(source)
            },
        }
    }

    /// Writes tokens to `out` and rendered diagnostics to `err`.
    pub fn write_report(
        &self,
        report: &ScanReport,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let record = ReportRecord {
                    tokens: report.tokens.iter().map(TokenRecord::from).collect(),
                    diagnostics: report.diagnostics.iter().map(DiagnosticRecord::from).collect(),
                    errors: report.error_count(),
                    warnings: report.warning_count(),
                };
                write_json(out, &record)?;
            },
            OutputFormat::Text => {
                for scanned in &report.tokens {
                    writeln!(
                        out,
                        "{}:{}\t{}\t{}",
                        scanned.line,
                        scanned.column,
                        scanned.token.kind_name(),
                        scanned.token
                    )?;
                }
                for diagnostic in &report.diagnostics {
                    writeln!(err, "{}\n", diagnostic.render(self.color))?;
                }
                if !report.diagnostics.is_empty() {
                    writeln!(
                        err,
                        "{} error(s), {} warning(s)",
                        report.error_count(),
                        report.warning_count()
                    )?;
                }
            },
        }
        Ok(())
    }
}

impl Command for ScanCommand {
    type Args = ScanArgs;

    fn new(args: Self::Args, config: &Config) -> Self {
        let format = OutputFormat::resolve(args.json, config.output.format);
        let color = config
            .output
            .color_config()
            .map(|color| use_color(color, args.no_color))
            .unwrap_or(false);
        Self {
            format,
            options: config.lexer.lex_options(),
            color,
            args,
        }
    }

    fn execute(&self) -> Result<()> {
        let source = self.read_source()?;
        let report = scan_source(&source, self.options);
        debug!(
            tokens = report.tokens.len(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "scan finished"
        );

        self.write_report(
            &report,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )?;
        let invalid = report.tokens.iter().filter(|t| t.token.is_invalid()).count();
        check_for_failures(invalid.max(report.error_count()), report.tokens.len(), "tokens")
    }

    fn name() -> &'static str {
        "scan"
    }
}

/// Run the scan command.
pub fn run_scan(args: ScanArgs, config: &Config) -> Result<()> {
    traits::run::<ScanCommand>(args, config)
}
