//! Configuration module for the numcheck CLI.
//!
//! Settings are read from a `numcheck.toml` file. Every key is optional;
//! a missing file means defaults throughout.

use dirs::{config_dir, home_dir};
use numlex_lex::LexOptions;
use numlex_util::ColorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::commands::common::OutputFormat;
use crate::error::{NumcheckError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "numcheck.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Lexer settings used by `scan`.
    #[serde(default)]
    pub lexer: LexerConfig,
}

/// Output configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format when `--json` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Diagnostic coloring: `auto`, `always` or `never`.
    #[serde(default = "default_color")]
    pub color: String,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Accept a leading sign on integer literals.
    #[serde(default = "default_true")]
    pub signed_integers: bool,

    /// Warn when a float fraction has more digits than contribute.
    #[serde(default = "default_true")]
    pub warn_on_truncated_fraction: bool,
}

fn default_color() -> String {
    "auto".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            signed_integers: true,
            warn_on_truncated_fraction: true,
        }
    }
}

impl OutputConfig {
    /// The configured color mode.
    pub fn color_config(&self) -> Result<ColorConfig> {
        ColorConfig::from_name(&self.color).ok_or_else(|| {
            NumcheckError::Config(format!(
                "Invalid color in configuration: `{}` (expected auto, always or never)",
                self.color
            ))
        })
    }
}

impl LexerConfig {
    /// Lexer options matching this configuration.
    pub fn lex_options(&self) -> LexOptions {
        LexOptions::new()
            .signed_integers(self.signed_integers)
            .warn_on_truncated_fraction(self.warn_on_truncated_fraction)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/numcheck/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Unlike [`load`](Self::load), a missing file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NumcheckError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.output.color_config()?;
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("numcheck").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("numcheck").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.color, "auto");
        assert!(config.lexer.signed_integers);
        assert!(config.lexer.warn_on_truncated_fraction);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml(
            r#"
            verbose = true

            [output]
            format = "json"
            color = "never"

            [lexer]
            signed_integers = false
            warn_on_truncated_fraction = false
            "#,
        )
        .unwrap();

        assert!(config.verbose);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.color_config().unwrap(), ColorConfig::Never);
        let options = config.lexer.lex_options();
        assert!(!options.signed_integers);
        assert!(!options.warn_on_truncated_fraction);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = Config::from_toml("[lexer]\nsigned_integers = false\n").unwrap();
        assert!(!config.lexer.signed_integers);
        assert!(config.lexer.warn_on_truncated_fraction);
    }

    #[test]
    fn test_invalid_color() {
        let result = Config::from_toml("[output]\ncolor = \"rainbow\"\n");
        assert!(matches!(result, Err(NumcheckError::Config(_))));
    }

    #[test]
    fn test_invalid_format() {
        let result = Config::from_toml("[output]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(NumcheckError::Toml(_))));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/numcheck.toml"));
        assert!(matches!(result, Err(NumcheckError::Config(_))));
    }
}
