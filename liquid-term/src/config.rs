//! Configuration for the headless runner
//!
//! Precedence: CLI > env > config file > defaults. The config file is TOML,
//! read from `--config` or `<config dir>/liquid/config.toml`.

use clap::Parser;
use liquid_core::Position;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI arguments for the headless runner
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "liquid-headless")]
#[command(version)]
#[command(about = "Replay a navigation script against a menu screen", long_about = None)]
pub struct CliArgs {
    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Screen definition (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub screen: PathBuf,

    /// Script commands: next, prev, call:<id>, hide, show, print
    #[arg(long, value_name = "SCRIPT", conflicts_with = "script_file")]
    pub script: Option<String>,

    /// Read script commands from a file
    #[arg(long, value_name = "FILE")]
    pub script_file: Option<PathBuf>,

    /// Display columns
    #[arg(long, value_name = "COLS")]
    pub columns: Option<u8>,

    /// Display rows
    #[arg(long, value_name = "ROWS")]
    pub rows: Option<u8>,

    /// Output format (text, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<String>,
}

/// How frames are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Display contents framed by rules
    #[default]
    Text,
    /// JSON array of frames
    Json,
}

impl OutputFormat {
    /// Parse format name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display columns
    pub columns: u8,
    /// Display rows
    pub rows: u8,
    /// Focus indicator position for screens that don't set one
    pub focus_position: Position,
    /// Output format
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        // A 16x2 character LCD
        Self {
            columns: 16,
            rows: 2,
            focus_position: Position::Right,
            output: OutputFormat::Text,
        }
    }
}

/// Configuration error
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub message: String,
    pub field: Option<String>,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Config error in '{}': {}", field, self.message)
        } else {
            write!(f, "Config error: {}", self.message)
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration with full precedence:
    /// CLI args > environment variables > config file > defaults
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let config_path = args.config.clone().or_else(Self::default_config_path);
        if let Some(path) = &config_path {
            if path.exists() {
                config = Self::load_from_file(path)?;
            } else if args.config.is_some() {
                return Err(ConfigError {
                    message: format!("Config file {:?} does not exist", path),
                    field: None,
                });
            }
        }

        config.apply_env_vars();
        config.apply_cli_args(args)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            message: format!("Failed to read config file: {}", e),
            field: None,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError {
            message: format!("Failed to parse config file: {}", e),
            field: None,
        })
    }

    /// Apply environment variables to config
    fn apply_env_vars(&mut self) {
        if let Ok(val) = env::var("LIQUID_COLUMNS") {
            if let Ok(columns) = val.parse() {
                self.columns = columns;
            }
        }
        if let Ok(val) = env::var("LIQUID_ROWS") {
            if let Ok(rows) = val.parse() {
                self.rows = rows;
            }
        }
        if let Ok(val) = env::var("LIQUID_OUTPUT") {
            if let Some(output) = OutputFormat::from_str(&val) {
                self.output = output;
            }
        }
    }

    /// Apply CLI arguments to config
    fn apply_cli_args(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        if let Some(columns) = args.columns {
            self.columns = columns;
        }
        if let Some(rows) = args.rows {
            self.rows = rows;
        }
        if let Some(output) = &args.output {
            self.output = OutputFormat::from_str(output).ok_or_else(|| ConfigError {
                message: format!("Unknown output format '{}'. Expected text or json", output),
                field: Some("output".to_string()),
            })?;
        }
        Ok(())
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.columns > 80 {
            return Err(ConfigError {
                message: "Display columns must be between 1 and 80".to_string(),
                field: Some("columns".to_string()),
            });
        }
        if self.rows == 0 || self.rows > 8 {
            return Err(ConfigError {
                message: "Display rows must be between 1 and 8".to_string(),
                field: Some("rows".to_string()),
            });
        }
        if self.focus_position == Position::Custom {
            return Err(ConfigError {
                message: "Custom focus position can only be set per line".to_string(),
                field: Some("focus_position".to_string()),
            });
        }
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("liquid").join("config.toml"))
    }
}
