//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration for question-bot
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Console bot behaviour
    #[serde(default)]
    pub bot: BotConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Console bot settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Line printed before the read loop starts
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Print the command summary after the greeting
    #[serde(default = "default_show_help")]
    pub show_help_on_start: bool,
}

fn default_greeting() -> String {
    "Question bot ready. Ask away!".to_string()
}

fn default_show_help() -> bool {
    true
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            show_help_on_start: default_show_help(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Directory for log files
    #[serde(default = "default_log_dir")]
    pub dir: String,
    /// Module-specific overrides
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            dir: default_log_dir(),
            overrides: HashMap::new(),
        }
    }
}
