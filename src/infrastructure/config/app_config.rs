//! Application configuration.

use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::application::services::message_presentation_service::DELETED_MESSAGE_TEXT;
use crate::domain::entities::ChannelConfig;

const APP_NAME: &str = "chatcell";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Output format of the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Styled text, one cell per block.
    #[default]
    Text,
    /// Descriptors as pretty JSON.
    Json,
}

/// Application configuration, read from TOML and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Capabilities used when a channel snapshot carries none.
    #[serde(default)]
    pub channel: ChannelConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Timestamp format string (chrono format).
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Render status separators.
    #[serde(default = "default_true")]
    pub show_statuses: bool,

    /// Info text shown in place of deleted messages.
    #[serde(default = "default_deleted_message_text")]
    pub deleted_message_text: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            show_statuses: true,
            deleted_message_text: default_deleted_message_text(),
        }
    }
}

impl UiConfig {
    /// Replaces a timestamp format chrono cannot render with the default.
    pub fn sanitize(&mut self) {
        let invalid = StrftimeItems::new(&self.timestamp_format)
            .any(|item| matches!(item, Item::Error));
        if invalid {
            warn!(
                format = %self.timestamp_format,
                fallback = %default_timestamp_format(),
                "Invalid timestamp format, using default"
            );
            self.timestamp_format = default_timestamp_format();
        }
    }
}

fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}

fn default_deleted_message_text() -> String {
    DELETED_MESSAGE_TEXT.to_string()
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if let Some(timestamp_format) = &args.timestamp_format {
            self.ui.timestamp_format.clone_from(timestamp_format);
        }
        if let Some(show_statuses) = args.show_statuses {
            self.ui.show_statuses = show_statuses;
        }
        if let Some(replies_enabled) = args.replies_enabled {
            self.channel.replies_enabled = replies_enabled;
        }
        if let Some(reactions_enabled) = args.reactions_enabled {
            self.channel.reactions_enabled = reactions_enabled;
        }
        self.ui.sanitize();
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("chatcell.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            format: OutputFormat::Text,
            ui: UiConfig::default(),
            channel: ChannelConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"
            format = "json"

            [ui]
            show_statuses = false

            [channel]
            reactions_enabled = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.ui.show_statuses);
        assert_eq!(config.ui.timestamp_format, "%H:%M");
        assert_eq!(config.ui.deleted_message_text, DELETED_MESSAGE_TEXT);
        assert!(config.channel.replies_enabled);
        assert!(!config.channel.reactions_enabled);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.ui.show_statuses);
        assert_eq!(config.channel, ChannelConfig::default());
    }

    #[test]
    fn test_merge_with_args() {
        let args = CliArgs::parse_from([
            "chatcell",
            "--format",
            "json",
            "--reactions-enabled",
            "false",
            "--timestamp-format",
            "%H:%M:%S",
            "render",
            "snapshot.json",
        ]);
        let mut config = AppConfig::default();
        config.merge_with_args(&args);

        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.channel.reactions_enabled);
        assert!(config.channel.replies_enabled);
        assert_eq!(config.ui.timestamp_format, "%H:%M:%S");
    }

    #[test]
    fn test_merge_with_args_rejects_invalid_timestamp_format() {
        let args = CliArgs::parse_from([
            "chatcell",
            "--timestamp-format",
            "%Q",
            "render",
            "snapshot.json",
        ]);
        let mut config = AppConfig::default();
        config.merge_with_args(&args);

        assert_eq!(config.ui.timestamp_format, "%H:%M");
    }

    #[test]
    fn test_sanitize_keeps_valid_format() {
        let mut ui = UiConfig {
            timestamp_format: "%Y-%m-%d %H:%M".to_string(),
            ..UiConfig::default()
        };
        ui.sanitize();

        assert_eq!(ui.timestamp_format, "%Y-%m-%d %H:%M");
    }
}
