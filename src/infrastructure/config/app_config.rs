//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::entities::DEFAULT_PROMPT;

pub(crate) const APP_NAME: &str = "nextprompt";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Endpoint queried for a random prompt.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/random";

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

/// Application configuration.
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

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Prompt source configuration.
    #[serde(default)]
    pub prompt: PromptConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Prompt source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// URL answering `GET` with `{ "title": ... }`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Text shown until the first fetch resolves.
    #[serde(default = "default_prompt_text")]
    pub default_text: String,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl PromptConfig {
    /// Returns the configured timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_text: default_prompt_text(),
            timeout_secs: None,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Label of the button that fetches the next prompt.
    #[serde(default = "default_next_label")]
    pub next_label: String,

    /// Button label colour (name or hex code).
    #[serde(default = "default_button_text_color")]
    pub button_text_color: String,

    /// Prompt text colour (name or hex code).
    #[serde(default = "default_prompt_text_color")]
    pub prompt_text_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            next_label: default_next_label(),
            button_text_color: default_button_text_color(),
            prompt_text_color: default_prompt_text_color(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_prompt_text() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_next_label() -> String {
    "Next".to_string()
}

fn default_button_text_color() -> String {
    "#161616".to_string()
}

fn default_prompt_text_color() -> String {
    "white".to_string()
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(endpoint) = args.endpoint {
            self.prompt.endpoint = endpoint;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.prompt.timeout_secs = Some(timeout_secs);
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("nextprompt.log"))
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
            mouse: true,
            prompt: PromptConfig::default(),
            ui: UiConfig::default(),
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

            [prompt]
            endpoint = "http://10.0.0.2:3000/random"
            timeout_secs = 10

            [ui]
            next_label = "Another"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.mouse);
        assert_eq!(config.prompt.endpoint, "http://10.0.0.2:3000/random");
        assert_eq!(config.prompt.default_text, "Hello!");
        assert_eq!(config.prompt.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.ui.next_label, "Another");
        assert_eq!(config.ui.button_text_color, "#161616");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.prompt.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.prompt.default_text, DEFAULT_PROMPT);
        assert!(config.prompt.timeout().is_none());
        assert_eq!(config.ui.next_label, "Next");
        assert_eq!(config.ui.prompt_text_color, "white");
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let content = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(!content.contains("timeout_secs"));

        let parsed: AppConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.prompt.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_cli_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "nextprompt",
            "--endpoint",
            "http://example.test/random",
            "--mouse",
            "false",
            "--timeout-secs",
            "2",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.prompt.endpoint, "http://example.test/random");
        assert!(!config.mouse);
        assert_eq!(config.prompt.timeout_secs, Some(2));
        assert_eq!(config.log_level, LogLevel::Info);
    }
}
