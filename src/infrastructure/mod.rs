//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Random prompt API client.
pub mod prompt_api;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use prompt_api::PromptApiClient;
