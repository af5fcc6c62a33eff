//! On-disk location and loading of `config.toml`.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no platform config directory for nextprompt")]
    ConfigDirNotFound,
    #[error("config file io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode default config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Resolves and reads the config file under the platform config directory.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigDirNotFound`] when the platform exposes no config directory.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Reads the config at `path_override`, or `config.toml` in the config
    /// directory. A missing file is created with defaults; an unparsable one
    /// is left on disk and the defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = self.config_path(path_override);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(parse_or_default(&content, &path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => write_default(&path),
            Err(e) => Err(e.into()),
        }
    }

    fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }
}

fn parse_or_default(content: &str, path: &Path) -> AppConfig {
    toml::from_str(content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Malformed config file, using defaults");
        AppConfig::default()
    })
}

fn write_default(path: &Path) -> Result<AppConfig, ConfigError> {
    info!(path = %path.display(), "Writing default config");
    let config = AppConfig::default();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Written beside the target so the rename stays on one filesystem.
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(toml::to_string_pretty(&config)?.as_bytes())?;
    staged.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), "Default config persisted");

    Ok(config)
}
