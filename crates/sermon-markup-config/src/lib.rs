use serde::{Deserialize, Serialize};
use sermon_markup_engine::ParseOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub sermons_path: PathBuf,
    /// Glyph rendered for `- ` list items; the engine default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded sermons path
        config.sermons_path =
            Self::expand_path(&config.sermons_path).unwrap_or(config.sermons_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/sermon-markup");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Parser settings derived from this config. An empty `bullet` counts as unset.
    pub fn parse_options(&self) -> ParseOptions {
        match self.bullet.as_deref().filter(|bullet| !bullet.is_empty()) {
            Some(bullet) => ParseOptions {
                bullet: bullet.to_string(),
            },
            None => ParseOptions::default(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
