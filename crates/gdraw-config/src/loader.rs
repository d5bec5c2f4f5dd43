//! Configuration loading and persistence.

use crate::schema::DrawerConfig;
use gdraw_common::{GDrawError, Result as GDrawResult, Rgb};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "GDRAW_CONFIG_PATH";

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "gdraw.toml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading or writing the configuration file
    #[error("Failed to access configuration file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[source] GDrawError),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for GDrawError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(inner) => inner,
            other => Self::config_with_source(other.to_string(), other),
        }
    }
}

/// Configuration loader for the drawer
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DrawerConfig, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: DrawerConfig = toml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::ValidationError)?;

        tracing::debug!("Loaded drawer configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from `GDRAW_CONFIG_PATH`, then `gdraw.toml`, else defaults
    pub fn load() -> GDrawResult<DrawerConfig> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::load_config(&config_path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load_config(DEFAULT_CONFIG_FILE)?
        } else {
            tracing::debug!("No configuration file found, using defaults");
            let mut config = DrawerConfig::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate()?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GDrawResult<DrawerConfig> {
        Ok(Self::load_config(path)?)
    }

    /// Parse configuration from a TOML string, without environment overrides
    pub fn from_toml_str(content: &str) -> GDrawResult<DrawerConfig> {
        let config: DrawerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to a file as pretty TOML
    pub fn save<P: AsRef<Path>>(path: P, config: &DrawerConfig) -> GDrawResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(config).map_err(ConfigError::from)?;
        std::fs::write(path, content).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut DrawerConfig) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_overrides<F>(config: &mut DrawerConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dpi) = parse_var(&lookup, "GDRAW_DPI")? {
            config.dpi = dpi;
        }

        if let Some(font_size) = parse_var(&lookup, "GDRAW_FONT_SIZE")? {
            config.style.font_size = font_size;
        }

        if let Some(marker_size) = parse_var(&lookup, "GDRAW_MARKER_SIZE")? {
            config.style.marker_size = marker_size;
        }

        if let Some(background) = parse_var::<Rgb, _>(&lookup, "GDRAW_BACKGROUND")? {
            config.style.background = Some(background);
        }

        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| {
            value.trim().parse().map_err(|e| ConfigError::EnvParseError {
                var: var.to_string(),
                source: Box::new(e),
            })
        })
        .transpose()
}
