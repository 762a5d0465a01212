use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::cli::OutputFormat;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "CALCSVC_CONFIG_PATH";
/// Configuration file used when neither `--config` nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "calcsvc.toml";

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: LogFormat::default() }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcsvcConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The implicit file was absent, so built-in defaults apply.
    Defaults(PathBuf),
}

impl CalcsvcConfig {
    /// Load the configuration.
    ///
    /// An explicitly requested file must exist. The implicit file (from
    /// `CALCSVC_CONFIG_PATH` or `./calcsvc.toml`) may be missing, in which case
    /// defaults are used. A file that exists but does not parse is always an error.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<(Self, ConfigSource)> {
        let env_path = std::env::var(CONFIG_PATH_ENV).ok();
        Self::load_from(explicit, env_path.as_deref())
    }

    fn load_from(
        explicit: Option<&Path>,
        env_path: Option<&str>,
    ) -> anyhow::Result<(Self, ConfigSource)> {
        let path = match (explicit, env_path) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(path)) => PathBuf::from(path),
            (None, None) => PathBuf::from(DEFAULT_CONFIG_PATH),
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let config = Self::from_toml_str(&contents)
                    .with_context(|| format!("invalid configuration in {}", path.display()))?;
                Ok((config, ConfigSource::File(path)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound && explicit.is_none() => {
                Ok((Self::default(), ConfigSource::Defaults(path)))
            }
            Err(e) => {
                Err(e).with_context(|| format!("failed to read configuration {}", path.display()))
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.logging.level.parse::<LevelFilter>().is_err() {
            bail!(
                "logging.level must be one of off, error, warn, info, debug, trace (got '{}')",
                self.logging.level
            );
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
