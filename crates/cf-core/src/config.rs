use crate::error::ConfigError;
use crate::loader::{EventLoader, FileLoader};
use crate::sample::SampleLoader;
use crate::types::{DataFormat, MetricOptions, ValidationPolicy, metrics::DEFAULT_LAG_BINS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 4830;

pub const ENV_DATA_PATH: &str = "CF_DATA_PATH";
pub const ENV_PORT: &str = "CF_PORT";
pub const ENV_LOG_JSON: &str = "CF_LOG_JSON";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub metrics: MetricsConfig,
    pub server: ServerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Event file. Without one the built-in sample dataset is used.
    pub path: Option<PathBuf>,
    pub format: DataFormat,
    pub policy: ValidationPolicy,
    pub sample_base_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub lag_bins: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            lag_bins: DEFAULT_LAG_BINS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metrics.lag_bins == 0 {
            return Err(ConfigError::InvalidInput {
                message: "metrics.lag_bins must be at least 1".to_string(),
            });
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::InvalidInput {
                message: "log.level must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Overrides from `CF_*` variables, read through `lookup` so callers
    /// decide where they come from.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATA_PATH).filter(|value| !value.trim().is_empty()) {
            self.data.path = Some(PathBuf::from(path));
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidInput {
                message: format!("{ENV_PORT} is not a valid port: {port}"),
            })?;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            self.log.json = parse_bool(&json).ok_or_else(|| ConfigError::InvalidInput {
                message: format!("{ENV_LOG_JSON} is not a boolean: {json}"),
            })?;
        }
        Ok(())
    }

    pub fn metric_options(&self) -> MetricOptions {
        MetricOptions {
            lag_bins: self.metrics.lag_bins,
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    pub fn loader(&self) -> Box<dyn EventLoader + Send + Sync> {
        match &self.data.path {
            Some(path) => Box::new(FileLoader::new(path, self.data.format, self.data.policy)),
            None => Box::new(
                self.data
                    .sample_base_date
                    .map(SampleLoader::from_date)
                    .unwrap_or_default(),
            ),
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|err| ConfigError::Parse {
        message: err.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Reads the config file; a missing file means defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            })
        }
    };
    parse_config(&content)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
