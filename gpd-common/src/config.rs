//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`GPD_*`)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing config file is not an error: the service logs a warning and
//! starts with defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::summarize::ModelInfo;
use crate::{Error, Result};

pub const ENV_CONFIG: &str = "GPD_CONFIG";
pub const ENV_HOST: &str = "GPD_HOST";
pub const ENV_PORT: &str = "GPD_PORT";
pub const ENV_DATASET: &str = "GPD_DATASET";
pub const ENV_SPEECHES_DIR: &str = "GPD_SPEECHES_DIR";
pub const ENV_STATIC_DIR: &str = "GPD_STATIC_DIR";
pub const ENV_LOG_LEVEL: &str = "GPD_LOG_LEVEL";
pub const ENV_SUMMARIZER_API_KEY: &str = "GPD_SUMMARIZER_API_KEY";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATASET: &str = "dataverse_files/GPD_v2.1_20251120_Wide.csv";
pub const DEFAULT_SPEECHES_DIR: &str = "dataverse_files/speeches";
pub const DEFAULT_STATIC_DIR: &str = "frontend";
pub const DEFAULT_MAX_WORDS: usize = 2000;

/// Contents of `config.toml`; every field is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerSection,
    pub dataset: DatasetSection,
    pub logging: LoggingConfig,
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Directory of frontend assets served as a fallback
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetSection {
    /// Wide-format CSV export
    pub path: Option<PathBuf>,
    /// Directory holding the speech text files
    pub speeches_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,
}

/// Optional OpenAI-compatible text-generation backend
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Base URL; speech analysis is unavailable when unset
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub default_model: Option<String>,
    pub models: Vec<ModelInfo>,
    /// Words of a speech sent for analysis
    pub max_words: usize,
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            default_model: None,
            models: Vec::new(),
            max_words: DEFAULT_MAX_WORDS,
            timeout_secs: 60,
        }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub dataset_path: Option<PathBuf>,
    pub speeches_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    pub speeches_dir: PathBuf,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub summarizer: SummarizerConfig,
    /// Config file actually read, if any
    pub config_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// Resolve configuration from CLI overrides, environment, TOML and defaults
    ///
    /// An explicitly requested config file (CLI or `GPD_CONFIG`) that cannot be
    /// parsed is an error. A missing file only produces a warning.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let (toml, config_file) = match locate_config_file(overrides.config_path.as_deref()) {
            Some(path) if path.exists() => {
                let toml = load_toml_config(&path)?;
                info!("Loaded configuration from {}", path.display());
                (toml, Some(path))
            }
            Some(path) => {
                warn!("Config file {} not found, using defaults", path.display());
                (TomlConfig::default(), None)
            }
            None => (TomlConfig::default(), None),
        };

        let port = match overrides.port {
            Some(port) => port,
            None => match env_var(ENV_PORT) {
                Some(raw) => raw.parse::<u16>().map_err(|e| {
                    Error::Config(format!("Invalid {} '{}': {}", ENV_PORT, raw, e))
                })?,
                None => toml.server.port.unwrap_or(DEFAULT_PORT),
            },
        };

        let mut summarizer = toml.summarizer;
        if let Some(key) = env_var(ENV_SUMMARIZER_API_KEY) {
            summarizer.api_key = Some(key);
        }

        Ok(Self {
            host: overrides
                .host
                .or_else(|| env_var(ENV_HOST))
                .or(toml.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            dataset_path: resolve_path(overrides.dataset_path, ENV_DATASET, toml.dataset.path, DEFAULT_DATASET),
            speeches_dir: resolve_path(
                overrides.speeches_dir,
                ENV_SPEECHES_DIR,
                toml.dataset.speeches_dir,
                DEFAULT_SPEECHES_DIR,
            ),
            static_dir: resolve_path(overrides.static_dir, ENV_STATIC_DIR, toml.server.static_dir, DEFAULT_STATIC_DIR),
            log_level: overrides
                .log_level
                .or_else(|| env_var(ENV_LOG_LEVEL))
                .or(toml.logging.level)
                .unwrap_or_else(|| "info".to_string()),
            summarizer,
            config_file,
        })
    }

    /// `host:port` for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Config file location: CLI argument, then `GPD_CONFIG`, then the platform
/// config directory (`~/.config/gpd/config.toml` on Linux)
pub fn locate_config_file(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_var(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }
    let default = dirs::config_dir()?.join("gpd").join("config.toml");
    // Default location is optional; don't warn when it simply isn't there
    default.exists().then_some(default)
}

fn resolve_path(cli: Option<PathBuf>, env_name: &str, toml: Option<PathBuf>, default: &str) -> PathBuf {
    cli.or_else(|| env_var(env_name).map(PathBuf::from))
        .or(toml)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_sections_are_optional() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.summarizer.max_words, DEFAULT_MAX_WORDS);
    }

    #[test]
    fn test_toml_full_parse() {
        let config: TomlConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            static_dir = "web"

            [dataset]
            path = "/data/gpd.csv"
            speeches_dir = "/data/speeches"

            [logging]
            level = "debug"

            [summarizer]
            endpoint = "http://localhost:11434"
            default_model = "llama3"
            max_words = 500
            models = [{ id = "llama3", name = "Llama 3" }]
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, Some(9000));
        assert_eq!(config.server.static_dir, Some(PathBuf::from("web")));
        assert_eq!(config.dataset.path, Some(PathBuf::from("/data/gpd.csv")));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.summarizer.max_words, 500);
        assert_eq!(config.summarizer.timeout_secs, 60);
        assert_eq!(config.summarizer.models[0].name, "Llama 3");
    }

    #[test]
    fn test_load_toml_config_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();
        assert!(matches!(load_toml_config(&path), Err(Error::Config(_))));
    }
}
