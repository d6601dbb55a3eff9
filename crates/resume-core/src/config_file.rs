use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ORACLE_URL: &str = "http://127.0.0.1:8080/ner";
pub const DEFAULT_MODEL: &str = "en_core_web_lg";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown entity oracle backend: {0} (expected \"http\" or \"rules\")")]
    UnknownBackend(String),
    #[error("invalid oracle timeout: {0}")]
    InvalidTimeout(String),
}

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub oracle: Option<OracleConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleConfig {
    pub backend: Option<String>,
    pub url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Platform config directory path: `<config_dir>/resume-extract/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("resume-extract").join("config.toml"))
}

/// Load config by cascading CWD `.resume-extract.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".resume-extract.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base = base.oracle.unwrap_or_default();
    let overlay = overlay.oracle.unwrap_or_default();
    ConfigFile {
        oracle: Some(OracleConfig {
            backend: overlay.backend.or(base.backend),
            url: overlay.url.or(base.url),
            model: overlay.model.or(base.model),
            timeout_secs: overlay.timeout_secs.or(base.timeout_secs),
        }),
    }
}

/// Which [`EntityOracle`](crate::EntityOracle) implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OracleBackendKind {
    /// Remote pretrained model behind an HTTP endpoint.
    #[default]
    Http,
    /// Built-in pattern and gazetteer recognizer; no model required.
    Rules,
}

impl FromStr for OracleBackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(OracleBackendKind::Http),
            "rules" => Ok(OracleBackendKind::Rules),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Fully resolved oracle configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleSettings {
    pub backend: OracleBackendKind,
    pub url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            backend: OracleBackendKind::Http,
            url: DEFAULT_ORACLE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl OracleSettings {
    /// Resolve settings from config files and the process environment.
    ///
    /// Precedence: env vars > CWD config > platform config > defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(&load_config(), |key| std::env::var(key).ok())
    }

    /// Resolve settings from an already-loaded config and an env lookup.
    pub fn resolve(
        file: &ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = file.oracle.clone().unwrap_or_default();
        let defaults = OracleSettings::default();

        let backend = match env("RESUME_NER_BACKEND").or(file.backend) {
            Some(name) => name.parse()?,
            None => defaults.backend,
        };
        let url = env("RESUME_NER_URL").or(file.url).unwrap_or(defaults.url);
        let model = env("RESUME_NER_MODEL")
            .or(file.model)
            .unwrap_or(defaults.model);
        let timeout = match env("RESUME_NER_TIMEOUT") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => file
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        };

        Ok(OracleSettings {
            backend,
            url,
            model,
            timeout,
        })
    }
}
