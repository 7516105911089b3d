//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roadready/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::quiz::QUICK_QUIZ_SIZE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RoadReadyConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    pub quick_quiz_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://g1-master-admin.vercel.app";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const APP_DIR: &str = ".roadready";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub quick_quiz_size: usize,
    pub data_dir: PathBuf,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub data_dir: Option<&'a Path>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.roadready`.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DIR))
}

/// Returns the path to `~/.roadready/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.roadready/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RoadReadyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RoadReadyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RoadReadyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RoadReadyConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: RoadReadyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# RoadReady Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [backend]
# base_url = "https://g1-master-admin.vercel.app"   # Or set ROADREADY_BASE_URL
# request_timeout_secs = 15

# [quiz]
# quick_quiz_size = 20

# [storage]
# data_dir = "/home/me/.roadready"                  # Or set ROADREADY_DATA_DIR
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RoadReadyConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ROADREADY_BASE_URL").ok())
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Data dir: CLI → env → config → ~/.roadready → ./.roadready
    let data_dir = cli
        .data_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("ROADREADY_DATA_DIR").ok().map(PathBuf::from))
        .or_else(|| config.storage.data_dir.as_ref().map(PathBuf::from))
        .or_else(app_dir)
        .unwrap_or_else(|| PathBuf::from(APP_DIR));

    ResolvedConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        request_timeout_secs: config
            .backend
            .request_timeout_secs
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        quick_quiz_size: config
            .quiz
            .quick_quiz_size
            .filter(|n| *n > 0)
            .unwrap_or(QUICK_QUIZ_SIZE),
        data_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = RoadReadyConfig::default();
        assert!(config.backend.base_url.is_none());
        assert!(config.quiz.quick_quiz_size.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = RoadReadyConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(resolved.quick_quiz_size, QUICK_QUIZ_SIZE);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = RoadReadyConfig {
            backend: BackendConfig {
                base_url: None,
                request_timeout_secs: Some(3),
            },
            quiz: QuizConfig {
                quick_quiz_size: Some(10),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.request_timeout_secs, 3);
        assert_eq!(resolved.quick_quiz_size, 10);
    }

    #[test]
    fn test_zero_quiz_size_falls_back() {
        let config = RoadReadyConfig {
            quiz: QuizConfig {
                quick_quiz_size: Some(0),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.quick_quiz_size, QUICK_QUIZ_SIZE);
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = RoadReadyConfig {
            backend: BackendConfig {
                base_url: None,
                request_timeout_secs: Some(0),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = RoadReadyConfig {
            backend: BackendConfig {
                base_url: Some("http://from-config".to_string()),
                ..Default::default()
            },
            storage: StorageConfig {
                data_dir: Some("/from/config".to_string()),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            base_url: Some("http://from-cli/"),
            data_dir: Some(Path::new("/from/cli")),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.data_dir, PathBuf::from("/from/cli"));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[backend]
base_url = "http://localhost:3000"
request_timeout_secs = 5

[quiz]
quick_quiz_size = 15

[storage]
data_dir = "/tmp/roadready"
"#;
        let config: RoadReadyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("http://localhost:3000")
        );
        assert_eq!(config.backend.request_timeout_secs, Some(5));
        assert_eq!(config.quiz.quick_quiz_size, Some(15));
        assert_eq!(config.storage.data_dir.as_deref(), Some("/tmp/roadready"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[quiz]
quick_quiz_size = 5
"#;
        let config: RoadReadyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.quick_quiz_size, Some(5));
        assert!(config.backend.base_url.is_none());
        assert!(config.storage.data_dir.is_none());
    }
}
