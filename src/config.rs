//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::endpoints::EndpointMode;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub grading: GradingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Quiz server connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub mode: EndpointMode,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            mode: EndpointMode::default(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Grading behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradingConfig {
    /// Show per-answer correctness while the quiz is in progress
    #[serde(default)]
    pub inline: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Standard config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("flashcards").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first usable file in `paths`, falling back to env-only defaults
    ///
    /// Files that exist but fail to load are skipped; their errors are
    /// returned so the caller can report them once logging is up.
    pub fn search(paths: &[PathBuf]) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {:?}", path);
                    return (config, errors);
                }
                Err(e) => errors.push(e),
            }
        }

        tracing::debug!("Using default config with environment overrides");
        (Self::from_env(), errors)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let (config, errors) = Self::search(&Self::default_paths());
        for e in &errors {
            tracing::warn!(error = %e, "Skipping config file");
        }
        config
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = lookup("FLASHCARDS_API_URL") {
            self.api.base_url = url;
        }
        if let Some(mode) = lookup("FLASHCARDS_ENDPOINT_MODE") {
            match mode.parse() {
                Ok(m) => self.api.mode = m,
                Err(e) => tracing::warn!("Ignoring FLASHCARDS_ENDPOINT_MODE: {}", e),
            }
        }

        // Grading overrides
        if let Some(inline) = lookup("FLASHCARDS_INLINE_GRADING") {
            match inline.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => self.grading.inline = true,
                "0" | "false" | "off" | "no" => self.grading.inline = false,
                other => tracing::warn!("Ignoring FLASHCARDS_INLINE_GRADING={}", other),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("FLASHCARDS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FLASHCARDS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Flashcards Quiz Client Configuration
#
# Environment variables override these settings:
# - FLASHCARDS_API_URL
# - FLASHCARDS_ENDPOINT_MODE
# - FLASHCARDS_INLINE_GRADING
# - FLASHCARDS_LOG_LEVEL
# - FLASHCARDS_LOG_FORMAT

[api]
# Quiz server base URL
base_url = "http://localhost:8080"

# Endpoint layout: dynamic (live server) or static (fixture files)
mode = "dynamic"

# Request timeout in seconds
request_timeout_secs = 30

[grading]
# Show per-answer correctness while taking a quiz
inline = false

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.mode, EndpointMode::Dynamic);
        assert_eq!(config.api.request_timeout_secs, 30);
        assert!(!config.grading.inline);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.mode, EndpointMode::Dynamic);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::parse("[api]\nmode = \"static\"\n").unwrap();
        assert_eq!(config.api.mode, EndpointMode::Static);
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert!(!config.grading.inline);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://quiz.local\"\n[grading]\ninline = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://quiz.local");
        assert!(config.grading.inline);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[api\nbase_url = 1").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_search_reports_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        let missing = dir.path().join("missing.toml");
        std::fs::write(&bad, "[grading\ninline = yes").unwrap();
        std::fs::write(&good, "[api]\nmode = \"static\"\n[grading]\ninline = true\n").unwrap();

        let (config, errors) = Config::search(&[missing.clone(), bad.clone(), good]);
        assert!(config.grading.inline);
        assert_eq!(config.api.mode, EndpointMode::Static);
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ConfigError::Parse { path, .. } if *path == bad));

        let (config, errors) = Config::search(&[missing, bad]);
        assert!(!config.grading.inline);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FLASHCARDS_API_URL", "http://other:9000"),
            ("FLASHCARDS_ENDPOINT_MODE", "static"),
            ("FLASHCARDS_INLINE_GRADING", "on"),
            ("FLASHCARDS_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://other:9000");
        assert_eq!(config.api.mode, EndpointMode::Static);
        assert!(config.grading.inline);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "FLASHCARDS_ENDPOINT_MODE" => Some("fixtures".to_string()),
            "FLASHCARDS_INLINE_GRADING" => Some("maybe".to_string()),
            _ => None,
        });
        assert_eq!(config.api.mode, EndpointMode::Dynamic);
        assert!(!config.grading.inline);
    }
}
