//! Gateway configuration.
//!
//! Configuration can be loaded from:
//! - A TOML file (default: ~/.config/echo/echo.toml, `[gateway]` table)
//! - Environment variables
//!
//! # Example
//!
//! ```rust,no_run
//! use echo_inference::config::GatewayConfig;
//!
//! // Load from default path or fall back to env vars
//! let config = GatewayConfig::load().expect("Failed to load config");
//!
//! // Or from environment variables only
//! let config = GatewayConfig::from_env();
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use echo_core::defaults;
use echo_core::GatewayKind;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ConfigError> for echo_core::Error {
    fn from(e: ConfigError) -> Self {
        echo_core::Error::Config(e.to_string())
    }
}

/// Environment variable holding the inference API credential.
pub const ENV_API_KEY: &str = "HUGGINGFACE_API_KEY";

/// Configuration for the AI gateway and response cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL; the model name is appended as a path segment.
    pub base_url: String,
    /// API credential. `None` disables every gateway call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model for reflections.
    pub reflection_model: String,
    /// Model for sentiment classification.
    pub sentiment_model: String,
    /// Model for insights summaries.
    pub summary_model: String,
    /// Maximum generated length for reflections.
    pub reflection_max_length: u32,
    /// Maximum generated length for summaries.
    pub summary_max_length: u32,
    /// Sampling temperature for generated text.
    pub temperature: f32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Response cache TTL in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::HUGGINGFACE_URL.to_string(),
            api_key: None,
            reflection_model: defaults::REFLECTION_MODEL.to_string(),
            sentiment_model: defaults::SENTIMENT_MODEL.to_string(),
            summary_model: defaults::SUMMARY_MODEL.to_string(),
            reflection_max_length: defaults::REFLECTION_MAX_LENGTH,
            summary_max_length: defaults::SUMMARY_MAX_LENGTH,
            temperature: defaults::GENERATION_TEMPERATURE,
            timeout_secs: defaults::GATEWAY_TIMEOUT_SECS,
            cache_ttl_secs: defaults::CACHE_TTL_SECS,
        }
    }
}

impl GatewayConfig {
    /// Get the default config file path.
    ///
    /// Returns: ~/.config/echo/echo.toml
    pub fn default_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
        path.push("echo");
        path.push("echo.toml");
        path
    }

    /// Load configuration from the default path, falling back to environment variables.
    pub fn load() -> ConfigResult<Self> {
        let path = Self::default_config_path();

        if path.exists() {
            info!("Loading gateway config from: {}", path.display());
            Self::from_file(&path)
        } else {
            debug!(
                "Config file not found at {}, using environment variables",
                path.display()
            );
            let config = Self::from_env();
            config.validate()?;
            Ok(config)
        }
    }

    /// Load configuration from a TOML file with a `[gateway]` table.
    ///
    /// `${VAR}` placeholders are replaced with environment values first, so the
    /// credential can stay out of the file. Keys missing from the file take
    /// their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let content = Self::substitute_env_vars(&content);

        #[derive(Deserialize)]
        struct TomlRoot {
            #[serde(default)]
            gateway: GatewayConfig,
        }

        let root: TomlRoot = toml::from_str(&content)?;
        let mut config = root.gateway;
        config.api_key = normalize_key(config.api_key);

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let base = Self::default();

        Self {
            base_url: env::var("ECHO_HF_URL").unwrap_or(base.base_url),
            api_key: normalize_key(env::var(ENV_API_KEY).ok()),
            reflection_model: env::var("ECHO_REFLECTION_MODEL").unwrap_or(base.reflection_model),
            sentiment_model: env::var("ECHO_SENTIMENT_MODEL").unwrap_or(base.sentiment_model),
            summary_model: env::var("ECHO_SUMMARY_MODEL").unwrap_or(base.summary_model),
            reflection_max_length: base.reflection_max_length,
            summary_max_length: base.summary_max_length,
            temperature: base.temperature,
            timeout_secs: env::var("ECHO_GATEWAY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(base.timeout_secs),
            cache_ttl_secs: env::var("ECHO_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(base.cache_ttl_secs),
        }
    }

    /// Builder-style credential override.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = normalize_key(Some(api_key.into()));
        self
    }

    /// Builder-style base URL override.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether a credential is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Model serving the given call purpose.
    pub fn model_for(&self, kind: GatewayKind) -> &str {
        match kind {
            GatewayKind::Reflection => &self.reflection_model,
            GatewayKind::Sentiment => &self.sentiment_model,
            GatewayKind::Summary => &self.summary_model,
        }
    }

    /// Full endpoint URL for the given call purpose.
    pub fn endpoint_for(&self, kind: GatewayKind) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.model_for(kind)
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        for (field, value) in [
            ("reflection_model", &self.reflection_model),
            ("sentiment_model", &self.sentiment_model),
            ("summary_model", &self.summary_model),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{} cannot be empty",
                    field
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache_ttl_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Substitute environment variables in the format ${VAR_NAME}.
    fn substitute_env_vars(content: &str) -> String {
        let re = match regex::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };
        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            env::var(var_name).unwrap_or_default()
        })
        .to_string()
    }
}

/// An empty or whitespace-only credential counts as absent.
fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
