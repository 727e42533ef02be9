// crates/restcheck-verifier/src/config.rs
// ============================================================================
// Module: Verifier Configuration
// Description: Configuration model, TOML loading, and validation.
// Purpose: Resolve and validate verifier settings with safe defaults.
// Dependencies: serde, thiserror, toml, url
// ============================================================================

//! ## Overview
//! Verifier settings resolve from compiled-in defaults, an optional TOML
//! file, and CLI overrides, in that order. Validation is strict: cleartext
//! HTTP is rejected unless explicitly allowed, URLs with embedded
//! credentials are rejected, and the timeout and response size limit must be
//! non-zero so every request stays bounded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default base URL of the public demo service the contract targets.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "restcheck.toml";

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default maximum response size in bytes.
const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Maximum size of a config file accepted by the loader.
const MAX_CONFIG_BYTES: u64 = 64 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file `{path}`: {message}")]
    Read {
        /// Path of the offending file.
        path: String,
        /// Underlying I/O failure message.
        message: String,
    },
    /// The config file is not valid TOML for the expected shape.
    #[error("failed to parse config file `{path}`: {message}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// Underlying parse failure message.
        message: String,
    },
    /// The resolved settings violate a validation rule.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Verifier configuration.
///
/// # Invariants
/// - `base_url` parses as an absolute http(s) URL without credentials.
/// - `allow_http = false` blocks cleartext `http://` base URLs.
/// - `timeout_ms` and `max_response_bytes` are non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Base URL of the service under verification.
    pub base_url: String,
    /// Request timeout in milliseconds, applied to the full request lifecycle.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
    /// Allow cleartext HTTP (disabled by default; used for local stubs).
    pub allow_http: bool,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: concat!("restcheck/", env!("CARGO_PKG_VERSION")).to_string(),
            allow_http: false,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

impl VerifierConfig {
    /// Loads configuration from an explicit path, the default file, or
    /// compiled-in defaults when neither exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an existing file cannot be read or
    /// parsed, or when the resolved settings fail validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let rendered_path = path.display().to_string();
        let metadata = fs::metadata(path).map_err(|err| ConfigError::Read {
            path: rendered_path.clone(),
            message: err.to_string(),
        })?;
        if metadata.len() > MAX_CONFIG_BYTES {
            return Err(ConfigError::Read {
                path: rendered_path,
                message: format!("file exceeds {MAX_CONFIG_BYTES} bytes"),
            });
        }
        let contents = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: rendered_path.clone(),
            message: err.to_string(),
        })?;
        toml::from_str(&contents).map_err(|err| ConfigError::Parse {
            path: rendered_path,
            message: err.to_string(),
        })
    }

    /// Validates the resolved settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|err| ConfigError::Invalid(format!("base_url is not a valid URL: {err}")))?;
        match url.scheme() {
            "https" => {}
            "http" if self.allow_http => {}
            "http" => {
                return Err(ConfigError::Invalid(
                    "base_url uses cleartext http without allow_http".to_string(),
                ));
            }
            other => {
                return Err(ConfigError::Invalid(format!(
                    "base_url scheme `{other}` is not supported"
                )));
            }
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(ConfigError::Invalid("base_url must not embed credentials".to_string()));
        }
        if url.host_str().is_none() {
            return Err(ConfigError::Invalid("base_url must carry a host".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be non-zero".to_string()));
        }
        if self.max_response_bytes == 0 {
            return Err(ConfigError::Invalid("max_response_bytes must be non-zero".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("user_agent must not be empty".to_string()));
        }
        Ok(())
    }

    /// Returns the base URL with any trailing slash removed, ready for path
    /// concatenation.
    #[must_use]
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
