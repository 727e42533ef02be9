// crates/restcheck-verifier/src/transport.rs
// ============================================================================
// Module: Blocking HTTP Transport
// Description: Bounded request issuing and JSON response decoding.
// Purpose: Provide the single send capability the contract checks rely on.
// Dependencies: crate::config, reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! The transport issues blocking GET/POST/PUT requests with optional JSON
//! bodies and decodes responses into status plus parsed JSON. Responses are
//! read under the configured size limit before parsing, redirects are not
//! followed, and every request carries the configured timeout. Failures here
//! are the transport/parse half of the error taxonomy; assertion outcomes
//! never originate in this module.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::redirect::Policy;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::ConfigError;
use crate::config::VerifierConfig;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced while issuing requests or decoding responses.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    ClientBuild(String),
    /// The request could not be sent or the response could not be read.
    #[error("http request failed: {0}")]
    Transport(String),
    /// The response body exceeded the configured size limit.
    #[error("http response exceeds size limit of {limit} bytes")]
    ResponseTooLarge {
        /// Configured size limit in bytes.
        limit: usize,
    },
    /// The response body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Parse(String),
}

// ============================================================================
// SECTION: Exchange
// ============================================================================

/// Status code and parsed JSON body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpExchange {
    /// HTTP status code of the response.
    pub status: u16,
    /// Response body parsed as JSON.
    pub body: Value,
}

// ============================================================================
// SECTION: Transport
// ============================================================================

/// Blocking HTTP transport bound to a validated configuration.
///
/// # Invariants
/// - Redirects are not followed.
/// - Response bodies are read under `max_response_bytes` before parsing.
pub struct Transport {
    /// Validated verifier configuration.
    config: VerifierConfig,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl Transport {
    /// Creates a transport from a configuration, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] when the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: VerifierConfig) -> Result<Self, VerifyError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(|err| VerifyError::ClientBuild(err.to_string()))?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Returns the configuration the transport was built from.
    #[must_use]
    pub const fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Issues a GET request for the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] on transport or parse failures.
    pub fn get(&self, path: &str) -> Result<HttpExchange, VerifyError> {
        self.send::<()>(Method::GET, path, None)
    }

    /// Issues a POST request with a JSON body for the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] on transport or parse failures.
    pub fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<HttpExchange, VerifyError> {
        self.send(Method::POST, path, Some(body))
    }

    /// Issues a PUT request with a JSON body for the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] on transport or parse failures.
    pub fn put_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<HttpExchange, VerifyError> {
        self.send(Method::PUT, path, Some(body))
    }

    /// Sends a request and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] when the request fails, the body exceeds the
    /// size limit, or the body is not valid JSON.
    fn send<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<HttpExchange, VerifyError> {
        let url = format!("{}{path}", self.config.base_url_trimmed());
        let mut builder = self.client.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response =
            builder.send().map_err(|err| VerifyError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let bytes = read_response_limited(response, self.config.max_response_bytes)?;
        let body = serde_json::from_slice(&bytes)
            .map_err(|err| VerifyError::Parse(err.to_string()))?;
        Ok(HttpExchange {
            status,
            body,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads the response body while enforcing a byte limit.
fn read_response_limited(response: Response, max_bytes: usize) -> Result<Vec<u8>, VerifyError> {
    let max_bytes_u64 = u64::try_from(max_bytes)
        .map_err(|_| VerifyError::Transport("response size limit exceeds u64".to_string()))?;
    if let Some(expected) = response.content_length()
        && expected > max_bytes_u64
    {
        return Err(VerifyError::ResponseTooLarge {
            limit: max_bytes,
        });
    }
    let mut buf = Vec::new();
    let limit = max_bytes_u64.saturating_add(1);
    let mut handle = response.take(limit);
    handle
        .read_to_end(&mut buf)
        .map_err(|err| VerifyError::Transport(format!("failed to read response: {err}")))?;
    if buf.len() > max_bytes {
        return Err(VerifyError::ResponseTooLarge {
            limit: max_bytes,
        });
    }
    Ok(buf)
}
