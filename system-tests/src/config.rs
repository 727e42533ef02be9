// system-tests/src/config.rs
// ============================================================================
// Module: System Test Configuration
// Description: Environment-backed settings for the system-test suites.
// Purpose: Centralize timeout resolution with strict parsing.
// Dependencies: std
// ============================================================================

//! ## Overview
//! System-test settings are read from environment variables and mapped into a
//! small typed structure. Invalid values fail closed rather than silently
//! falling back, so a misconfigured CI environment is caught immediately.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment variable overriding the per-request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "RESTCHECK_SYSTEM_TEST_TIMEOUT_SEC";

/// Default per-request timeout for suite runs against the local stub.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Resolved system-test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTestConfig {
    /// Per-request timeout applied to verifier runs.
    pub timeout: Duration,
}

impl SystemTestConfig {
    /// Resolves configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending variable when an override is
    /// present but not a positive integer.
    pub fn from_env() -> Result<Self, String> {
        let timeout = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => {
                let seconds: u64 = raw
                    .parse()
                    .map_err(|_| format!("{TIMEOUT_ENV} must be a positive integer: `{raw}`"))?;
                if seconds == 0 {
                    return Err(format!("{TIMEOUT_ENV} must be non-zero"));
                }
                Duration::from_secs(seconds)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };
        Ok(Self {
            timeout,
        })
    }
}
