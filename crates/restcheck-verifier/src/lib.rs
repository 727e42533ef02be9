// crates/restcheck-verifier/src/lib.rs
// ============================================================================
// Module: Restcheck Verifier
// Description: HTTP transport, configuration, and the contract checks.
// Purpose: Issue read/create/update requests and assert the resource contract.
// Dependencies: restcheck-core, reqwest, serde, toml, url
// ============================================================================

//! ## Overview
//! This crate issues the three contract checks against a remote users
//! resource over blocking HTTP and resolves each into a report. The network
//! is untrusted: requests carry a timeout, redirects are not followed, and
//! response bodies are read under a hard size limit before parsing.
//! Invariants:
//! - Checks are independent; one check's outcome never affects another.
//! - Assertion failures are report data; transport and parse failures are
//!   errors.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod transport;
pub mod verifier;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::VerifierConfig;
pub use transport::HttpExchange;
pub use transport::Transport;
pub use transport::VerifyError;
pub use verifier::ContractVerifier;
