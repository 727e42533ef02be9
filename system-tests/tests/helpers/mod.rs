// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for Restcheck system-tests.
// Purpose: Provide the users-service stub and verifier construction.
// Dependencies: system-tests, restcheck-verifier
// ============================================================================

//! ## Overview
//! Shared helpers for Restcheck system-tests: an in-process stub of the users
//! service with fault injection, and verifier construction against it.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod users_stub;
