// crates/restcheck-core/src/check.rs
// ============================================================================
// Module: Check Outcomes and Reports
// Description: Per-check and aggregate report types for contract runs.
// Purpose: Capture check outcomes in a serializable, renderable form.
// Dependencies: crate::assertions, serde
// ============================================================================

//! ## Overview
//! Each contract check resolves to exactly one of three outcomes: `Passed`
//! (every assertion held), `Failed` (an assertion aborted the check, carried
//! in the report), or `Error` (the request could not be issued or the
//! response could not be parsed). Failed and errored checks never abort the
//! remaining checks; the aggregate report records all of them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::assertions::AssertionFailure;

// ============================================================================
// SECTION: Check Identity
// ============================================================================

/// Identifier of a contract check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// Read the seed record and compare it against the snapshot.
    Read,
    /// Create a record and verify the echoed payload and generated id.
    Create,
    /// Replace the seed record and verify the echoed payload.
    Update,
}

impl CheckId {
    /// All checks in canonical execution order.
    pub const ALL: [Self; 3] = [Self::Read, Self::Create, Self::Update];

    /// Returns the stable lowercase name of the check.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Check Reports
// ============================================================================

/// Resolution of a single contract check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Every assertion held.
    Passed,
    /// An assertion failed and aborted the check.
    Failed,
    /// The request or response processing failed before assertions completed.
    Error,
}

/// Outcome of one contract check.
///
/// # Invariants
/// - `failure` is present exactly when `status` is [`CheckStatus::Failed`].
/// - `error` is present exactly when `status` is [`CheckStatus::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Which check this report describes.
    pub check: CheckId,
    /// Resolution of the check.
    pub status: CheckStatus,
    /// Assertions that passed before the check resolved.
    pub assertions_passed: u32,
    /// The assertion that aborted the check, when one failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<AssertionFailure>,
    /// Transport or parse failure message, when the check errored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Builds a passed report.
    #[must_use]
    pub const fn passed(check: CheckId, assertions_passed: u32) -> Self {
        Self {
            check,
            status: CheckStatus::Passed,
            assertions_passed,
            failure: None,
            error: None,
        }
    }

    /// Builds a failed report carrying the aborting assertion.
    #[must_use]
    pub const fn failed(check: CheckId, assertions_passed: u32, failure: AssertionFailure) -> Self {
        Self {
            check,
            status: CheckStatus::Failed,
            assertions_passed,
            failure: Some(failure),
            error: None,
        }
    }

    /// Builds an errored report carrying the transport or parse message.
    #[must_use]
    pub const fn errored(check: CheckId, message: String) -> Self {
        Self {
            check,
            status: CheckStatus::Error,
            assertions_passed: 0,
            failure: None,
            error: Some(message),
        }
    }

    /// Returns true when the check passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}

// ============================================================================
// SECTION: Run Report
// ============================================================================

/// Aggregate outcome of a contract run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Per-check reports in execution order.
    pub checks: Vec<CheckReport>,
}

impl RunReport {
    /// Builds a run report from per-check reports.
    #[must_use]
    pub const fn new(checks: Vec<CheckReport>) -> Self {
        Self {
            checks,
        }
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|report| report.status == CheckStatus::Passed).count()
    }

    /// Number of checks that failed an assertion.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|report| report.status == CheckStatus::Failed).count()
    }

    /// Number of checks that errored before assertions completed.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.checks.iter().filter(|report| report.status == CheckStatus::Error).count()
    }

    /// Returns true when every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(CheckReport::is_passed)
    }
}
