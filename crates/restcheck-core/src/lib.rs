// crates/restcheck-core/src/lib.rs
// ============================================================================
// Module: Restcheck Core
// Description: Contract model, expected snapshot, and assertion primitives.
// Purpose: Provide the I/O-free building blocks shared by the verifier and CLI.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This crate defines everything the contract verifier needs that does not
//! touch the network: the wire-shape model of the users resource, the literal
//! expected snapshot for the seed record, assertion primitives over parsed
//! JSON values, and the check/report types the CLI renders.
//! Invariants:
//! - Assertions are evaluated in a fixed order; the first failure aborts the
//!   enclosing check.
//! - Report types serialize to stable JSON for machine-readable output.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assertions;
pub mod check;
pub mod model;
pub mod snapshot;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use assertions::AssertionFailure;
pub use assertions::AssertionResult;
pub use assertions::AssertionRun;
pub use check::CheckId;
pub use check::CheckReport;
pub use check::CheckStatus;
pub use check::RunReport;
pub use model::Address;
pub use model::Company;
pub use model::Geo;
pub use model::NewUser;
pub use model::User;
pub use model::UserUpdate;
