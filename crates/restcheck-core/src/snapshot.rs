// crates/restcheck-core/src/snapshot.rs
// ============================================================================
// Module: Expected Contract Snapshot
// Description: Literal expected values and required-field lists for checks.
// Purpose: Centralize the fixed contract the verifier asserts against.
// Dependencies: crate::model, serde_json
// ============================================================================

//! ## Overview
//! The contract is a fixed snapshot: the well-known seed record the service
//! ships with, the field lists every user record must carry, and the
//! canonical payloads the create and update checks submit. Keeping the
//! literals in one module keeps the verifier free of embedded data and makes
//! the expected contract reviewable at a glance.
//! Invariants:
//! - Field names are the wire names, lowercase ASCII.
//! - Snapshot literals match the demo service's seed data exactly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::model::NewUser;
use crate::model::UserUpdate;

// ============================================================================
// SECTION: Required Fields
// ============================================================================

/// Fields every user record returned on the read path must carry.
pub const USER_REQUIRED_FIELDS: [&str; 8] =
    ["id", "name", "username", "email", "address", "phone", "website", "company"];

/// Keys the nested `address` record must carry.
pub const ADDRESS_REQUIRED_KEYS: [&str; 4] = ["street", "city", "zipcode", "geo"];

/// Fields a create or update response must echo back.
pub const MUTATION_ECHO_FIELDS: [&str; 6] =
    ["id", "name", "username", "email", "phone", "website"];

// ============================================================================
// SECTION: Seed Snapshot
// ============================================================================

/// Identifier of the well-known seed record on the demo service.
pub const SEED_USER_ID: u64 = 1;

/// Literal field values expected when reading the seed record.
///
/// # Invariants
/// - Pairs are ordered; the verifier asserts them in this order.
#[must_use]
pub fn seed_user_expectations() -> Vec<(&'static str, Value)> {
    vec![
        ("id", json!(SEED_USER_ID)),
        ("name", json!("Leanne Graham")),
        ("username", json!("Bret")),
        ("email", json!("Sincere@april.biz")),
        ("phone", json!("1-770-736-8031 x56442")),
        ("website", json!("hildegard.org")),
    ]
}

// ============================================================================
// SECTION: Mutation Fixtures
// ============================================================================

/// Canonical payload submitted by the create check.
#[must_use]
pub fn create_fixture() -> NewUser {
    NewUser {
        name: "Test User".to_string(),
        username: "testuser".to_string(),
        email: "test@example.com".to_string(),
        phone: "1-234-567-8900".to_string(),
        website: "test.org".to_string(),
    }
}

/// Canonical payload submitted by the update check against the seed record.
#[must_use]
pub fn update_fixture() -> UserUpdate {
    UserUpdate {
        id: SEED_USER_ID,
        name: "Updated User".to_string(),
        username: "updateduser".to_string(),
        email: "updated@example.com".to_string(),
        phone: "1-999-999-9999".to_string(),
        website: "updated.org".to_string(),
    }
}
