// crates/restcheck-core/src/model.rs
// ============================================================================
// Module: Users Resource Model
// Description: Wire-shape types for the remote users collection.
// Purpose: Provide serializable request payloads and response shapes.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Wire-shape types for the users resource exercised by the verifier. The
//! response-side types mirror what the remote service returns (including the
//! read-only `company` record); the request-side types (`NewUser`,
//! `UserUpdate`) carry exactly the fields the create and update checks
//! submit. Responses are asserted as parsed JSON rather than deserialized
//! into these types, so extra fields from the service never cause failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Response Shapes
// ============================================================================

/// Geographic coordinates nested inside an address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    /// Latitude as rendered by the service (decimal string).
    pub lat: String,
    /// Longitude as rendered by the service (decimal string).
    pub lng: String,
}

/// Postal address record nested inside a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// Optional suite or apartment line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    /// City name.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
    /// Nested coordinates.
    pub geo: Geo,
}

/// Company record returned on the read path only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Marketing catch phrase.
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    /// Business summary.
    pub bs: String,
}

/// Full user record as returned by the service.
///
/// # Invariants
/// - `id` is assigned by the service and unique within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Service-assigned identifier (>= 1).
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Login-style handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Nested postal address.
    pub address: Address,
    /// Contact phone number.
    pub phone: String,
    /// Personal website.
    pub website: String,
    /// Employer record (read path only).
    pub company: Company,
}

// ============================================================================
// SECTION: Request Payloads
// ============================================================================

/// Payload submitted by the create check (no `id`; the service assigns one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login-style handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Personal website.
    pub website: String,
}

impl NewUser {
    /// Returns the field/value pairs the service must echo back unchanged.
    #[must_use]
    pub fn expected_echo(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::String(self.name.clone())),
            ("username", Value::String(self.username.clone())),
            ("email", Value::String(self.email.clone())),
            ("phone", Value::String(self.phone.clone())),
            ("website", Value::String(self.website.clone())),
        ]
    }
}

/// Full mutation payload submitted by the update check, including the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// Identifier of the record being replaced.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Login-style handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Personal website.
    pub website: String,
}

impl UserUpdate {
    /// Returns the field/value pairs the service must echo back unchanged,
    /// including the identifier.
    #[must_use]
    pub fn expected_echo(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", json!(self.id)),
            ("name", Value::String(self.name.clone())),
            ("username", Value::String(self.username.clone())),
            ("email", Value::String(self.email.clone())),
            ("phone", Value::String(self.phone.clone())),
            ("website", Value::String(self.website.clone())),
        ]
    }
}
