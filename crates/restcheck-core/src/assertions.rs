// crates/restcheck-core/src/assertions.rs
// ============================================================================
// Module: Contract Assertion Primitives
// Description: Assertion evaluation over parsed JSON response bodies.
// Purpose: Convert observed response values into pass/fail outcomes.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Assertion primitives evaluate one expectation each against a parsed JSON
//! response and return a failure value carrying the assertion name plus
//! rendered expected/actual values. A missing field is a contract violation,
//! not unknown evidence, so every primitive resolves to pass or fail with no
//! third state. Equality is strict JSON value equality; the contract compares
//! literals only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Failure Type
// ============================================================================

/// A single failed assertion with rendered expected/actual values.
///
/// # Invariants
/// - `expected` and `actual` are human-readable renderings, not wire data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionFailure {
    /// Name of the assertion that failed (e.g. `field email equals`).
    pub assertion: String,
    /// Rendered expected value.
    pub expected: String,
    /// Rendered actual value.
    pub actual: String,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "assertion `{}` failed: expected {}, actual {}",
            self.assertion, self.expected, self.actual
        )
    }
}

/// Outcome of evaluating a single assertion.
pub type AssertionResult = Result<(), AssertionFailure>;

// ============================================================================
// SECTION: Assertion Run
// ============================================================================

/// Sequential assertion recorder with abort-on-first-failure semantics.
///
/// # Invariants
/// - `passed` counts only assertions that succeeded before the first failure.
#[derive(Debug, Default)]
pub struct AssertionRun {
    /// Number of assertions that have passed so far.
    passed: u32,
}

impl AssertionRun {
    /// Creates an empty run.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            passed: 0,
        }
    }

    /// Records an assertion outcome, propagating the first failure.
    ///
    /// # Errors
    ///
    /// Returns the [`AssertionFailure`] unchanged when the assertion failed.
    pub fn record<T>(&mut self, result: Result<T, AssertionFailure>) -> Result<T, AssertionFailure> {
        match result {
            Ok(value) => {
                self.passed += 1;
                Ok(value)
            }
            Err(failure) => Err(failure),
        }
    }

    /// Returns the number of assertions passed so far.
    #[must_use]
    pub const fn passed(&self) -> u32 {
        self.passed
    }
}

// ============================================================================
// SECTION: Assertion Primitives
// ============================================================================

/// Asserts that the observed HTTP status equals the expected status.
///
/// # Errors
///
/// Returns an [`AssertionFailure`] when the statuses differ.
pub fn expect_status(expected: u16, actual: u16) -> AssertionResult {
    if expected == actual {
        return Ok(());
    }
    Err(AssertionFailure {
        assertion: "http status equals".to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

/// Asserts that the response body is a JSON object and returns its map.
///
/// # Errors
///
/// Returns an [`AssertionFailure`] when the body is any other JSON type.
pub fn expect_object(body: &Value) -> Result<&Map<String, Value>, AssertionFailure> {
    body.as_object().ok_or_else(|| AssertionFailure {
        assertion: "response body is an object".to_string(),
        expected: "object".to_string(),
        actual: json_type_name(body).to_string(),
    })
}

/// Asserts that a field is present on the response object.
///
/// # Errors
///
/// Returns an [`AssertionFailure`] when the field is absent.
pub fn expect_field_present<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a Value, AssertionFailure> {
    object.get(field).ok_or_else(|| AssertionFailure {
        assertion: format!("field `{field}` present"),
        expected: "present".to_string(),
        actual: "absent".to_string(),
    })
}

/// Asserts that a field carries exactly the expected JSON value.
///
/// # Errors
///
/// Returns an [`AssertionFailure`] when the field is absent or differs.
pub fn expect_field_equals(
    object: &Map<String, Value>,
    field: &str,
    expected: &Value,
) -> AssertionResult {
    let Some(actual) = object.get(field) else {
        return Err(AssertionFailure {
            assertion: format!("field `{field}` equals"),
            expected: render_value(expected),
            actual: "absent".to_string(),
        });
    };
    if actual == expected {
        return Ok(());
    }
    Err(AssertionFailure {
        assertion: format!("field `{field}` equals"),
        expected: render_value(expected),
        actual: render_value(actual),
    })
}

/// Asserts that a nested object field carries the given key.
///
/// # Errors
///
/// Returns an [`AssertionFailure`] when the field is absent, not an object,
/// or lacks the key.
pub fn expect_nested_key(
    object: &Map<String, Value>,
    field: &str,
    key: &str,
) -> AssertionResult {
    let assertion = format!("field `{field}` carries key `{key}`");
    let Some(nested) = object.get(field) else {
        return Err(AssertionFailure {
            assertion,
            expected: "object".to_string(),
            actual: "absent".to_string(),
        });
    };
    let Some(nested) = nested.as_object() else {
        return Err(AssertionFailure {
            assertion,
            expected: "object".to_string(),
            actual: json_type_name(nested).to_string(),
        });
    };
    if nested.contains_key(key) {
        return Ok(());
    }
    Err(AssertionFailure {
        assertion,
        expected: "present".to_string(),
        actual: "absent".to_string(),
    })
}

/// Asserts that a field is an integer greater than or equal to `min`.
///
/// # Errors
///
/// Returns an [`AssertionFailure`] when the field is absent, not an integer,
/// or below the bound.
pub fn expect_integer_at_least(
    object: &Map<String, Value>,
    field: &str,
    min: u64,
) -> AssertionResult {
    let assertion = format!("field `{field}` is an integer >= {min}");
    let Some(actual) = object.get(field) else {
        return Err(AssertionFailure {
            assertion,
            expected: format!("integer >= {min}"),
            actual: "absent".to_string(),
        });
    };
    match actual.as_u64() {
        Some(value) if value >= min => Ok(()),
        _ => Err(AssertionFailure {
            assertion,
            expected: format!("integer >= {min}"),
            actual: render_value(actual),
        }),
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Renders a JSON value compactly for failure messages.
fn render_value(value: &Value) -> String {
    value.to_string()
}

/// Returns the JSON type name of a value for failure messages.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
