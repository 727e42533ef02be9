// crates/restcheck-verifier/src/verifier.rs
// ============================================================================
// Module: Contract Verifier
// Description: The read, create, and update contract checks.
// Purpose: Resolve each check into a report against the configured service.
// Dependencies: crate::transport, restcheck-core
// ============================================================================

//! ## Overview
//! The verifier issues one request per check and evaluates a fixed sequence
//! of assertions over the response: status code first, then body shape, then
//! field presence and literal equality. The first failing assertion aborts
//! the check and becomes its report; transport and parse failures surface as
//! errors from the individual operations and degrade to `Error` outcomes in
//! [`ContractVerifier::run_all`] so the remaining checks still execute.

// ============================================================================
// SECTION: Imports
// ============================================================================

use restcheck_core::AssertionFailure;
use restcheck_core::AssertionRun;
use restcheck_core::CheckId;
use restcheck_core::CheckReport;
use restcheck_core::NewUser;
use restcheck_core::RunReport;
use restcheck_core::UserUpdate;
use restcheck_core::assertions::expect_field_equals;
use restcheck_core::assertions::expect_field_present;
use restcheck_core::assertions::expect_integer_at_least;
use restcheck_core::assertions::expect_nested_key;
use restcheck_core::assertions::expect_object;
use restcheck_core::assertions::expect_status;
use restcheck_core::snapshot::ADDRESS_REQUIRED_KEYS;
use restcheck_core::snapshot::MUTATION_ECHO_FIELDS;
use restcheck_core::snapshot::SEED_USER_ID;
use restcheck_core::snapshot::USER_REQUIRED_FIELDS;
use restcheck_core::snapshot::create_fixture;
use restcheck_core::snapshot::seed_user_expectations;
use restcheck_core::snapshot::update_fixture;

use crate::config::VerifierConfig;
use crate::transport::HttpExchange;
use crate::transport::Transport;
use crate::transport::VerifyError;

// ============================================================================
// SECTION: Verifier
// ============================================================================

/// Contract verifier for a users resource collection.
///
/// # Invariants
/// - Checks are independent and may run in any order.
/// - Assertion order within a check is fixed; the first failure aborts it.
pub struct ContractVerifier {
    /// Transport bound to the validated configuration.
    transport: Transport,
}

impl ContractVerifier {
    /// Creates a verifier from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] when the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: VerifierConfig) -> Result<Self, VerifyError> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Returns the configuration the verifier runs against.
    #[must_use]
    pub const fn config(&self) -> &VerifierConfig {
        self.transport.config()
    }

    /// Verifies the read contract for the given record identifier.
    ///
    /// Asserts status 200, presence of every required user field, the literal
    /// seed snapshot values, and the four required address keys.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] when the request or response processing fails
    /// before assertions can run.
    pub fn verify_read(&self, id: u64) -> Result<CheckReport, VerifyError> {
        let exchange = self.transport.get(&format!("/users/{id}"))?;
        let mut run = AssertionRun::new();
        let outcome = read_assertions(&mut run, &exchange);
        Ok(resolve(CheckId::Read, &run, outcome))
    }

    /// Verifies the create contract for the given payload.
    ///
    /// Asserts status 201, presence of every echo field, unchanged echoes of
    /// every submitted field, and a generated integer `id >= 1`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] when the request or response processing fails
    /// before assertions can run.
    pub fn verify_create(&self, payload: &NewUser) -> Result<CheckReport, VerifyError> {
        let exchange = self.transport.post_json("/users", payload)?;
        let mut run = AssertionRun::new();
        let outcome = create_assertions(&mut run, &exchange, payload);
        Ok(resolve(CheckId::Create, &run, outcome))
    }

    /// Verifies the update contract for the given payload.
    ///
    /// Asserts status 200 and unchanged echoes of every submitted field,
    /// including the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] when the request or response processing fails
    /// before assertions can run.
    pub fn verify_update(&self, payload: &UserUpdate) -> Result<CheckReport, VerifyError> {
        let exchange = self.transport.put_json(&format!("/users/{}", payload.id), payload)?;
        let mut run = AssertionRun::new();
        let outcome = update_assertions(&mut run, &exchange, payload);
        Ok(resolve(CheckId::Update, &run, outcome))
    }

    /// Runs the selected checks with the canonical fixtures and aggregates a
    /// run report. Transport and parse failures degrade to `Error` outcomes
    /// so the remaining checks still execute.
    #[must_use]
    pub fn run_checks(&self, checks: &[CheckId]) -> RunReport {
        let reports = checks
            .iter()
            .map(|check| {
                let result = match check {
                    CheckId::Read => self.verify_read(SEED_USER_ID),
                    CheckId::Create => self.verify_create(&create_fixture()),
                    CheckId::Update => self.verify_update(&update_fixture()),
                };
                result.unwrap_or_else(|err| CheckReport::errored(*check, err.to_string()))
            })
            .collect();
        RunReport::new(reports)
    }

    /// Runs all three checks in canonical order.
    #[must_use]
    pub fn run_all(&self) -> RunReport {
        self.run_checks(&CheckId::ALL)
    }
}

// ============================================================================
// SECTION: Check Assertion Sequences
// ============================================================================

/// Evaluates the read-check assertion sequence.
fn read_assertions(
    run: &mut AssertionRun,
    exchange: &HttpExchange,
) -> Result<(), AssertionFailure> {
    run.record(expect_status(200, exchange.status))?;
    let record = run.record(expect_object(&exchange.body))?;
    for field in USER_REQUIRED_FIELDS {
        run.record(expect_field_present(record, field))?;
    }
    for (field, expected) in seed_user_expectations() {
        run.record(expect_field_equals(record, field, &expected))?;
    }
    for key in ADDRESS_REQUIRED_KEYS {
        run.record(expect_nested_key(record, "address", key))?;
    }
    Ok(())
}

/// Evaluates the create-check assertion sequence.
fn create_assertions(
    run: &mut AssertionRun,
    exchange: &HttpExchange,
    payload: &NewUser,
) -> Result<(), AssertionFailure> {
    run.record(expect_status(201, exchange.status))?;
    let record = run.record(expect_object(&exchange.body))?;
    for field in MUTATION_ECHO_FIELDS {
        run.record(expect_field_present(record, field))?;
    }
    for (field, expected) in payload.expected_echo() {
        run.record(expect_field_equals(record, field, &expected))?;
    }
    run.record(expect_integer_at_least(record, "id", 1))?;
    Ok(())
}

/// Evaluates the update-check assertion sequence.
fn update_assertions(
    run: &mut AssertionRun,
    exchange: &HttpExchange,
    payload: &UserUpdate,
) -> Result<(), AssertionFailure> {
    run.record(expect_status(200, exchange.status))?;
    let record = run.record(expect_object(&exchange.body))?;
    for field in MUTATION_ECHO_FIELDS {
        run.record(expect_field_present(record, field))?;
    }
    for (field, expected) in payload.expected_echo() {
        run.record(expect_field_equals(record, field, &expected))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves an assertion sequence outcome into a check report.
fn resolve(
    check: CheckId,
    run: &AssertionRun,
    outcome: Result<(), AssertionFailure>,
) -> CheckReport {
    match outcome {
        Ok(()) => CheckReport::passed(check, run.passed()),
        Err(failure) => CheckReport::failed(check, run.passed(), failure),
    }
}
