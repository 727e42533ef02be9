// system-tests/tests/suites/contract.rs
// ============================================================================
// Module: Contract Tests
// Description: Full contract cycle against the in-process users stub.
// Purpose: Validate run aggregation, check independence, and report shape.
// Dependencies: system-tests helpers, restcheck-verifier
// ============================================================================

//! ## Overview
//! End-to-end contract coverage for Restcheck system-tests:
//! - A conforming stub resolves every check to `Passed`.
//! - Injected violations fail exactly the targeted check.
//! - Transport faults degrade to `Error` outcomes without aborting the run.
//! - Reads are idempotent and the JSON report shape stays stable.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use restcheck_core::CheckId;
use restcheck_core::CheckStatus;
use restcheck_core::snapshot::SEED_USER_ID;
use restcheck_verifier::ContractVerifier;
use restcheck_verifier::VerifierConfig;
use serde_json::json;
use system_tests::config::SystemTestConfig;

use crate::helpers::users_stub::StubFaults;
use crate::helpers::users_stub::spawn_users_stub;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a verifier against the stub base URL with suite timeouts applied.
fn stub_verifier(base_url: &str) -> ContractVerifier {
    let settings = SystemTestConfig::from_env().expect("system test config");
    let timeout_ms = u64::try_from(settings.timeout.as_millis()).expect("timeout fits u64");
    let config = VerifierConfig {
        base_url: base_url.to_string(),
        allow_http: true,
        timeout_ms,
        ..VerifierConfig::default()
    };
    ContractVerifier::new(config).expect("verifier init")
}

// ============================================================================
// SECTION: Conforming Service
// ============================================================================

#[test]
fn full_cycle_passes_against_a_conforming_service() {
    let stub = spawn_users_stub(StubFaults::default()).expect("spawn stub");
    let verifier = stub_verifier(stub.base_url());

    let run = verifier.run_all();

    assert_eq!(run.checks.len(), 3);
    assert!(run.all_passed(), "run should pass: {run:?}");
    assert_eq!(run.passed_count(), 3);
    assert_eq!(run.checks[0].check, CheckId::Read);
    assert_eq!(run.checks[0].assertions_passed, 20);
    assert_eq!(run.checks[1].check, CheckId::Create);
    assert_eq!(run.checks[1].assertions_passed, 14);
    assert_eq!(run.checks[2].check, CheckId::Update);
    assert_eq!(run.checks[2].assertions_passed, 14);
}

#[test]
fn reads_are_idempotent() {
    let stub = spawn_users_stub(StubFaults::default()).expect("spawn stub");
    let verifier = stub_verifier(stub.base_url());

    let first = verifier.verify_read(SEED_USER_ID).expect("first read");
    let second = verifier.verify_read(SEED_USER_ID).expect("second read");

    assert_eq!(first, second);
    assert_eq!(first.status, CheckStatus::Passed);
}

// ============================================================================
// SECTION: Injected Violations
// ============================================================================

#[test]
fn wrong_create_status_fails_only_the_create_check() {
    let stub = spawn_users_stub(StubFaults {
        create_status: Some(200),
        ..StubFaults::default()
    })
    .expect("spawn stub");
    let run = stub_verifier(stub.base_url()).run_all();

    assert_eq!(run.passed_count(), 2);
    assert_eq!(run.failed_count(), 1);
    let create = &run.checks[1];
    assert_eq!(create.check, CheckId::Create);
    assert_eq!(create.status, CheckStatus::Failed);
    let failure = create.failure.as_ref().expect("create failure");
    assert_eq!(failure.assertion, "http status equals");
    assert_eq!(failure.expected, "201");
    assert_eq!(failure.actual, "200");
}

#[test]
fn mutated_snapshot_literal_fails_only_the_read_check() {
    let stub = spawn_users_stub(StubFaults {
        mutate_read_name: true,
        ..StubFaults::default()
    })
    .expect("spawn stub");
    let run = stub_verifier(stub.base_url()).run_all();

    assert_eq!(run.failed_count(), 1);
    let read = &run.checks[0];
    assert_eq!(read.status, CheckStatus::Failed);
    let failure = read.failure.as_ref().expect("read failure");
    assert_eq!(failure.assertion, "field `name` equals");
    assert_eq!(failure.expected, "\"Leanne Graham\"");
    assert_eq!(failure.actual, "\"Ervin Howell\"");
}

#[test]
fn dropped_required_field_fails_the_read_check() {
    let stub = spawn_users_stub(StubFaults {
        drop_read_company: true,
        ..StubFaults::default()
    })
    .expect("spawn stub");
    let report = stub_verifier(stub.base_url()).verify_read(SEED_USER_ID).expect("read");

    assert_eq!(report.status, CheckStatus::Failed);
    let failure = report.failure.as_ref().expect("read failure");
    assert_eq!(failure.assertion, "field `company` present");
}

#[test]
fn missing_address_key_fails_the_read_check() {
    let stub = spawn_users_stub(StubFaults {
        drop_read_zipcode: true,
        ..StubFaults::default()
    })
    .expect("spawn stub");
    let report = stub_verifier(stub.base_url()).verify_read(SEED_USER_ID).expect("read");

    assert_eq!(report.status, CheckStatus::Failed);
    let failure = report.failure.as_ref().expect("read failure");
    assert_eq!(failure.assertion, "field `address` carries key `zipcode`");
}

#[test]
fn missing_created_id_fails_the_create_check() {
    let stub = spawn_users_stub(StubFaults {
        omit_created_id: true,
        ..StubFaults::default()
    })
    .expect("spawn stub");
    let run = stub_verifier(stub.base_url()).run_all();

    let create = &run.checks[1];
    assert_eq!(create.status, CheckStatus::Failed);
    let failure = create.failure.as_ref().expect("create failure");
    assert_eq!(failure.assertion, "field `id` present");
}

#[test]
fn tampered_update_echo_fails_the_update_check() {
    let stub = spawn_users_stub(StubFaults {
        tamper_update_email: true,
        ..StubFaults::default()
    })
    .expect("spawn stub");
    let run = stub_verifier(stub.base_url()).run_all();

    assert_eq!(run.failed_count(), 1);
    let update = &run.checks[2];
    assert_eq!(update.status, CheckStatus::Failed);
    let failure = update.failure.as_ref().expect("update failure");
    assert_eq!(failure.assertion, "field `email` equals");
    assert_eq!(failure.expected, "\"updated@example.com\"");
    assert_eq!(failure.actual, "\"tampered@example.com\"");
}

// ============================================================================
// SECTION: Transport Faults
// ============================================================================

#[test]
fn non_json_read_body_degrades_to_an_error_outcome() {
    let stub = spawn_users_stub(StubFaults {
        plain_text_read: true,
        ..StubFaults::default()
    })
    .expect("spawn stub");
    let run = stub_verifier(stub.base_url()).run_all();

    assert_eq!(run.error_count(), 1);
    assert_eq!(run.passed_count(), 2);
    let read = &run.checks[0];
    assert_eq!(read.status, CheckStatus::Error);
    let message = read.error.as_deref().expect("read error");
    assert!(message.contains("not valid JSON"), "unexpected error: {message}");
}

// ============================================================================
// SECTION: Report Shape
// ============================================================================

#[test]
fn json_report_shape_stays_stable() {
    let stub = spawn_users_stub(StubFaults::default()).expect("spawn stub");
    let run = stub_verifier(stub.base_url()).run_all();

    let value = serde_json::to_value(&run).expect("serialize run report");
    assert_eq!(
        value["checks"][0],
        json!({"check": "read", "status": "passed", "assertions_passed": 20})
    );
    assert_eq!(value["checks"][1]["check"], json!("create"));
    assert_eq!(value["checks"][2]["status"], json!("passed"));
}
