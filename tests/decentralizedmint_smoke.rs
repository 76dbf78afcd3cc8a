//! ---
//! dmint_section: "15-testing-qa-runbook"
//! dmint_subsection: "integration-tests"
//! dmint_type: "source"
//! dmint_scope: "code"
//! dmint_description: "Smoke tests for the DecentralizedMint bootstrap surface."
//! dmint_version: "v0.0.0-prealpha"
//! dmint_owner: "tbd"
//! ---
use dmint_core::DecentralizedMint;

#[test]
fn initialization() {
    let instance: DecentralizedMint = DecentralizedMint::new();
    assert_eq!(
        instance,
        DecentralizedMint::default(),
        "expected construction to yield a mint instance"
    );
}

#[test]
fn run_method() {
    let instance = DecentralizedMint::new();
    assert!(
        instance.run(),
        "expected the run probe to report success"
    );
}
