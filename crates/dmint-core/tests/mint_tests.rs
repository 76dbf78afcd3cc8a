//! ---
//! dmint_section: "01-core-functionality"
//! dmint_subsection: "module"
//! dmint_type: "source"
//! dmint_scope: "code"
//! dmint_description: "Unit tests for the mint bootstrap surface."
//! dmint_version: "v0.0.0-prealpha"
//! dmint_owner: "tbd"
//! ---
use dmint_core::DecentralizedMint;

#[test]
fn construction_yields_mint_instance() {
    let mint: DecentralizedMint = DecentralizedMint::new();
    assert_eq!(
        mint,
        DecentralizedMint::default(),
        "a freshly constructed mint should match the default instance"
    );
}

#[test]
fn run_reports_ready() {
    let mint = DecentralizedMint::new();
    assert!(mint.run(), "expected the bootstrap probe to report success");
}

#[test]
fn run_is_repeatable() {
    let mint = DecentralizedMint::new();
    assert!(mint.run());
    assert!(
        mint.run(),
        "the probe holds no state and must succeed on repeated calls"
    );
}

#[test]
fn cloned_instance_probes_identically() {
    let mint = DecentralizedMint::new();
    let clone = mint.clone();
    assert_eq!(mint, clone);
    assert!(clone.run());
}

#[test]
fn debug_representation_names_the_type() {
    let rendered = format!("{:?}", DecentralizedMint::new());
    assert!(
        rendered.contains("DecentralizedMint"),
        "debug output should identify the mint type, got {rendered}"
    );
}
