//! ---
//! dmint_section: "01-core-functionality"
//! dmint_subsection: "module"
//! dmint_type: "source"
//! dmint_scope: "code"
//! dmint_description: "Bootstrap surface for the decentralized mint engine."
//! dmint_version: "v0.0.0-prealpha"
//! dmint_owner: "tbd"
//! ---
use tracing::debug;

/// Bootstrap surface for the decentralized mint engine.
///
/// The engine itself is developed over subsequent implementation steps; this
/// type pins down the construction and readiness contract the rest of the
/// workspace (and its harnesses) builds against. It holds no state, so
/// instances are freely clonable and interchangeable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecentralizedMint;

impl DecentralizedMint {
    /// Create a new mint bootstrap instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whether the bootstrap surface is operational.
    ///
    /// Emits a structured readiness event and returns `true`. The probe is
    /// side-effect free apart from the tracing event, so repeated invocations
    /// are equivalent and it is safe to call before a subscriber is
    /// installed.
    pub fn run(&self) -> bool {
        debug!(subsystem = "mint-core", ready = true, "mint bootstrap probe");
        true
    }
}
