//! ---
//! dmint_section: "01-core-functionality"
//! dmint_subsection: "module"
//! dmint_type: "source"
//! dmint_scope: "code"
//! dmint_description: "Mint bootstrap surface and shared runtime utilities."
//! dmint_version: "v0.0.0-prealpha"
//! dmint_owner: "tbd"
//! ---
//! Core primitives for the DMint workspace.
//! This crate exposes the mint bootstrap surface together with the
//! configuration loading and logging utilities consumed across the
//! workspace.

pub mod config;
pub mod logging;
pub mod mint;

pub use config::{AppConfig, LoadedAppConfig, LoggingConfig};
pub use logging::{init_tracing, LogFormat, TracingGuards};
pub use mint::DecentralizedMint;
