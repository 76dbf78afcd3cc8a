//! ---
//! dmint_section: "01-core-functionality"
//! dmint_subsection: "binary"
//! dmint_type: "source"
//! dmint_scope: "code"
//! dmint_description: "Binary entrypoint for the DMint daemon."
//! dmint_version: "v0.0.0-prealpha"
//! dmint_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use dmint_core::config::AppConfig;
use dmint_core::logging::init_tracing;
use dmint_core::mint::DecentralizedMint;
use tracing::info;

#[derive(Debug, Parser)]
#[command(author, version, about = "DMint daemon", long_about = None)]
struct Cli {
    #[arg(long, value_name = "FILE", help = "Path to configuration file")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut candidates = Vec::new();
    if let Some(path) = &cli.config {
        candidates.push(path.clone());
    }
    candidates.push(PathBuf::from("configs/example.prod.toml"));
    candidates.push(PathBuf::from("configs/example.dev.toml"));

    let loaded = AppConfig::load_with_source(&candidates)?;
    // Bound to main so the non-blocking writers flush before exit.
    let _guards = init_tracing("dmintd", &loaded.config.logging)?;
    info!(config_path = %loaded.source.display(), "configuration loaded");

    let mint = DecentralizedMint::new();
    if !mint.run() {
        bail!("mint bootstrap probe reported failure");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "mint bootstrap probe succeeded");
    Ok(())
}
