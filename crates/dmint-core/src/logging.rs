//! ---
//! dmint_section: "01-core-functionality"
//! dmint_subsection: "module"
//! dmint_type: "source"
//! dmint_scope: "code"
//! dmint_description: "Tracing initialisation and log format selection."
//! dmint_version: "v0.0.0-prealpha"
//! dmint_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

const LOG_ENV: &str = "DMINT_LOG";

/// Guards for the non-blocking log writers.
///
/// Dropping the guards flushes anything still buffered, so the caller must
/// keep them alive for as long as events may be emitted (typically bound to
/// `main` with `let _guards = init_tracing(...)?;`).
#[derive(Debug)]
pub struct TracingGuards {
    _file: WorkerGuard,
    _stdout: WorkerGuard,
}

/// Available log formats for the daemon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    StructuredJson,
    Pretty,
}

/// Initialize the tracing subscriber based on configuration and environment variables.
///
/// * `DMINT_LOG` overrides the log filter (e.g. `info`, `debug,foo=trace`).
///   When unset the standard `RUST_LOG` variable is honoured, finally
///   defaulting to `debug` to aid troubleshooting during bring-up.
/// * Stdout carries structured JSON by default (or a human-readable format
///   when configured), while a rolling daily JSON file is kept for
///   post-mortem analysis.
///
/// Repeated calls are tolerated: only the first subscriber wins.
pub fn init_tracing(service_name: &str, config: &LoggingConfig) -> Result<TracingGuards> {
    std::fs::create_dir_all(&config.directory).with_context(|| {
        format!(
            "unable to create log directory {}",
            config.directory.display()
        )
    })?;

    let file_name = format!("{}.log", config.effective_prefix(service_name));
    let (file_writer, file_guard) =
        tracing_appender::non_blocking(rolling::daily(&config.directory, file_name));
    let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());

    let stdout_layer = match config.format {
        LogFormat::StructuredJson => fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .json()
            .with_writer(stdout_writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(stdout_writer)
            .boxed(),
    };
    let file_layer = fmt::layer()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .json()
        .with_writer(file_writer)
        .boxed();

    Registry::default()
        .with(env_filter())
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .ok();

    info!(service = %service_name, log_dir = %config.directory.display(), format = ?config.format, "tracing initialised");
    Ok(TracingGuards {
        _file: file_guard,
        _stdout: stdout_guard,
    })
}

/// Resolve the active filter directive: `DMINT_LOG`, then `RUST_LOG`, then `debug`.
fn env_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); defaulting to debug logging",
                LOG_ENV, err
            );
            EnvFilter::new("debug")
        }),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
    }
}
