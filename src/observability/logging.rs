//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Create the per-run span with its correlation id
//!
//! # Design Decisions
//! - Logs go to stderr; stdout carries only the script report
//! - `RUST_LOG` overrides the configured level

use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Build the filter: `RUST_LOG` when set and valid, else the configured level.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Span wrapping one script invocation.
pub fn run_span(command: &str) -> Span {
    let run_id = Uuid::new_v4();
    tracing::info_span!("run", %run_id, command)
}
