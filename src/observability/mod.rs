//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Scripts and chain clients produce:
//!     → logging.rs (structured log events on stderr)
//!
//! Each run is wrapped in a span carrying a `run_id` (UUID v4) so every
//! event of one invocation can be correlated.
//! ```

pub mod logging;

pub use logging::{init_logging, run_span};
