//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, or defaults)
//!     → env.rs (L1RPC, L2RPC, contract addresses)
//!     → validation.rs (semantic checks)
//!     → BridgeConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow running from environment alone
//! - Environment beats file, command-line flags beat both
//! - Secrets never live in BridgeConfig

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::BridgeConfig;
pub use schema::ChainConfig;
pub use schema::GreeterConfig;
pub use schema::WaitConfig;
