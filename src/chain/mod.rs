//! Chain access subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key, RPC URLs)
//!     → wallet.rs (key loading, signing)
//!     → client.rs (RPC connection per layer, timeouts, failover)
//!     → transaction.rs (wait for a hash to land)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use transaction::{wait_for_transaction, WaitPolicy};
pub use types::{BridgeError, BridgeResult, ChainId, Layer, ReceiptSummary};
pub use wallet::Wallet;
