//! Arbitrum bridge demonstration scripts.
//!
//! Moves ETH and greetings between L1 and an Arbitrum rollup using retryable
//! tickets, Inbox deposits and ArbSys withdrawals.

pub mod bridge;
pub mod chain;
pub mod config;
pub mod observability;
pub mod resilience;
pub mod scripts;

pub use bridge::{ArbBridge, BridgeSdk};
pub use chain::{BridgeError, BridgeResult, Wallet};
pub use config::{load_config, BridgeConfig};
