//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the bridge scripts.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration shared by every script.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Layer-1 RPC settings.
    pub l1: ChainConfig,

    /// Layer-2 RPC settings.
    pub l2: ChainConfig,

    /// Rollup contract addresses on L1.
    pub bridge: BridgeContracts,

    /// ETH deposit (L1 → L2) settings.
    pub deposit: DepositConfig,

    /// ETH withdrawal (L2 → L1) settings.
    pub withdraw: WithdrawConfig,

    /// Cross-chain greeter settings.
    pub greeter: GreeterConfig,

    /// Settings for waiting on counterpart transactions.
    pub wait: WaitConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            l1: ChainConfig::default(),
            l2: ChainConfig::default_l2(),
            bridge: BridgeContracts::default(),
            deposit: DepositConfig::default(),
            withdraw: WithdrawConfig::default(),
            greeter: GreeterConfig::default(),
            wait: WaitConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// RPC connection settings for one chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    pub failover_urls: Vec<String>,

    /// Expected chain ID. When set, a mismatch with the node is fatal.
    pub chain_id: Option<u64>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            failover_urls: Vec::new(),
            chain_id: None,
            rpc_timeout_secs: 10,
        }
    }
}

impl ChainConfig {
    fn default_l2() -> Self {
        Self {
            rpc_url: "http://localhost:8547".to_string(),
            ..Self::default()
        }
    }
}

/// Rollup contract addresses.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BridgeContracts {
    /// Address of the rollup Inbox on L1.
    pub inbox_address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DepositConfig {
    /// Amount to deposit, in ether (decimal string).
    pub amount_eth: String,
}

impl Default for DepositConfig {
    fn default() -> Self {
        Self {
            amount_eth: "0.0001".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WithdrawConfig {
    /// Amount to withdraw, in ether (decimal string).
    pub amount_eth: String,
}

impl Default for WithdrawConfig {
    fn default() -> Self {
        Self {
            amount_eth: "0.000001".to_string(),
        }
    }
}

/// Greeter pair configuration. Both contracts must already be deployed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GreeterConfig {
    /// L1 greeter that forwards greetings through a retryable ticket.
    pub l1_address: String,

    /// L2 greeter that receives them.
    pub l2_address: String,

    /// Greeting sent when none is given on the command line.
    pub greeting: String,

    /// Maximum L2 gas for executing the ticket.
    pub max_gas: u64,

    /// Safety factor applied to the queried submission price.
    pub submission_price_multiplier: u64,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            l1_address: String::new(),
            l2_address: String::new(),
            greeting: "Greeting from far, far away".to_string(),
            max_gas: 100_000,
            submission_price_multiplier: 5,
        }
    }
}

/// Polling behaviour while waiting for a transaction on the other chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WaitConfig {
    /// Upper bound on waiting for the L2 counterpart, in seconds.
    pub l2_timeout_secs: u64,

    /// First poll delay in milliseconds.
    pub poll_interval_ms: u64,

    /// Poll delay cap in milliseconds.
    pub max_poll_interval_ms: u64,

    /// Blocks on top of the inclusion block before a transaction counts.
    pub confirmations: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            l2_timeout_secs: 12 * 60,
            poll_interval_ms: 1_000,
            max_poll_interval_ms: 10_000,
            confirmations: 1,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.greeter.max_gas, 100_000);
        assert_eq!(config.greeter.submission_price_multiplier, 5);
        assert_eq!(config.wait.l2_timeout_secs, 720);
        assert_eq!(config.l1.rpc_timeout_secs, 10);
        assert_eq!(config.l2.rpc_url, "http://localhost:8547");
    }

    #[test]
    fn test_partial_toml() {
        let config: BridgeConfig = toml::from_str(
            r#"
            [l2]
            rpc_url = "https://rollup.example:8547"

            [greeter]
            max_gas = 250000
            "#,
        )
        .unwrap();

        assert_eq!(config.l2.rpc_url, "https://rollup.example:8547");
        assert_eq!(config.l2.rpc_timeout_secs, 10);
        assert_eq!(config.greeter.max_gas, 250_000);
        assert_eq!(config.greeter.submission_price_multiplier, 5);
        assert_eq!(config.l1.rpc_url, "http://localhost:8545");
    }
}
