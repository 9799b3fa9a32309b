//! Environment variable overrides.
//!
//! Values found in the environment replace whatever the config file (or the
//! defaults) provided. The private key is deliberately absent: the wallet reads
//! it on its own and it never lands in `BridgeConfig`.

use crate::config::schema::BridgeConfig;

/// L1 JSON-RPC endpoint.
pub const L1_RPC_ENV_VAR: &str = "L1RPC";
/// L2 JSON-RPC endpoint.
pub const L2_RPC_ENV_VAR: &str = "L2RPC";
/// Rollup Inbox address on L1.
pub const INBOX_ENV_VAR: &str = "INBOX_ADDRESS";
pub const L1_GREETER_ENV_VAR: &str = "L1_GREETER_ADDRESS";
pub const L2_GREETER_ENV_VAR: &str = "L2_GREETER_ADDRESS";
pub const LOG_LEVEL_ENV_VAR: &str = "BRIDGE_LOG_LEVEL";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut BridgeConfig) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary lookup. Empty values are ignored.
pub fn apply_overrides<F>(config: &mut BridgeConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get(L1_RPC_ENV_VAR) {
        config.l1.rpc_url = v;
    }
    if let Some(v) = get(L2_RPC_ENV_VAR) {
        config.l2.rpc_url = v;
    }
    if let Some(v) = get(INBOX_ENV_VAR) {
        config.bridge.inbox_address = v;
    }
    if let Some(v) = get(L1_GREETER_ENV_VAR) {
        config.greeter.l1_address = v;
    }
    if let Some(v) = get(L2_GREETER_ENV_VAR) {
        config.greeter.l2_address = v;
    }
    if let Some(v) = get(LOG_LEVEL_ENV_VAR) {
        config.observability.log_level = v;
    }
}
