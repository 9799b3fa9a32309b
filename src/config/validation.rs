//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, multiplier > 0)
//! - Check that URLs, addresses and ether amounts parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - Addresses left empty are not errors here; the script that needs one
//!   reports it when it runs

use alloy::primitives::utils::parse_ether;
use alloy::primitives::{Address, U256};

use crate::config::schema::{BridgeConfig, ChainConfig};

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `l2.rpc_url`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a fully merged configuration.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_chain("l1", &config.l1, &mut errors);
    validate_chain("l2", &config.l2, &mut errors);

    validate_optional_address("bridge.inbox_address", &config.bridge.inbox_address, &mut errors);
    validate_optional_address("greeter.l1_address", &config.greeter.l1_address, &mut errors);
    validate_optional_address("greeter.l2_address", &config.greeter.l2_address, &mut errors);

    validate_amount("deposit.amount_eth", &config.deposit.amount_eth, &mut errors);
    validate_amount("withdraw.amount_eth", &config.withdraw.amount_eth, &mut errors);

    if config.greeter.max_gas == 0 {
        errors.push(ValidationError::new("greeter.max_gas", "must be greater than zero"));
    }
    if config.greeter.submission_price_multiplier == 0 {
        errors.push(ValidationError::new(
            "greeter.submission_price_multiplier",
            "must be greater than zero",
        ));
    }

    if config.wait.l2_timeout_secs == 0 {
        errors.push(ValidationError::new("wait.l2_timeout_secs", "must be greater than zero"));
    }
    if config.wait.poll_interval_ms == 0 {
        errors.push(ValidationError::new("wait.poll_interval_ms", "must be greater than zero"));
    }
    if config.wait.poll_interval_ms > config.wait.max_poll_interval_ms {
        errors.push(ValidationError::new(
            "wait.max_poll_interval_ms",
            format!(
                "must not be below poll_interval_ms ({})",
                config.wait.poll_interval_ms
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_chain(prefix: &str, chain: &ChainConfig, errors: &mut Vec<ValidationError>) {
    if let Err(e) = chain.rpc_url.parse::<url::Url>() {
        errors.push(ValidationError::new(
            format!("{prefix}.rpc_url"),
            format!("invalid URL '{}': {}", chain.rpc_url, e),
        ));
    }
    for (i, failover) in chain.failover_urls.iter().enumerate() {
        if let Err(e) = failover.parse::<url::Url>() {
            errors.push(ValidationError::new(
                format!("{prefix}.failover_urls[{i}]"),
                format!("invalid URL '{}': {}", failover, e),
            ));
        }
    }
    if chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new(
            format!("{prefix}.rpc_timeout_secs"),
            "must be greater than zero",
        ));
    }
}

fn validate_optional_address(field: &str, value: &str, errors: &mut Vec<ValidationError>) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if let Err(e) = value.parse::<Address>() {
        errors.push(ValidationError::new(field, format!("invalid address '{}': {}", value, e)));
    }
}

fn validate_amount(field: &str, value: &str, errors: &mut Vec<ValidationError>) {
    if let Err(message) = parse_ether_amount(value) {
        errors.push(ValidationError::new(field, message));
    }
}

/// Parse a non-negative decimal ether amount into wei.
///
/// `parse_ether` accepts a sign and would wrap a negative value into a huge
/// `U256`, so signs are rejected up front.
pub fn parse_ether_amount(value: &str) -> Result<U256, String> {
    let trimmed = value.trim();
    if trimmed.starts_with('-') {
        return Err(format!("invalid ether amount '{}': must not be negative", value));
    }
    parse_ether(trimmed).map_err(|e| format!("invalid ether amount '{}': {}", value, e))
}
