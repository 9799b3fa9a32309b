//! One-shot bridge scripts.
//!
//! Each script is a flat sequence of `BridgeSdk` calls returning a report.
//! Reports render as human-readable text (last line names the resolved
//! transaction hash) or as JSON.
//!
//! # Error Policy
//! - No local recovery: the first error ends the script
//! - Guards (balance, sequence number) fail before any later call is made

use alloy::primitives::U256;
use alloy::primitives::utils::format_ether;
use serde::Serialize;
use std::io::Write;

use crate::chain::{BridgeError, BridgeResult};
use crate::config::validation::parse_ether_amount;

pub mod balances;
pub mod deposit;
pub mod greeter;
pub mod trace;
pub mod withdraw;

/// Process exit status for a script result: 0 on success, 1 on any error.
pub fn exit_status<T, E>(result: &Result<T, E>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Parse a decimal ether amount into wei.
pub fn parse_amount(field: &str, value: &str) -> BridgeResult<U256> {
    parse_ether_amount(value).map_err(|message| BridgeError::Config(format!("{}: {}", field, message)))
}

/// Write a finished report to `out`, as pretty JSON or as text.
pub fn write_report<W, R>(out: &mut W, report: &R, json: bool) -> BridgeResult<()>
where
    W: Write,
    R: Serialize + std::fmt::Display,
{
    let rendered = if json {
        serde_json::to_string_pretty(report)
            .map_err(|e| BridgeError::Config(format!("Failed to serialize report: {}", e)))?
    } else {
        report.to_string()
    };
    writeln!(out, "{}", rendered)
        .and_then(|_| out.flush())
        .map_err(|e| BridgeError::Config(format!("Failed to write report: {}", e)))
}

/// Render wei as "<ether> ETH".
pub(crate) fn eth(wei: U256) -> String {
    format!("{} ETH", format_ether(wei))
}
