//! Retryable ticket fee arithmetic.
//!
//! A retryable ticket prepays two things on L1: the submission cost (priced
//! per calldata byte by ArbRetryableTx) and L2 execution (`maxGas` at
//! `gasPriceBid`). The queried submission price moves between the query and
//! inclusion, so it is scaled by a safety multiplier before use.

use alloy::primitives::U256;
use alloy::sol_types::SolValue;
use serde::{Deserialize, Serialize};

use crate::chain::types::{BridgeError, BridgeResult};

/// Length of a function selector.
const SELECTOR_LEN: usize = 4;

/// Answer of `ArbRetryableTx.getSubmissionPrice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPrice {
    /// Price in wei for the queried calldata size.
    pub price: U256,
    /// When the L2 will next reprice submissions (unix seconds).
    pub next_update_timestamp: U256,
}

/// Everything `setGreetingInL2` (or any ticket creation) needs to be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryableFees {
    /// Submission price as quoted.
    pub base_submission_price: U256,
    pub multiplier: u64,
    /// Quoted price times the multiplier; passed as `maxSubmissionCost`.
    pub max_submission_cost: U256,
    pub gas_price_bid: U256,
    pub max_gas: U256,
    /// `max_submission_cost + gas_price_bid * max_gas`, sent as `msg.value`.
    pub call_value: U256,
}

impl RetryableFees {
    /// Compute the ticket payment with exact integer arithmetic.
    pub fn compute(
        base_submission_price: U256,
        multiplier: u64,
        gas_price_bid: U256,
        max_gas: u64,
    ) -> BridgeResult<Self> {
        let max_submission_cost = adjusted_submission_price(base_submission_price, multiplier)?;
        let max_gas = U256::from(max_gas);
        let execution_cost = gas_price_bid
            .checked_mul(max_gas)
            .ok_or(BridgeError::FeeOverflow)?;
        let call_value = max_submission_cost
            .checked_add(execution_cost)
            .ok_or(BridgeError::FeeOverflow)?;

        Ok(Self {
            base_submission_price,
            multiplier,
            max_submission_cost,
            gas_price_bid,
            max_gas,
            call_value,
        })
    }
}

/// Scale a quoted submission price by the safety multiplier.
pub fn adjusted_submission_price(price: U256, multiplier: u64) -> BridgeResult<U256> {
    price
        .checked_mul(U256::from(multiplier))
        .ok_or(BridgeError::FeeOverflow)
}

/// Calldata length the L2 greeter will receive for `greeting`: the
/// ABI-encoded string argument plus the selector.
pub fn greeting_calldata_len(greeting: &str) -> usize {
    (greeting.to_string(),).abi_encode_params().len() + SELECTOR_LEN
}
