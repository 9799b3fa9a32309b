//! Set the L2 greeting from L1 through a retryable ticket.
//!
//! The L1 greeter forwards `setGreeting` to its L2 twin. The ticket is paid
//! for up front: a padded submission price plus `maxGas` at the current L2
//! gas price. The L2 redeem transaction hash is predicted from the Inbox
//! sequence number and waited on directly.

use alloy::primitives::{Address, Bytes, TxHash};
use alloy::sol_types::SolCall;
use serde::Serialize;
use std::time::Duration;

use crate::bridge::contracts::{IGreeterL1, IGreeterL2};
use crate::bridge::fees::{greeting_calldata_len, RetryableFees};
use crate::bridge::message::{inbox_sequence_numbers, L2MessageHashes};
use crate::bridge::sdk::parse_required_address;
use crate::bridge::BridgeSdk;
use crate::chain::{BridgeError, BridgeResult};
use crate::config::BridgeConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreeterParams {
    pub l1_greeter: Address,
    pub l2_greeter: Address,
    pub greeting: String,
    pub max_gas: u64,
    pub submission_price_multiplier: u64,
    pub timeout: Option<Duration>,
}

impl GreeterParams {
    pub fn from_config(
        config: &BridgeConfig,
        greeting: Option<String>,
        timeout: Option<Duration>,
    ) -> BridgeResult<Self> {
        let greeter = &config.greeter;
        Ok(Self {
            l1_greeter: parse_required_address("greeter.l1_address", &greeter.l1_address)?,
            l2_greeter: parse_required_address("greeter.l2_address", &greeter.l2_address)?,
            greeting: greeting.unwrap_or_else(|| greeter.greeting.clone()),
            max_gas: greeter.max_gas,
            submission_price_multiplier: greeter.submission_price_multiplier,
            timeout,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GreeterReport {
    pub wallet: Address,
    pub previous_greeting: String,
    pub requested_greeting: String,
    pub calldata_len: usize,
    pub fees: RetryableFees,
    pub l1_tx_hash: TxHash,
    pub message: L2MessageHashes,
    pub l2_greeting: String,
}

impl std::fmt::Display for GreeterReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Previous L2 greeting: \"{}\"", self.previous_greeting)?;
        writeln!(
            f,
            "Submission price:     {} wei (x{} = {} wei)",
            self.fees.base_submission_price, self.fees.multiplier, self.fees.max_submission_cost
        )?;
        writeln!(
            f,
            "Gas price bid:        {} wei for {} gas",
            self.fees.gas_price_bid, self.fees.max_gas
        )?;
        writeln!(f, "Call value:           {} wei", self.fees.call_value)?;
        writeln!(f, "L1 transaction:       {}", self.l1_tx_hash)?;
        writeln!(f, "Sequence number:      {}", self.message.sequence_number)?;
        writeln!(f, "Updated L2 greeting:  \"{}\"", self.l2_greeting)?;
        write!(f, "L2 greeting set in transaction {}", self.message.redeem)
    }
}

async fn read_greeting<S: BridgeSdk>(sdk: &S, l2_greeter: Address) -> BridgeResult<String> {
    let data: Bytes = IGreeterL2::greetCall {}.abi_encode().into();
    let output = sdk.call_l2(l2_greeter, data).await?;
    IGreeterL2::greetCall::abi_decode_returns(&output)
        .map_err(|e| BridgeError::Contract(format!("greet(): {}", e)))
}

/// Send `params.greeting` to the L2 greeter and wait until it is set.
pub async fn run<S: BridgeSdk>(sdk: &S, params: &GreeterParams) -> BridgeResult<GreeterReport> {
    let wallet = sdk.signer()?;

    let previous_greeting = read_greeting(sdk, params.l2_greeter).await?;
    tracing::info!(greeting = %previous_greeting, "Current L2 greeting");

    let calldata_len = greeting_calldata_len(&params.greeting);
    let quote = sdk.submission_price(calldata_len).await?;
    tracing::info!(
        calldata_len,
        price = %quote.price,
        next_update_timestamp = %quote.next_update_timestamp,
        "Submission price quoted"
    );

    let gas_price_bid = sdk.l2_gas_price().await?;
    let fees = RetryableFees::compute(
        quote.price,
        params.submission_price_multiplier,
        gas_price_bid,
        params.max_gas,
    )?;
    tracing::info!(
        max_submission_cost = %fees.max_submission_cost,
        gas_price_bid = %fees.gas_price_bid,
        max_gas = %fees.max_gas,
        call_value = %fees.call_value,
        "Retryable ticket fees"
    );

    let call = IGreeterL1::setGreetingInL2Call {
        _greeting: params.greeting.clone(),
        maxSubmissionCost: fees.max_submission_cost,
        maxGas: fees.max_gas,
        gasPriceBid: fees.gas_price_bid,
    };
    let receipt = sdk
        .send_l1(params.l1_greeter, fees.call_value, call.abi_encode().into())
        .await?
        .ensure_success()?;
    tracing::info!(tx_hash = %receipt.hash, "Greeting sent on L1");

    let sequence_number = *inbox_sequence_numbers(sdk.inbox(), &receipt.logs)
        .first()
        .ok_or(BridgeError::MissingSequenceNumber(receipt.hash))?;
    let message = L2MessageHashes::derive(sdk.l2_chain_id(), sequence_number);
    tracing::info!(
        sequence_number = %sequence_number,
        l2_tx_hash = %message.redeem,
        "Waiting for the L2 redeem"
    );

    sdk.wait_for_l2_transaction(message.redeem, params.timeout)
        .await?
        .ensure_success()?;

    let l2_greeting = read_greeting(sdk, params.l2_greeter).await?;
    tracing::info!(greeting = %l2_greeting, "Updated L2 greeting");

    Ok(GreeterReport {
        wallet,
        previous_greeting,
        requested_greeting: params.greeting.clone(),
        calldata_len,
        fees,
        l1_tx_hash: receipt.hash,
        message,
        l2_greeting,
    })
}
