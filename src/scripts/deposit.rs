//! Deposit ETH from L1 into the signer's L2 account.

use alloy::primitives::{Address, TxHash, U256};
use serde::Serialize;
use std::time::Duration;

use crate::bridge::message::{inbox_sequence_numbers, L2MessageHashes};
use crate::bridge::BridgeSdk;
use crate::chain::{BridgeError, BridgeResult, Layer};
use crate::config::BridgeConfig;
use crate::scripts::{eth, parse_amount};

/// Deposits carry no L2 calldata; the submission price is quoted for zero bytes.
const DEPOSIT_CALLDATA_LEN: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositParams {
    /// Wei to move to L2.
    pub amount: U256,
    pub timeout: Option<Duration>,
}

impl DepositParams {
    pub fn from_config(
        config: &BridgeConfig,
        amount: Option<&str>,
        timeout: Option<Duration>,
    ) -> BridgeResult<Self> {
        let amount = parse_amount(
            "deposit.amount_eth",
            amount.unwrap_or(&config.deposit.amount_eth),
        )?;
        Ok(Self { amount, timeout })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositReport {
    pub wallet: Address,
    pub amount: U256,
    pub max_submission_cost: U256,
    pub l1_tx_hash: TxHash,
    pub message: L2MessageHashes,
    pub l2_balance_before: U256,
    pub l2_balance_after: U256,
}

impl std::fmt::Display for DepositReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Deposited {} from {}", eth(self.amount), self.wallet)?;
        writeln!(f, "L1 transaction:      {}", self.l1_tx_hash)?;
        writeln!(f, "Sequence number:     {}", self.message.sequence_number)?;
        writeln!(
            f,
            "L2 balance:          {} -> {}",
            eth(self.l2_balance_before),
            eth(self.l2_balance_after)
        )?;
        write!(f, "L2 deposit confirmed in transaction {}", self.message.creation)
    }
}

/// Deposit `params.amount` and wait for the L2 credit.
pub async fn run<S: BridgeSdk>(sdk: &S, params: &DepositParams) -> BridgeResult<DepositReport> {
    let wallet = sdk.signer()?;
    tracing::info!(wallet = %wallet, amount = %eth(params.amount), "Depositing ETH into L2");

    let l2_balance_before = sdk.balance(Layer::L2, wallet).await?;
    tracing::info!(balance = %eth(l2_balance_before), "L2 balance before deposit");

    let quote = sdk.submission_price(DEPOSIT_CALLDATA_LEN).await?;
    let receipt = sdk
        .deposit_eth(params.amount, quote.price)
        .await?
        .ensure_success()?;
    tracing::info!(tx_hash = %receipt.hash, "Deposit transaction confirmed on L1");

    let sequence_number = *inbox_sequence_numbers(sdk.inbox(), &receipt.logs)
        .first()
        .ok_or(BridgeError::MissingSequenceNumber(receipt.hash))?;
    let message = L2MessageHashes::derive(sdk.l2_chain_id(), sequence_number);
    tracing::info!(
        sequence_number = %sequence_number,
        l2_tx_hash = %message.creation,
        "Waiting for L2 side of deposit"
    );

    sdk.wait_for_l2_transaction(message.creation, params.timeout)
        .await?
        .ensure_success()?;

    let l2_balance_after = sdk.balance(Layer::L2, wallet).await?;
    tracing::info!(balance = %eth(l2_balance_after), "L2 balance updated");

    Ok(DepositReport {
        wallet,
        amount: params.amount,
        max_submission_cost: quote.price,
        l1_tx_hash: receipt.hash,
        message,
        l2_balance_before,
        l2_balance_after,
    })
}
