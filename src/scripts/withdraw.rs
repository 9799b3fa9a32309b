//! Withdraw ETH from L2 back to the signer's L1 account.
//!
//! The L2 side completes immediately; the funds become claimable from the
//! Outbox on L1 once the dispute window for the withdrawal's batch passes.

use alloy::primitives::{Address, TxHash, U256};
use serde::Serialize;

use crate::bridge::withdrawal::{withdrawals_in_receipt, WithdrawalEvent};
use crate::bridge::BridgeSdk;
use crate::chain::{BridgeError, BridgeResult, Layer};
use crate::config::BridgeConfig;
use crate::scripts::{eth, parse_amount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawParams {
    /// Wei to send to L1.
    pub amount: U256,
}

impl WithdrawParams {
    pub fn from_config(config: &BridgeConfig, amount: Option<&str>) -> BridgeResult<Self> {
        let amount = parse_amount(
            "withdraw.amount_eth",
            amount.unwrap_or(&config.withdraw.amount_eth),
        )?;
        Ok(Self { amount })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WithdrawReport {
    pub wallet: Address,
    pub amount: U256,
    pub l2_balance_before: U256,
    pub l2_tx_hash: TxHash,
    pub withdrawal: WithdrawalEvent,
}

impl std::fmt::Display for WithdrawReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Withdrew {} from {}", eth(self.amount), self.wallet)?;
        writeln!(f, "Destination:     {}", self.withdrawal.destination)?;
        writeln!(f, "Unique id:       {}", self.withdrawal.unique_id)?;
        writeln!(
            f,
            "Outbox position: batch {} index {}",
            self.withdrawal.batch_number, self.withdrawal.index_in_batch
        )?;
        writeln!(
            f,
            "Claim the funds from the L1 Outbox once the batch clears its dispute window."
        )?;
        write!(f, "L2 withdrawal confirmed in transaction {}", self.l2_tx_hash)
    }
}

/// Withdraw `params.amount` to the signer's own address on L1.
pub async fn run<S: BridgeSdk>(sdk: &S, params: &WithdrawParams) -> BridgeResult<WithdrawReport> {
    let wallet = sdk.signer()?;

    let l2_balance_before = sdk.balance(Layer::L2, wallet).await?;
    tracing::info!(wallet = %wallet, balance = %eth(l2_balance_before), "L2 balance");

    if l2_balance_before < params.amount {
        return Err(BridgeError::InsufficientBalance {
            layer: Layer::L2,
            balance: l2_balance_before,
            required: params.amount,
        });
    }

    tracing::info!(amount = %eth(params.amount), "Withdrawing ETH to L1");
    let receipt = sdk
        .withdraw_eth(wallet, params.amount)
        .await?
        .ensure_success()?;

    let withdrawal = withdrawals_in_receipt(&receipt.logs)
        .into_iter()
        .next()
        .ok_or(BridgeError::MissingWithdrawal(receipt.hash))?;
    tracing::info!(
        tx_hash = %receipt.hash,
        batch_number = %withdrawal.batch_number,
        index_in_batch = %withdrawal.index_in_batch,
        "Withdrawal initiated"
    );

    Ok(WithdrawReport {
        wallet,
        amount: params.amount,
        l2_balance_before,
        l2_tx_hash: receipt.hash,
        withdrawal,
    })
}
