//! Waiting for transactions to land.
//!
//! # Responsibilities
//! - Poll for a receipt keyed by hash, including hashes predicted before the
//!   transaction exists
//! - Require a configurable number of confirmations
//! - Enforce an overall deadline

use alloy::primitives::TxHash;
use std::time::Duration;
use tokio::time::{sleep, timeout};

use crate::chain::client::ChainClient;
use crate::chain::types::{BridgeError, BridgeResult, ReceiptSummary};
use crate::config::WaitConfig;
use crate::resilience::backoff::poll_backoff;

/// How long and how often to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Overall deadline.
    pub timeout: Duration,
    /// Confirmations required, counting the inclusion block as the first.
    pub confirmations: u64,
    pub base_poll_ms: u64,
    pub max_poll_ms: u64,
}

impl WaitPolicy {
    /// Build a policy from config, optionally overriding the deadline.
    pub fn from_config(config: &WaitConfig, timeout_override: Option<Duration>) -> Self {
        Self {
            timeout: timeout_override.unwrap_or(Duration::from_secs(config.l2_timeout_secs)),
            confirmations: config.confirmations,
            base_poll_ms: config.poll_interval_ms,
            max_poll_ms: config.max_poll_interval_ms,
        }
    }

    /// Delay before poll number `attempt` (1-based).
    pub fn poll_delay(&self, attempt: u32) -> Duration {
        poll_backoff(
            attempt,
            Duration::from_millis(self.base_poll_ms),
            Duration::from_millis(self.max_poll_ms),
        )
    }
}

/// Number of confirmations a receipt has at `current_block`.
pub fn confirmations_at(receipt_block: u64, current_block: u64) -> u64 {
    if current_block < receipt_block {
        return 0;
    }
    current_block - receipt_block + 1
}

/// Block until `tx_hash` is included with enough confirmations or the
/// deadline passes.
///
/// Reverted receipts are returned as-is; the caller decides what a revert
/// means for it.
pub async fn wait_for_transaction(
    client: &ChainClient,
    tx_hash: TxHash,
    policy: &WaitPolicy,
) -> BridgeResult<ReceiptSummary> {
    let layer = client.layer();
    tracing::info!(
        %layer,
        tx_hash = %tx_hash,
        timeout_secs = policy.timeout.as_secs(),
        confirmations = policy.confirmations,
        "Waiting for transaction"
    );

    let result = timeout(policy.timeout, async {
        let mut attempt: u32 = 0;
        loop {
            attempt = attempt.saturating_add(1);

            if let Some(receipt) = client.get_transaction_receipt(tx_hash).await? {
                let current_block = client.get_block_number().await?;
                let included_at = receipt.block_number.unwrap_or(current_block);
                let confirmations = confirmations_at(included_at, current_block);

                if confirmations >= policy.confirmations {
                    return Ok(receipt);
                }

                tracing::debug!(
                    %layer,
                    tx_hash = %tx_hash,
                    confirmations,
                    required = policy.confirmations,
                    "Waiting for confirmations"
                );
            } else {
                tracing::debug!(%layer, tx_hash = %tx_hash, attempt, "Transaction not found yet");
            }

            sleep(policy.poll_delay(attempt)).await;
        }
    })
    .await;

    match result {
        Ok(receipt) => receipt,
        Err(_) => Err(BridgeError::WaitTimeout {
            layer,
            hash: tx_hash,
            secs: policy.timeout.as_secs(),
        }),
    }
}
