//! Follow an L1 transaction's Inbox messages onto L2.
//!
//! For every sequence number in the L1 receipt, derive the ticket creation,
//! redeem and auto-redeem hashes and report which of them exist on L2.

use alloy::primitives::TxHash;
use serde::Serialize;

use crate::bridge::message::{inbox_sequence_numbers, L2MessageHashes};
use crate::bridge::BridgeSdk;
use crate::chain::{BridgeError, BridgeResult, Layer};

/// L2 status of one predicted hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum L2Status {
    NotFound,
    Succeeded,
    Reverted,
}

impl std::fmt::Display for L2Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            L2Status::NotFound => f.write_str("not found"),
            L2Status::Succeeded => f.write_str("succeeded"),
            L2Status::Reverted => f.write_str("reverted"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TracedMessage {
    pub hashes: L2MessageHashes,
    pub creation: L2Status,
    pub redeem: L2Status,
    pub auto_redeem: L2Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceReport {
    pub l1_tx_hash: TxHash,
    pub l2_chain_id: u64,
    pub messages: Vec<TracedMessage>,
}

impl std::fmt::Display for TraceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "L2 chain id: {}", self.l2_chain_id)?;
        for m in &self.messages {
            writeln!(f, "Sequence number {}", m.hashes.sequence_number)?;
            writeln!(f, "  creation     {} ({})", m.hashes.creation, m.creation)?;
            writeln!(f, "  redeem       {} ({})", m.hashes.redeem, m.redeem)?;
            writeln!(f, "  auto-redeem  {} ({})", m.hashes.auto_redeem, m.auto_redeem)?;
        }
        write!(
            f,
            "Traced {} message(s) from L1 transaction {}",
            self.messages.len(),
            self.l1_tx_hash
        )
    }
}

async fn l2_status<S: BridgeSdk>(sdk: &S, hash: TxHash) -> BridgeResult<L2Status> {
    Ok(match sdk.receipt(Layer::L2, hash).await? {
        None => L2Status::NotFound,
        Some(r) if r.success => L2Status::Succeeded,
        Some(_) => L2Status::Reverted,
    })
}

pub async fn run<S: BridgeSdk>(sdk: &S, l1_tx_hash: TxHash) -> BridgeResult<TraceReport> {
    let receipt = sdk
        .receipt(Layer::L1, l1_tx_hash)
        .await?
        .ok_or(BridgeError::ReceiptNotFound {
            layer: Layer::L1,
            hash: l1_tx_hash,
        })?;

    let sequence_numbers = inbox_sequence_numbers(sdk.inbox(), &receipt.logs);
    if sequence_numbers.is_empty() {
        return Err(BridgeError::MissingSequenceNumber(l1_tx_hash));
    }

    let l2_chain_id = sdk.l2_chain_id();
    let mut messages = Vec::with_capacity(sequence_numbers.len());
    for seq in sequence_numbers {
        let hashes = L2MessageHashes::derive(l2_chain_id, seq);
        let traced = TracedMessage {
            hashes,
            creation: l2_status(sdk, hashes.creation).await?,
            redeem: l2_status(sdk, hashes.redeem).await?,
            auto_redeem: l2_status(sdk, hashes.auto_redeem).await?,
        };
        tracing::info!(
            sequence_number = %seq,
            creation = %traced.creation,
            redeem = %traced.redeem,
            auto_redeem = %traced.auto_redeem,
            "Traced message"
        );
        messages.push(traced);
    }

    Ok(TraceReport {
        l1_tx_hash,
        l2_chain_id,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::contracts::IInbox;
    use crate::bridge::mock::MockBridge;
    use crate::chain::ReceiptSummary;
    use alloy::primitives::{Bytes, Log, U256};
    use alloy::sol_types::SolEvent;

    fn receipt(hash: TxHash, success: bool, logs: Vec<Log>) -> ReceiptSummary {
        ReceiptSummary {
            hash,
            block_number: Some(1),
            success,
            logs,
        }
    }

    #[tokio::test]
    async fn test_trace_reports_each_hash() {
        let mut mock = MockBridge::default();
        let l1_tx = TxHash::repeat_byte(0x77);
        let logs = vec![Log {
            address: mock.inbox.unwrap(),
            data: IInbox::InboxMessageDelivered {
                messageNum: U256::from(1),
                data: Bytes::new(),
            }
            .encode_log_data(),
        }];
        mock.receipts.insert((Layer::L1, l1_tx), receipt(l1_tx, true, logs));

        let hashes = L2MessageHashes::derive(421611, U256::from(1));
        mock.receipts
            .insert((Layer::L2, hashes.creation), receipt(hashes.creation, true, vec![]));
        mock.receipts
            .insert((Layer::L2, hashes.auto_redeem), receipt(hashes.auto_redeem, false, vec![]));

        let report = run(&mock, l1_tx).await.unwrap();
        assert_eq!(report.messages.len(), 1);
        let m = &report.messages[0];
        assert_eq!(m.creation, L2Status::Succeeded);
        assert_eq!(m.redeem, L2Status::NotFound);
        assert_eq!(m.auto_redeem, L2Status::Reverted);
        assert!(report.to_string().ends_with(&l1_tx.to_string()));
    }

    #[tokio::test]
    async fn test_unknown_l1_transaction() {
        let mock = MockBridge::default();
        let err = run(&mock, TxHash::repeat_byte(0x01)).await.unwrap_err();
        assert!(matches!(err, BridgeError::ReceiptNotFound { layer: Layer::L1, .. }));
    }

    #[tokio::test]
    async fn test_l1_transaction_without_messages() {
        let mut mock = MockBridge::default();
        let l1_tx = TxHash::repeat_byte(0x05);
        mock.receipts.insert((Layer::L1, l1_tx), receipt(l1_tx, true, vec![]));

        let err = run(&mock, l1_tx).await.unwrap_err();
        assert!(matches!(err, BridgeError::MissingSequenceNumber(h) if h == l1_tx));
    }
}
