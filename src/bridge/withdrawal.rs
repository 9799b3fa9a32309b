//! Withdrawal (L2 → L1) event data.

use alloy::primitives::{Address, Bytes, Log, U256};
use alloy::sol_types::SolEvent;
use serde::{Deserialize, Serialize};

use crate::bridge::contracts::{IArbSys, ARB_SYS_ADDRESS};

/// An outgoing L2 → L1 message as recorded by ArbSys.
///
/// `batch_number` and `index_in_batch` locate the message in the Outbox once
/// its batch is confirmed on L1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalEvent {
    pub caller: Address,
    pub destination: Address,
    pub unique_id: U256,
    pub batch_number: U256,
    pub index_in_batch: U256,
    pub arb_block_num: U256,
    pub eth_block_num: U256,
    pub timestamp: U256,
    /// Wei carried to L1.
    pub callvalue: U256,
    pub data: Bytes,
}

impl From<IArbSys::L2ToL1Transaction> for WithdrawalEvent {
    fn from(event: IArbSys::L2ToL1Transaction) -> Self {
        Self {
            caller: event.caller,
            destination: event.destination,
            unique_id: event.uniqueId,
            batch_number: event.batchNumber,
            index_in_batch: event.indexInBatch,
            arb_block_num: event.arbBlockNum,
            eth_block_num: event.ethBlockNum,
            timestamp: event.timestamp,
            callvalue: event.callvalue,
            data: event.data,
        }
    }
}

/// Withdrawals emitted by ArbSys in an L2 receipt, in log order.
pub fn withdrawals_in_receipt(logs: &[Log]) -> Vec<WithdrawalEvent> {
    logs.iter()
        .filter(|log| log.address == ARB_SYS_ADDRESS)
        .filter(|log| log.topics().first() == Some(&IArbSys::L2ToL1Transaction::SIGNATURE_HASH))
        .filter_map(|log| IArbSys::L2ToL1Transaction::decode_log_data(&log.data).ok())
        .map(WithdrawalEvent::from)
        .collect()
}
