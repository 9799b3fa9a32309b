//! Chain-specific types and error definitions.

use alloy::primitives::{Log, TxHash, U256};
use alloy::rpc::types::TransactionReceipt;
use thiserror::Error;

pub use crate::config::schema::ChainConfig;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

/// Which side of the bridge an operation talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    L1,
    L2,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::L1 => f.write_str("L1"),
            Layer::L2 => f.write_str("L2"),
        }
    }
}

/// Errors that can occur while driving the bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Counterpart transaction did not show up before the deadline.
    #[error("Transaction {hash} not seen on {layer} after {secs} seconds")]
    WaitTimeout { layer: Layer, hash: TxHash, secs: u64 },

    /// Transaction was reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(TxHash),

    /// Invalid private key format or signing error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Chain configuration mismatch.
    #[error("{layer} chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { layer: Layer, expected: u64, actual: u64 },

    /// A setting the script needs is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Contract call returned data that could not be decoded.
    #[error("Contract error: {0}")]
    Contract(String),

    /// A receipt the script depends on does not exist.
    #[error("No {layer} receipt for transaction {hash}")]
    ReceiptNotFound { layer: Layer, hash: TxHash },

    /// The L1 receipt carried no Inbox message.
    #[error("No inbox sequence number found in L1 transaction {0}")]
    MissingSequenceNumber(TxHash),

    /// The L2 receipt carried no withdrawal event.
    #[error("No withdrawal event found in L2 transaction {0}")]
    MissingWithdrawal(TxHash),

    /// Balance guard tripped before sending anything.
    #[error("Insufficient {layer} balance: have {balance} wei, need {required} wei")]
    InsufficientBalance { layer: Layer, balance: U256, required: U256 },

    /// Fee arithmetic left the U256 range.
    #[error("Fee computation overflowed")]
    FeeOverflow,
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// The parts of a transaction receipt the scripts look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptSummary {
    pub hash: TxHash,
    pub block_number: Option<u64>,
    pub success: bool,
    /// Logs in emission order, stripped of block metadata.
    pub logs: Vec<Log>,
}

impl ReceiptSummary {
    /// Turn a reverted receipt into an error.
    pub fn ensure_success(self) -> BridgeResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(BridgeError::Reverted(self.hash))
        }
    }
}

impl From<&TransactionReceipt> for ReceiptSummary {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            success: receipt.status(),
            logs: receipt
                .inner
                .logs()
                .iter()
                .map(|log| log.inner.clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BridgeError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = BridgeError::InsufficientBalance {
            layer: Layer::L2,
            balance: U256::from(5),
            required: U256::from(6),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient L2 balance: have 5 wei, need 6 wei"
        );

        let err = BridgeError::ChainMismatch {
            layer: Layer::L1,
            expected: 1,
            actual: 5,
        };
        assert!(err.to_string().starts_with("L1 chain ID mismatch"));
    }

    #[test]
    fn test_reverted_receipt() {
        let receipt = ReceiptSummary {
            hash: TxHash::repeat_byte(0xab),
            block_number: Some(7),
            success: false,
            logs: Vec::new(),
        };
        let err = receipt.ensure_success().unwrap_err();
        assert!(matches!(err, BridgeError::Reverted(h) if h == TxHash::repeat_byte(0xab)));
    }
}
