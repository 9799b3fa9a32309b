//! Bridge operations between L1 and the L2 rollup.
//!
//! # Data Flow
//! ```text
//! script
//!     → sdk.rs (BridgeSdk: balances, fees, deposits, withdrawals, waits)
//!         → contracts.rs (ABI encoding of Inbox / ArbSys / greeter calls)
//!         → chain::ChainClient (L1 and L2 nodes)
//!     ← ReceiptSummary
//!     → message.rs (sequence numbers, predicted L2 hashes)
//!     → withdrawal.rs (L2 → L1 event data)
//! ```

pub mod contracts;
pub mod fees;
pub mod message;
pub mod sdk;
pub mod withdrawal;

#[cfg(test)]
pub(crate) mod mock;

pub use fees::{RetryableFees, SubmissionPrice};
pub use message::{inbox_sequence_numbers, L2MessageHashes};
pub use sdk::{ArbBridge, BridgeSdk};
pub use withdrawal::{withdrawals_in_receipt, WithdrawalEvent};
