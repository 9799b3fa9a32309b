//! Solidity bindings for the rollup contracts, precompiles and the greeter pair.

use alloy::primitives::{address, Address};
use alloy::sol;

/// ArbSys precompile, present at the same address on every Arbitrum chain.
pub const ARB_SYS_ADDRESS: Address = address!("0000000000000000000000000000000000000064");

/// ArbRetryableTx precompile.
pub const ARB_RETRYABLE_TX_ADDRESS: Address = address!("000000000000000000000000000000000000006E");

sol! {
    /// Rollup Inbox on L1.
    interface IInbox {
        function depositEth(uint256 maxSubmissionCost) external payable returns (uint256);

        /// Emitted for every message queued for L2.
        event InboxMessageDelivered(uint256 indexed messageNum, bytes data);

        /// Emitted for messages whose data is taken from the origin calldata.
        event InboxMessageDeliveredFromOrigin(uint256 indexed messageNum);
    }

    /// L2 system precompile.
    interface IArbSys {
        function withdrawEth(address destination) external payable returns (uint256);

        event L2ToL1Transaction(
            address caller,
            address indexed destination,
            uint256 indexed uniqueId,
            uint256 indexed batchNumber,
            uint256 indexInBatch,
            uint256 arbBlockNum,
            uint256 ethBlockNum,
            uint256 timestamp,
            uint256 callvalue,
            bytes data
        );
    }

    /// L2 precompile pricing retryable ticket submission.
    interface IArbRetryableTx {
        function getSubmissionPrice(uint256 calldataSize)
            external
            view
            returns (uint256 price, uint256 nextUpdateTimestamp);
    }

    /// L1 side of the greeter pair: forwards a greeting as a retryable ticket.
    interface IGreeterL1 {
        function setGreetingInL2(
            string memory _greeting,
            uint256 maxSubmissionCost,
            uint256 maxGas,
            uint256 gasPriceBid
        ) external payable returns (uint256);
    }

    /// L2 side of the greeter pair.
    interface IGreeterL2 {
        function greet() external view returns (string memory);
    }
}
