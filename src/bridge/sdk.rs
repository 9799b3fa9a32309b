//! The bridge operations the scripts are written against.
//!
//! `BridgeSdk` is the seam between the linear scripts and the chains: the
//! scripts only sequence calls and do arithmetic, everything that touches a
//! node goes through this trait. `ArbBridge` implements it over a pair of
//! alloy-backed `ChainClient`s sharing one signer.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::sol_types::SolCall;
use std::future::Future;
use std::time::Duration;

use crate::bridge::contracts::{IArbRetryableTx, IArbSys, IInbox, ARB_RETRYABLE_TX_ADDRESS, ARB_SYS_ADDRESS};
use crate::bridge::fees::SubmissionPrice;
use crate::chain::{
    wait_for_transaction, BridgeError, BridgeResult, ChainClient, Layer, ReceiptSummary, WaitPolicy, Wallet,
};
use crate::config::BridgeConfig;

/// Dual-chain operations consumed by the scripts.
pub trait BridgeSdk: Send + Sync {
    /// Address of the signing account, identical on both layers.
    fn signer(&self) -> BridgeResult<Address>;

    /// Chain id of the L2, used for hash prediction.
    fn l2_chain_id(&self) -> u64;

    /// The configured Inbox, if any.
    fn inbox(&self) -> Option<Address>;

    fn balance(&self, layer: Layer, who: Address) -> impl Future<Output = BridgeResult<U256>> + Send;

    /// Current L2 gas price, used as the ticket's gas price bid.
    fn l2_gas_price(&self) -> impl Future<Output = BridgeResult<U256>> + Send;

    /// Quote the submission price for `calldata_len` bytes of L2 calldata.
    fn submission_price(
        &self,
        calldata_len: usize,
    ) -> impl Future<Output = BridgeResult<SubmissionPrice>> + Send;

    /// `Inbox.depositEth` on L1; resolves to the mined L1 receipt.
    fn deposit_eth(
        &self,
        amount: U256,
        max_submission_cost: U256,
    ) -> impl Future<Output = BridgeResult<ReceiptSummary>> + Send;

    /// `ArbSys.withdrawEth` on L2; resolves to the mined L2 receipt.
    fn withdraw_eth(
        &self,
        destination: Address,
        amount: U256,
    ) -> impl Future<Output = BridgeResult<ReceiptSummary>> + Send;

    /// Send an arbitrary contract call on L1.
    fn send_l1(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> impl Future<Output = BridgeResult<ReceiptSummary>> + Send;

    /// Read-only call on L2.
    fn call_l2(&self, to: Address, data: Bytes) -> impl Future<Output = BridgeResult<Bytes>> + Send;

    /// Receipt lookup without waiting.
    fn receipt(
        &self,
        layer: Layer,
        hash: TxHash,
    ) -> impl Future<Output = BridgeResult<Option<ReceiptSummary>>> + Send;

    /// Block until `hash` is included on L2. `timeout` overrides the
    /// configured deadline.
    fn wait_for_l2_transaction(
        &self,
        hash: TxHash,
        timeout: Option<Duration>,
    ) -> impl Future<Output = BridgeResult<ReceiptSummary>> + Send;
}

/// Arbitrum bridge over live L1 and L2 nodes.
#[derive(Debug, Clone)]
pub struct ArbBridge {
    l1: ChainClient,
    l2: ChainClient,
    wallet: Option<Wallet>,
    inbox: Option<Address>,
    l2_chain_id: u64,
    wait: WaitPolicy,
}

impl ArbBridge {
    /// Connect both layers.
    ///
    /// Without a wallet the bridge is read-only and every state-changing
    /// operation fails with a wallet error.
    pub async fn connect(config: &BridgeConfig, wallet: Option<Wallet>) -> BridgeResult<Self> {
        let wait = WaitPolicy::from_config(&config.wait, None);

        let l1 = ChainClient::connect(Layer::L1, config.l1.clone(), wallet.as_ref(), wait.timeout).await?;
        let l2 = ChainClient::connect(Layer::L2, config.l2.clone(), wallet.as_ref(), wait.timeout).await?;

        let l2_chain_id = match config.l2.chain_id {
            Some(id) => id,
            None => l2.get_chain_id().await?.0,
        };

        let inbox = parse_optional_address("bridge.inbox_address", &config.bridge.inbox_address)?;

        tracing::info!(l2_chain_id, inbox = ?inbox, "Bridge connected");

        Ok(Self {
            l1,
            l2,
            wallet,
            inbox,
            l2_chain_id,
            wait,
        })
    }

    fn require_inbox(&self) -> BridgeResult<Address> {
        self.inbox.ok_or_else(|| {
            BridgeError::Config("bridge.inbox_address (INBOX_ADDRESS) is required".to_string())
        })
    }

    fn client(&self, layer: Layer) -> &ChainClient {
        match layer {
            Layer::L1 => &self.l1,
            Layer::L2 => &self.l2,
        }
    }
}

impl BridgeSdk for ArbBridge {
    fn signer(&self) -> BridgeResult<Address> {
        self.wallet.as_ref().map(Wallet::address).ok_or_else(|| {
            BridgeError::Wallet(format!(
                "Environment variable {} not set",
                crate::chain::wallet::PRIVATE_KEY_ENV_VAR
            ))
        })
    }

    fn l2_chain_id(&self) -> u64 {
        self.l2_chain_id
    }

    fn inbox(&self) -> Option<Address> {
        self.inbox
    }

    async fn balance(&self, layer: Layer, who: Address) -> BridgeResult<U256> {
        self.client(layer).get_balance(who).await
    }

    async fn l2_gas_price(&self) -> BridgeResult<U256> {
        self.l2.get_gas_price().await.map(U256::from)
    }

    async fn submission_price(&self, calldata_len: usize) -> BridgeResult<SubmissionPrice> {
        let call = IArbRetryableTx::getSubmissionPriceCall {
            calldataSize: U256::from(calldata_len),
        };
        let output = self
            .l2
            .call(ARB_RETRYABLE_TX_ADDRESS, call.abi_encode().into())
            .await?;
        let ret = IArbRetryableTx::getSubmissionPriceCall::abi_decode_returns(&output)
            .map_err(|e| BridgeError::Contract(format!("getSubmissionPrice: {}", e)))?;

        Ok(SubmissionPrice {
            price: ret.price,
            next_update_timestamp: ret.nextUpdateTimestamp,
        })
    }

    async fn deposit_eth(&self, amount: U256, max_submission_cost: U256) -> BridgeResult<ReceiptSummary> {
        self.signer()?;
        let inbox = self.require_inbox()?;
        let call = IInbox::depositEthCall {
            maxSubmissionCost: max_submission_cost,
        };
        self.l1.send_transaction(inbox, amount, call.abi_encode().into()).await
    }

    async fn withdraw_eth(&self, destination: Address, amount: U256) -> BridgeResult<ReceiptSummary> {
        self.signer()?;
        let call = IArbSys::withdrawEthCall { destination };
        self.l2
            .send_transaction(ARB_SYS_ADDRESS, amount, call.abi_encode().into())
            .await
    }

    async fn send_l1(&self, to: Address, value: U256, data: Bytes) -> BridgeResult<ReceiptSummary> {
        self.signer()?;
        self.l1.send_transaction(to, value, data).await
    }

    async fn call_l2(&self, to: Address, data: Bytes) -> BridgeResult<Bytes> {
        self.l2.call(to, data).await
    }

    async fn receipt(&self, layer: Layer, hash: TxHash) -> BridgeResult<Option<ReceiptSummary>> {
        self.client(layer).get_transaction_receipt(hash).await
    }

    async fn wait_for_l2_transaction(
        &self,
        hash: TxHash,
        timeout: Option<Duration>,
    ) -> BridgeResult<ReceiptSummary> {
        let mut policy = self.wait.clone();
        if let Some(timeout) = timeout {
            policy.timeout = timeout;
        }
        wait_for_transaction(&self.l2, hash, &policy).await
    }
}

/// Parse an address setting that may be left empty.
pub fn parse_optional_address(field: &str, value: &str) -> BridgeResult<Option<Address>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e| BridgeError::Config(format!("{}: invalid address '{}': {}", field, value, e)))
}

/// Parse an address setting that the running script cannot do without.
pub fn parse_required_address(field: &str, value: &str) -> BridgeResult<Address> {
    parse_optional_address(field, value)?
        .ok_or_else(|| BridgeError::Config(format!("{} is required", field)))
}
