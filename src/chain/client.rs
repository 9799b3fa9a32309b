//! Chain RPC client with timeout and failover handling.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint (plus failovers) for one layer
//! - Query chain state (chain id, block number, balances, receipts, gas price)
//! - Execute read-only contract calls
//! - Submit signed transactions and wait for their receipts
//! - Handle timeouts and network errors gracefully

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::TransportResult;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::chain::types::{BridgeError, BridgeResult, ChainConfig, ChainId, Layer, ReceiptSummary};
use crate::chain::wallet::Wallet;

type DynProvider = Arc<dyn Provider + Send + Sync>;

/// RPC client for one side of the bridge.
#[derive(Clone)]
pub struct ChainClient {
    layer: Layer,
    /// List of providers (primary + failovers).
    providers: Vec<DynProvider>,
    config: ChainConfig,
    /// Per-request timeout.
    timeout_duration: Duration,
    /// Upper bound on waiting for a receipt of our own transaction.
    receipt_timeout: Duration,
}

impl ChainClient {
    /// Connect to the configured endpoints.
    ///
    /// With a wallet the providers sign and fill (nonce, gas, chain id)
    /// outgoing transactions; without one the client is read-only.
    pub async fn connect(
        layer: Layer,
        config: ChainConfig,
        wallet: Option<&Wallet>,
        receipt_timeout: Duration,
    ) -> BridgeResult<Self> {
        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);
        let mut providers = Vec::new();

        let primary_url: url::Url = config.rpc_url.parse().map_err(|e| {
            BridgeError::Rpc(format!("Invalid {} RPC URL '{}': {}", layer, config.rpc_url, e))
        })?;
        providers.push(build_provider(primary_url, wallet));

        for url_str in &config.failover_urls {
            if let Ok(url) = url_str.parse() {
                providers.push(build_provider(url, wallet));
            } else {
                tracing::warn!(%layer, url = %url_str, "Ignoring invalid failover RPC URL");
            }
        }

        let client = Self {
            layer,
            providers,
            config,
            timeout_duration,
            receipt_timeout,
        };

        if let Some(expected) = client.config.chain_id {
            client.verify_chain_id(expected).await?;
        }

        tracing::info!(
            %layer,
            rpc_url = %client.config.rpc_url,
            failovers = client.providers.len() - 1,
            signing = wallet.is_some(),
            "Chain client initialized"
        );

        Ok(client)
    }

    /// Verify the connected chain ID matches the expected one.
    pub async fn verify_chain_id(&self, expected: u64) -> BridgeResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != expected {
            return Err(BridgeError::ChainMismatch {
                layer: self.layer,
                expected,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Run a read-only request against each provider until one answers.
    async fn with_failover<T, F, Fut>(&self, op: &'static str, f: F) -> BridgeResult<T>
    where
        F: Fn(DynProvider) -> Fut,
        Fut: Future<Output = TransportResult<T>>,
    {
        let layer = self.layer;
        for (i, provider) in self.providers.iter().enumerate() {
            match timeout(self.timeout_duration, f(provider.clone())).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => {
                    tracing::warn!(%layer, provider_idx = i, op, error = %e, "RPC error, trying next provider");
                }
                Err(_) => {
                    tracing::warn!(%layer, provider_idx = i, op, "RPC timeout, trying next provider");
                }
            }
        }
        Err(BridgeError::Rpc(format!(
            "All {} RPC providers failed: {}",
            layer, op
        )))
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BridgeResult<ChainId> {
        self.with_failover("eth_chainId", |p| async move { p.get_chain_id().await })
            .await
            .map(ChainId)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BridgeResult<u64> {
        self.with_failover("eth_blockNumber", |p| async move { p.get_block_number().await })
            .await
    }

    /// Get the balance of an address.
    pub async fn get_balance(&self, address: Address) -> BridgeResult<U256> {
        self.with_failover("eth_getBalance", |p| async move { p.get_balance(address).await })
            .await
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> BridgeResult<u128> {
        self.with_failover("eth_gasPrice", |p| async move { p.get_gas_price().await })
            .await
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> BridgeResult<Option<ReceiptSummary>> {
        let receipt = self
            .with_failover("eth_getTransactionReceipt", |p| async move {
                p.get_transaction_receipt(tx_hash).await
            })
            .await?;
        Ok(receipt.as_ref().map(ReceiptSummary::from))
    }

    /// Execute a read-only contract call and return the raw output.
    pub async fn call(&self, to: Address, data: Bytes) -> BridgeResult<Bytes> {
        let request = TransactionRequest::default().with_to(to).with_input(data);
        self.with_failover("eth_call", |p| {
            let request = request.clone();
            async move { p.call(request).await }
        })
        .await
    }

    /// Sign, broadcast and wait for the receipt of a transaction.
    ///
    /// Only the primary provider is used; a resend through a failover could
    /// submit the same intent twice.
    pub async fn send_transaction(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> BridgeResult<ReceiptSummary> {
        let layer = self.layer;
        let request = TransactionRequest::default()
            .with_to(to)
            .with_value(value)
            .with_input(data);

        let pending = timeout(self.timeout_duration, self.provider().send_transaction(request))
            .await
            .map_err(|_| BridgeError::Timeout(self.config.rpc_timeout_secs))?
            .map_err(|e| BridgeError::Rpc(format!("{} send failed: {}", layer, e)))?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(%layer, tx_hash = %tx_hash, to = %to, value = %value, "Transaction submitted");

        let receipt = pending
            .with_timeout(Some(self.receipt_timeout))
            .get_receipt()
            .await
            .map_err(|e| BridgeError::Rpc(format!("{} receipt for {} failed: {}", layer, tx_hash, e)))?;

        let summary = ReceiptSummary::from(&receipt);
        tracing::info!(
            %layer,
            tx_hash = %summary.hash,
            block_number = ?summary.block_number,
            success = summary.success,
            "Transaction mined"
        );
        Ok(summary)
    }

    /// Get the underlying primary provider.
    pub fn provider(&self) -> &(dyn Provider + Send + Sync) {
        self.providers[0].as_ref()
    }

    /// Which layer this client talks to.
    pub fn layer(&self) -> Layer {
        self.layer
    }
}

fn build_provider(url: url::Url, wallet: Option<&Wallet>) -> DynProvider {
    match wallet {
        Some(wallet) => Arc::new(
            ProviderBuilder::new()
                .wallet(wallet.ethereum_wallet())
                .connect_http(url),
        ),
        None => Arc::new(ProviderBuilder::new().connect_http(url)),
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("layer", &self.layer)
            .field("rpc_url", &self.config.rpc_url)
            .field("providers", &self.providers.len())
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> ChainConfig {
        ChainConfig {
            // Nothing listens on port 9 (discard) in CI.
            rpc_url: "http://127.0.0.1:9".to_string(),
            failover_urls: Vec::new(),
            chain_id: None,
            rpc_timeout_secs: 2,
        }
    }

    #[tokio::test]
    async fn test_connect_without_chain_check() {
        // No chain id configured: connecting never touches the network.
        let result =
            ChainClient::connect(Layer::L2, unreachable_config(), None, Duration::from_secs(5)).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().layer(), Layer::L2);
    }

    #[tokio::test]
    async fn test_rpc_failover_exhausted() {
        let mut config = unreachable_config();
        config.failover_urls.push("http://127.0.0.1:10".to_string());
        config.failover_urls.push("not a url".to_string());

        let client = ChainClient::connect(Layer::L1, config, None, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(client.providers.len(), 2);

        let result = client.get_chain_id().await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("All L1 RPC providers failed"));
    }

    #[tokio::test]
    async fn test_chain_check_fails_when_unreachable() {
        let mut config = unreachable_config();
        config.chain_id = Some(1);
        let result = ChainClient::connect(Layer::L1, config, None, Duration::from_secs(5)).await;
        assert!(matches!(result, Err(BridgeError::Rpc(_))));
    }
}
