//! In-memory `BridgeSdk` for exercising the scripts without nodes.

use alloy::primitives::{Address, Bytes, Log, TxHash, U256};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::bridge::fees::SubmissionPrice;
use crate::bridge::sdk::BridgeSdk;
use crate::chain::{BridgeError, BridgeResult, Layer, ReceiptSummary};

/// A call the scripts made, recorded in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Balance(Layer, Address),
    GasPrice,
    SubmissionPrice(usize),
    Deposit { amount: U256, max_submission_cost: U256 },
    Withdraw { destination: Address, amount: U256 },
    SendL1 { to: Address, value: U256, data: Bytes },
    CallL2 { to: Address, data: Bytes },
    Receipt(Layer, TxHash),
    Wait { hash: TxHash, timeout: Option<Duration> },
}

#[derive(Debug)]
pub struct MockBridge {
    pub signer: Address,
    pub l2_chain_id: u64,
    pub inbox: Option<Address>,
    /// Balances handed out in order; the last one repeats.
    pub l1_balances: Vec<U256>,
    pub l2_balances: Vec<U256>,
    pub gas_price: U256,
    pub submission_price: SubmissionPrice,
    /// Logs placed in the receipt of any transaction the scripts send.
    pub l1_logs: Vec<Log>,
    pub l2_logs: Vec<Log>,
    pub l1_tx_hash: TxHash,
    pub l2_tx_hash: TxHash,
    /// Raw outputs of `call_l2`, handed out in order; the last one repeats.
    pub l2_call_outputs: Vec<Bytes>,
    /// Receipts visible to `receipt` lookups.
    pub receipts: HashMap<(Layer, TxHash), ReceiptSummary>,
    /// When set, waiting fails with a timeout.
    pub wait_times_out: bool,
    pub calls: Mutex<Vec<MockCall>>,
}

impl Default for MockBridge {
    fn default() -> Self {
        Self {
            signer: Address::repeat_byte(0xaa),
            l2_chain_id: 421611,
            inbox: Some(Address::repeat_byte(0x11)),
            l1_balances: vec![U256::from(1_000_000_000_000_000_000u64)],
            l2_balances: vec![U256::from(1_000_000_000_000_000_000u64)],
            gas_price: U256::from(1_000_000_000u64),
            submission_price: SubmissionPrice {
                price: U256::from(3_000_000_000_000u64),
                next_update_timestamp: U256::from(1_700_000_000u64),
            },
            l1_logs: Vec::new(),
            l2_logs: Vec::new(),
            l1_tx_hash: TxHash::repeat_byte(0x01),
            l2_tx_hash: TxHash::repeat_byte(0x02),
            l2_call_outputs: Vec::new(),
            receipts: HashMap::new(),
            wait_times_out: false,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockBridge {
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn count(&self, pred: impl Fn(&MockCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn nth_or_last<T: Clone>(items: &[T], n: usize) -> Option<T> {
        items.get(n).or_else(|| items.last()).cloned()
    }

    fn receipt_for(hash: TxHash, logs: &[Log]) -> ReceiptSummary {
        ReceiptSummary {
            hash,
            block_number: Some(100),
            success: true,
            logs: logs.to_vec(),
        }
    }
}

impl BridgeSdk for MockBridge {
    fn signer(&self) -> BridgeResult<Address> {
        Ok(self.signer)
    }

    fn l2_chain_id(&self) -> u64 {
        self.l2_chain_id
    }

    fn inbox(&self) -> Option<Address> {
        self.inbox
    }

    async fn balance(&self, layer: Layer, who: Address) -> BridgeResult<U256> {
        let n = self.count(|c| matches!(c, MockCall::Balance(l, _) if *l == layer));
        self.record(MockCall::Balance(layer, who));
        let balances = match layer {
            Layer::L1 => &self.l1_balances,
            Layer::L2 => &self.l2_balances,
        };
        Self::nth_or_last(balances, n).ok_or_else(|| BridgeError::Rpc("no balance".into()))
    }

    async fn l2_gas_price(&self) -> BridgeResult<U256> {
        self.record(MockCall::GasPrice);
        Ok(self.gas_price)
    }

    async fn submission_price(&self, calldata_len: usize) -> BridgeResult<SubmissionPrice> {
        self.record(MockCall::SubmissionPrice(calldata_len));
        Ok(self.submission_price)
    }

    async fn deposit_eth(&self, amount: U256, max_submission_cost: U256) -> BridgeResult<ReceiptSummary> {
        self.record(MockCall::Deposit {
            amount,
            max_submission_cost,
        });
        Ok(Self::receipt_for(self.l1_tx_hash, &self.l1_logs))
    }

    async fn withdraw_eth(&self, destination: Address, amount: U256) -> BridgeResult<ReceiptSummary> {
        self.record(MockCall::Withdraw { destination, amount });
        Ok(Self::receipt_for(self.l2_tx_hash, &self.l2_logs))
    }

    async fn send_l1(&self, to: Address, value: U256, data: Bytes) -> BridgeResult<ReceiptSummary> {
        self.record(MockCall::SendL1 { to, value, data });
        Ok(Self::receipt_for(self.l1_tx_hash, &self.l1_logs))
    }

    async fn call_l2(&self, to: Address, data: Bytes) -> BridgeResult<Bytes> {
        let n = self.count(|c| matches!(c, MockCall::CallL2 { .. }));
        self.record(MockCall::CallL2 { to, data });
        Self::nth_or_last(&self.l2_call_outputs, n)
            .ok_or_else(|| BridgeError::Rpc("no call output".into()))
    }

    async fn receipt(&self, layer: Layer, hash: TxHash) -> BridgeResult<Option<ReceiptSummary>> {
        self.record(MockCall::Receipt(layer, hash));
        Ok(self.receipts.get(&(layer, hash)).cloned())
    }

    async fn wait_for_l2_transaction(
        &self,
        hash: TxHash,
        timeout: Option<Duration>,
    ) -> BridgeResult<ReceiptSummary> {
        self.record(MockCall::Wait { hash, timeout });
        if self.wait_times_out {
            return Err(BridgeError::WaitTimeout {
                layer: Layer::L2,
                hash,
                secs: timeout.map(|t| t.as_secs()).unwrap_or(720),
            });
        }
        Ok(Self::receipt_for(hash, &[]))
    }
}
