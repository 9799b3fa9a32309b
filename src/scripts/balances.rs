//! Signer balances on both layers.

use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::bridge::BridgeSdk;
use crate::chain::{BridgeResult, Layer};
use crate::scripts::eth;

#[derive(Debug, Clone, Serialize)]
pub struct BalancesReport {
    pub wallet: Address,
    pub l1: U256,
    pub l2: U256,
}

impl std::fmt::Display for BalancesReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Wallet: {}", self.wallet)?;
        writeln!(f, "L1:     {}", eth(self.l1))?;
        write!(f, "L2:     {}", eth(self.l2))
    }
}

pub async fn run<S: BridgeSdk>(sdk: &S) -> BridgeResult<BalancesReport> {
    let wallet = sdk.signer()?;
    let l1 = sdk.balance(Layer::L1, wallet).await?;
    let l2 = sdk.balance(Layer::L2, wallet).await?;
    Ok(BalancesReport { wallet, l1, l2 })
}
