//! Wallet derivation layout

use crate::hd::{DerivationPath, DerivationResult, BIP44_PURPOSE, SOLANA_COIN_TYPE};
use serde::{Deserialize, Serialize};

/// Which BIP-44 branch wallets are derived under
///
/// Account `n` lives at `m/<purpose>'/<coin_type>'/<n>'/<change>'`. Missing
/// fields deserialize to the Solana layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivationConfig {
    /// BIP-44 purpose (default: 44)
    pub purpose: u32,
    /// SLIP-0044 coin type (default: 501)
    pub coin_type: u32,
    /// Change level (default: 0)
    pub change: u32,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self::solana()
    }
}

impl DerivationConfig {
    /// `m/44'/501'/<account>'/0'`
    pub fn solana() -> Self {
        Self {
            purpose: BIP44_PURPOSE,
            coin_type: SOLANA_COIN_TYPE,
            change: 0,
        }
    }

    /// Set the coin type
    pub fn with_coin_type(mut self, coin_type: u32) -> Self {
        self.coin_type = coin_type;
        self
    }

    /// Set the change level
    pub fn with_change(mut self, change: u32) -> Self {
        self.change = change;
        self
    }

    /// Path for `account`
    pub fn path(&self, account: u32) -> DerivationResult<DerivationPath> {
        DerivationPath::bip44(self.purpose, self.coin_type, account, self.change)
    }

    /// Path shared by every account, `m/<purpose>'/<coin_type>'`
    pub fn account_parent(&self) -> DerivationResult<DerivationPath> {
        DerivationPath::new(vec![self.purpose, self.coin_type])
    }
}
