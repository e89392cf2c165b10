//! CLI configuration file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solkey_crypto::DerivationConfig;
use std::path::Path;

/// Default number of wallets listed by `generate` and `derive`
pub const DEFAULT_WALLET_COUNT: u32 = 4;

/// Default mnemonic length for `generate`
pub const DEFAULT_WORD_COUNT: usize = 12;

/// Settings loaded from `--config`; flags on the command line win
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// BIP-44 branch wallets are derived under
    pub derivation: DerivationConfig,
    /// Wallets to list when `--count` is not given
    pub wallet_count: u32,
    /// Mnemonic length when `--words` is not given
    pub word_count: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            derivation: DerivationConfig::default(),
            wallet_count: DEFAULT_WALLET_COUNT,
            word_count: DEFAULT_WORD_COUNT,
        }
    }
}

impl CliConfig {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// File config if a path was given, defaults otherwise
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn wallet_count(&self, flag: Option<u32>) -> u32 {
        flag.unwrap_or(self.wallet_count)
    }

    pub fn word_count(&self, flag: Option<usize>) -> usize {
        flag.unwrap_or(self.word_count)
    }
}
