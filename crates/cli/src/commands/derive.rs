//! Wallet derivation command implementation
//!
//! Recovers wallets from an existing mnemonic phrase.

use super::common::{derive_wallets, get_mnemonic, get_passphrase, print_wallets, wallets_json};
use crate::config::CliConfig;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Execute the derive command
pub fn execute(
    config: &CliConfig,
    mnemonic_file: Option<&Path>,
    passphrase_file: Option<&Path>,
    wallet_count: u32,
    json: bool,
) -> Result<()> {
    let mnemonic = get_mnemonic(mnemonic_file)?;
    let passphrase = get_passphrase(passphrase_file)?;

    let wallets = derive_wallets(
        config,
        &mnemonic,
        passphrase.as_deref().map(String::as_str),
        wallet_count,
    )?;
    info!(wallet_count, "Derived wallets");

    if json {
        println!("{}", serde_json::to_string_pretty(&wallets_json(&wallets))?);
    } else {
        print_wallets(&wallets);
    }

    Ok(())
}
