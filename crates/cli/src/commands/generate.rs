//! Mnemonic generation command implementation

use super::common::{
    derive_wallets, display_mnemonic_warning, get_passphrase, print_wallets, wallets_json,
};
use crate::config::CliConfig;
use anyhow::{anyhow, Result};
use solkey_crypto::Mnemonic;
use std::path::Path;
use tracing::info;

/// Execute the generate command
pub fn execute(
    config: &CliConfig,
    word_count: usize,
    wallet_count: u32,
    passphrase_file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mnemonic = Mnemonic::generate_with_word_count(word_count)
        .map_err(|e| anyhow!("Failed to generate mnemonic: {}", e))?;
    let passphrase = get_passphrase(passphrase_file)?;

    let wallets = derive_wallets(
        config,
        &mnemonic,
        passphrase.as_deref().map(String::as_str),
        wallet_count,
    )?;
    info!(word_count, wallet_count, "Generated mnemonic and wallets");

    if json {
        let output = serde_json::json!({
            "mnemonic": mnemonic.phrase(),
            "word_count": mnemonic.word_count(),
            "passphrase": passphrase.is_some(),
            "wallets": wallets_json(&wallets),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    // This is the only time the phrase is shown
    display_mnemonic_warning(mnemonic.phrase());
    if passphrase.is_some() {
        println!("A BIP-39 passphrase was applied; it is required to recover these wallets.");
        println!();
    }
    print_wallets(&wallets);

    Ok(())
}
