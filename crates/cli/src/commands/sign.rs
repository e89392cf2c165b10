//! Message signing command implementation

use super::common::{get_mnemonic, get_passphrase};
use crate::config::CliConfig;
use anyhow::{Context, Result};
use solkey_crypto::{Base58Encoder, PublicKeyEncoder, WalletFactory};
use std::path::Path;
use tracing::info;

/// Execute the sign command
pub fn execute(
    config: &CliConfig,
    account: u32,
    message: &str,
    mnemonic_file: Option<&Path>,
    passphrase_file: Option<&Path>,
) -> Result<()> {
    let mnemonic = get_mnemonic(mnemonic_file)?;
    let passphrase = get_passphrase(passphrase_file)?;
    let seed = mnemonic.to_seed(passphrase.as_deref().map(String::as_str));

    let wallet = WalletFactory::new(config.derivation.clone())
        .derive_wallet_record(&seed, account)
        .with_context(|| format!("Failed to derive account {}", account))?;

    let signature = wallet.sign(message.as_bytes());
    info!(account, message_len = message.len(), "Signed message");

    println!("Address:   {}", Base58Encoder.encode(wallet.public_key()));
    println!("Path:      {}", wallet.path);
    println!("Signature: {}", bs58::encode(signature.to_bytes()).into_string());

    Ok(())
}
