//! Shared input and output helpers for the wallet commands

use crate::config::CliConfig;
use anyhow::{anyhow, Context, Result};
use solkey_crypto::{Base58Encoder, Mnemonic, PublicKeyEncoder, Wallet, WalletFactory};
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// Read mnemonic from file or prompt interactively, then parse it
pub fn get_mnemonic(mnemonic_file: Option<&Path>) -> Result<Mnemonic> {
    let phrase = match mnemonic_file {
        Some(file) => read_mnemonic_from_file(file)?,
        None => prompt_mnemonic()?,
    };
    Mnemonic::from_phrase(&phrase).map_err(|e| anyhow!("Invalid mnemonic: {}", e))
}

/// Read mnemonic from a file
pub fn read_mnemonic_from_file(path: &Path) -> Result<Zeroizing<String>> {
    let content = Zeroizing::new(
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read mnemonic file: {}", path.display()))?,
    );

    let mnemonic = Zeroizing::new(content.trim().to_string());
    if mnemonic.is_empty() {
        return Err(anyhow!("Mnemonic file is empty"));
    }

    Ok(mnemonic)
}

/// Prompt for mnemonic phrase without echoing it
pub fn prompt_mnemonic() -> Result<Zeroizing<String>> {
    let mnemonic = Zeroizing::new(
        rpassword::prompt_password("Enter your mnemonic phrase (12, 15, 18, 21, or 24 words): ")
            .context("Failed to read mnemonic")?,
    );

    if mnemonic.trim().is_empty() {
        return Err(anyhow!("No mnemonic entered"));
    }

    Ok(mnemonic)
}

/// Read the optional BIP-39 passphrase
///
/// Only the trailing line break is stripped; surrounding spaces are part of
/// the passphrase. An empty file means no passphrase.
pub fn get_passphrase(passphrase_file: Option<&Path>) -> Result<Option<Zeroizing<String>>> {
    let Some(path) = passphrase_file else {
        return Ok(None);
    };

    let content = Zeroizing::new(
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read passphrase file: {}", path.display()))?,
    );
    let passphrase = content.trim_end_matches(&['\n', '\r'][..]);

    if passphrase.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Zeroizing::new(passphrase.to_string())))
    }
}

/// First `count` wallets of `mnemonic` under the configured layout
pub fn derive_wallets(
    config: &CliConfig,
    mnemonic: &Mnemonic,
    passphrase: Option<&str>,
    count: u32,
) -> Result<Vec<Wallet>> {
    let seed = mnemonic.to_seed(passphrase);
    WalletFactory::new(config.derivation.clone())
        .derive_wallet_records(&seed, count)
        .context("Wallet derivation failed")
}

/// Public wallet info as JSON (never includes secret keys)
pub fn wallets_json(wallets: &[Wallet]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = wallets
        .iter()
        .map(|wallet| {
            serde_json::json!({
                "account": wallet.account,
                "path": wallet.path.to_string(),
                "address": Base58Encoder.encode(wallet.public_key()),
            })
        })
        .collect();
    serde_json::Value::Array(entries)
}

/// Print wallets as a text table
pub fn print_wallets(wallets: &[Wallet]) {
    println!("Wallets:");
    for wallet in wallets {
        println!(
            "  {:>3}  {:<22} {}",
            wallet.account,
            wallet.path.to_string(),
            Base58Encoder.encode(wallet.public_key())
        );
    }
}

/// Display warning about mnemonic security
pub fn display_mnemonic_warning(mnemonic: &str) {
    println!();
    println!("============================================================");
    println!("                    IMPORTANT - SAVE THIS!");
    println!("============================================================");
    println!();
    println!("Your mnemonic recovery phrase:");
    println!();

    // Display words in groups of 4 for readability
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    for (i, chunk) in words.chunks(4).enumerate() {
        let start_num = i * 4 + 1;
        let formatted: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(j, word)| format!("{:2}. {:<12}", start_num + j, word))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    println!();
    println!("============================================================");
    println!("  This phrase is the ONLY way to recover these wallets.");
    println!("  Store it securely offline. Never share it with anyone.");
    println!("============================================================");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_read_mnemonic_from_file_trims() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mnemonic.txt");
        fs::write(&path, format!("\n  {}\n", TEST_MNEMONIC)).unwrap();

        assert_eq!(read_mnemonic_from_file(&path).unwrap().as_str(), TEST_MNEMONIC);
        assert_eq!(get_mnemonic(Some(&path)).unwrap().phrase(), TEST_MNEMONIC);
    }

    #[test]
    fn test_empty_mnemonic_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mnemonic.txt");
        fs::write(&path, "   \n").unwrap();

        let err = read_mnemonic_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_invalid_mnemonic_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mnemonic.txt");
        fs::write(&path, "abandon abandon abandon").unwrap();

        let err = get_mnemonic(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("Invalid mnemonic"));
    }

    #[test]
    fn test_passphrase_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("passphrase.txt");

        fs::write(&path, " TREZOR \r\n").unwrap();
        let passphrase = get_passphrase(Some(&path)).unwrap().unwrap();
        assert_eq!(passphrase.as_str(), " TREZOR ");

        fs::write(&path, "\n").unwrap();
        assert!(get_passphrase(Some(&path)).unwrap().is_none());

        assert!(get_passphrase(None).unwrap().is_none());
    }

    #[test]
    fn test_wallets_json_has_no_secrets() {
        let mnemonic = Mnemonic::from_phrase(TEST_MNEMONIC).unwrap();
        let wallets = derive_wallets(&CliConfig::default(), &mnemonic, None, 2).unwrap();

        let json = wallets_json(&wallets);
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["account"], 1);
        assert_eq!(entries[1]["path"], "m/44'/501'/1'/0'");

        let entry = entries[0].as_object().unwrap();
        assert_eq!(entry.len(), 3);
        assert!(!entry.contains_key("secret_key"));
    }
}
