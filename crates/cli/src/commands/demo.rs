//! End-to-end walkthrough of the library
//!
//! 1. Random key: sign and verify over raw bytes
//! 2. Solana-style 64-byte keypair: sign with the expanded secret, verify with
//!    the public half
//! 3. Fresh 12-word mnemonic and its first wallets

use super::common::derive_wallets;
use crate::config::CliConfig;
use anyhow::{anyhow, Context, Result};
use solkey_crypto::{sign, verify, Base58Encoder, Ed25519KeyPair, Mnemonic, PublicKeyEncoder};
use tracing::info;

const DEMO_MESSAGE: &[u8] = b"hello world";

/// Execute the demo command
pub fn execute(config: &CliConfig) -> Result<()> {
    let raw = raw_key_round_trip();
    println!("Raw key example verified = {}", raw);

    let expanded = keypair_bytes_round_trip()?;
    println!("Keypair bytes example verified = {}", expanded);

    let mnemonic =
        Mnemonic::generate().map_err(|e| anyhow!("Failed to generate mnemonic: {}", e))?;
    println!("Mnemonic = {}", mnemonic.phrase());

    let wallets = derive_wallets(config, &mnemonic, None, config.wallet_count)?;
    for wallet in &wallets {
        println!(
            "Wallet {} public key = {}",
            wallet.account + 1,
            Base58Encoder.encode(wallet.public_key())
        );
    }

    info!(wallets = wallets.len(), "Demo complete");
    Ok(())
}

/// Fresh random key, signed and verified through the byte-level functions
fn raw_key_round_trip() -> bool {
    let keypair = Ed25519KeyPair::generate(&mut rand::thread_rng());
    let secret = keypair.secret_key.to_bytes();
    let public = keypair.public_key.to_bytes();

    match sign(DEMO_MESSAGE, &secret[..]) {
        Ok(signature) => verify(&signature.to_bytes(), DEMO_MESSAGE, &public),
        Err(_) => false,
    }
}

/// Sign with a key rebuilt from its 64-byte `secret ‖ public` export
fn keypair_bytes_round_trip() -> Result<bool> {
    let keypair = Ed25519KeyPair::generate(&mut rand::thread_rng());
    let exported = keypair.to_keypair_bytes();

    let restored = Ed25519KeyPair::from_keypair_bytes(&exported[..])
        .context("Failed to restore keypair from its 64-byte form")?;
    let signature = restored.sign(DEMO_MESSAGE);

    Ok(keypair.public_key.verify(DEMO_MESSAGE, &signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_flows_verify() {
        assert!(raw_key_round_trip());
        assert!(keypair_bytes_round_trip().unwrap());
    }
}
