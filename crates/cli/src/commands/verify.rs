//! Signature verification command implementation

use anyhow::{anyhow, Result};
use solkey_crypto::{Base58Encoder, PublicKeyEncoder};
use tracing::debug;

/// Execute the verify command
///
/// Malformed base58 is an error; a well-formed signature that does not match
/// is `Ok(false)`.
pub fn execute(pubkey: &str, message: &str, signature: &str) -> Result<bool> {
    let valid = check(pubkey, message, signature)?;
    debug!(valid, "Verified signature");

    if valid {
        println!("Signature is valid");
    } else {
        println!("Signature is INVALID");
    }

    Ok(valid)
}

fn check(pubkey: &str, message: &str, signature: &str) -> Result<bool> {
    let pubkey = Base58Encoder
        .decode(pubkey)
        .map_err(|e| anyhow!("Invalid public key: {}", e))?;
    let signature = bs58::decode(signature)
        .into_vec()
        .map_err(|e| anyhow!("Invalid signature encoding: {}", e))?;

    Ok(solkey_crypto::verify(
        &signature,
        message.as_bytes(),
        &pubkey.to_bytes(),
    ))
}
