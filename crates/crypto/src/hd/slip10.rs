//! SLIP-0010 extended keys for Ed25519
//!
//! ```text
//! master:  I = HMAC-SHA512(key = "ed25519 seed", data = seed)
//! child:   I = HMAC-SHA512(key = parent.chain_code,
//!                          data = 0x00 || parent.key || ser32(index | 2^31))
//! key = I[..32], chain_code = I[32..]
//! ```
//!
//! Only hardened children exist for this curve; there is no public-key
//! derivation.

use super::error::{DerivationError, DerivationResult};
use super::path::DerivationPath;
use super::HARDENED_OFFSET;
use crate::ed25519::{Ed25519KeyPair, Ed25519PublicKey};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use subtle::ConstantTimeEq;
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha512 = Hmac<Sha512>;

/// SLIP-0010 master key HMAC key for the ed25519 curve
const ED25519_CURVE_SEED: &[u8] = b"ed25519 seed";

/// Smallest accepted seed (128 bits)
pub const MIN_SEED_LENGTH: usize = 16;

/// Largest accepted seed (512 bits)
pub const MAX_SEED_LENGTH: usize = 64;

/// A 32-byte private key and its 32-byte chain code
///
/// Each derivation step returns a fresh value; nothing is mutated in place.
/// Both halves are zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    /// Master extended key for `seed`
    ///
    /// # Errors
    ///
    /// [`DerivationError::InvalidSeedLength`] unless the seed is 16 to 64 bytes.
    pub fn master(seed: &[u8]) -> DerivationResult<Self> {
        if !(MIN_SEED_LENGTH..=MAX_SEED_LENGTH).contains(&seed.len()) {
            return Err(DerivationError::InvalidSeedLength(seed.len()));
        }

        let mut mac =
            HmacSha512::new_from_slice(ED25519_CURVE_SEED).map_err(|_| DerivationError::MacInit)?;
        mac.update(seed);
        Ok(Self::from_hmac_output(mac))
    }

    /// Hardened child at `index`
    ///
    /// `index` is the un-offset value; `2^31` is added here.
    ///
    /// # Errors
    ///
    /// [`DerivationError::IndexOutOfRange`] if `index >= 2^31`.
    pub fn derive_child(&self, index: u32) -> DerivationResult<Self> {
        if index >= HARDENED_OFFSET {
            return Err(DerivationError::IndexOutOfRange(index));
        }

        let mut mac =
            HmacSha512::new_from_slice(&self.chain_code).map_err(|_| DerivationError::MacInit)?;
        mac.update(&[0x00]);
        mac.update(&self.key);
        mac.update(&(index | HARDENED_OFFSET).to_be_bytes());
        Ok(Self::from_hmac_output(mac))
    }

    /// Walk `path` starting from this key, left to right
    pub fn derive_path(&self, path: &DerivationPath) -> DerivationResult<Self> {
        let mut current = self.clone();
        for &index in path.indices() {
            current = current.derive_child(index)?;
        }
        Ok(current)
    }

    fn from_hmac_output(mac: HmacSha512) -> Self {
        let mut output = mac.finalize().into_bytes();

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);
        output.as_mut_slice().zeroize();
        Self { key, chain_code }
    }

    /// Private key half, usable as an Ed25519 seed
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// Chain code half, only meaningful for further derivation
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Ed25519 key pair whose secret seed is this key
    pub fn to_keypair(&self) -> Ed25519KeyPair {
        Ed25519KeyPair::from_seed(&self.key)
    }

    /// Ed25519 public key for this key
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.to_keypair().public_key
    }
}

impl PartialEq for ExtendedKey {
    fn eq(&self, other: &Self) -> bool {
        let key = self.key[..].ct_eq(&other.key[..]);
        let chain_code = self.chain_code[..].ct_eq(&other.chain_code[..]);
        (key & chain_code).into()
    }
}

impl Eq for ExtendedKey {}

impl std::fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("key", &"[REDACTED]")
            .field("chain_code", &"[REDACTED]")
            .finish()
    }
}

/// Derive the extended key at `path` from `seed`
///
/// Applies [`ExtendedKey::master`] once, then one hardened child per path
/// segment.
pub fn derive_from_path(seed: &[u8], path: &DerivationPath) -> DerivationResult<ExtendedKey> {
    trace!(depth = path.depth(), "Deriving extended key");
    ExtendedKey::master(seed)?.derive_path(path)
}
