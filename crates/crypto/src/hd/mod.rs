//! Hierarchical deterministic derivation (SLIP-0010, ed25519)
//!
//! A seed expands into a master [`ExtendedKey`], and each segment of a
//! [`DerivationPath`] yields a new hardened child. The leaf key is the
//! 32-byte Ed25519 secret seed of a wallet.
//!
//! ```rust
//! use solkey_crypto::hd::{derive_from_path, DerivationPath};
//!
//! let seed = [7u8; 64];
//! let path: DerivationPath = "m/44'/501'/0'/0'".parse().unwrap();
//! let leaf = derive_from_path(&seed, &path).unwrap();
//! let keypair = leaf.to_keypair();
//! # let _ = keypair;
//! ```

mod error;
mod path;
mod slip10;

/// Offset added to every index to mark it hardened
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

pub use error::{DerivationError, DerivationResult};
pub use path::{DerivationPath, BIP44_PURPOSE, SOLANA_COIN_TYPE};
pub use slip10::{derive_from_path, ExtendedKey, MAX_SEED_LENGTH, MIN_SEED_LENGTH};
