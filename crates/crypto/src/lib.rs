//! Solana-style hierarchical deterministic key derivation
//!
//! This crate provides:
//! - BIP-39 mnemonic generation, validation and seed stretching
//! - SLIP-0010 hardened-only Ed25519 derivation over BIP-44 paths
//! - Ed25519 key generation, signing and verification
//! - A wallet factory producing `m/44'/501'/<account>'/0'` key pairs
//! - Zeroizing containers for seeds, phrases and chain codes

pub mod ed25519;
pub mod encoding;
pub mod error;
pub mod hd;
pub mod mnemonic;
pub mod secure;
pub mod wallet;

// Ed25519 exports
pub use ed25519::{
    generate_keypair, sign, verify, Ed25519KeyPair, Ed25519PublicKey, Ed25519SecretKey,
    Ed25519Signature,
};

// Encoding exports
pub use encoding::{Base58Encoder, HexEncoder, PublicKeyEncoder};

// Error exports
pub use error::{CryptoError, CryptoResult, Error, Result};

// HD derivation exports
pub use hd::{derive_from_path, DerivationError, DerivationPath, ExtendedKey, HARDENED_OFFSET};

// Mnemonic exports
pub use mnemonic::{Mnemonic, MnemonicError, RandomSource, Seed};

// Secure memory exports
pub use secure::{SecretArray, SecretString};

// Wallet exports
pub use wallet::{wallets_from_phrase, DerivationConfig, Wallet, WalletFactory};
