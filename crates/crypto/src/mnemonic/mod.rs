//! BIP-39 mnemonic codec
//!
//! Turns entropy into a word phrase with an embedded checksum, validates
//! phrases, and stretches a phrase (plus optional passphrase) into the
//! 64-byte [`Seed`] that feeds [`crate::hd`].
//!
//! # Example
//!
//! ```rust
//! use solkey_crypto::mnemonic::Mnemonic;
//!
//! let mnemonic = Mnemonic::generate().unwrap();
//! println!("Backup phrase: {}", mnemonic.phrase());
//!
//! let seed = mnemonic.to_seed(None);
//! assert_eq!(seed.as_bytes().len(), 64);
//! ```
//!
//! # Security
//!
//! - The same phrase and passphrase always produce the same seed
//! - A passphrase yields an entirely different seed; it is not recoverable
//!   from the phrase

mod error;
mod generate;
mod seed;

pub use error::{MnemonicError, MnemonicResult};
pub use generate::{
    checksum, word_count_to_entropy_bytes, Mnemonic, RandomSource, DEFAULT_ENTROPY_BITS,
};
pub use seed::{Seed, SEED_LENGTH};
