//! Cryptographic error types

use crate::hd::DerivationError;
use crate::mnemonic::MnemonicError;
use thiserror::Error;

/// Result type for Ed25519 and encoding operations
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;

/// Ed25519 key material and encoding errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key or signature bytes of the wrong size
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required length in bytes
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Bytes do not decode to a point on the curve
    #[error("invalid public key bytes")]
    InvalidPublicKey,

    /// Public half of a 64-byte keypair does not belong to its secret half
    #[error("public key does not match secret key")]
    KeypairMismatch,

    /// Text form of a key could not be decoded
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// Result type for the full phrase-to-wallet pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Any error raised along the phrase → seed → path → key pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),

    #[error(transparent)]
    Derivation(#[from] DerivationError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
