//! Error types for mnemonic operations

use thiserror::Error;

/// Result type for mnemonic operations
pub type MnemonicResult<T> = Result<T, MnemonicError>;

/// Errors that can occur during mnemonic operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// Entropy is not 16, 20, 24, 28 or 32 bytes
    #[error("invalid entropy length: {0} bytes (must be 16, 20, 24, 28, or 32)")]
    InvalidEntropyLength(usize),

    /// Phrase does not have 12, 15, 18, 21 or 24 words
    #[error("invalid word count: {0} (must be 12, 15, 18, 21, or 24)")]
    InvalidWordCount(usize),

    /// Word is not in the BIP-39 English word list
    #[error("word '{0}' is not in the BIP-39 word list")]
    UnknownWord(String),

    /// Trailing checksum bits do not match SHA-256 of the entropy
    #[error("mnemonic checksum mismatch")]
    ChecksumMismatch,

    /// Random source could not supply entropy
    #[error("entropy generation failed")]
    EntropyError,
}
