//! Error types for hierarchical derivation

use thiserror::Error;

/// Result type for derivation operations
pub type DerivationResult<T> = Result<T, DerivationError>;

/// Errors raised while parsing paths or deriving extended keys
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DerivationError {
    /// Path string is not of the form `m/a'/b'/...`
    #[error("invalid derivation path: {0}")]
    InvalidPathSyntax(String),

    /// Path segment without the `'` hardening marker
    #[error("non-hardened segment '{0}': ed25519 derivation is hardened-only")]
    NonHardenedIndexRejected(String),

    /// Index does not fit below the hardening offset
    #[error("index {0} out of range (must be below 2^31)")]
    IndexOutOfRange(u32),

    /// Seed outside the 16..=64 byte range
    #[error("invalid seed length: {0} bytes (must be 16 to 64)")]
    InvalidSeedLength(usize),

    /// HMAC-SHA512 rejected its key
    #[error("HMAC initialization failed")]
    MacInit,
}
