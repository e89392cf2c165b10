//! BIP-39 seed value

use crate::secure::SecretArray;

/// Length of a BIP-39 seed in bytes
pub const SEED_LENGTH: usize = 64;

/// 64-byte seed produced by PBKDF2-HMAC-SHA512 over a mnemonic
///
/// Zeroized on drop and never printed. This is the only input the
/// hierarchical derivation needs; the phrase itself can be dropped once a
/// seed exists.
#[derive(Debug, PartialEq, Eq)]
pub struct Seed(SecretArray<SEED_LENGTH>);

impl Seed {
    /// Wrap raw seed bytes
    pub fn from_bytes(bytes: [u8; SEED_LENGTH]) -> Self {
        Self(SecretArray::new(bytes))
    }

    /// Raw seed bytes
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        self.0.expose_secret()
    }
}

impl From<[u8; SEED_LENGTH]> for Seed {
    fn from(bytes: [u8; SEED_LENGTH]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
