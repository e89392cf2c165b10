//! Fixed-size and string secret wrappers

use secrecy::SecretString as SecrecySecretString;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret string that is zeroized on drop.
///
/// The inner value can only be read via `expose_secret()`.
pub type SecretString = SecrecySecretString;

/// A fixed-size secret byte array, zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretArray<const N: usize> {
    inner: [u8; N],
}

impl<const N: usize> SecretArray<N> {
    /// Take ownership of `bytes`.
    pub fn new(bytes: [u8; N]) -> Self {
        Self { inner: bytes }
    }

    /// Read the secret bytes.
    ///
    /// The returned reference should not outlive the call site.
    pub fn expose_secret(&self) -> &[u8; N] {
        &self.inner
    }
}

impl<const N: usize> PartialEq for SecretArray<N> {
    fn eq(&self, other: &Self) -> bool {
        self.inner[..].ct_eq(&other.inner[..]).into()
    }
}

impl<const N: usize> Eq for SecretArray<N> {}

impl<const N: usize> std::fmt::Debug for SecretArray<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretArray")
            .field("length", &N)
            .field("value", &"[REDACTED]")
            .finish()
    }
}
