//! Mnemonic phrase generation and parsing
//!
//! Implements BIP-39 over the English word list: entropy plus `ENT/32`
//! checksum bits from SHA-256(entropy), split into 11-bit word indices.

use super::error::{MnemonicError, MnemonicResult};
use super::seed::Seed;
use crate::secure::SecretString;
use bip39::{Language, Mnemonic as Bip39Mnemonic};
use rand::{CryptoRng, RngCore};
use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

/// Entropy strength used by [`Mnemonic::generate`] (12 words)
pub const DEFAULT_ENTROPY_BITS: usize = 128;

/// Supplier of mnemonic entropy
///
/// Every `rand` CSPRNG is a `RandomSource`; tests can hand in a seeded or
/// fixed generator to make generation reproducible.
pub trait RandomSource {
    /// Fill `dest` with random bytes
    fn fill_entropy(&mut self, dest: &mut [u8]) -> MnemonicResult<()>;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> MnemonicResult<()> {
        self.try_fill_bytes(dest)
            .map_err(|_| MnemonicError::EntropyError)
    }
}

/// BIP-39 mnemonic phrase wrapper
///
/// The phrase is held as a `SecretString` and `Debug` hides it.
///
/// # Example
///
/// ```rust
/// use solkey_crypto::mnemonic::Mnemonic;
///
/// let mnemonic = Mnemonic::generate().unwrap();
/// assert_eq!(mnemonic.word_count(), 12);
///
/// let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
/// let imported = Mnemonic::from_phrase(phrase).unwrap();
/// assert_eq!(imported.entropy().as_slice(), &[0u8; 16]);
/// ```
pub struct Mnemonic {
    inner: Bip39Mnemonic,
    phrase: SecretString,
}

impl Mnemonic {
    /// Generate a new random 12-word (128-bit entropy) mnemonic
    ///
    /// Uses the thread-local CSPRNG.
    pub fn generate() -> MnemonicResult<Self> {
        Self::generate_with_entropy_bits(DEFAULT_ENTROPY_BITS)
    }

    /// Generate a mnemonic with `entropy_bits` of entropy (128, 160, 192, 224 or 256)
    pub fn generate_with_entropy_bits(entropy_bits: usize) -> MnemonicResult<Self> {
        Self::generate_from(&mut rand::thread_rng(), entropy_bits)
    }

    /// Generate a mnemonic with a specific word count (12, 15, 18, 21 or 24)
    pub fn generate_with_word_count(word_count: usize) -> MnemonicResult<Self> {
        let entropy_bytes = word_count_to_entropy_bytes(word_count)?;
        Self::generate_with_entropy_bits(entropy_bytes * 8)
    }

    /// Generate a mnemonic drawing entropy from `source`
    pub fn generate_from<S: RandomSource + ?Sized>(
        source: &mut S,
        entropy_bits: usize,
    ) -> MnemonicResult<Self> {
        let entropy_bytes = entropy_bits_to_bytes(entropy_bits)?;

        let mut entropy = Zeroizing::new(vec![0u8; entropy_bytes]);
        source.fill_entropy(&mut entropy)?;

        let mnemonic = Self::from_entropy(&entropy)?;
        debug!(
            entropy_bits,
            word_count = mnemonic.word_count(),
            "Generated mnemonic"
        );
        Ok(mnemonic)
    }

    /// Encode raw entropy as a mnemonic
    ///
    /// # Errors
    ///
    /// [`MnemonicError::InvalidEntropyLength`] unless `entropy` is 16, 20, 24,
    /// 28 or 32 bytes.
    pub fn from_entropy(entropy: &[u8]) -> MnemonicResult<Self> {
        check_entropy_len(entropy.len())?;

        let inner = Bip39Mnemonic::from_entropy_in(Language::English, entropy)
            .map_err(|e| map_bip39_error(e, &[]))?;
        Ok(Self::wrap(inner))
    }

    /// Import a mnemonic from an existing phrase
    ///
    /// Words are lowercased and any run of whitespace counts as one
    /// separator. The checksum is verified before anything is returned.
    ///
    /// # Errors
    ///
    /// - [`MnemonicError::InvalidWordCount`] for a count other than 12, 15, 18, 21 or 24
    /// - [`MnemonicError::UnknownWord`] for a word outside the list
    /// - [`MnemonicError::ChecksumMismatch`] when the checksum bits disagree
    pub fn from_phrase(phrase: &str) -> MnemonicResult<Self> {
        let normalized = Zeroizing::new(
            phrase
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join(" "),
        );
        let words: Vec<&str> = normalized.split_whitespace().collect();

        let inner = Bip39Mnemonic::parse_in_normalized(Language::English, &normalized)
            .map_err(|e| map_bip39_error(e, &words))?;
        Ok(Self::wrap(inner))
    }

    /// Check whether `phrase` is a well-formed mnemonic with a valid checksum
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    fn wrap(inner: Bip39Mnemonic) -> Self {
        let phrase = inner.to_string();
        Self {
            inner,
            phrase: phrase.into(),
        }
    }

    /// Get the mnemonic phrase
    ///
    /// # Security
    ///
    /// The returned reference should be used immediately and not stored.
    pub fn phrase(&self) -> &str {
        self.phrase.expose_secret()
    }

    /// Words of the phrase, in order
    pub fn words(&self) -> Vec<&str> {
        self.phrase().split(' ').collect()
    }

    /// Get the number of words in the mnemonic
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// Recover the entropy encoded by the phrase
    pub fn entropy(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.inner.to_entropy())
    }

    /// Derive the 64-byte seed
    ///
    /// PBKDF2-HMAC-SHA512 with the NFKD phrase as password, `"mnemonic"` +
    /// NFKD(passphrase) as salt and 2048 iterations. A missing passphrase is
    /// the empty string.
    pub fn to_seed(&self, passphrase: Option<&str>) -> Seed {
        let passphrase = passphrase.unwrap_or("");
        Seed::from_bytes(self.inner.to_seed(passphrase))
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

/// Leading `ENT/32` bits of SHA-256(entropy), right-aligned
///
/// These are the bits appended to the entropy before it is cut into words.
pub fn checksum(entropy: &[u8]) -> MnemonicResult<u8> {
    check_entropy_len(entropy.len())?;
    let checksum_bits = entropy.len() / 4;
    let digest = Sha256::digest(entropy);
    Ok(digest[0] >> (8 - checksum_bits))
}

/// Convert word count to entropy bytes
pub fn word_count_to_entropy_bytes(word_count: usize) -> MnemonicResult<usize> {
    match word_count {
        12 => Ok(16), // 128 bits
        15 => Ok(20), // 160 bits
        18 => Ok(24), // 192 bits
        21 => Ok(28), // 224 bits
        24 => Ok(32), // 256 bits
        _ => Err(MnemonicError::InvalidWordCount(word_count)),
    }
}

fn entropy_bits_to_bytes(entropy_bits: usize) -> MnemonicResult<usize> {
    if entropy_bits % 8 != 0 {
        return Err(MnemonicError::InvalidEntropyLength(entropy_bits / 8));
    }
    let bytes = entropy_bits / 8;
    check_entropy_len(bytes)?;
    Ok(bytes)
}

fn check_entropy_len(len: usize) -> MnemonicResult<()> {
    match len {
        16 | 20 | 24 | 28 | 32 => Ok(()),
        _ => Err(MnemonicError::InvalidEntropyLength(len)),
    }
}

fn map_bip39_error(err: bip39::Error, words: &[&str]) -> MnemonicError {
    match err {
        bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
        bip39::Error::UnknownWord(index) => {
            MnemonicError::UnknownWord(words.get(index).copied().unwrap_or_default().to_string())
        }
        bip39::Error::BadEntropyBitCount(bits) => MnemonicError::InvalidEntropyLength(bits / 8),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumMismatch,
        #[allow(unreachable_patterns)]
        _ => MnemonicError::InvalidWordCount(words.len()),
    }
}
