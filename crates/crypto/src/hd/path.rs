//! Hardened-only derivation paths
//!
//! Paths are written `m/44'/501'/0'/0'`. Every segment must carry the `'`
//! marker, and the stored indices are the un-offset values (`44`, not
//! `0x8000002C`); the hardening offset is applied only inside
//! [`ExtendedKey::derive_child`](super::ExtendedKey::derive_child).

use super::error::{DerivationError, DerivationResult};
use super::HARDENED_OFFSET;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// BIP-44 purpose level
pub const BIP44_PURPOSE: u32 = 44;

/// SLIP-0044 coin type for Solana
pub const SOLANA_COIN_TYPE: u32 = 501;

/// Ordered list of hardened child indices below the master key
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<u32>,
}

impl DerivationPath {
    /// The zero-depth path `m`
    pub fn master() -> Self {
        Self::default()
    }

    /// Build a path from un-offset indices
    ///
    /// # Errors
    ///
    /// [`DerivationError::IndexOutOfRange`] if any index is `>= 2^31`.
    pub fn new(indices: Vec<u32>) -> DerivationResult<Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= HARDENED_OFFSET) {
            return Err(DerivationError::IndexOutOfRange(bad));
        }
        Ok(Self { indices })
    }

    /// `m/purpose'/coin'/account'/change'`
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32) -> DerivationResult<Self> {
        Self::new(vec![purpose, coin_type, account, change])
    }

    /// Solana wallet path `m/44'/501'/account'/0'`
    pub fn solana(account: u32) -> DerivationResult<Self> {
        Self::bip44(BIP44_PURPOSE, SOLANA_COIN_TYPE, account, 0)
    }

    /// This path extended by one more segment
    pub fn child(&self, index: u32) -> DerivationResult<Self> {
        if index >= HARDENED_OFFSET {
            return Err(DerivationError::IndexOutOfRange(index));
        }
        let mut indices = self.indices.clone();
        indices.push(index);
        Ok(Self { indices })
    }

    /// Un-offset indices, root first
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of segments below `m`
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// True for the zero-depth path `m`
    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }
}

impl FromStr for DerivationPath {
    type Err = DerivationError;

    fn from_str(path: &str) -> DerivationResult<Self> {
        let mut segments = path.split('/');
        if segments.next() != Some("m") {
            return Err(DerivationError::InvalidPathSyntax(format!(
                "'{}' must start with 'm'",
                path
            )));
        }

        let mut indices = Vec::new();
        for segment in segments {
            let digits = match segment.strip_suffix('\'') {
                Some(digits) => digits,
                None if is_decimal(segment) => {
                    return Err(DerivationError::NonHardenedIndexRejected(segment.to_string()))
                }
                None => {
                    return Err(DerivationError::InvalidPathSyntax(format!(
                        "malformed segment '{}' in '{}'",
                        segment, path
                    )))
                }
            };
            if !is_decimal(digits) {
                return Err(DerivationError::InvalidPathSyntax(format!(
                    "malformed segment '{}' in '{}'",
                    segment, path
                )));
            }
            // Overflowing u32 is as out of range as anything above 2^31
            let index: u32 = digits
                .parse()
                .map_err(|_| DerivationError::IndexOutOfRange(u32::MAX))?;
            if index >= HARDENED_OFFSET {
                return Err(DerivationError::IndexOutOfRange(index));
            }
            indices.push(index);
        }

        Ok(Self { indices })
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for index in &self.indices {
            write!(f, "/{}'", index)?;
        }
        Ok(())
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
