//! Ed25519 signing primitive
//!
//! Key pairs are a pure function of a 32-byte seed: the seed is hashed with
//! SHA-512 and clamped into a scalar, and the public key is the fixed-base
//! multiple of that scalar (RFC 8032 §5.1.5). Signing is deterministic, the
//! per-message nonce being derived from the secret key and the message.
//!
//! Verification never fails loudly. Malformed points, malformed signatures and
//! message mismatches all come back as `false`.

use crate::error::{CryptoError, CryptoResult};
use ed25519_consensus::{
    Signature as Ed25519Sig, SigningKey as Ed25519Secret, VerificationKey as Ed25519Pubkey,
};
use rand::{CryptoRng, RngCore};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

/// Length of an Ed25519 secret seed
pub const SECRET_KEY_LENGTH: usize = 32;

/// Length of a compressed Ed25519 public key
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of an Ed25519 signature
pub const SIGNATURE_LENGTH: usize = 64;

/// Length of the `secret ‖ public` keypair encoding used by Solana tooling
pub const KEYPAIR_LENGTH: usize = SECRET_KEY_LENGTH + PUBLIC_KEY_LENGTH;

/// Ed25519 secret key (32 bytes seed)
#[derive(Clone)]
pub struct Ed25519SecretKey(Ed25519Secret);

impl Ed25519SecretKey {
    /// Generate a new random secret key
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
        rng.fill_bytes(&mut seed[..]);
        Self::from_seed(&seed)
    }

    /// Create from seed bytes (32 bytes)
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self(Ed25519Secret::from(*seed))
    }

    /// Create from a byte slice, rejecting anything but 32 bytes
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let seed = fixed::<SECRET_KEY_LENGTH>(bytes)?;
        Ok(Self::from_seed(&seed))
    }

    /// Serialize to bytes (32-byte seed)
    pub fn to_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LENGTH]> {
        Zeroizing::new(self.0.to_bytes())
    }

    /// Get the corresponding public key
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.0.verification_key())
    }

    /// Sign a message
    pub fn sign(&self, msg: &[u8]) -> Ed25519Signature {
        Ed25519Signature(self.0.sign(msg))
    }
}

impl std::fmt::Debug for Ed25519SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Ed25519 public key (32 bytes)
#[derive(Clone, PartialEq, Eq)]
pub struct Ed25519PublicKey(Ed25519Pubkey);

impl Ed25519PublicKey {
    /// Load from bytes, failing if they are not a valid curve point
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> CryptoResult<Self> {
        Ed25519Pubkey::try_from(*bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Load from a byte slice of exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        Self::from_bytes(&fixed::<PUBLIC_KEY_LENGTH>(bytes)?)
    }

    /// Serialize to bytes (32 bytes)
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0.to_bytes()
    }

    /// Verify a signature over `msg`
    pub fn verify(&self, msg: &[u8], sig: &Ed25519Signature) -> bool {
        self.0.verify(&sig.0, msg).is_ok()
    }
}

impl std::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Ed25519PublicKey({})", hex::encode(&bytes[..8]))
    }
}

impl Serialize for Ed25519PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fixed(&self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Ed25519PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = deserialize_fixed::<D, PUBLIC_KEY_LENGTH>(deserializer)?;
        Self::from_bytes(&bytes).map_err(de::Error::custom)
    }
}

/// Ed25519 signature (64 bytes)
#[derive(Clone)]
pub struct Ed25519Signature(Ed25519Sig);

impl Ed25519Signature {
    /// Load from bytes (64 bytes)
    ///
    /// Structural validity of `R` and `s` is only checked at verification time.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Self {
        Self(Ed25519Sig::from(*bytes))
    }

    /// Load from a byte slice of exactly 64 bytes
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        Ok(Self::from_bytes(&fixed::<SIGNATURE_LENGTH>(bytes)?))
    }

    /// Serialize to bytes (64 bytes)
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.0.to_bytes()
    }

    /// Verify signature against public key
    pub fn verify(&self, msg: &[u8], pubkey: &Ed25519PublicKey) -> bool {
        pubkey.verify(msg, self)
    }
}

impl std::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Ed25519Signature({})", hex::encode(&bytes[..8]))
    }
}

impl PartialEq for Ed25519Signature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Ed25519Signature {}

impl Serialize for Ed25519Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_fixed(&self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Ed25519Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = deserialize_fixed::<D, SIGNATURE_LENGTH>(deserializer)?;
        Ok(Self::from_bytes(&bytes))
    }
}

/// Ed25519 key pair
///
/// The public half is always computed from the secret half, never stored
/// independently of it.
#[derive(Clone)]
pub struct Ed25519KeyPair {
    pub secret_key: Ed25519SecretKey,
    pub public_key: Ed25519PublicKey,
}

impl Ed25519KeyPair {
    /// Generate a new random key pair
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self::from_secret_key(Ed25519SecretKey::generate(rng))
    }

    /// Deterministically build the key pair for a 32-byte seed
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self::from_secret_key(Ed25519SecretKey::from_seed(seed))
    }

    /// Create from secret key
    pub fn from_secret_key(secret_key: Ed25519SecretKey) -> Self {
        let public_key = secret_key.public_key();
        Self {
            secret_key,
            public_key,
        }
    }

    /// Parse the 64-byte `secret ‖ public` layout
    ///
    /// Fails with [`CryptoError::KeypairMismatch`] when the trailing public key
    /// is not the one the leading secret produces.
    pub fn from_keypair_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let raw = Zeroizing::new(fixed::<KEYPAIR_LENGTH>(bytes)?);
        let keypair = Ed25519KeyPair::from_secret_key(Ed25519SecretKey::from_slice(
            &raw[..SECRET_KEY_LENGTH],
        )?);
        if keypair.public_key.to_bytes()[..] != raw[SECRET_KEY_LENGTH..] {
            return Err(CryptoError::KeypairMismatch);
        }
        Ok(keypair)
    }

    /// Render as 64 bytes: secret seed followed by public key
    pub fn to_keypair_bytes(&self) -> Zeroizing<[u8; KEYPAIR_LENGTH]> {
        let mut out = Zeroizing::new([0u8; KEYPAIR_LENGTH]);
        out[..SECRET_KEY_LENGTH].copy_from_slice(&self.secret_key.to_bytes()[..]);
        out[SECRET_KEY_LENGTH..].copy_from_slice(&self.public_key.to_bytes());
        out
    }

    /// Sign a message
    pub fn sign(&self, msg: &[u8]) -> Ed25519Signature {
        self.secret_key.sign(msg)
    }

    /// Verify a signature with this pair's public key
    pub fn verify(&self, msg: &[u8], sig: &Ed25519Signature) -> bool {
        self.public_key.verify(msg, sig)
    }
}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519KeyPair")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Build the key pair for a raw 32-byte seed.
pub fn generate_keypair(seed: &[u8]) -> CryptoResult<Ed25519KeyPair> {
    Ok(Ed25519KeyPair::from_secret_key(
        Ed25519SecretKey::from_slice(seed)?,
    ))
}

/// Sign `message` with a raw 32-byte private key.
pub fn sign(message: &[u8], private_key: &[u8]) -> CryptoResult<Ed25519Signature> {
    Ok(Ed25519SecretKey::from_slice(private_key)?.sign(message))
}

/// Check `signature` over `message` against a raw public key.
///
/// Wrong-length inputs and off-curve keys yield `false`.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
    let Ok(signature) = Ed25519Signature::from_slice(signature) else {
        return false;
    };
    match Ed25519PublicKey::from_slice(public_key) {
        Ok(public_key) => public_key.verify(message, &signature),
        Err(_) => false,
    }
}

fn fixed<const N: usize>(bytes: &[u8]) -> CryptoResult<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| CryptoError::InvalidKeyLength {
        expected: N,
        actual: bytes.len(),
    })
}

fn serialize_fixed<S: Serializer, const N: usize>(
    bytes: &[u8; N],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if serializer.is_human_readable() {
        serializer.serialize_str(&hex::encode(bytes))
    } else {
        serializer.serialize_bytes(bytes)
    }
}

fn deserialize_fixed<'de, D: Deserializer<'de>, const N: usize>(
    deserializer: D,
) -> Result<[u8; N], D::Error> {
    struct FixedVisitor<const N: usize>;

    impl<'de, const N: usize> Visitor<'de> for FixedVisitor<N> {
        type Value = [u8; N];

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(formatter, "{} bytes", N)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let bytes = hex::decode(v).map_err(E::custom)?;
            self.visit_bytes(&bytes)
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            <[u8; N]>::try_from(v).map_err(|_| E::invalid_length(v.len(), &self))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut arr = [0u8; N];
            for (i, byte) in arr.iter_mut().enumerate() {
                *byte = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
            }
            Ok(arr)
        }
    }

    if deserializer.is_human_readable() {
        deserializer.deserialize_str(FixedVisitor::<N>)
    } else {
        deserializer.deserialize_bytes(FixedVisitor::<N>)
    }
}
