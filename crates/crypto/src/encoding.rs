//! Text encodings for public keys
//!
//! Derivation hands back raw 32-byte keys; rendering them as addresses is a
//! separate concern. Solana addresses are base58.

use crate::ed25519::Ed25519PublicKey;
use crate::error::{CryptoError, CryptoResult};

/// Renders public keys to and from a text form
pub trait PublicKeyEncoder {
    /// Text form of `key`
    fn encode(&self, key: &Ed25519PublicKey) -> String;

    /// Parse a key back from its text form
    fn decode(&self, text: &str) -> CryptoResult<Ed25519PublicKey>;
}

/// Bitcoin-alphabet base58, the Solana address format
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58Encoder;

impl PublicKeyEncoder for Base58Encoder {
    fn encode(&self, key: &Ed25519PublicKey) -> String {
        bs58::encode(key.to_bytes()).into_string()
    }

    fn decode(&self, text: &str) -> CryptoResult<Ed25519PublicKey> {
        let bytes = bs58::decode(text)
            .into_vec()
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;
        Ed25519PublicKey::from_slice(&bytes)
    }
}

/// Lowercase hex
#[derive(Debug, Clone, Copy, Default)]
pub struct HexEncoder;

impl PublicKeyEncoder for HexEncoder {
    fn encode(&self, key: &Ed25519PublicKey) -> String {
        hex::encode(key.to_bytes())
    }

    fn decode(&self, text: &str) -> CryptoResult<Ed25519PublicKey> {
        let text = text.strip_prefix("0x").unwrap_or(text);
        let bytes = hex::decode(text).map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;
        Ed25519PublicKey::from_slice(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ed25519::Ed25519KeyPair;

    // RFC 8032 test 1 public key
    const PUBKEY_HEX: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    fn pubkey() -> Ed25519PublicKey {
        let bytes: [u8; 32] = hex::decode(PUBKEY_HEX).unwrap().try_into().unwrap();
        Ed25519PublicKey::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_hex_encoder() {
        let encoded = HexEncoder.encode(&pubkey());
        assert_eq!(encoded, PUBKEY_HEX);
        assert_eq!(HexEncoder.decode(&encoded).unwrap(), pubkey());
        assert_eq!(
            HexEncoder.decode(&format!("0x{PUBKEY_HEX}")).unwrap(),
            pubkey()
        );
    }

    #[test]
    fn test_base58_encoder() {
        let key = Ed25519KeyPair::from_seed(&[7u8; 32]).public_key;
        let encoded = Base58Encoder.encode(&key);
        assert!(encoded.len() >= 32 && encoded.len() <= 44);
        assert!(!encoded.contains(&['0', 'O', 'I', 'l'][..]));
        assert_eq!(Base58Encoder.decode(&encoded).unwrap(), key);
    }

    #[test]
    fn test_base58_rejects_bad_input() {
        assert!(matches!(
            Base58Encoder.decode("not-base58!"),
            Err(CryptoError::InvalidEncoding(_))
        ));
        assert!(matches!(
            Base58Encoder.decode("abc"),
            Err(CryptoError::InvalidKeyLength { expected: 32, .. })
        ));
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert!(matches!(
            HexEncoder.decode("zz"),
            Err(CryptoError::InvalidEncoding(_))
        ));
        assert!(matches!(
            HexEncoder.decode("abcd"),
            Err(CryptoError::InvalidKeyLength { .. })
        ));
    }

    #[test]
    fn test_encoders_usable_as_trait_objects() {
        let encoders: Vec<Box<dyn PublicKeyEncoder>> =
            vec![Box::new(Base58Encoder), Box::new(HexEncoder)];
        let key = pubkey();
        for encoder in &encoders {
            assert_eq!(encoder.decode(&encoder.encode(&key)).unwrap(), key);
        }
    }
}
