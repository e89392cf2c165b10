//! Seed → per-account Ed25519 key pairs

use super::config::DerivationConfig;
use crate::ed25519::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use crate::hd::{DerivationPath, DerivationResult, ExtendedKey};
use crate::mnemonic::{Mnemonic, Seed};
use rayon::prelude::*;
use tracing::debug;

/// One derived account
#[derive(Debug, Clone)]
pub struct Wallet {
    /// Account index within the configured branch
    pub account: u32,
    /// Full path the key was derived at
    pub path: DerivationPath,
    /// The account's key pair
    pub keypair: Ed25519KeyPair,
}

impl Wallet {
    /// Public identifier of the account (raw 32 bytes; encoding is the caller's job)
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.keypair.public_key
    }

    /// Sign a message with the account key
    pub fn sign(&self, msg: &[u8]) -> Ed25519Signature {
        self.keypair.sign(msg)
    }
}

/// Derives wallets from a seed under one [`DerivationConfig`]
///
/// Every wallet depends only on `(seed, account)`, so wallets can be derived
/// in any order or in parallel and always come out the same.
#[derive(Debug, Clone, Default)]
pub struct WalletFactory {
    config: DerivationConfig,
}

impl WalletFactory {
    /// Factory deriving under `config`
    pub fn new(config: DerivationConfig) -> Self {
        Self { config }
    }

    /// Layout this factory derives under
    pub fn config(&self) -> &DerivationConfig {
        &self.config
    }

    /// Key pair for `account`
    ///
    /// The leaf chain code is discarded; only the leaf key becomes the
    /// Ed25519 secret seed.
    pub fn derive_wallet(&self, seed: &Seed, account: u32) -> DerivationResult<Ed25519KeyPair> {
        Ok(self.derive_wallet_record(seed, account)?.keypair)
    }

    /// [`Wallet`] record for `account`
    pub fn derive_wallet_record(&self, seed: &Seed, account: u32) -> DerivationResult<Wallet> {
        let path = self.config.path(account)?;
        let leaf = ExtendedKey::master(seed.as_bytes())?.derive_path(&path)?;
        debug!(account, path = %path, "Derived wallet");
        Ok(Wallet {
            account,
            path,
            keypair: leaf.to_keypair(),
        })
    }

    /// Key pairs for accounts `0..count`, in account order
    pub fn derive_wallets(&self, seed: &Seed, count: u32) -> DerivationResult<Vec<Ed25519KeyPair>> {
        Ok(self
            .derive_wallet_records(seed, count)?
            .into_iter()
            .map(|wallet| wallet.keypair)
            .collect())
    }

    /// [`Wallet`] records for accounts `0..count`, in account order
    ///
    /// The `m/<purpose>'/<coin_type>'` prefix is derived once and the
    /// per-account tails run on the rayon pool.
    pub fn derive_wallet_records(&self, seed: &Seed, count: u32) -> DerivationResult<Vec<Wallet>> {
        debug!(
            count,
            coin_type = self.config.coin_type,
            "Deriving wallets"
        );

        let parent_path = self.config.account_parent()?;
        let parent = ExtendedKey::master(seed.as_bytes())?.derive_path(&parent_path)?;
        let change = self.config.change;

        (0..count)
            .into_par_iter()
            .map(|account| -> DerivationResult<Wallet> {
                let path = self.config.path(account)?;
                let leaf = parent.derive_child(account)?.derive_child(change)?;
                Ok(Wallet {
                    account,
                    path,
                    keypair: leaf.to_keypair(),
                })
            })
            .collect()
    }
}

/// Parse `phrase`, stretch it with `passphrase`, and derive the first `count`
/// Solana wallets
pub fn wallets_from_phrase(
    phrase: &str,
    passphrase: Option<&str>,
    count: u32,
) -> crate::Result<Vec<Wallet>> {
    let mnemonic = Mnemonic::from_phrase(phrase)?;
    let seed = mnemonic.to_seed(passphrase);
    Ok(WalletFactory::default().derive_wallet_records(&seed, count)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hd::{derive_from_path, DerivationError};

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_seed() -> Seed {
        Mnemonic::from_phrase(TEST_MNEMONIC).unwrap().to_seed(None)
    }

    #[test]
    fn test_derive_wallet_matches_path_walk() {
        let seed = test_seed();
        let keypair = WalletFactory::default().derive_wallet(&seed, 0).unwrap();

        let path: DerivationPath = "m/44'/501'/0'/0'".parse().unwrap();
        let leaf = derive_from_path(seed.as_bytes(), &path).unwrap();
        assert_eq!(keypair.public_key, leaf.public_key());
        assert_eq!(&*keypair.secret_key.to_bytes(), leaf.key());
    }

    #[test]
    fn test_index_independence() {
        let seed = test_seed();
        let factory = WalletFactory::default();
        let wallets = factory.derive_wallets(&seed, 4).unwrap();
        assert_eq!(wallets.len(), 4);

        for i in 0..wallets.len() {
            for j in (i + 1)..wallets.len() {
                assert_ne!(wallets[i].public_key, wallets[j].public_key);
            }
        }

        let third = factory.derive_wallet(&seed, 2).unwrap();
        assert_eq!(third.public_key, wallets[2].public_key);
    }

    #[test]
    fn test_records_carry_paths() {
        let seed = test_seed();
        let records = WalletFactory::default()
            .derive_wallet_records(&seed, 3)
            .unwrap();
        let paths: Vec<String> = records.iter().map(|w| w.path.to_string()).collect();
        assert_eq!(
            paths,
            ["m/44'/501'/0'/0'", "m/44'/501'/1'/0'", "m/44'/501'/2'/0'"]
        );
        assert_eq!(records[1].account, 1);
    }

    #[test]
    fn test_zero_count() {
        let wallets = WalletFactory::default()
            .derive_wallets(&test_seed(), 0)
            .unwrap();
        assert!(wallets.is_empty());
    }

    #[test]
    fn test_account_out_of_range() {
        let err = WalletFactory::default()
            .derive_wallet(&test_seed(), 1 << 31)
            .unwrap_err();
        assert_eq!(err, DerivationError::IndexOutOfRange(1 << 31));
    }

    #[test]
    fn test_config_changes_keys() {
        let seed = test_seed();
        let solana = WalletFactory::default().derive_wallet(&seed, 0).unwrap();
        let other = WalletFactory::new(DerivationConfig::solana().with_coin_type(637))
            .derive_wallet(&seed, 0)
            .unwrap();
        assert_ne!(solana.public_key, other.public_key);
    }

    #[test]
    fn test_wallet_signs() {
        let wallet = WalletFactory::default()
            .derive_wallet_record(&test_seed(), 1)
            .unwrap();
        let sig = wallet.sign(b"hello world");
        assert!(wallet.public_key().verify(b"hello world", &sig));
    }

    #[test]
    fn test_wallets_from_phrase() {
        let wallets = wallets_from_phrase(TEST_MNEMONIC, None, 2).unwrap();
        let direct = WalletFactory::default()
            .derive_wallet(&test_seed(), 1)
            .unwrap();
        assert_eq!(wallets[1].keypair.public_key, direct.public_key);

        let bad = vec!["abandon"; 12].join(" ");
        assert!(matches!(
            wallets_from_phrase(&bad, None, 1),
            Err(crate::Error::Mnemonic(_))
        ));
    }
}
