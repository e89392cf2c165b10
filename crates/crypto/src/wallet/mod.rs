//! Wallet derivation
//!
//! Composes the pipeline: seed → `m/44'/501'/<account>'/0'` → Ed25519 key pair.
//!
//! ```rust
//! use solkey_crypto::mnemonic::Mnemonic;
//! use solkey_crypto::wallet::WalletFactory;
//!
//! let mnemonic = Mnemonic::generate().unwrap();
//! let seed = mnemonic.to_seed(None);
//! let wallets = WalletFactory::default().derive_wallets(&seed, 4).unwrap();
//! assert_eq!(wallets.len(), 4);
//! ```

mod config;
mod factory;

pub use config::DerivationConfig;
pub use factory::{wallets_from_phrase, Wallet, WalletFactory};
