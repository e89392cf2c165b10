//! Wallet subcommands
//!
//! - `generate`: fresh mnemonic plus its first wallets
//! - `derive`: wallets from an existing mnemonic
//! - `sign`: sign a message with one derived account
//! - `verify`: check a signature against a base58 public key
//! - `demo`: walk through random keys, keypair bytes and derived wallets
//!
//! Mnemonics and BIP-39 passphrases are read from files or from the terminal
//! and held in zeroizing buffers. No key material is persisted.

mod common;
mod demo;
mod derive;
mod generate;
mod sign;
mod verify;

use crate::config::CliConfig;
use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Subcommand)]
pub enum Command {
    /// Generate a fresh mnemonic and list its first wallets
    ///
    /// IMPORTANT: The mnemonic phrase is shown ONCE. Write it down and
    /// store it securely - it's the only way to recover the wallets.
    Generate {
        /// Mnemonic length (12, 15, 18, 21 or 24)
        #[arg(long)]
        words: Option<usize>,

        /// Number of wallets to list
        #[arg(long)]
        count: Option<u32>,

        /// Read the BIP-39 passphrase from a file
        #[arg(long)]
        passphrase_file: Option<PathBuf>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Derive wallets from an existing mnemonic
    Derive {
        /// Read the mnemonic from a file instead of prompting
        #[arg(long)]
        mnemonic_file: Option<PathBuf>,

        /// Read the BIP-39 passphrase from a file
        #[arg(long)]
        passphrase_file: Option<PathBuf>,

        /// Number of wallets to list
        #[arg(long)]
        count: Option<u32>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Sign a UTF-8 message with a derived account key
    ///
    /// Prints the base58 signature and the signer's address.
    Sign {
        /// Account index
        #[arg(long, default_value = "0")]
        account: u32,

        /// Message to sign
        #[arg(long)]
        message: String,

        /// Read the mnemonic from a file instead of prompting
        #[arg(long)]
        mnemonic_file: Option<PathBuf>,

        /// Read the BIP-39 passphrase from a file
        #[arg(long)]
        passphrase_file: Option<PathBuf>,
    },

    /// Verify a base58 signature; exits 0 when valid, 1 otherwise
    Verify {
        /// Signer address (base58)
        #[arg(long)]
        pubkey: String,

        /// Message that was signed
        #[arg(long)]
        message: String,

        /// Signature (base58)
        #[arg(long)]
        signature: String,
    },

    /// Run the sign/verify, keypair-bytes and wallet-derivation walkthrough
    Demo,
}

/// Execute a wallet command
///
/// Only `verify` reports failure through the exit code rather than an error.
pub fn execute(config: &CliConfig, command: Command) -> Result<ExitCode> {
    match command {
        Command::Generate {
            words,
            count,
            passphrase_file,
            json,
        } => generate::execute(
            config,
            config.word_count(words),
            config.wallet_count(count),
            passphrase_file.as_deref(),
            json,
        )?,

        Command::Derive {
            mnemonic_file,
            passphrase_file,
            count,
            json,
        } => derive::execute(
            config,
            mnemonic_file.as_deref(),
            passphrase_file.as_deref(),
            config.wallet_count(count),
            json,
        )?,

        Command::Sign {
            account,
            message,
            mnemonic_file,
            passphrase_file,
        } => sign::execute(
            config,
            account,
            &message,
            mnemonic_file.as_deref(),
            passphrase_file.as_deref(),
        )?,

        Command::Verify {
            pubkey,
            message,
            signature,
        } => {
            if !verify::execute(&pubkey, &message, &signature)? {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Demo => demo::execute(config)?,
    }

    Ok(ExitCode::SUCCESS)
}
