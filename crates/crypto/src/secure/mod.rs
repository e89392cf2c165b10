//! Containers for secret material
//!
//! - [`SecretArray`] holds fixed-size secrets (seeds, chain codes) and zeroes
//!   them on drop. It is not `Clone`.
//! - [`SecretString`] holds the mnemonic phrase text.
//!
//! `Debug` on both prints `[REDACTED]`, so neither can leak through a log line.

mod secret;

pub use secret::{SecretArray, SecretString};
