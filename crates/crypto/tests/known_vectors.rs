//! Integration tests against published vectors
//!
//! - BIP-39 reference vectors (Trezor `vectors.json`)
//! - SLIP-0010 ed25519 test vector 1
//! - RFC 8032 section 7.1 test 1
//! - the Solana address of account 0 for the zero-entropy phrase
//!
//! plus the full phrase → seed → path → key pipeline.

use solkey_crypto::hd::{derive_from_path, DerivationPath, ExtendedKey};
use solkey_crypto::mnemonic::{checksum, Mnemonic, MnemonicResult, RandomSource};
use solkey_crypto::{
    sign, verify, wallets_from_phrase, Base58Encoder, Ed25519KeyPair, PublicKeyEncoder,
    WalletFactory,
};

const ZERO_PHRASE: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

const ZERO_SEED_NO_PASSPHRASE: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

const ZERO_SEED_TREZOR: &str = "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04";

/// Solana address of `m/44'/501'/0'/0'` under the zero-entropy phrase
const ZERO_PHRASE_ACCOUNT_0: &str = "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk";

const SLIP10_SEED: &str = "000102030405060708090a0b0c0d0e0f";

/// Entropy source that yields only zero bytes
struct ZeroSource;

impl RandomSource for ZeroSource {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> MnemonicResult<()> {
        dest.fill(0);
        Ok(())
    }
}

#[test]
fn test_bip39_zero_entropy_phrase() {
    let mnemonic = Mnemonic::from_entropy(&[0u8; 16]).unwrap();
    assert_eq!(mnemonic.phrase(), ZERO_PHRASE);
    assert_eq!(checksum(&[0u8; 16]).unwrap(), 0b0011);
}

#[test]
fn test_bip39_generate_from_fixed_source() {
    let mnemonic = Mnemonic::generate_from(&mut ZeroSource, 128).unwrap();
    assert_eq!(mnemonic.phrase(), ZERO_PHRASE);

    let long = Mnemonic::generate_from(&mut ZeroSource, 256).unwrap();
    assert_eq!(long.word_count(), 24);
    assert_eq!(long.words().last().copied(), Some("art"));
}

#[test]
fn test_bip39_seed_vectors() {
    let mnemonic = Mnemonic::from_phrase(ZERO_PHRASE).unwrap();
    assert_eq!(
        hex::encode(mnemonic.to_seed(None).as_bytes()),
        ZERO_SEED_NO_PASSPHRASE
    );
    assert_eq!(
        hex::encode(mnemonic.to_seed(Some("TREZOR")).as_bytes()),
        ZERO_SEED_TREZOR
    );
}

#[test]
fn test_bip39_import_normalizes_input() {
    let messy = format!("  {}  ", ZERO_PHRASE.to_uppercase().replace(' ', "\t "));
    let mnemonic = Mnemonic::from_phrase(&messy).unwrap();
    assert_eq!(mnemonic.phrase(), ZERO_PHRASE);
}

#[test]
fn test_slip10_vector_1() {
    let seed = hex::decode(SLIP10_SEED).unwrap();

    let master = ExtendedKey::master(&seed).unwrap();
    assert_eq!(
        hex::encode(master.key()),
        "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
    );
    assert_eq!(
        hex::encode(master.chain_code()),
        "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
    );
    assert_eq!(
        hex::encode(master.public_key().to_bytes()),
        "a4b2856bfec510abab89753fac1ac0e1112364e7d250545963f135f2a33188ed"
    );

    let path: DerivationPath = "m/0'".parse().unwrap();
    let child = derive_from_path(&seed, &path).unwrap();
    assert_eq!(
        hex::encode(child.key()),
        "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
    );
    assert_eq!(
        hex::encode(child.chain_code()),
        "8b59aa11380b624e81507a27fedda59fea6d0b779a778918a2fd3590e16e9c69"
    );

    let path: DerivationPath = "m/0'/1'".parse().unwrap();
    let grandchild = derive_from_path(&seed, &path).unwrap();
    assert_eq!(
        hex::encode(grandchild.key()),
        "b1d0bad404bf35da785a64ca1ac54b2617211d2777696fbffaf208f746ae84f2"
    );
}

#[test]
fn test_rfc8032_test_1() {
    let secret =
        hex::decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60").unwrap();
    let signature = sign(b"", &secret).unwrap();
    assert_eq!(
        hex::encode(signature.to_bytes()),
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
    );

    let public =
        hex::decode("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a").unwrap();
    assert!(verify(&signature.to_bytes(), b"", &public));
    assert!(!verify(&signature.to_bytes(), b"x", &public));
}

#[test]
fn test_master_key_from_bip39_seed() {
    let seed = Mnemonic::from_phrase(ZERO_PHRASE).unwrap().to_seed(None);
    let master = ExtendedKey::master(seed.as_bytes()).unwrap();
    assert_eq!(
        hex::encode(master.key()),
        "560f9f3c94558b6551928bb781cf6092c6b8800b4fc544af2c9444ed126d51aa"
    );
}

#[test]
fn test_solana_address_for_zero_phrase() {
    let seed = Mnemonic::from_phrase(ZERO_PHRASE).unwrap().to_seed(None);
    let keypair = WalletFactory::default().derive_wallet(&seed, 0).unwrap();
    assert_eq!(Base58Encoder.encode(&keypair.public_key), ZERO_PHRASE_ACCOUNT_0);

    let records = wallets_from_phrase(ZERO_PHRASE, None, 1).unwrap();
    assert_eq!(records[0].path.to_string(), "m/44'/501'/0'/0'");
    assert_eq!(
        Base58Encoder.encode(records[0].public_key()),
        ZERO_PHRASE_ACCOUNT_0
    );
}

#[test]
fn test_full_wallet_pipeline() {
    // Step 1: import phrase and stretch it
    let mnemonic = Mnemonic::from_phrase(ZERO_PHRASE).unwrap();
    let seed = mnemonic.to_seed(None);

    // Step 2: derive the first accounts
    let factory = WalletFactory::default();
    let wallets = factory.derive_wallets(&seed, 3).unwrap();

    // Step 3: each account matches a manual walk of its path
    for (account, keypair) in wallets.iter().enumerate() {
        let path = DerivationPath::solana(account as u32).unwrap();
        let leaf = derive_from_path(seed.as_bytes(), &path).unwrap();
        assert_eq!(keypair.public_key, leaf.public_key());
    }

    // Step 4: sign with one account, verify with its public key only
    let message = b"transfer 1 SOL";
    let signature = wallets[1].sign(message);
    assert!(wallets[1].public_key.verify(message, &signature));
    assert!(!wallets[0].public_key.verify(message, &signature));

    // Step 5: the pipeline helper agrees with the factory
    let records = wallets_from_phrase(ZERO_PHRASE, None, 3).unwrap();
    assert_eq!(records[2].keypair.public_key, wallets[2].public_key);
    assert_eq!(records[2].path.to_string(), "m/44'/501'/2'/0'");
}

#[test]
fn test_passphrase_changes_wallets() {
    let mnemonic = Mnemonic::from_phrase(ZERO_PHRASE).unwrap();
    let factory = WalletFactory::default();

    let plain = factory.derive_wallet(&mnemonic.to_seed(None), 0).unwrap();
    let empty = factory.derive_wallet(&mnemonic.to_seed(Some("")), 0).unwrap();
    let protected = factory
        .derive_wallet(&mnemonic.to_seed(Some("TREZOR")), 0)
        .unwrap();

    assert_eq!(plain.public_key, empty.public_key);
    assert_ne!(plain.public_key, protected.public_key);
}

#[test]
fn test_keypair_bytes_round_trip_through_base58() {
    let seed = Mnemonic::from_phrase(ZERO_PHRASE).unwrap().to_seed(None);
    let keypair = WalletFactory::default().derive_wallet(&seed, 0).unwrap();

    let restored = Ed25519KeyPair::from_keypair_bytes(&keypair.to_keypair_bytes()[..]).unwrap();
    assert_eq!(restored.public_key, keypair.public_key);

    let address = Base58Encoder.encode(&keypair.public_key);
    assert_eq!(Base58Encoder.decode(&address).unwrap(), keypair.public_key);
}
