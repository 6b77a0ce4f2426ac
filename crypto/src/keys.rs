//! secp256k1 key derivation.

use compete_types::{Address, SecretKey};
use libsecp256k1::PublicKey;

use crate::address::address_from_public_key;

/// A secret key together with the address it controls.
pub struct KeyPair {
    pub secret: SecretKey,
    pub address: Address,
}

/// Derive a key pair from a 32-byte seed (deterministic).
///
/// Returns `None` when the seed is not a valid secp256k1 scalar
/// (zero, or not below the curve order).
pub fn keypair_from_seed(seed: &[u8; 32]) -> Option<KeyPair> {
    let secret = libsecp256k1::SecretKey::parse(seed).ok()?;
    let public = PublicKey::from_secret_key(&secret);
    Some(KeyPair {
        secret: SecretKey(*seed),
        address: address_from_public_key(&public),
    })
}
