//! Address derivation from secp256k1 public keys.

use compete_types::{Address, SecretKey};
use libsecp256k1::PublicKey;

use crate::hash::keccak256;

/// Derive the ledger address of a public key.
///
/// The address is the last 20 bytes of Keccak-256 over the 64-byte
/// uncompressed point (the leading `0x04` tag byte is dropped).
pub fn address_from_public_key(public: &PublicKey) -> Address {
    let uncompressed = public.serialize();
    let hash = keccak256(&uncompressed[1..]);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    Address::new(bytes)
}

/// Derive the address controlled by a secret key, if the key is valid.
pub fn address_from_secret(secret: &SecretKey) -> Option<Address> {
    let sk = libsecp256k1::SecretKey::parse(&secret.0).ok()?;
    Some(address_from_public_key(&PublicKey::from_secret_key(&sk)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_key_one_has_known_address() {
        let mut raw = [0u8; 32];
        raw[31] = 1;
        let addr = address_from_secret(&SecretKey(raw)).unwrap();
        assert_eq!(
            addr.to_string(),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn invalid_secret_yields_none() {
        assert!(address_from_secret(&SecretKey([0u8; 32])).is_none());
    }
}
