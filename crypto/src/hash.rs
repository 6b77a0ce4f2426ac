//! Keccak-256 hashing and personal-message digests.

use compete_types::H256;
use sha3::{Digest, Keccak256};

/// Prefix wallets prepend to a 32-byte message before signing it.
pub const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Compute the Keccak-256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn keccak256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// The digest a wallet actually signs when asked to sign the 32-byte `message`.
pub fn personal_message_digest(message: &H256) -> H256 {
    H256::new(keccak256_multi(&[PERSONAL_MESSAGE_PREFIX, message.as_bytes()]))
}
