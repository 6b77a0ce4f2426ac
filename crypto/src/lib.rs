//! Cryptographic primitives for the competition escrow.
//!
//! - **Keccak-256** for message digests and address derivation
//! - **secp256k1** recoverable ECDSA for manager authorization
//! - Personal-message digests matching what wallets produce for `eth_sign`
//!
//! Signer recovery is pure: no storage, no network, no clock.

pub mod address;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{address_from_public_key, address_from_secret};
pub use hash::{keccak256, keccak256_multi, personal_message_digest};
pub use keys::{keypair_from_seed, KeyPair};
pub use sign::{recover_personal_signer, recover_signer, sign_digest, sign_personal};
