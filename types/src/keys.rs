//! Key and signature types for manager authorization.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::H256;

/// A 32-byte secp256k1 secret key.
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(pub [u8; 32]);

/// A detached, recoverable ECDSA signature split into its `(v, r, s)` parts.
///
/// `v` carries the recovery id, either raw (`0`/`1`) or offset by 27
/// (`27`/`28`) as wallets emit it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureParts {
    pub v: u8,
    pub r: H256,
    pub s: H256,
}

impl SignatureParts {
    /// Offset wallets add to the raw recovery id.
    pub const V_OFFSET: u8 = 27;

    pub fn new(v: u8, r: H256, s: H256) -> Self {
        Self { v, r, s }
    }

    /// Resolve `v` to a raw recovery id (`0` or `1`).
    ///
    /// Returns `None` for any other value.
    pub fn recovery_id(&self) -> Option<u8> {
        match self.v {
            0 | 1 => Some(self.v),
            27 | 28 => Some(self.v - Self::V_OFFSET),
            _ => None,
        }
    }

    /// The 64-byte compact `r ‖ s` encoding.
    pub fn compact(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(self.r.as_bytes());
        out[32..].copy_from_slice(self.s.as_bytes());
        out
    }
}
