//! Fundamental types for the competition escrow.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! ledger addresses, digests, amounts, timestamps and detached signatures.

pub mod address;
pub mod amount;
pub mod error;
pub mod hash;
pub mod keys;
pub mod time;

pub use address::Address;
pub use amount::Amount;
pub use error::TypesError;
pub use hash::H256;
pub use keys::{SecretKey, SignatureParts};
pub use time::Timestamp;
