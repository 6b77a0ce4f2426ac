//! Nullable infrastructure for deterministic testing.
//!
//! Inspired by the "A-frame architecture" pattern from RsNano.
//! Every collaborator the engine consumes (clock, certification registry,
//! asset ledger) is a trait. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod certifier;
pub mod clock;
pub mod ledger;

pub use certifier::NullCertifier;
pub use clock::NullClock;
pub use ledger::NullAssetLedger;
