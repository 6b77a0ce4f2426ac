//! Collaborators the engine depends on but does not implement.
//!
//! Production wires these to the real certification registry, asset
//! ledger and wall clock; tests use the nullables.

use compete_types::{Address, Amount, Timestamp};

/// External registry attesting which identities may compete.
pub trait CertificationOracle: Send + Sync {
    fn is_certified(&self, who: &Address) -> bool;
}

/// External fungible-asset ledger holding the engine's custody balance.
pub trait AssetLedger: Send + Sync {
    /// Move `amount` from `from` to `to`. All-or-nothing: returns `false`
    /// and changes nothing if the transfer cannot be made.
    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> bool;

    fn balance_of(&self, who: &Address) -> Amount;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
