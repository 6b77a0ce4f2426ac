//! The hopeful record and its lifecycle status.

use compete_types::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential handle assigned at registration, starting at 0.
pub type HopefulId = u64;

/// Lifecycle status of a hopeful, derived from its flags.
///
/// `Competing → {Disqualified, Finalized}`; both targets are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HopefulStatus {
    Competing,
    Disqualified,
    Finalized,
}

impl HopefulStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, HopefulStatus::Competing)
    }
}

impl fmt::Display for HopefulStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HopefulStatus::Competing => f.write_str("competing"),
            HopefulStatus::Disqualified => f.write_str("disqualified"),
            HopefulStatus::Finalized => f.write_str("finalized"),
        }
    }
}

/// Registration data supplied by the caller; the registry assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHopeful {
    pub fund: Address,
    pub manager: Address,
    pub registrant: Address,
    pub base_asset: Address,
    pub quote_asset: Address,
    pub stake: Amount,
}

/// A registered competition entrant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hopeful {
    pub id: HopefulId,
    /// The fund being represented.
    pub fund: Address,
    /// The manager whose signature authorized participation.
    pub manager: Address,
    /// The wallet that submitted the registration; receives the payout.
    pub registrant: Address,
    /// Recorded for reporting only.
    pub base_asset: Address,
    /// Recorded for reporting only.
    pub quote_asset: Address,
    /// Amount declared at registration.
    pub stake: Amount,
    pub is_competing: bool,
    pub is_disqualified: bool,
    pub is_finalized: bool,
}

impl Hopeful {
    pub(crate) fn from_new(id: HopefulId, entry: NewHopeful) -> Self {
        Self {
            id,
            fund: entry.fund,
            manager: entry.manager,
            registrant: entry.registrant,
            base_asset: entry.base_asset,
            quote_asset: entry.quote_asset,
            stake: entry.stake,
            is_competing: true,
            is_disqualified: false,
            is_finalized: false,
        }
    }

    pub fn status(&self) -> HopefulStatus {
        if self.is_disqualified {
            HopefulStatus::Disqualified
        } else if self.is_finalized {
            HopefulStatus::Finalized
        } else {
            HopefulStatus::Competing
        }
    }

    /// Mark as disqualified. Also clears `is_competing`.
    pub fn disqualify(&mut self) {
        self.is_disqualified = true;
        self.is_competing = false;
    }

    /// Mark as finalized (paid out).
    pub fn finalize(&mut self) {
        self.is_finalized = true;
    }
}
