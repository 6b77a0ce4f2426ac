use compete_registry::{HopefulId, RegistryError};
use compete_types::{Address, Amount, Timestamp};
use std::fmt;
use thiserror::Error;

/// How a missing hopeful was looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HopefulRef {
    Id(HopefulId),
    Registrant(Address),
}

impl fmt::Display for HopefulRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Registrant(registrant) => write!(f, "registered by {registrant}"),
        }
    }
}

/// Rejection reasons for competition operations.
///
/// Every variant aborts the whole operation; no engine state is changed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompetitionError {
    #[error("registrant {0} is already registered")]
    DuplicateRegistration(Address),

    #[error("registrant {0} is not certified")]
    NotCertified(Address),

    #[error("terms signature does not recover to manager {0}")]
    InvalidSignature(Address),

    #[error("caller {0} is not the oracle")]
    Unauthorized(Address),

    #[error("hopeful {0} not found")]
    NotFound(HopefulRef),

    #[error("hopeful {0} is disqualified")]
    HopefulDisqualified(HopefulId),

    #[error("hopeful {0} is already finalized")]
    AlreadyFinalized(HopefulId),

    #[error("competition has not ended: ends at {end_time}, now {now}")]
    CompetitionNotEnded { end_time: Timestamp, now: Timestamp },

    #[error("competition ended at {end_time}, registration is closed")]
    CompetitionEnded { end_time: Timestamp },

    #[error("payout of {amount} to {to} failed on the asset ledger")]
    TransferFailed { to: Address, amount: Amount },

    #[error("invalid hopeful update: {0}")]
    Registry(RegistryError),

    #[error("config error: {0}")]
    Config(String),
}

impl From<RegistryError> for CompetitionError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => CompetitionError::NotFound(HopefulRef::Id(id)),
            other => CompetitionError::Registry(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_miss_maps_to_not_found_by_id() {
        assert_eq!(
            CompetitionError::from(RegistryError::NotFound(4)),
            CompetitionError::NotFound(HopefulRef::Id(4))
        );
    }

    #[test]
    fn not_found_messages_name_the_lookup() {
        let by_id = CompetitionError::NotFound(HopefulRef::Id(7));
        assert_eq!(by_id.to_string(), "hopeful 7 not found");

        let registrant = Address::new([0x11; 20]);
        let by_registrant = CompetitionError::NotFound(HopefulRef::Registrant(registrant));
        assert_eq!(
            by_registrant.to_string(),
            format!("hopeful registered by {registrant} not found")
        );
    }
}
