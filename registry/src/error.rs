use thiserror::Error;

use crate::HopefulId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("hopeful {0} not found")]
    NotFound(HopefulId),

    #[error("update for hopeful {id} does not match the stored entry: {reason}")]
    Mismatch { id: HopefulId, reason: &'static str },
}
