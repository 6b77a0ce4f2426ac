//! Competition escrow engine.
//!
//! Admits hopeful fund managers into a time-boxed trading competition and
//! later pays out an oracle-determined amount to each entrant.
//!
//! Lifecycle per hopeful: `Competing → {Disqualified, Finalized}`.
//!
//! - Registration requires a manager signature over the terms digest, a
//!   certified registrant, and a registrant that has not registered before.
//! - Only the configured oracle may disqualify or finalize.
//! - Finalization pays out through the asset ledger and is only possible
//!   once the competition has ended.
//!
//! All mutations are serialized behind one lock and are all-or-nothing.

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod external;
pub mod terms;

pub use config::CompetitionConfig;
pub use engine::{CompetitionEngine, CompetitionStatus, Registration};
pub use error::{CompetitionError, HopefulRef};
pub use event::{CompetitionEvent, EventBus};
pub use external::{AssetLedger, CertificationOracle, Clock, SystemClock};
pub use terms::{terms_signing_digest, TERMS_AND_CONDITIONS};
