//! Append-only registry of competition entrants ("hopefuls").
//!
//! Entries are created once, indexed by a dense sequential id and by the
//! registrant address, and never deleted. Admission rules (uniqueness,
//! certification, signatures) belong to the caller; the registry only
//! stores and looks up.

pub mod error;
pub mod hopeful;
pub mod registry;

pub use error::RegistryError;
pub use hopeful::{Hopeful, HopefulId, HopefulStatus, NewHopeful};
pub use registry::HopefulRegistry;
