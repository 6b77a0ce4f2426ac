//! In-memory hopeful store: an arena indexed by sequential id plus a
//! registrant index.

use std::collections::HashMap;

use compete_types::Address;

use crate::error::RegistryError;
use crate::hopeful::{Hopeful, HopefulId, NewHopeful};

/// Append-only store of hopefuls.
///
/// Ids are dense: the entry with id `n` lives at position `n`. Nothing is
/// ever removed, so ids are never reused or skipped.
#[derive(Debug, Default)]
pub struct HopefulRegistry {
    entries: Vec<Hopeful>,
    by_registrant: HashMap<Address, HopefulId>,
}

impl HopefulRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new hopeful and return its id.
    ///
    /// Uniqueness of the registrant is the caller's responsibility.
    pub fn create(&mut self, entry: NewHopeful) -> HopefulId {
        let id = self.entries.len() as HopefulId;
        self.by_registrant.insert(entry.registrant, id);
        self.entries.push(Hopeful::from_new(id, entry));
        id
    }

    pub fn get(&self, id: HopefulId) -> Result<&Hopeful, RegistryError> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.entries.get(idx))
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn find_by_registrant(&self, registrant: &Address) -> Option<HopefulId> {
        self.by_registrant.get(registrant).copied()
    }

    /// All hopefuls in insertion (= id) order.
    pub fn list_all(&self) -> &[Hopeful] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hopeful> {
        self.entries.iter()
    }

    /// Replace the stored entry for `id`.
    ///
    /// The replacement must keep the same `id` and `registrant`; only the
    /// status flags are expected to change.
    pub fn set(&mut self, id: HopefulId, updated: Hopeful) -> Result<(), RegistryError> {
        let slot = usize::try_from(id)
            .ok()
            .and_then(|idx| self.entries.get_mut(idx))
            .ok_or(RegistryError::NotFound(id))?;
        if updated.id != id {
            return Err(RegistryError::Mismatch {
                id,
                reason: "id changed",
            });
        }
        if updated.registrant != slot.registrant {
            return Err(RegistryError::Mismatch {
                id,
                reason: "registrant changed",
            });
        }
        *slot = updated;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
