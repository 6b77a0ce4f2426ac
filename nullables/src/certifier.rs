//! Nullable certification registry.

use compete_engine::CertificationOracle;
use compete_types::Address;
use std::collections::HashSet;
use std::sync::Mutex;

/// An in-memory certification registry.
///
/// Identities are uncertified until [`NullCertifier::certify`] is called.
#[derive(Default)]
pub struct NullCertifier {
    certified: Mutex<HashSet<Address>>,
}

impl NullCertifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn certify(&self, who: Address) {
        self.certified.lock().unwrap().insert(who);
    }

    pub fn revoke(&self, who: &Address) {
        self.certified.lock().unwrap().remove(who);
    }
}

impl CertificationOracle for NullCertifier {
    fn is_certified(&self, who: &Address) -> bool {
        self.certified.lock().unwrap().contains(who)
    }
}
