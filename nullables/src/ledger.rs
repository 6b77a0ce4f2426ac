//! Nullable asset ledger backed by a premined in-memory balance map.

use compete_engine::AssetLedger;
use compete_types::{Address, Amount};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// An in-memory asset ledger for testing.
///
/// The whole supply starts in one account. Transfers are all-or-nothing and
/// can be forced to fail to exercise the engine's rollback path.
/// Thread-safe for use from concurrent tests.
pub struct NullAssetLedger {
    balances: Mutex<HashMap<Address, Amount>>,
    fail_transfers: AtomicBool,
    transfers: AtomicUsize,
}

impl NullAssetLedger {
    /// Create a ledger with `supply` credited to `holder`.
    pub fn premined(holder: Address, supply: Amount) -> Self {
        let mut balances = HashMap::new();
        balances.insert(holder, supply);
        Self {
            balances: Mutex::new(balances),
            fail_transfers: AtomicBool::new(false),
            transfers: AtomicUsize::new(0),
        }
    }

    /// When set, every transfer is refused.
    pub fn set_fail_transfers(&self, fail: bool) {
        self.fail_transfers.store(fail, Ordering::SeqCst);
    }

    /// Number of transfers that went through.
    pub fn transfer_count(&self) -> usize {
        self.transfers.load(Ordering::SeqCst)
    }
}

impl AssetLedger for NullAssetLedger {
    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> bool {
        if self.fail_transfers.load(Ordering::SeqCst) {
            return false;
        }
        let mut balances = self.balances.lock().unwrap();
        let from_balance = balances.get(from).copied().unwrap_or_default();
        let Some(new_from) = from_balance.checked_sub(amount) else {
            return false;
        };
        if from == to {
            self.transfers.fetch_add(1, Ordering::SeqCst);
            return true;
        }
        let to_balance = balances.get(to).copied().unwrap_or_default();
        let Some(new_to) = to_balance.checked_add(amount) else {
            return false;
        };
        balances.insert(*from, new_from);
        balances.insert(*to, new_to);
        self.transfers.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn balance_of(&self, who: &Address) -> Amount {
        self.balances
            .lock()
            .unwrap()
            .get(who)
            .copied()
            .unwrap_or_default()
    }
}
