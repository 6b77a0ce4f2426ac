//! Events emitted when a competition operation commits.

use compete_registry::HopefulId;
use compete_types::{Address, Amount};
use std::sync::{PoisonError, RwLock};

/// Competition-level events that observers can subscribe to via the [`EventBus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompetitionEvent {
    /// A hopeful was admitted.
    Registered {
        id: HopefulId,
        fund: Address,
        manager: Address,
        registrant: Address,
        stake: Amount,
    },
    /// The oracle disqualified a hopeful.
    Disqualified { id: HopefulId },
    /// The oracle paid out a hopeful and closed its lifecycle.
    Finalized {
        id: HopefulId,
        registrant: Address,
        amount: Amount,
        metric_a: u64,
        metric_b: u64,
    },
}

type Listener = Box<dyn Fn(&CompetitionEvent) + Send + Sync>;

/// Synchronous fan-out event bus for competition events.
///
/// Listeners are invoked in commit order after the engine has released its
/// registry lock, so they may call back into the engine.
pub struct EventBus {
    listeners: RwLock<Vec<Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, listener: Listener) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    pub fn emit(&self, event: &CompetitionEvent) {
        let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
