//! Core competition engine: admits hopefuls, disqualifies them and pays
//! them out.

use std::collections::VecDeque;
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError,
};

use compete_crypto::recover_signer;
use compete_registry::{Hopeful, HopefulId, HopefulRegistry, NewHopeful};
use compete_types::{Address, Amount, SignatureParts, Timestamp, H256};
use compete_utils::format_duration;

use crate::config::CompetitionConfig;
use crate::error::{CompetitionError, HopefulRef};
use crate::event::{CompetitionEvent, EventBus};
use crate::external::{AssetLedger, CertificationOracle, Clock};
use crate::terms::{terms_signing_digest, TERMS_AND_CONDITIONS};

/// A registration request as submitted by the registrant wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub fund: Address,
    pub manager: Address,
    pub base_asset: Address,
    pub quote_asset: Address,
    pub registrant: Address,
    pub stake: Amount,
    /// Manager's signature over the terms digest.
    pub signature: SignatureParts,
}

/// Bulk status snapshot. All four vectors are index-aligned with
/// registration order: position `i` describes hopeful `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompetitionStatus {
    pub funds: Vec<Address>,
    pub managers: Vec<Address>,
    pub is_competing: Vec<bool>,
    pub is_disqualified: Vec<bool>,
}

impl CompetitionStatus {
    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}

/// Result of a mutation run under the registry lock: the caller's value and
/// the event to publish once the lock is released.
type Committed<T> = Result<(T, Option<CompetitionEvent>), CompetitionError>;

/// The competition state machine.
///
/// Every mutating operation holds the registry write lock for its whole
/// duration, collaborator calls included, so operations are totally
/// ordered and never observe each other half-applied. Queries take the
/// read lock and may run concurrently. Events are queued in commit order
/// under the write lock and delivered after it is released.
pub struct CompetitionEngine {
    config: CompetitionConfig,
    end_time: Timestamp,
    registry: RwLock<HopefulRegistry>,
    pending: Mutex<VecDeque<CompetitionEvent>>,
    emit_lock: Mutex<()>,
    certifier: Arc<dyn CertificationOracle>,
    ledger: Arc<dyn AssetLedger>,
    clock: Arc<dyn Clock>,
    events: EventBus,
}

impl CompetitionEngine {
    /// Build an engine. The configuration is validated and frozen.
    pub fn new(
        config: CompetitionConfig,
        certifier: Arc<dyn CertificationOracle>,
        ledger: Arc<dyn AssetLedger>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CompetitionError> {
        config.validate()?;
        let end_time = config.end_time().ok_or_else(|| {
            CompetitionError::Config("start_time + competition_duration_secs overflows".into())
        })?;
        tracing::info!(
            oracle = %config.oracle,
            start_time = %config.start_time,
            end_time = %end_time,
            duration = %format_duration(config.competition_duration_secs),
            "competition engine initialised"
        );
        Ok(Self {
            config,
            end_time,
            registry: RwLock::new(HopefulRegistry::new()),
            pending: Mutex::new(VecDeque::new()),
            emit_lock: Mutex::new(()),
            certifier,
            ledger,
            clock,
            events: EventBus::new(),
        })
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// The digest managers must sign before their fund can be registered.
    pub fn terms_and_conditions(&self) -> H256 {
        TERMS_AND_CONDITIONS
    }

    pub fn config(&self) -> &CompetitionConfig {
        &self.config
    }

    pub fn start_time(&self) -> Timestamp {
        self.config.start_time
    }

    pub fn end_time(&self) -> Timestamp {
        self.end_time
    }

    pub fn payout_threshold(&self) -> u64 {
        self.config.payout_threshold
    }

    /// Whether the competition end has been reached.
    pub fn has_ended(&self) -> bool {
        self.clock.now() >= self.end_time
    }

    /// Event bus for committed operations.
    ///
    /// Listeners run after the registry lock is released, so they may call
    /// back into the engine. Events caused from inside a listener are
    /// delivered after that listener returns.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// The engine's own balance on the asset ledger.
    pub fn custody_balance(&self) -> Amount {
        self.ledger.balance_of(&self.config.custody_address)
    }

    // ── Registration ───────────────────────────────────────────────────

    /// Admit a new hopeful and return its id.
    ///
    /// Checks, in order: the registrant has no entry yet, the registrant is
    /// certified, the signature recovers to the manager, and the
    /// competition has not ended. No stake is moved here.
    pub fn register_for_competition(
        &self,
        request: Registration,
    ) -> Result<HopefulId, CompetitionError> {
        let (registrant, manager) = (request.registrant, request.manager);
        self.commit(|registry| self.register_locked(registry, request))
            .inspect_err(|e| {
                tracing::warn!(%registrant, %manager, error = %e, "registration rejected");
            })
    }

    fn register_locked(
        &self,
        registry: &mut HopefulRegistry,
        request: Registration,
    ) -> Committed<HopefulId> {
        if registry.find_by_registrant(&request.registrant).is_some() {
            return Err(CompetitionError::DuplicateRegistration(request.registrant));
        }
        if !self.certifier.is_certified(&request.registrant) {
            return Err(CompetitionError::NotCertified(request.registrant));
        }
        let signer = recover_signer(&terms_signing_digest(), &request.signature);
        if signer != Some(request.manager) {
            return Err(CompetitionError::InvalidSignature(request.manager));
        }
        let now = self.clock.now();
        if now >= self.end_time {
            return Err(CompetitionError::CompetitionEnded {
                end_time: self.end_time,
            });
        }

        let id = registry.create(NewHopeful {
            fund: request.fund,
            manager: request.manager,
            registrant: request.registrant,
            base_asset: request.base_asset,
            quote_asset: request.quote_asset,
            stake: request.stake,
        });
        tracing::info!(
            id,
            fund = %request.fund,
            registrant = %request.registrant,
            stake = %request.stake,
            closes_in = %format_duration(self.end_time.remaining_from(now)),
            "hopeful registered"
        );
        let event = CompetitionEvent::Registered {
            id,
            fund: request.fund,
            manager: request.manager,
            registrant: request.registrant,
            stake: request.stake,
        };
        Ok((id, Some(event)))
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Id of the hopeful registered by `registrant`.
    pub fn get_hopeful_id(&self, registrant: &Address) -> Result<HopefulId, CompetitionError> {
        let id = self
            .read()
            .find_by_registrant(registrant)
            .ok_or(CompetitionError::NotFound(HopefulRef::Registrant(*registrant)))?;
        tracing::debug!(%registrant, id, "hopeful id lookup");
        Ok(id)
    }

    /// Full record of hopeful `id`.
    pub fn hopeful(&self, id: HopefulId) -> Result<Hopeful, CompetitionError> {
        Ok(self.read().get(id)?.clone())
    }

    /// All hopefuls in registration order.
    pub fn hopefuls(&self) -> Vec<Hopeful> {
        self.read().list_all().to_vec()
    }

    pub fn hopeful_count(&self) -> usize {
        self.read().len()
    }

    /// Index-aligned snapshot of fund, manager, competing and disqualified
    /// flags for every hopeful.
    pub fn get_competition_status_of_hopefuls(&self) -> CompetitionStatus {
        let registry = self.read();
        let mut status = CompetitionStatus {
            funds: Vec::with_capacity(registry.len()),
            managers: Vec::with_capacity(registry.len()),
            is_competing: Vec::with_capacity(registry.len()),
            is_disqualified: Vec::with_capacity(registry.len()),
        };
        for hopeful in registry.iter() {
            status.funds.push(hopeful.fund);
            status.managers.push(hopeful.manager);
            status.is_competing.push(hopeful.is_competing);
            status.is_disqualified.push(hopeful.is_disqualified);
        }
        status
    }

    // ── Oracle operations ──────────────────────────────────────────────

    /// Disqualify hopeful `id`. Oracle only.
    ///
    /// Disqualifying an already-disqualified hopeful succeeds without
    /// emitting another event. A finalized hopeful cannot be disqualified.
    pub fn disqualify_hopeful(
        &self,
        caller: &Address,
        id: HopefulId,
    ) -> Result<(), CompetitionError> {
        self.commit(|registry| self.disqualify_locked(registry, caller, id))
            .inspect_err(|e| {
                tracing::warn!(%caller, id, error = %e, "disqualification rejected");
            })
    }

    fn disqualify_locked(
        &self,
        registry: &mut HopefulRegistry,
        caller: &Address,
        id: HopefulId,
    ) -> Committed<()> {
        self.ensure_oracle(caller)?;
        let mut hopeful = registry.get(id)?.clone();
        if hopeful.is_finalized {
            return Err(CompetitionError::AlreadyFinalized(id));
        }
        if hopeful.is_disqualified {
            tracing::debug!(id, "hopeful already disqualified");
            return Ok(((), None));
        }
        hopeful.disqualify();
        registry.set(id, hopeful)?;
        tracing::info!(id, "hopeful disqualified");
        Ok(((), Some(CompetitionEvent::Disqualified { id })))
    }

    /// Pay `amount` from custody to the registrant of hopeful `id` and close
    /// its lifecycle. Oracle only, and only once the competition has ended.
    ///
    /// `metric_a` and `metric_b` are oracle-supplied performance figures,
    /// recorded in the event and logs but not interpreted. If the ledger
    /// refuses the transfer nothing changes.
    pub fn finalize_and_payout_for_hopeful(
        &self,
        caller: &Address,
        id: HopefulId,
        amount: Amount,
        metric_a: u64,
        metric_b: u64,
    ) -> Result<(), CompetitionError> {
        self.commit(|registry| {
            self.finalize_locked(registry, caller, id, amount, metric_a, metric_b)
        })
        .inspect_err(|e| {
            tracing::warn!(%caller, id, %amount, error = %e, "finalization rejected");
        })
    }

    fn finalize_locked(
        &self,
        registry: &mut HopefulRegistry,
        caller: &Address,
        id: HopefulId,
        amount: Amount,
        metric_a: u64,
        metric_b: u64,
    ) -> Committed<()> {
        self.ensure_oracle(caller)?;
        let mut hopeful = registry.get(id)?.clone();
        if hopeful.is_disqualified {
            return Err(CompetitionError::HopefulDisqualified(id));
        }
        if hopeful.is_finalized {
            return Err(CompetitionError::AlreadyFinalized(id));
        }
        let now = self.clock.now();
        if now < self.end_time {
            return Err(CompetitionError::CompetitionNotEnded {
                end_time: self.end_time,
                now,
            });
        }

        // Transfer first; the flag is only committed once the ledger accepts.
        let to = hopeful.registrant;
        if !self
            .ledger
            .transfer(&self.config.custody_address, &to, amount)
        {
            return Err(CompetitionError::TransferFailed { to, amount });
        }
        hopeful.finalize();
        registry.set(id, hopeful)?;

        tracing::info!(id, registrant = %to, %amount, metric_a, metric_b, "hopeful finalized and paid out");
        let event = CompetitionEvent::Finalized {
            id,
            registrant: to,
            amount,
            metric_a,
            metric_b,
        };
        Ok(((), Some(event)))
    }

    // ── Internals ──────────────────────────────────────────────────────

    /// Run `op` under the write lock, queue its event before the lock is
    /// dropped, then deliver whatever is queued.
    fn commit<T>(
        &self,
        op: impl FnOnce(&mut HopefulRegistry) -> Committed<T>,
    ) -> Result<T, CompetitionError> {
        let mut registry = self.write();
        let (value, event) = op(&mut *registry)?;
        if let Some(event) = event {
            self.pending().push_back(event);
        }
        drop(registry);
        self.deliver_pending();
        Ok(value)
    }

    /// Drain the event queue in order. Only one thread delivers at a time;
    /// a thread that finds delivery in progress leaves its events to it.
    fn deliver_pending(&self) {
        loop {
            let delivering = match self.emit_lock.try_lock() {
                Ok(guard) => guard,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                Err(TryLockError::WouldBlock) => return,
            };
            loop {
                let Some(event) = self.pending().pop_front() else {
                    break;
                };
                self.events.emit(&event);
            }
            drop(delivering);
            // An event queued between the last pop and the unlock would
            // otherwise be stranded.
            if self.pending().is_empty() {
                return;
            }
        }
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<CompetitionEvent>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_oracle(&self, caller: &Address) -> Result<(), CompetitionError> {
        if *caller != self.config.oracle {
            return Err(CompetitionError::Unauthorized(*caller));
        }
        Ok(())
    }

    // Every mutation commits in one step after all checks pass, so a
    // poisoned lock never guards a half-applied update.
    fn read(&self) -> RwLockReadGuard<'_, HopefulRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HopefulRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}
