//! Shared test fixtures: an engine wired to nullable collaborators.

#![allow(dead_code)]

use std::sync::Arc;

use compete_crypto::{keypair_from_seed, sign_personal, KeyPair};
use compete_engine::{
    AssetLedger, CompetitionConfig, CompetitionEngine, Registration, TERMS_AND_CONDITIONS,
};
use compete_nullables::{NullAssetLedger, NullCertifier, NullClock};
use compete_types::{Address, Amount, SignatureParts, Timestamp};

pub const START: u64 = 1_700_000_000;
pub const DURATION: u64 = 600;
pub const PAYOUT_THRESHOLD: u64 = 80;
/// Two weeks and a day.
pub const LONG_ADVANCE: u64 = 86_400 * 15;
pub const SUPPLY: u128 = 1_000_000_000;

pub fn addr(b: u8) -> Address {
    Address::new([b; 20])
}

pub struct Harness {
    pub engine: Arc<CompetitionEngine>,
    pub certifier: Arc<NullCertifier>,
    pub ledger: Arc<NullAssetLedger>,
    pub clock: Arc<NullClock>,
    pub deployer: Address,
    pub oracle: Address,
    pub custody: Address,
    pub token: Address,
    pub fund: Address,
    pub manager: KeyPair,
    pub investor1: Address,
    pub investor2: Address,
}

impl Harness {
    pub fn new() -> Self {
        let deployer = addr(0xD0);
        let oracle = addr(0x0A);
        let custody = addr(0xC0);
        let token = addr(0x70);
        let certifier_addr = addr(0xCE);

        let certifier = Arc::new(NullCertifier::new());
        let ledger = Arc::new(NullAssetLedger::premined(deployer, Amount::new(SUPPLY)));
        let clock = Arc::new(NullClock::new(START));

        let config = CompetitionConfig::new(
            token,
            oracle,
            certifier_addr,
            custody,
            Timestamp::new(START),
            DURATION,
            PAYOUT_THRESHOLD,
        );
        let engine = CompetitionEngine::new(
            config,
            certifier.clone(),
            ledger.clone(),
            clock.clone(),
        )
        .expect("valid config");

        Self {
            engine: Arc::new(engine),
            certifier,
            ledger,
            clock,
            deployer,
            oracle,
            custody,
            token,
            fund: addr(0xF1),
            manager: keypair_from_seed(&[0x33; 32]).expect("valid seed"),
            investor1: addr(0x11),
            investor2: addr(0x12),
        }
    }

    /// A registration for `registrant` signed by the harness manager.
    pub fn registration(&self, registrant: Address) -> Registration {
        Registration {
            fund: self.fund,
            manager: self.manager.address,
            base_asset: self.token,
            quote_asset: self.token,
            registrant,
            stake: Amount::new(20),
            signature: sign_terms(&self.manager),
        }
    }

    /// Certify and register `registrant`, returning the assigned id.
    pub fn register(&self, registrant: Address) -> u64 {
        self.certifier.certify(registrant);
        self.engine
            .register_for_competition(self.registration(registrant))
            .expect("registration should succeed")
    }

    /// Fund the engine's custody account and move past the competition end.
    pub fn transfer_and_increase_until_end(&self, amount: u128) {
        assert!(self
            .ledger
            .transfer(&self.deployer, &self.custody, Amount::new(amount)));
        self.clock.advance(LONG_ADVANCE);
    }
}

/// Sign the terms the way a manager's wallet would.
pub fn sign_terms(kp: &KeyPair) -> SignatureParts {
    sign_personal(&TERMS_AND_CONDITIONS, &kp.secret).expect("valid key")
}
