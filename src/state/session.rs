use std::rc::Rc;

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::model::{CurrencyBalance, UpgradeCatalog, UpgradeItem};

use super::auth::AuthGate;
use super::economy;
use super::shop::{PurchaseOutcome, ShopController};
use super::storage::{GameStore, KeyValueStore};

/// Render-ready copy of the session state handed to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub has_password: bool,
    pub clicks: u64,
    pub rate: u64,
    /// Shop order.
    pub items: Vec<UpgradeItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(&SessionSnapshot)>;

/// Owns the whole game model for one process. Every mutation goes through
/// `&mut self`, so a purchase is never interleaved with a tick.
pub struct GameSession {
    config: GameConfig,
    auth: AuthGate,
    catalog: UpgradeCatalog,
    balance: CurrencyBalance,
    shop: ShopController,
    store: GameStore,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl GameSession {
    /// Opens the auth gate, loads persisted state and seeds the shop.
    pub fn launch(
        config: GameConfig,
        credentials: Rc<dyn KeyValueStore>,
        records: Rc<dyn KeyValueStore>,
    ) -> Self {
        let auth = AuthGate::initialize(credentials);
        let store = GameStore::new(records);

        let (balance, mut catalog) = match store.load() {
            Ok(record) => record.into_parts(),
            Err(err) => {
                tracing::warn!(%err, "could not load saved game; starting fresh");
                (CurrencyBalance::default(), UpgradeCatalog::default())
            }
        };
        match store.seed_missing(&mut catalog, balance, &config.seed_items) {
            Ok(0) => {}
            Ok(n) => tracing::info!(inserted = n, "seeded shop items"),
            Err(err) => tracing::warn!(%err, "couldn't create shop items"),
        }
        if catalog.is_empty() {
            tracing::warn!("shop has no items");
        }

        tracing::info!(
            authenticated = auth.is_authenticated(),
            clicks = balance.clicks,
            items = catalog.len(),
            "session launched"
        );
        Self {
            config,
            auth,
            catalog,
            balance,
            shop: ShopController::new(store.clone()),
            store,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn rate(&self) -> u64 {
        economy::passive_income_rate(&self.catalog)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.auth.is_authenticated(),
            has_password: self.auth.has_password(),
            clicks: self.balance.clicks,
            rate: self.rate(),
            items: self.catalog.list(),
        }
    }

    pub fn subscribe(&mut self, observer: impl Fn(&SessionSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Rc::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(sid, _)| *sid != id);
    }

    pub fn check_password(&mut self, candidate: &str) -> bool {
        let ok = self.auth.check_password(candidate);
        if ok {
            self.notify();
        } else {
            tracing::debug!("password rejected");
        }
        ok
    }

    /// Panics if the credential store rejects the write.
    pub fn set_password(&mut self, password: &str) {
        self.auth.set_password(password);
        self.notify();
    }

    pub fn click(&mut self) {
        if !self.is_authenticated() {
            return;
        }
        economy::manual_click(&mut self.balance);
        self.persist();
        self.notify();
    }

    /// One period of passive income.
    pub fn tick(&mut self) {
        if !self.is_authenticated() {
            return;
        }
        let rate = self.rate();
        if rate == 0 {
            return;
        }
        economy::tick(&mut self.balance, rate);
        self.persist();
        self.notify();
    }

    pub fn purchase(&mut self, name: &str) -> GameResult<PurchaseOutcome> {
        if !self.is_authenticated() {
            return Err(GameError::Locked);
        }
        let outcome = self
            .shop
            .purchase(&mut self.catalog, &mut self.balance, name)?;
        if let PurchaseOutcome::Purchased { .. } = outcome {
            self.notify();
        }
        Ok(outcome)
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.catalog, self.balance) {
            tracing::warn!(%err, clicks = self.balance.clicks, "couldn't save game");
        }
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snap = self.snapshot();
        for (_, observer) in &self.observers {
            observer(&snap);
        }
    }
}
