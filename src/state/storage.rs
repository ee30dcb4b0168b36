// Key-value storage backends and the game record store built on them.
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::{CONFIG_KEY, GameConfig};
use crate::error::{GameError, GameResult};
use crate::model::{CurrencyBalance, SeedItem, UpgradeCatalog, UpgradeItem};

/// Record-store key of the saved game: balance and shop items together.
pub const SAVE_KEY: &str = "save";

/// Narrow string store used for both game records and credentials.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> GameResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> GameResult<()>;
}

/// `window.localStorage`, with every key namespaced by `prefix`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
    prefix: String,
}

impl BrowserStorage {
    pub fn local(prefix: &str) -> GameResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| GameError::Storage("no global `window`".into()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| GameError::Storage("localStorage unavailable".into()))?;
        Ok(Self {
            storage,
            prefix: prefix.to_string(),
        })
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> GameResult<Option<String>> {
        Ok(self.storage.get_item(&self.namespaced(key))?)
    }

    fn set(&self, key: &str, value: &str) -> GameResult<()> {
        self.storage.set_item(&self.namespaced(key), value)?;
        Ok(())
    }
}

/// Process-local store. Used by tests and as the fallback when the browser
/// store cannot be opened.
#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    /// Writes still allowed per key before every further write fails.
    write_budget: RefCell<HashMap<String, usize>>,
    writes: RefCell<HashMap<String, usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later write to `key` fail.
    #[cfg(test)]
    pub fn fail_writes(&self, key: &str) {
        self.fail_writes_after(key, 0);
    }

    /// Lets `allowed` more writes to `key` through, then fails the rest.
    #[cfg(test)]
    pub fn fail_writes_after(&self, key: &str, allowed: usize) {
        self.write_budget.borrow_mut().insert(key.to_string(), allowed);
    }

    #[cfg(test)]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    #[cfg(test)]
    pub fn write_count(&self, key: &str) -> usize {
        self.writes.borrow().get(key).copied().unwrap_or(0)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> GameResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> GameResult<()> {
        if let Some(budget) = self.write_budget.borrow_mut().get_mut(key) {
            if *budget == 0 {
                return Err(GameError::Storage(format!("write to `{key}` rejected")));
            }
            *budget -= 1;
        }
        *self.writes.borrow_mut().entry(key.to_string()).or_insert(0) += 1;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Everything the game persists, written as one JSON document so a single
/// `set` commits a purchase's debit and item together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveRecord {
    pub clicks: u64,
    /// Keyed by item name.
    pub items: BTreeMap<String, UpgradeItem>,
}

impl SaveRecord {
    pub fn capture(catalog: &UpgradeCatalog, balance: CurrencyBalance) -> Self {
        Self {
            clicks: balance.clicks,
            items: catalog
                .iter()
                .map(|item| (item.name.clone(), item.clone()))
                .collect(),
        }
    }

    pub fn into_parts(self) -> (CurrencyBalance, UpgradeCatalog) {
        (
            CurrencyBalance::new(self.clicks),
            UpgradeCatalog::from_items(self.items.into_values()),
        )
    }
}

/// The saved game on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct GameStore {
    records: Rc<dyn KeyValueStore>,
}

impl GameStore {
    pub fn new(records: Rc<dyn KeyValueStore>) -> Self {
        Self { records }
    }

    pub fn load_config(&self) -> GameResult<Option<GameConfig>> {
        match self.records.get(CONFIG_KEY)? {
            Some(raw) => Ok(Some(GameConfig::from_json(&raw)?)),
            None => Ok(None),
        }
    }

    /// The saved game, or an empty one on first launch.
    pub fn load(&self) -> GameResult<SaveRecord> {
        match self.records.get(SAVE_KEY)? {
            None => Ok(SaveRecord::default()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| GameError::InvalidRecord {
                key: SAVE_KEY.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn save(&self, catalog: &UpgradeCatalog, balance: CurrencyBalance) -> GameResult<()> {
        self.write(&SaveRecord::capture(catalog, balance))
    }

    /// Adds every default missing from `catalog` and saves the result.
    /// Returns how many were inserted; the catalog keeps them even if the
    /// write fails.
    pub fn seed_missing(
        &self,
        catalog: &mut UpgradeCatalog,
        balance: CurrencyBalance,
        defaults: &[SeedItem],
    ) -> GameResult<usize> {
        let inserted = catalog.seed_defaults(defaults);
        if inserted.is_empty() {
            return Ok(0);
        }
        self.save(catalog, balance)?;
        Ok(inserted.len())
    }

    /// Saves `catalog` with `updated` in place of its current entry and the
    /// debited balance. One write: either both land or neither does.
    pub fn commit_purchase(
        &self,
        catalog: &UpgradeCatalog,
        updated: &UpgradeItem,
        clicks: u64,
    ) -> GameResult<()> {
        let mut record = SaveRecord::capture(catalog, CurrencyBalance::new(clicks));
        record.items.insert(updated.name.clone(), updated.clone());
        self.write(&record)
    }

    fn write(&self, record: &SaveRecord) -> GameResult<()> {
        let raw = serde_json::to_string(record)?;
        self.records.set(SAVE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_seed_items;

    fn store() -> (Rc<MemoryStorage>, GameStore) {
        let mem = Rc::new(MemoryStorage::new());
        let store = GameStore::new(mem.clone());
        (mem, store)
    }

    fn seeded(store: &GameStore, clicks: u64) -> UpgradeCatalog {
        let mut catalog = UpgradeCatalog::default();
        store
            .seed_missing(&mut catalog, CurrencyBalance::new(clicks), &default_seed_items())
            .unwrap();
        catalog
    }

    #[test]
    fn first_launch_loads_an_empty_save() {
        let (_, store) = store();
        assert_eq!(store.load().unwrap(), SaveRecord::default());
    }

    #[test]
    fn save_round_trips_balance_and_items() {
        let (_, store) = store();
        let mut cursor = UpgradeItem::new("Cursor", 1, 1);
        cursor.amount_purchased = 4;
        let catalog = UpgradeCatalog::from_items(vec![cursor]);
        store.save(&catalog, CurrencyBalance::new(42)).unwrap();

        let (balance, loaded) = store.load().unwrap().into_parts();
        assert_eq!(balance.clicks, 42);
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn seed_missing_writes_only_when_something_was_added() {
        let (mem, store) = store();
        let mut catalog = seeded(&store, 0);
        assert_eq!(catalog.len(), 2);
        let first = mem.raw(SAVE_KEY);

        mem.fail_writes(SAVE_KEY);
        let again = store
            .seed_missing(&mut catalog, CurrencyBalance::default(), &default_seed_items())
            .unwrap();
        assert_eq!(again, 0);
        assert_eq!(mem.raw(SAVE_KEY), first);
    }

    #[test]
    fn corrupt_save_is_reported() {
        let (mem, store) = store();
        mem.set(SAVE_KEY, r#"{ "clicks": "lots" }"#).unwrap();
        assert!(matches!(
            store.load(),
            Err(GameError::InvalidRecord { key, .. }) if key == SAVE_KEY
        ));
    }

    #[test]
    fn commit_is_a_single_write() {
        let (mem, store) = store();
        let catalog = seeded(&store, 5);
        let before = mem.write_count(SAVE_KEY);

        let mut bought = catalog.get("Cursor").unwrap().clone();
        bought.amount_purchased = 1;
        store.commit_purchase(&catalog, &bought, 4).unwrap();

        assert_eq!(mem.write_count(SAVE_KEY), before + 1);
        let (balance, loaded) = store.load().unwrap().into_parts();
        assert_eq!(balance.clicks, 4);
        assert_eq!(loaded.get("Cursor").map(|i| i.amount_purchased), Some(1));
        assert_eq!(loaded.get("Test Item").map(|i| i.amount_purchased), Some(0));
    }

    #[test]
    fn rejected_commit_stores_neither_debit_nor_item() {
        let (mem, store) = store();
        // The seed write goes through, the purchase write does not.
        mem.fail_writes_after(SAVE_KEY, 1);
        let catalog = seeded(&store, 5);

        let mut bought = catalog.get("Cursor").unwrap().clone();
        bought.amount_purchased = 1;
        assert!(store.commit_purchase(&catalog, &bought, 4).is_err());

        let (balance, loaded) = store.load().unwrap().into_parts();
        assert_eq!(balance.clicks, 5);
        assert_eq!(loaded.get("Cursor").map(|i| i.amount_purchased), Some(0));
    }

    #[test]
    fn missing_fields_default() {
        let (mem, store) = store();
        mem.set(SAVE_KEY, r#"{ "clicks": 3 }"#).unwrap();
        let record = store.load().unwrap();
        assert_eq!(record.clicks, 3);
        assert!(record.items.is_empty());
    }

    #[test]
    fn config_override_is_read_from_records() {
        let (mem, store) = store();
        assert_eq!(store.load_config().unwrap(), None);
        mem.set(CONFIG_KEY, r#"{ "tick_interval_ms": 500 }"#).unwrap();
        let cfg = store.load_config().unwrap().unwrap();
        assert_eq!(cfg.tick_interval_ms, 500);
    }
}
