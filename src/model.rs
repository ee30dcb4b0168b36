//! Core data models for Duck Clicker.
//! Shop items, the click balance and the upgrade catalog live here; the
//! economy rules that act on them are in `state::economy`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{GameError, GameResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeItem {
    /// Unique identifier, also shown as the label in the shop.
    pub name: String,
    /// Cost of one unit in clicks.
    pub price: u64,
    /// Passive income added per owned unit.
    pub clicks_per_second: u64,
    pub amount_purchased: u64,
}

impl UpgradeItem {
    pub fn new(name: impl Into<String>, price: u64, clicks_per_second: u64) -> Self {
        Self {
            name: name.into(),
            price,
            clicks_per_second,
            amount_purchased: 0,
        }
    }

    /// Income this item contributes at its current quantity.
    pub fn income(&self) -> u64 {
        self.clicks_per_second.saturating_mul(self.amount_purchased)
    }
}

/// Definition used to seed the catalog on first launch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    pub price: u64,
    pub clicks_per_second: u64,
}

impl SeedItem {
    pub fn new(name: &str, price: u64, clicks_per_second: u64) -> Self {
        Self {
            name: name.to_string(),
            price,
            clicks_per_second,
        }
    }
}

pub fn default_seed_items() -> Vec<SeedItem> {
    vec![SeedItem::new("Cursor", 1, 1), SeedItem::new("Test Item", 2, 100)]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyBalance {
    pub clicks: u64,
}

impl CurrencyBalance {
    pub fn new(clicks: u64) -> Self {
        Self { clicks }
    }

    pub fn credit(&mut self, amount: u64) {
        self.clicks = self.clicks.saturating_add(amount);
    }

    pub fn can_afford(&self, price: u64) -> bool {
        self.clicks >= price
    }

    /// Balance after paying `price`, or `None` if it cannot be paid.
    pub fn after_debit(&self, price: u64) -> Option<u64> {
        self.clicks.checked_sub(price)
    }
}

/// All purchasable upgrades, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpgradeCatalog {
    items: BTreeMap<String, UpgradeItem>,
}

impl UpgradeCatalog {
    /// Builds a catalog from persisted records; a later duplicate name wins.
    pub fn from_items(records: impl IntoIterator<Item = UpgradeItem>) -> Self {
        let mut items = BTreeMap::new();
        for item in records {
            items.insert(item.name.clone(), item);
        }
        Self { items }
    }

    /// Inserts every definition whose name is not present yet and returns the
    /// inserted items. Calling it again with the same definitions is a no-op.
    pub fn seed_defaults(&mut self, defaults: &[SeedItem]) -> Vec<UpgradeItem> {
        let mut inserted = Vec::new();
        for def in defaults {
            if self.items.contains_key(&def.name) {
                continue;
            }
            let item = UpgradeItem::new(def.name.clone(), def.price, def.clicks_per_second);
            self.items.insert(item.name.clone(), item.clone());
            inserted.push(item);
        }
        inserted
    }

    /// Items in shop order: cheapest first, ties broken by name.
    pub fn list(&self) -> Vec<UpgradeItem> {
        let mut out: Vec<UpgradeItem> = self.items.values().cloned().collect();
        out.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.name.cmp(&b.name)));
        out
    }

    pub fn get(&self, name: &str) -> Option<&UpgradeItem> {
        self.items.get(name)
    }

    pub fn increment_owned(&mut self, name: &str) -> GameResult<&UpgradeItem> {
        let item = self
            .items
            .get_mut(name)
            .ok_or_else(|| GameError::ItemNotFound(name.to_string()))?;
        item.amount_purchased = item.amount_purchased.saturating_add(1);
        Ok(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UpgradeItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
