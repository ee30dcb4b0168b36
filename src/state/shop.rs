use crate::error::{GameError, GameResult};
use crate::model::{CurrencyBalance, UpgradeCatalog};

use super::storage::GameStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { name: String, owned: u64, remaining: u64 },
    /// Not enough clicks; nothing was changed.
    InsufficientFunds { price: u64, balance: u64 },
}

/// Buys upgrades. Affordability is checked here against live state, whatever
/// the shop screen showed when the button was pressed.
#[derive(Clone)]
pub struct ShopController {
    store: GameStore,
}

impl ShopController {
    pub fn new(store: GameStore) -> Self {
        Self { store }
    }

    pub fn purchase(
        &self,
        catalog: &mut UpgradeCatalog,
        balance: &mut CurrencyBalance,
        name: &str,
    ) -> GameResult<PurchaseOutcome> {
        let item = catalog
            .get(name)
            .ok_or_else(|| GameError::ItemNotFound(name.to_string()))?;
        let Some(remaining) = balance.after_debit(item.price) else {
            return Ok(PurchaseOutcome::InsufficientFunds {
                price: item.price,
                balance: balance.clicks,
            });
        };

        let mut updated = item.clone();
        updated.amount_purchased = updated.amount_purchased.saturating_add(1);
        // Persist first so a failed write leaves memory untouched too.
        self.store.commit_purchase(catalog, &updated, remaining)?;

        balance.clicks = remaining;
        let owned = catalog.increment_owned(name)?.amount_purchased;
        tracing::info!(item = name, owned, remaining, "upgrade purchased");
        Ok(PurchaseOutcome::Purchased {
            name: name.to_string(),
            owned,
            remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_seed_items;
    use crate::state::economy::passive_income_rate;
    use crate::state::storage::{MemoryStorage, SAVE_KEY};
    use std::rc::Rc;

    fn setup(clicks: u64) -> (Rc<MemoryStorage>, GameStore, UpgradeCatalog, CurrencyBalance) {
        let mem = Rc::new(MemoryStorage::new());
        let store = GameStore::new(mem.clone());
        let mut catalog = UpgradeCatalog::default();
        let balance = CurrencyBalance::new(clicks);
        store
            .seed_missing(&mut catalog, balance, &default_seed_items())
            .unwrap();
        (mem, store, catalog, balance)
    }

    #[test]
    fn purchase_debits_and_persists() {
        let (_, store, mut catalog, mut balance) = setup(3);
        let shop = ShopController::new(store.clone());

        let outcome = shop.purchase(&mut catalog, &mut balance, "Test Item").unwrap();

        assert_eq!(
            outcome,
            PurchaseOutcome::Purchased { name: "Test Item".into(), owned: 1, remaining: 1 }
        );
        assert_eq!(balance.clicks, 1);
        let (saved, persisted) = store.load().unwrap().into_parts();
        assert_eq!(saved.clicks, 1);
        assert_eq!(persisted, catalog);
    }

    #[test]
    fn insufficient_funds_changes_nothing() {
        let (_, store, mut catalog, mut balance) = setup(1);
        let shop = ShopController::new(store);
        let before = catalog.clone();

        let outcome = shop.purchase(&mut catalog, &mut balance, "Test Item").unwrap();

        assert_eq!(outcome, PurchaseOutcome::InsufficientFunds { price: 2, balance: 1 });
        assert_eq!(balance.clicks, 1);
        assert_eq!(catalog, before);
    }

    #[test]
    fn unknown_item_is_an_error() {
        let (_, store, mut catalog, mut balance) = setup(10);
        let shop = ShopController::new(store);
        assert!(matches!(
            shop.purchase(&mut catalog, &mut balance, "Golden Duck"),
            Err(GameError::ItemNotFound(_))
        ));
        assert_eq!(balance.clicks, 10);
    }

    #[test]
    fn failed_commit_leaves_state_untouched() {
        let (mem, store, mut catalog, mut balance) = setup(5);
        let shop = ShopController::new(store.clone());
        let before = catalog.clone();
        mem.fail_writes(SAVE_KEY);

        assert!(shop.purchase(&mut catalog, &mut balance, "Cursor").is_err());

        assert_eq!(balance.clicks, 5);
        assert_eq!(catalog, before);
        let (saved, persisted) = store.load().unwrap().into_parts();
        assert_eq!(saved.clicks, 5);
        assert_eq!(persisted, before);
    }

    #[test]
    fn balance_never_underflows_over_many_purchases() {
        let (_, store, mut catalog, mut balance) = setup(7);
        let shop = ShopController::new(store);
        let mut bought = 0;
        for round in 0..20 {
            let name = if round % 3 == 0 { "Test Item" } else { "Cursor" };
            if let PurchaseOutcome::Purchased { .. } =
                shop.purchase(&mut catalog, &mut balance, name).unwrap()
            {
                bought += 1;
            }
        }
        // 7 clicks buy Test Item twice (4) and Cursor three times (3).
        assert_eq!(bought, 5);
        assert_eq!(balance.clicks, 0);
        let expected: u64 = catalog.iter().map(|i| i.clicks_per_second * i.amount_purchased).sum();
        assert_eq!(passive_income_rate(&catalog), expected);
    }
}
