// Passive income and manual clicks.
use crate::model::{CurrencyBalance, UpgradeCatalog};

/// Clicks earned per second from owned upgrades.
pub fn passive_income_rate(catalog: &UpgradeCatalog) -> u64 {
    catalog
        .iter()
        .fold(0u64, |acc, item| acc.saturating_add(item.income()))
}

/// One period of passive income. Driven by the game-screen ticker only while
/// that screen is visible; time spent elsewhere is never paid out.
pub fn tick(balance: &mut CurrencyBalance, rate: u64) {
    balance.credit(rate);
}

pub fn manual_click(balance: &mut CurrencyBalance) {
    balance.credit(1);
}
