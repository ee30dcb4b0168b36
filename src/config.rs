use serde::{Deserialize, Serialize};

use crate::error::GameResult;
use crate::model::{SeedItem, default_seed_items};

/// Record-store key holding an optional JSON override of [`GameConfig`].
pub const CONFIG_KEY: &str = "config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Namespace for game records in browser storage.
    pub storage_prefix: String,
    /// Namespace for the credential store; kept apart from game records.
    pub credential_prefix: String,
    /// Passive income period in milliseconds.
    pub tick_interval_ms: u32,
    pub seed_items: Vec<SeedItem>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            storage_prefix: "dc_".to_string(),
            credential_prefix: "dc_secure_".to_string(),
            tick_interval_ms: 1000,
            seed_items: default_seed_items(),
        }
    }
}

impl GameConfig {
    /// Parses an override document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> GameResult<Self> {
        let mut cfg: GameConfig = serde_json::from_str(raw)?;
        if cfg.tick_interval_ms == 0 {
            cfg.tick_interval_ms = GameConfig::default().tick_interval_ms;
        }
        Ok(cfg)
    }
}
