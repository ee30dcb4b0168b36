//! Unified error handling for the game core and its storage backends.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum GameError {
    /// Backing store could not be opened, read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// JavaScript interop error.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// No shop item carries this name.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The auth gate is closed; the game surface is not reachable.
    #[error("Game is locked until the password is entered")]
    Locked,

    /// A persisted record exists but does not parse.
    #[error("Invalid record under `{key}`: {reason}")]
    InvalidRecord { key: String, reason: String },
}

impl From<JsValue> for GameError {
    fn from(js_val: JsValue) -> Self {
        let message = js_val
            .as_string()
            .unwrap_or_else(|| "Unknown JavaScript error".to_string());
        GameError::JavaScript(message)
    }
}

pub type GameResult<T> = Result<T, GameError>;
