pub mod auth;
pub mod economy;
pub mod session;
pub mod shop;
pub mod storage;
pub mod ticker;

pub use session::GameSession;
pub use shop::PurchaseOutcome;
pub use storage::{BrowserStorage, GameStore, KeyValueStore, MemoryStorage};
pub use ticker::Ticker;
