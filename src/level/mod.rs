//! Levels: per-level configuration, the per-room entity registry,
//! seeded content generation and pickup/chase logic.

pub mod config;
pub mod generation;
pub mod logic;
pub mod types;

pub use config::*;
pub use generation::*;
pub use logic::*;
pub use types::*;
