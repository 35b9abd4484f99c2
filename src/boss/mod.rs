//! The end-of-level boss: state, wandering AI and attacks.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
