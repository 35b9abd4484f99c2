//! Player character: pose, vitals, jump, lasso and movement.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
