//! Core game state, the per-frame tick and the render snapshot.

pub mod constants;
pub mod game_state;
pub mod input;
pub mod snapshot;
pub mod tick;

pub use game_state::*;
pub use input::*;
pub use snapshot::*;
pub use tick::*;
