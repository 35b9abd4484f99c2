//! Per-frame input snapshot consumed by the game tick.
//!
//! Front ends translate raw key events into one `InputFrame` per frame.
//! Movement fields are "held" states; the rest are edges that fire once.

use crate::level::Level;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub move_forward: bool,
    pub move_backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub jump: bool,
    pub lasso: bool,
    pub freeze_power: bool,
    pub ray_power: bool,
    /// Leaves the title menu.
    pub confirm: bool,
    /// Picks a level on the level-select screen.
    pub select_level: Option<Level>,
}

impl InputFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    pub fn select(level: Level) -> Self {
        Self {
            select_level: Some(level),
            ..Self::default()
        }
    }
}
