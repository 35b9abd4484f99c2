//! Boss data structures.

use crate::core::constants::{BOSS_SPAWN_X, BOSS_SPAWN_Y};
use crate::geometry::Vec2;
use crate::level::{BossKind, ProjectileKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossStatus {
    /// Waiting for the player to reach the boss room.
    Dormant,
    /// Wandering and attacking.
    Active,
    /// Health ran out. Terminal for the level.
    Defeated,
}

/// A thrown object flying toward where the player stood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Frames since it was thrown.
    pub age: u32,
}

/// Result of damaging the boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossHit {
    Damaged { health_left: u32 },
    Defeated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub kind: BossKind,
    pub status: BossStatus,
    pub position: Vec2,
    pub health: u32,
    pub max_health: u32,
    /// Wandering heading in degrees.
    pub heading: f64,
    /// Frames since the heading last changed.
    pub move_timer: u32,
    /// Whether the player was within close range last frame.
    pub player_close: bool,
    /// Frames the player has stayed close.
    pub proximity_timer: u32,
    /// Counts up to the next melee swing once proximity is established.
    pub swing_countdown: u32,
    /// Frames of swing animation left.
    pub swing_frames: u32,
    /// Counts up to the next throw while the player keeps away.
    pub throw_timer: u32,
    pub projectiles: Vec<Projectile>,
}

impl Boss {
    pub fn new(kind: BossKind) -> Self {
        Self {
            kind,
            status: BossStatus::Dormant,
            position: Vec2::new(BOSS_SPAWN_X, BOSS_SPAWN_Y),
            health: kind.max_health(),
            max_health: kind.max_health(),
            heading: 0.0,
            move_timer: 0,
            player_close: false,
            proximity_timer: 0,
            swing_countdown: 0,
            swing_frames: 0,
            throw_timer: 0,
            projectiles: Vec::new(),
        }
    }

    /// Places the boss in its room with a full health pool and no stale
    /// projectiles.
    pub fn spawn(&mut self) {
        *self = Self {
            status: BossStatus::Active,
            ..Self::new(self.kind)
        };
    }

    pub fn is_active(&self) -> bool {
        self.status == BossStatus::Active
    }

    pub fn is_defeated(&self) -> bool {
        self.status == BossStatus::Defeated
    }

    pub fn is_swinging(&self) -> bool {
        self.swing_frames > 0
    }

    /// Applies damage. Returns `None` when the boss is not active.
    pub fn take_damage(&mut self, amount: u32) -> Option<BossHit> {
        if !self.is_active() {
            return None;
        }
        self.health = self.health.saturating_sub(amount);
        if self.health > 0 {
            return Some(BossHit::Damaged {
                health_left: self.health,
            });
        }
        self.status = BossStatus::Defeated;
        self.swing_frames = 0;
        self.projectiles.clear();
        Some(BossHit::Defeated)
    }
}
