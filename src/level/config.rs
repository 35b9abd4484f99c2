//! Static per-level configuration.

use serde::{Deserialize, Serialize};

/// One of the three playable levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Level for a 0-based index; out-of-range indices fall back to `One`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Level::One)
    }

    /// Level for its 1-based number, if it exists.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            _ => None,
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    /// The level that follows this one, or `None` after the final level.
    pub fn next(&self) -> Option<Self> {
        match self {
            Level::One => Some(Level::Two),
            Level::Two => Some(Level::Three),
            Level::Three => None,
        }
    }

    pub fn config(&self) -> LevelConfig {
        match self {
            Level::One => LevelConfig {
                level: *self,
                total_rooms: 7,
                enemy_min: 5,
                enemy_max: 10,
                enemy_kind: EnemyKind::GreenArmyMan,
                boss: BossKind::PotatoHead,
                companion: Companion::Jessie,
                power_tier: PowerTier::None,
            },
            Level::Two => LevelConfig {
                level: *self,
                total_rooms: 10,
                enemy_min: 5,
                enemy_max: 15,
                enemy_kind: EnemyKind::RedMonkey,
                boss: BossKind::Lotso,
                companion: Companion::Buzz,
                power_tier: PowerTier::FreezeOnly,
            },
            Level::Three => LevelConfig {
                level: *self,
                total_rooms: 15,
                enemy_min: 5,
                enemy_max: 20,
                enemy_kind: EnemyKind::Benson,
                boss: BossKind::Gabby,
                companion: Companion::BoPeep,
                power_tier: PowerTier::Full,
            },
        }
    }
}

/// Which rank-and-file enemy populates a level. Visual only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    GreenArmyMan,
    RedMonkey,
    Benson,
}

/// The boss waiting in a level's final room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossKind {
    PotatoHead,
    Lotso,
    Gabby,
}

impl BossKind {
    /// Lasso hits needed to defeat this boss.
    pub fn max_health(&self) -> u32 {
        match self {
            BossKind::PotatoHead => 20,
            BossKind::Lotso => 30,
            BossKind::Gabby => 50,
        }
    }

    /// What this boss throws when the player keeps their distance.
    pub fn projectile(&self) -> ProjectileKind {
        match self {
            BossKind::PotatoHead => ProjectileKind::BlueBall,
            BossKind::Lotso => ProjectileKind::RedBall,
            BossKind::Gabby => ProjectileKind::Cup,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BossKind::PotatoHead => "Mr. Potato Head",
            BossKind::Lotso => "Lotso",
            BossKind::Gabby => "Gabby Gabby",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    BlueBall,
    RedBall,
    Cup,
}

/// The caged friend rescued at the end of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Companion {
    Jessie,
    Buzz,
    BoPeep,
}

impl Companion {
    pub fn name(&self) -> &'static str {
        match self {
            Companion::Jessie => "Jessie",
            Companion::Buzz => "Buzz",
            Companion::BoPeep => "Bo Peep",
        }
    }
}

/// Which special powers a level unlocks. Level 2 enables the freeze power
/// without the ray, so this is table data rather than a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerTier {
    None,
    FreezeOnly,
    Full,
}

impl PowerTier {
    pub fn freeze_enabled(&self) -> bool {
        matches!(self, PowerTier::FreezeOnly | PowerTier::Full)
    }

    pub fn ray_enabled(&self) -> bool {
        matches!(self, PowerTier::Full)
    }
}

/// Immutable description of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub level: Level,
    /// Rooms including the boss room (always the last index).
    pub total_rooms: usize,
    pub enemy_min: usize,
    pub enemy_max: usize,
    pub enemy_kind: EnemyKind,
    pub boss: BossKind,
    pub companion: Companion,
    pub power_tier: PowerTier,
}

impl LevelConfig {
    pub fn boss_room(&self) -> usize {
        self.total_rooms - 1
    }

    pub fn is_boss_room(&self, room: usize) -> bool {
        room == self.boss_room()
    }
}
