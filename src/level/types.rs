//! Per-room entity registry.
//!
//! Rooms live in an arena indexed by room number. Enemies and collectibles
//! are never removed from their room's list; they change tag instead, so a
//! `(room, slot)` pair stays a stable identity for the whole level.

use super::config::LevelConfig;
use crate::core::constants::ENEMY_HIT_COOLDOWN;
use crate::geometry::{furniture_layout, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Stable identity of an enemy within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId {
    pub room: usize,
    pub slot: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyStatus {
    Active,
    /// Removed by the lasso or the ray. Terminal for the level.
    Defeated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vec2,
    pub status: EnemyStatus,
    /// Frames until this enemy can deal contact damage again.
    pub hit_cooldown: u32,
}

impl Enemy {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            status: EnemyStatus::Active,
            hit_cooldown: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EnemyStatus::Active
    }

    /// Marks the enemy defeated. Returns false if it already was.
    pub fn defeat(&mut self) -> bool {
        let was_active = self.is_active();
        self.status = EnemyStatus::Defeated;
        was_active
    }

    /// Ticks the contact cooldown and reports whether a hit is allowed now.
    pub fn tick_cooldown(&mut self) -> bool {
        self.hit_cooldown = self.hit_cooldown.saturating_sub(1);
        self.hit_cooldown == 0
    }

    pub fn start_cooldown(&mut self) {
        self.hit_cooldown = ENEMY_HIT_COOLDOWN;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// Restores full health.
    Star,
    /// Grants an extra life.
    Hat,
    /// Adds score.
    Coin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectState {
    Present,
    /// Terminal for the level.
    Collected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub position: Vec2,
    pub state: CollectState,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, position: Vec2) -> Self {
        Self {
            kind,
            position,
            state: CollectState::Present,
        }
    }

    pub fn is_present(&self) -> bool {
        self.state == CollectState::Present
    }

    /// Collects the item. Returns false if it was already collected.
    pub fn collect(&mut self) -> bool {
        let was_present = self.is_present();
        self.state = CollectState::Collected;
        was_present
    }
}

/// One room's generated content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Collectible>,
    pub star: Option<Collectible>,
    pub hat: Option<Collectible>,
    /// Index into the furniture layouts.
    pub layout: usize,
}

impl Room {
    pub fn active_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_active()).count()
    }

    /// Star, hat and coins in a fixed order.
    pub fn collectibles_mut(&mut self) -> impl Iterator<Item = &mut Collectible> {
        self.star
            .iter_mut()
            .chain(self.hat.iter_mut())
            .chain(self.coins.iter_mut())
    }

    pub fn collectibles(&self) -> impl Iterator<Item = &Collectible> {
        self.star
            .iter()
            .chain(self.hat.iter())
            .chain(self.coins.iter())
    }

    pub fn furniture(&self) -> Vec<Rect> {
        furniture_layout(self.layout)
    }
}

/// All rooms of one level instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelContent {
    pub config: LevelConfig,
    pub rooms: Vec<Room>,
}

impl LevelContent {
    /// Room at `index`; indices past the end resolve to the boss room.
    pub fn room(&self, index: usize) -> &Room {
        &self.rooms[index.min(self.rooms.len() - 1)]
    }

    pub fn room_mut(&mut self, index: usize) -> &mut Room {
        let last = self.rooms.len() - 1;
        &mut self.rooms[index.min(last)]
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.rooms.get(id.room)?.enemies.get(id.slot)
    }

    pub fn total_enemies(&self) -> usize {
        self.rooms.iter().map(|r| r.enemies.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_defeat_is_permanent() {
        let mut enemy = Enemy::new(Vec2::new(0.0, 0.0));
        assert!(enemy.defeat());
        assert!(!enemy.is_active());
        assert!(!enemy.defeat());
        assert_eq!(enemy.status, EnemyStatus::Defeated);
    }

    #[test]
    fn test_enemy_cooldown() {
        let mut enemy = Enemy::new(Vec2::default());
        assert!(enemy.tick_cooldown());
        enemy.start_cooldown();
        for _ in 0..ENEMY_HIT_COOLDOWN - 1 {
            assert!(!enemy.tick_cooldown());
        }
        assert!(enemy.tick_cooldown());
    }

    #[test]
    fn test_collect_once() {
        let mut coin = Collectible::new(CollectibleKind::Coin, Vec2::default());
        assert!(coin.collect());
        assert!(!coin.collect());
        assert_eq!(coin.state, CollectState::Collected);
    }

    #[test]
    fn test_room_collectibles_order() {
        let room = Room {
            star: Some(Collectible::new(CollectibleKind::Star, Vec2::default())),
            coins: vec![Collectible::new(CollectibleKind::Coin, Vec2::default()); 2],
            ..Default::default()
        };
        let kinds: Vec<_> = room.collectibles().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CollectibleKind::Star,
                CollectibleKind::Coin,
                CollectibleKind::Coin
            ]
        );
    }
}
