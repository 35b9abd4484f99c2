//! Seeded procedural content for a level.
//!
//! The RNG is seeded from the level number alone, so re-entering a level
//! always rebuilds the same rooms.

use super::config::{Level, LevelConfig};
use super::types::{Collectible, CollectibleKind, Enemy, LevelContent, Room};
use crate::core::constants::{
    COIN_COUNT_MAX, COIN_COUNT_MIN, COIN_EXTENT, ENEMY_GROWTH_DENOMINATOR, ENEMY_GROWTH_NUMERATOR,
    ENEMY_X_EXTENT, ENEMY_Y_MAX, ENEMY_Y_MIN, FURNITURE_LAYOUT_COUNT, HAT_CHANCE,
    LEVEL_SEED_BASE, LEVEL_SEED_STRIDE, STAR_CHANCE, STAR_HAT_EXTENT,
};
use crate::geometry::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used for a level's content.
pub fn level_seed(level: Level) -> u64 {
    LEVEL_SEED_BASE + level.number() as u64 * LEVEL_SEED_STRIDE
}

/// Generates the full content of `level`.
pub fn generate_level(level: Level) -> LevelContent {
    let mut rng = ChaCha8Rng::seed_from_u64(level_seed(level));
    generate_with_rng(level.config(), &mut rng)
}

/// Generates content for `config` from an arbitrary RNG.
///
/// Draw order is stars/hats for every room, then coins, then enemies, so a
/// change to one pass never shifts another's positions for the same seed.
pub fn generate_with_rng(config: LevelConfig, rng: &mut impl Rng) -> LevelContent {
    let mut rooms: Vec<Room> = (0..config.total_rooms)
        .map(|index| Room {
            layout: index % FURNITURE_LAYOUT_COUNT,
            ..Default::default()
        })
        .collect();
    let boss_room = config.boss_room();

    for room in rooms.iter_mut().take(boss_room) {
        if rng.gen_bool(STAR_CHANCE) {
            let position = random_point(rng, STAR_HAT_EXTENT);
            room.star = Some(Collectible::new(CollectibleKind::Star, position));
        }
        if rng.gen_bool(HAT_CHANCE) {
            let position = random_point(rng, STAR_HAT_EXTENT);
            room.hat = Some(Collectible::new(CollectibleKind::Hat, position));
        }
    }

    for room in rooms.iter_mut().take(boss_room) {
        let count = rng.gen_range(COIN_COUNT_MIN..=COIN_COUNT_MAX);
        room.coins = (0..count)
            .map(|_| Collectible::new(CollectibleKind::Coin, random_point(rng, COIN_EXTENT)))
            .collect();
    }

    for (index, room) in rooms.iter_mut().enumerate().take(boss_room) {
        let count = enemy_count(&config, index);
        room.enemies = (0..count)
            .map(|_| {
                let x = rng.gen_range(-ENEMY_X_EXTENT..=ENEMY_X_EXTENT);
                let y = rng.gen_range(ENEMY_Y_MIN..=ENEMY_Y_MAX);
                Enemy::new(Vec2::new(x, y))
            })
            .collect();
    }

    LevelContent { config, rooms }
}

/// Enemies generated in room `room`.
///
/// The entry room and the boss room are empty; room 1 gets the level
/// minimum and each further room adds 1.25 enemies (floored), capped at
/// the level maximum.
pub fn enemy_count(config: &LevelConfig, room: usize) -> usize {
    if room == 0 || room >= config.boss_room() {
        return 0;
    }
    let growth = (room - 1) * ENEMY_GROWTH_NUMERATOR / ENEMY_GROWTH_DENOMINATOR;
    (config.enemy_min + growth).min(config.enemy_max)
}

fn random_point(rng: &mut impl Rng, extent: f64) -> Vec2 {
    Vec2::new(
        rng.gen_range(-extent..=extent),
        rng.gen_range(-extent..=extent),
    )
}
