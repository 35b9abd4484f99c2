//! Per-frame room logic: pickups and enemy pursuit.

use super::types::{CollectibleKind, Room};
use crate::core::constants::{COIN_SCORE, ENEMY_CHASE_SPEED, PICKUP_RADIUS};
use crate::geometry::Vec2;
use crate::player::Player;

/// Collects everything within reach of the player and applies its effect.
/// Returns the kinds collected this frame, star and hat before coins.
pub fn collect_pickups(room: &mut Room, player: &mut Player) -> Vec<CollectibleKind> {
    let mut collected = Vec::new();
    for item in room.collectibles_mut() {
        if !item.is_present() || item.position.distance_to(player.position) >= PICKUP_RADIUS {
            continue;
        }
        item.collect();
        match item.kind {
            CollectibleKind::Star => player.restore_health(),
            CollectibleKind::Hat => player.gain_life(),
            CollectibleKind::Coin => player.add_score(COIN_SCORE),
        }
        collected.push(item.kind);
    }
    collected
}

/// Walks every active enemy one step toward `target`. Frozen rooms hold still.
pub fn advance_enemies(room: &mut Room, target: Vec2, frozen: bool) {
    if frozen {
        return;
    }
    for enemy in room.enemies.iter_mut().filter(|e| e.is_active()) {
        enemy.position.step_toward(target, ENEMY_CHASE_SPEED);
    }
}
