//! Hit resolution between the player, room enemies, the boss and projectiles.

use crate::boss::Projectile;
use crate::core::constants::{
    ENEMY_CONTACT_RADIUS, ENEMY_DEFEAT_SCORE, LASSO_BOSS_HIT_RADIUS, LASSO_ENEMY_HIT_RADIUS,
    LASSO_REACH, PROJECTILE_DESPAWN_EXTENT, PROJECTILE_HIT_RADIUS,
};
use crate::geometry::{project, Vec2};
use crate::level::{EnemyId, Room};
use crate::player::Player;

/// Where the lasso loop lands this frame.
pub fn lasso_point(player: &Player) -> Vec2 {
    project(player.position, player.facing, LASSO_REACH)
}

/// Catches every active enemy near the lasso point that the current swing
/// has not caught yet. Each catch scores once.
pub fn lasso_enemies(room: &mut Room, room_index: usize, player: &mut Player) -> Vec<EnemyId> {
    if !player.lasso.active {
        return Vec::new();
    }
    let reach = lasso_point(player);
    let mut caught = Vec::new();
    for (slot, enemy) in room.enemies.iter_mut().enumerate() {
        let id = EnemyId {
            room: room_index,
            slot,
        };
        if !enemy.is_active()
            || player.lasso.hits.contains(&id)
            || enemy.position.distance_to(reach) >= LASSO_ENEMY_HIT_RADIUS
        {
            continue;
        }
        enemy.defeat();
        player.lasso.hits.insert(id);
        caught.push(id);
    }
    player.add_score(ENEMY_DEFEAT_SCORE * caught.len() as u64);
    caught
}

/// True when an active swing reaches the boss and the per-boss hit window
/// is open. Consumes the window on success.
pub fn lasso_reaches_boss(player: &mut Player, boss_position: Vec2) -> bool {
    player.lasso.active
        && lasso_point(player).distance_to(boss_position) < LASSO_BOSS_HIT_RADIUS
        && player.lasso.try_boss_hit()
}

/// Counts enemies that touch the player this frame. Each enemy has its own
/// cooldown so a lingering enemy does not hit every frame.
pub fn enemy_contacts(room: &mut Room, player_position: Vec2) -> usize {
    let mut hits = 0;
    for enemy in room.enemies.iter_mut().filter(|e| e.is_active()) {
        let ready = enemy.tick_cooldown();
        if ready && enemy.position.distance_to(player_position) < ENEMY_CONTACT_RADIUS {
            enemy.start_cooldown();
            hits += 1;
        }
    }
    hits
}

/// Moves projectiles and removes the ones that hit the player or left the
/// room. Returns how many hit.
pub fn update_projectiles(projectiles: &mut Vec<Projectile>, player_position: Vec2) -> usize {
    let mut hits = 0;
    projectiles.retain_mut(|p| {
        p.position += p.velocity;
        p.age += 1;
        if p.position.distance_to(player_position) < PROJECTILE_HIT_RADIUS {
            hits += 1;
            return false;
        }
        p.position.x.abs() <= PROJECTILE_DESPAWN_EXTENT
            && p.position.y.abs() <= PROJECTILE_DESPAWN_EXTENT
    });
    hits
}

/// Defeats every active enemy in the room. The ray awards no score.
pub fn ray_blast(room: &mut Room, room_index: usize) -> Vec<EnemyId> {
    room.enemies
        .iter_mut()
        .enumerate()
        .filter_map(|(slot, enemy)| {
            enemy.defeat().then_some(EnemyId {
                room: room_index,
                slot,
            })
        })
        .collect()
}
