//! Boss AI: wandering, the proximity-gated melee swing and ranged throws.

use super::types::{Boss, Projectile};
use crate::core::constants::{
    BOSS_BOUND, BOSS_CLOSE_RANGE, BOSS_FAR_RANGE, BOSS_MOVE_SPEED, BOSS_PROXIMITY_THRESHOLD,
    BOSS_SWING_COUNTDOWN, BOSS_SWING_DAMAGE, BOSS_SWING_DURATION, BOSS_THROW_COOLDOWN,
    BOSS_TURN_INTERVAL, PROJECTILE_SPEED,
};
use crate::geometry::{wrap_degrees, Vec2};
use rand::Rng;

/// An attack the boss launched this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossAttack {
    /// Melee swing that connects with the player.
    Swing { damage: u32 },
    /// A projectile was thrown at the player's position.
    Throw,
}

/// Runs one frame of boss AI against the player at `target`.
pub fn update_boss<R: Rng>(boss: &mut Boss, target: Vec2, rng: &mut R) -> Vec<BossAttack> {
    let mut attacks = Vec::new();
    if !boss.is_active() {
        return attacks;
    }

    let distance = boss.position.distance_to(target);

    wander(boss, rng);
    boss.swing_frames = boss.swing_frames.saturating_sub(1);

    if let Some(attack) = melee_gate(boss, distance) {
        attacks.push(attack);
    }
    if let Some(attack) = ranged_gate(boss, target, distance) {
        attacks.push(attack);
    }
    attacks
}

/// Drifts along the current heading, picking a new one periodically and
/// reflecting off the room bounds one axis at a time.
fn wander<R: Rng>(boss: &mut Boss, rng: &mut R) {
    boss.move_timer += 1;
    if boss.move_timer > BOSS_TURN_INTERVAL {
        boss.move_timer = 0;
        boss.heading = rng.gen_range(0..360) as f64;
    }

    let next = boss.position + Vec2::from_angle(boss.heading).scale(BOSS_MOVE_SPEED);
    if next.x.abs() < BOSS_BOUND {
        boss.position.x = next.x;
    } else {
        boss.heading = wrap_degrees(180.0 - boss.heading);
    }
    if next.y.abs() < BOSS_BOUND {
        boss.position.y = next.y;
    } else {
        boss.heading = wrap_degrees(-boss.heading);
    }
}

/// Close range: after the player lingers for the proximity threshold, a
/// second countdown fires one swing per cycle. Stepping away resets both.
fn melee_gate(boss: &mut Boss, distance: f64) -> Option<BossAttack> {
    if distance >= BOSS_CLOSE_RANGE {
        boss.player_close = false;
        boss.proximity_timer = 0;
        boss.swing_countdown = 0;
        return None;
    }
    if !boss.player_close {
        boss.player_close = true;
        boss.proximity_timer = 0;
        return None;
    }

    boss.proximity_timer += 1;
    if boss.proximity_timer < BOSS_PROXIMITY_THRESHOLD {
        return None;
    }
    boss.swing_countdown += 1;
    if boss.swing_countdown < BOSS_SWING_COUNTDOWN {
        return None;
    }
    boss.swing_countdown = 0;
    boss.swing_frames = BOSS_SWING_DURATION;
    Some(BossAttack::Swing {
        damage: BOSS_SWING_DAMAGE,
    })
}

/// Far range: throw a projectile at the player every cooldown.
fn ranged_gate(boss: &mut Boss, target: Vec2, distance: f64) -> Option<BossAttack> {
    if distance <= BOSS_FAR_RANGE {
        return None;
    }
    boss.throw_timer += 1;
    if boss.throw_timer < BOSS_THROW_COOLDOWN {
        return None;
    }
    boss.throw_timer = 0;
    let velocity = Vec2::from_angle(boss.position.bearing_to(target)).scale(PROJECTILE_SPEED);
    boss.projectiles.push(Projectile {
        kind: boss.kind.projectile(),
        position: boss.position,
        velocity,
        age: 0,
    });
    Some(BossAttack::Throw)
}
