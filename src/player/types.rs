//! Player state.

use crate::core::constants::{
    LASSO_BOSS_COOLDOWN, LASSO_DURATION, MAX_HEALTH, PLAYER_START_ANGLE, PLAYER_START_X,
    PLAYER_START_Y, STARTING_LIVES,
};
use crate::geometry::Vec2;
use crate::level::EnemyId;
use crate::powers::Powers;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Vertical jump state. Height lives on the player; this holds the motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpState {
    pub velocity: f64,
    pub airborne: bool,
}

/// The melee lasso swing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LassoState {
    pub active: bool,
    /// Frames elapsed in the current swing.
    pub timer: u32,
    /// Enemies caught by the current swing.
    pub hits: BTreeSet<EnemyId>,
    /// Frames before the boss can be damaged again.
    pub boss_cooldown: u32,
}

impl LassoState {
    /// Starts a swing. Ignored while one is already running.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.timer = 0;
        self.hits.clear();
        true
    }

    /// Advances the swing timer, ending the swing after its window.
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }
        self.timer += 1;
        if self.timer >= LASSO_DURATION {
            self.active = false;
            self.timer = 0;
        }
    }

    pub fn tick_boss_cooldown(&mut self) {
        self.boss_cooldown = self.boss_cooldown.saturating_sub(1);
    }

    /// Consumes the boss-hit window if it is open.
    pub fn try_boss_hit(&mut self) -> bool {
        if self.boss_cooldown > 0 {
            return false;
        }
        self.boss_cooldown = LASSO_BOSS_COOLDOWN;
        true
    }
}

/// Result of applying damage to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeOutcome {
    /// Health dropped but stayed above zero.
    Hurt,
    /// Health ran out, a life was spent and health refilled.
    LifeLost { lives_left: u32 },
    /// Health ran out with no lives to spare.
    OutOfLives,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    /// Height above the floor while jumping.
    pub height: f64,
    /// Facing in degrees, always in [0, 360).
    pub facing: f64,
    /// Percentage in [0, 100].
    pub health: u32,
    pub lives: u32,
    /// Never decreases during a session.
    pub score: u64,
    pub jump: JumpState,
    pub lasso: LassoState,
    pub powers: Powers,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A fresh player at the start of a session.
    pub fn new() -> Self {
        Self {
            position: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            height: 0.0,
            facing: PLAYER_START_ANGLE,
            health: MAX_HEALTH,
            lives: STARTING_LIVES,
            score: 0,
            jump: JumpState::default(),
            lasso: LassoState::default(),
            powers: Powers::new(),
        }
    }

    /// Resets pose, health and abilities for a new level. Lives and score
    /// carry over.
    pub fn reset_for_level(&mut self) {
        let lives = self.lives;
        let score = self.score;
        *self = Self {
            lives,
            score,
            ..Self::new()
        };
    }

    pub fn is_on_ground(&self) -> bool {
        !self.jump.airborne
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0 && self.health == 0
    }

    /// Subtracts `amount` health, spending a life when it runs out.
    pub fn apply_damage(&mut self, amount: u32) -> LifeOutcome {
        self.health = self.health.saturating_sub(amount);
        if self.health > 0 {
            return LifeOutcome::Hurt;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            self.health = MAX_HEALTH;
            LifeOutcome::LifeLost {
                lives_left: self.lives,
            }
        } else {
            LifeOutcome::OutOfLives
        }
    }

    pub fn restore_health(&mut self) {
        self.health = MAX_HEALTH;
    }

    pub fn gain_life(&mut self) {
        self.lives = self.lives.saturating_add(1);
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new();
        assert_eq!(player.health, 100);
        assert_eq!(player.lives, 3);
        assert_eq!(player.score, 0);
        assert_eq!(player.position, Vec2::new(0.0, 100.0));
        assert_eq!(player.facing, 270.0);
        assert!(player.is_on_ground());
        assert!(!player.lasso.active);
    }

    #[test]
    fn test_damage_without_death() {
        let mut player = Player::new();
        assert_eq!(player.apply_damage(30), LifeOutcome::Hurt);
        assert_eq!(player.health, 70);
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_damage_spends_life_and_refills() {
        let mut player = Player::new();
        player.health = 5;
        player.lives = 2;
        assert_eq!(
            player.apply_damage(5),
            LifeOutcome::LifeLost { lives_left: 1 }
        );
        assert_eq!(player.health, 100);
        assert_eq!(player.lives, 1);
    }

    #[test]
    fn test_overkill_damage_clamps_at_zero() {
        let mut player = Player::new();
        player.health = 3;
        player.lives = 1;
        assert_eq!(player.apply_damage(10), LifeOutcome::OutOfLives);
        assert_eq!(player.health, 0);
        assert_eq!(player.lives, 0);
        assert!(player.is_out_of_lives());
    }

    #[test]
    fn test_reset_for_level_keeps_lives_and_score() {
        let mut player = Player::new();
        player.lives = 5;
        player.score = 1234;
        player.health = 10;
        player.position = Vec2::new(50.0, -200.0);
        player.lasso.start();
        player.reset_for_level();
        assert_eq!(player.lives, 5);
        assert_eq!(player.score, 1234);
        assert_eq!(player.health, 100);
        assert_eq!(player.position, Vec2::new(0.0, 100.0));
        assert!(!player.lasso.active);
    }

    #[test]
    fn test_lasso_window_blocks_restart() {
        let mut lasso = LassoState::default();
        assert!(lasso.start());
        lasso.advance();
        assert!(!lasso.start());
        assert_eq!(lasso.timer, 1);
        for _ in 1..LASSO_DURATION {
            lasso.advance();
        }
        assert!(!lasso.active);
        assert!(lasso.start());
    }

    #[test]
    fn test_boss_cooldown_gates_hits() {
        let mut lasso = LassoState::default();
        assert!(lasso.try_boss_hit());
        assert!(!lasso.try_boss_hit());
        for _ in 0..LASSO_BOSS_COOLDOWN {
            lasso.tick_boss_cooldown();
        }
        assert!(lasso.try_boss_hit());
    }
}
