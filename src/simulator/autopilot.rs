//! A simple scripted player for headless runs.

use crate::core::constants::{DOOR_TRIGGER_Y, LASSO_ENEMY_HIT_RADIUS, LASSO_REACH};
use crate::core::game_state::{GameState, Screen};
use crate::core::input::InputFrame;
use crate::geometry::{shortest_angle_delta, Vec2};
use crate::level::Level;

/// Heading error (degrees) under which the autopilot stops turning.
const AIM_TOLERANCE: f64 = 2.0;
/// Heading error (degrees) under which it walks while still turning.
const WALK_CONE: f64 = 45.0;

/// Picks inputs each frame: clears the room with the lasso, walks to the
/// far door, then fights the boss. Powers are used as soon as they are
/// ready and there is something to hit.
#[derive(Debug, Clone)]
pub struct Autopilot {
    level: Level,
}

impl Autopilot {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn next_input(&self, state: &GameState) -> InputFrame {
        match state.screen {
            Screen::Menu => InputFrame::confirm(),
            Screen::LevelSelect => InputFrame::select(self.level),
            Screen::Fade { .. } | Screen::GameOver { .. } => InputFrame::idle(),
            Screen::Playing => self.play(state),
        }
    }

    fn play(&self, state: &GameState) -> InputFrame {
        let world = &state.world;
        let player = &state.player;
        if world.win.is_running() {
            return InputFrame::idle();
        }

        let (target, hostile) = if world.in_boss_room() {
            (world.boss.position, world.boss.is_active())
        } else {
            match nearest_enemy(state) {
                Some(enemy) => (enemy, true),
                None => (far_door(), false),
            }
        };

        let mut input = InputFrame::default();
        let error = shortest_angle_delta(player.facing, player.position.bearing_to(target));
        if error > AIM_TOLERANCE {
            input.turn_left = true;
        } else if error < -AIM_TOLERANCE {
            input.turn_right = true;
        }

        let distance = player.position.distance_to(target);
        let strike_range = LASSO_REACH + LASSO_ENEMY_HIT_RADIUS * 0.5;
        if error.abs() < WALK_CONE && (!hostile || distance > strike_range) {
            input.move_forward = true;
        }
        if hostile && distance < LASSO_REACH + LASSO_ENEMY_HIT_RADIUS && !player.lasso.active {
            input.lasso = true;
        }

        let tier = world.config().power_tier;
        let crowded = world.current_room().active_enemy_count() >= 3;
        if tier.freeze_enabled() && crowded && player.powers.freeze.is_ready() {
            input.freeze_power = true;
        }
        if tier.ray_enabled() && player.powers.ray.is_ready() && (crowded || world.in_boss_room())
        {
            input.ray_power = true;
        }
        input
    }
}

fn nearest_enemy(state: &GameState) -> Option<Vec2> {
    let position = state.player.position;
    state
        .world
        .current_room()
        .enemies
        .iter()
        .filter(|e| e.is_active())
        .map(|e| e.position)
        .min_by(|a, b| position.distance_to(*a).total_cmp(&position.distance_to(*b)))
}

/// A point just past the far door, so walking at it crosses the trigger.
fn far_door() -> Vec2 {
    Vec2::new(0.0, -DOOR_TRIGGER_Y - 10.0)
}
