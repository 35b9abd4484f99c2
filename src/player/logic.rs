//! Player movement, turning and jumping.

use super::types::Player;
use crate::core::constants::{GRAVITY, JUMP_STRENGTH, MOVE_SPEED, ROTATION_SPEED};
use crate::core::input::InputFrame;
use crate::geometry::{wrap_degrees, x_limit, y_limit, Vec2};

/// Applies held movement and turning input for one frame.
pub fn steer(player: &mut Player, input: &InputFrame) {
    if input.move_forward {
        step_along_facing(player, 1.0);
    }
    if input.move_backward {
        step_along_facing(player, -1.0);
    }
    if input.turn_left {
        player.facing = wrap_degrees(player.facing + ROTATION_SPEED);
    }
    if input.turn_right {
        player.facing = wrap_degrees(player.facing - ROTATION_SPEED);
    }
}

/// Moves one step forward (`direction` = 1) or backward (-1).
///
/// Each axis is accepted independently. The y bound depends on whether the
/// (possibly just updated) x lies in the door band: inside it the player may
/// walk into the door zone, elsewhere the wall stops them.
pub fn step_along_facing(player: &mut Player, direction: f64) {
    let step = Vec2::from_angle(player.facing).scale(MOVE_SPEED * direction);
    let candidate = player.position + step;

    if candidate.x.abs() <= x_limit() {
        player.position.x = candidate.x;
    }
    if candidate.y.abs() <= y_limit(player.position.x) {
        player.position.y = candidate.y;
    }
}

/// Starts a jump if the player is on the ground.
pub fn try_jump(player: &mut Player) -> bool {
    if player.jump.airborne {
        return false;
    }
    player.jump.airborne = true;
    player.jump.velocity = JUMP_STRENGTH;
    true
}

/// Advances jump physics by one frame.
pub fn update_jump(player: &mut Player) {
    if !player.jump.airborne {
        return;
    }
    player.height += player.jump.velocity;
    player.jump.velocity -= GRAVITY;
    if player.height <= 0.0 {
        player.height = 0.0;
        player.jump.velocity = 0.0;
        player.jump.airborne = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward() -> InputFrame {
        InputFrame {
            move_forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_forward_moves_along_facing() {
        let mut player = Player::new();
        steer(&mut player, &forward());
        assert!(player.position.x.abs() < 1e-9);
        assert!((player.position.y - 99.5).abs() < 1e-9);
    }

    #[test]
    fn test_backward_moves_against_facing() {
        let mut player = Player::new();
        step_along_facing(&mut player, -1.0);
        assert!((player.position.y - 100.5).abs() < 1e-9);
    }

    #[test]
    fn test_turning_wraps() {
        let mut player = Player::new();
        player.facing = 359.9;
        steer(
            &mut player,
            &InputFrame {
                turn_left: true,
                ..Default::default()
            },
        );
        assert!((player.facing - 0.2).abs() < 1e-9);

        player.facing = 0.1;
        steer(
            &mut player,
            &InputFrame {
                turn_right: true,
                ..Default::default()
            },
        );
        assert!((player.facing - 359.8).abs() < 1e-9);
    }

    #[test]
    fn test_wall_blocks_outside_door_band() {
        let mut player = Player::new();
        player.position = Vec2::new(200.0, -275.0);
        step_along_facing(&mut player, 1.0);
        assert_eq!(player.position.y, -275.0);
    }

    #[test]
    fn test_door_band_lets_player_into_door_zone() {
        let mut player = Player::new();
        player.position = Vec2::new(0.0, -275.0);
        for _ in 0..30 {
            step_along_facing(&mut player, 1.0);
        }
        assert!(player.position.y < -285.0);
        assert!(player.position.y >= -295.0);
    }

    #[test]
    fn test_side_wall_blocks_x_only() {
        let mut player = Player::new();
        player.position = Vec2::new(270.0, 0.0);
        player.facing = 45.0;
        let y_before = player.position.y;
        step_along_facing(&mut player, 1.0);
        assert_eq!(player.position.x, 270.0);
        assert!(player.position.y > y_before);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut player = Player::new();
        assert!(try_jump(&mut player));
        assert!(!try_jump(&mut player));

        let mut peak: f64 = 0.0;
        let mut frames = 0;
        while player.jump.airborne {
            update_jump(&mut player);
            peak = peak.max(player.height);
            frames += 1;
            assert!(frames < 100);
        }
        assert!(peak > 60.0);
        assert_eq!(player.height, 0.0);
        assert!(player.is_on_ground());
        assert!(try_jump(&mut player));
    }
}
