//! Integration test: lasso, contact damage and boss scenarios through
//! the real `game_tick()`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rescue_run::core::{game_tick, GameState, InputFrame, Screen, TickEvent};
use rescue_run::geometry::Vec2;
use rescue_run::level::{BossKind, Level};
use rescue_run::win_sequence::WinPhase;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// A level in progress, parked in `room` with its pickups removed so
/// scores and vitals only change through combat.
fn playing_in_room(level: Level, room: usize) -> GameState {
    let mut state = GameState::new();
    state.start_level(level);
    state.world.room_index = room;
    let room = state.world.current_room_mut();
    room.star = None;
    room.hat = None;
    room.coins.clear();
    state
}

fn lasso() -> InputFrame {
    InputFrame {
        lasso: true,
        ..Default::default()
    }
}

#[test]
fn test_single_lasso_defeats_one_enemy() {
    let mut state = playing_in_room(Level::One, 1);
    let mut rng = create_test_rng();
    assert_eq!(state.world.current_room().enemies.len(), 5);

    // One enemy right where the lasso lands, the rest well out of reach
    let player = state.player.position;
    let room = state.world.current_room_mut();
    room.enemies[0].position = player + Vec2::new(0.0, -30.0);
    let far = [(-200.0, -200.0), (200.0, -200.0), (-200.0, 250.0), (200.0, 250.0)];
    for (enemy, (x, y)) in room.enemies[1..].iter_mut().zip(far) {
        enemy.position = Vec2::new(x, y);
    }

    let result = game_tick(&mut state, &lasso(), &mut rng);

    let room = state.world.current_room();
    assert!(!room.enemies[0].is_active());
    assert!(room.enemies[1..].iter().all(|e| e.is_active()));
    assert_eq!(state.player.score, 50);
    let lassoed = result
        .events
        .iter()
        .filter(|e| matches!(e, TickEvent::EnemyLassoed { .. }))
        .count();
    assert_eq!(lassoed, 1);
}

#[test]
fn test_holding_lasso_does_not_score_twice() {
    let mut state = playing_in_room(Level::One, 1);
    let mut rng = create_test_rng();
    let player = state.player.position;
    let room = state.world.current_room_mut();
    room.enemies.truncate(1);
    room.enemies[0].position = player + Vec2::new(0.0, -30.0);

    for _ in 0..60 {
        game_tick(&mut state, &lasso(), &mut rng);
    }
    assert_eq!(state.player.score, 50);
}

#[test]
fn test_contact_damage_costs_a_life_at_low_health() {
    let mut state = playing_in_room(Level::One, 1);
    let mut rng = create_test_rng();
    state.player.health = 5;
    state.player.lives = 2;
    let player = state.player.position;
    let room = state.world.current_room_mut();
    room.enemies.truncate(1);
    room.enemies[0].position = player;

    let result = game_tick(&mut state, &InputFrame::idle(), &mut rng);

    assert_eq!(state.player.health, 100);
    assert_eq!(state.player.lives, 1);
    assert_eq!(state.screen, Screen::Playing);
    assert!(result
        .events
        .contains(&TickEvent::LifeLost { lives_left: 1 }));
}

#[test]
fn test_enemy_contact_has_cooldown() {
    let mut state = playing_in_room(Level::One, 1);
    let mut rng = create_test_rng();
    let player = state.player.position;
    let room = state.world.current_room_mut();
    room.enemies.truncate(1);
    room.enemies[0].position = player;

    for _ in 0..60 {
        game_tick(&mut state, &InputFrame::idle(), &mut rng);
    }
    // one hit on the first frame, the next only once the cooldown expires
    assert_eq!(state.player.health, 95);
    game_tick(&mut state, &InputFrame::idle(), &mut rng);
    assert_eq!(state.player.health, 90);
}

#[test]
fn test_last_boss_hit_starts_rescue_once() {
    let mut state = GameState::new();
    state.start_level(Level::One);
    let mut rng = create_test_rng();
    state.world.room_index = 5;
    state.world.enter_boss_room();
    assert_eq!(state.world.boss.kind, BossKind::PotatoHead);
    state.world.boss.health = 1;
    state.player.position = state.world.boss.position + Vec2::new(0.0, 30.0);
    state.player.facing = 270.0;

    let result = game_tick(&mut state, &lasso(), &mut rng);

    assert_eq!(state.world.boss.health, 0);
    assert!(!state.world.boss.is_active());
    assert_eq!(state.world.win.phase, WinPhase::TurningToCage);
    assert_eq!(state.world.win.phase.ordinal(), 1);
    assert_eq!(state.player.score, 100);
    assert!(result
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::BossDefeated { .. })));

    // Further frames never restart the rescue or award the boss again
    let mut restarts = 0;
    for _ in 0..600 {
        let result = game_tick(&mut state, &lasso(), &mut rng);
        restarts += result
            .events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    TickEvent::BossDefeated { .. }
                        | TickEvent::WinPhaseChanged {
                            phase: WinPhase::TurningToCage
                        }
                )
            })
            .count();
    }
    assert_eq!(restarts, 0);
    assert_eq!(state.player.score, 100);
    assert!(state.world.win.phase > WinPhase::TurningToCage);
}

#[test]
fn test_boss_lasso_cooldown_limits_damage() {
    let mut state = GameState::new();
    state.start_level(Level::Two);
    let mut rng = create_test_rng();
    state.world.enter_boss_room();
    state.player.facing = 270.0;

    // Lasso every frame while glued to the boss for 60 frames
    for _ in 0..60 {
        state.player.position = state.world.boss.position + Vec2::new(0.0, 30.0);
        game_tick(&mut state, &lasso(), &mut rng);
    }
    assert_eq!(state.world.boss.health, 30 - 2);
}

#[test]
fn test_freeze_power_stops_enemies() {
    let mut state = playing_in_room(Level::Two, 3);
    let mut rng = create_test_rng();
    let freeze = InputFrame {
        freeze_power: true,
        ..Default::default()
    };
    game_tick(&mut state, &freeze, &mut rng);

    let mut frozen_at = None;
    for frame in 0..200 {
        let result = game_tick(&mut state, &InputFrame::idle(), &mut rng);
        if result.events.contains(&TickEvent::EnemiesFrozen) {
            frozen_at = Some(frame);
            break;
        }
    }
    assert!(frozen_at.is_some());
    assert!(state.world.enemies_frozen);

    let before: Vec<Vec2> = state
        .world
        .current_room()
        .enemies
        .iter()
        .map(|e| e.position)
        .collect();
    for _ in 0..10 {
        game_tick(&mut state, &InputFrame::idle(), &mut rng);
    }
    let after: Vec<Vec2> = state
        .world
        .current_room()
        .enemies
        .iter()
        .map(|e| e.position)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_ray_power_clears_room_without_score() {
    let mut state = playing_in_room(Level::Three, 4);
    let mut rng = create_test_rng();
    // keep enemies away from the player so nothing gets lassoed or hurts
    for (i, enemy) in state.world.current_room_mut().enemies.iter_mut().enumerate() {
        enemy.position = Vec2::new(-200.0 + i as f64 * 20.0, -250.0);
    }
    let ray = InputFrame {
        ray_power: true,
        ..Default::default()
    };
    game_tick(&mut state, &ray, &mut rng);
    for _ in 0..250 {
        game_tick(&mut state, &InputFrame::idle(), &mut rng);
    }
    assert_eq!(state.world.current_room().active_enemy_count(), 0);
    assert_eq!(state.player.score, 0);
    assert!(state.player.powers.ray.is_active());
}
