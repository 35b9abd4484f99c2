//! Integration test: walking between rooms through the doors

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rescue_run::core::constants::ROOM_ENTRY_Y;
use rescue_run::core::{game_tick, GameState, InputFrame, TickEvent};
use rescue_run::geometry::Vec2;
use rescue_run::level::Level;
use rescue_run::progression::RoomTransition;

fn forward() -> InputFrame {
    InputFrame {
        move_forward: true,
        ..Default::default()
    }
}

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(1)
}

#[test]
fn test_walk_through_far_door() {
    let mut state = GameState::new();
    state.start_level(Level::One);
    let mut rng = create_test_rng();

    let mut transition = None;
    for _ in 0..2_000 {
        let result = game_tick(&mut state, &forward(), &mut rng);
        transition = result.events.iter().find_map(|e| match e {
            TickEvent::RoomChanged { transition } => Some(*transition),
            _ => None,
        });
        if transition.is_some() {
            break;
        }
    }
    assert_eq!(transition, Some(RoomTransition::Advanced { room: 1 }));
    assert_eq!(state.world.room_index, 1);
    assert_eq!(state.player.position.y, ROOM_ENTRY_Y);
}

#[test]
fn test_walk_back_through_near_door() {
    let mut state = GameState::new();
    state.start_level(Level::Two);
    let mut rng = create_test_rng();
    state.world.room_index = 2;
    state.world.current_room_mut().enemies.clear();
    state.player.position = Vec2::new(0.0, 285.0);
    state.player.facing = 90.0;

    for _ in 0..20 {
        game_tick(&mut state, &forward(), &mut rng);
        if state.world.room_index != 2 {
            break;
        }
    }
    assert_eq!(state.world.room_index, 1);
    assert_eq!(state.player.position.y, -ROOM_ENTRY_Y);
}

#[test]
fn test_wall_blocks_outside_door_band() {
    let mut state = GameState::new();
    state.start_level(Level::One);
    let mut rng = create_test_rng();
    state.player.position = Vec2::new(200.0, -200.0);

    for _ in 0..400 {
        game_tick(&mut state, &forward(), &mut rng);
    }
    assert_eq!(state.world.room_index, 0);
    assert!(state.player.position.y >= -275.0);
}

#[test]
fn test_far_door_into_boss_room_spawns_boss() {
    let mut state = GameState::new();
    state.start_level(Level::Three);
    let mut rng = create_test_rng();
    state.world.room_index = 13;
    state.world.current_room_mut().enemies.clear();
    state.player.position = Vec2::new(0.0, -289.0);

    for _ in 0..10 {
        game_tick(&mut state, &forward(), &mut rng);
    }
    assert_eq!(state.world.room_index, 14);
    assert!(state.world.in_boss_room());
    assert!(state.world.boss.is_active());
    assert_eq!(state.world.boss.health, 50);
}

#[test]
fn test_boss_room_cannot_be_left() {
    let mut state = GameState::new();
    state.start_level(Level::One);
    let mut rng = create_test_rng();
    state.world.room_index = 5;
    state.world.enter_boss_room();

    // far wall
    state.player.position = Vec2::new(0.0, -290.0);
    for _ in 0..30 {
        game_tick(&mut state, &forward(), &mut rng);
    }
    assert_eq!(state.world.room_index, 6);
    assert!(state.player.position.y >= -295.0);

    // near wall
    state.player.position = Vec2::new(0.0, 290.0);
    state.player.facing = 90.0;
    for _ in 0..30 {
        game_tick(&mut state, &forward(), &mut rng);
    }
    assert_eq!(state.world.room_index, 6);
    assert!(state.player.position.y <= 295.0);
}

#[test]
fn test_changing_rooms_unfreezes_enemies() {
    let mut state = GameState::new();
    state.start_level(Level::Two);
    let mut rng = create_test_rng();
    state.world.room_index = 1;
    state.world.current_room_mut().enemies.clear();
    state.world.enemies_frozen = true;
    state.player.position = Vec2::new(0.0, -289.5);

    game_tick(&mut state, &forward(), &mut rng);
    assert_eq!(state.world.room_index, 2);
    assert!(!state.world.enemies_frozen);
}
