//! The per-frame orchestration function.
//!
//! `game_tick()` advances the whole simulation by one 16ms frame and returns
//! a [`TickResult`] describing what happened, so front ends (the terminal
//! UI, the headless simulator) can log and react without the core touching
//! any presentation types.

use crate::boss::{update_boss, BossAttack, BossHit};
use crate::combat::{
    enemy_contacts, lasso_enemies, lasso_reaches_boss, ray_blast, update_projectiles,
};
use crate::core::constants::{
    BOSS_DEFEAT_SCORE, ENEMY_CONTACT_DAMAGE, ENEMY_DEFEAT_SCORE, FADE_FRAMES,
    LASSO_BOSS_DAMAGE, PROJECTILE_DAMAGE, RAY_BOSS_DAMAGE,
};
use crate::core::game_state::{GameState, Screen, World};
use crate::core::input::InputFrame;
use crate::level::{advance_enemies, collect_pickups, BossKind, CollectibleKind, EnemyId, Level};
use crate::player::{steer, try_jump, update_jump, LifeOutcome, Player};
use crate::powers::{PowerEffect, PowerKind};
use crate::progression::{resolve_doors, RoomTransition};
use crate::win_sequence::{WinPhase, WinStep};
use rand::Rng;

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Screens ─────────────────────────────────────────────────
    MenuConfirmed,
    LevelChosen { level: Level },
    LevelStarted { level: Level },
    GameOver { score: u64 },

    // ── Player ──────────────────────────────────────────────────
    PlayerHurt { damage: u32, health_left: u32 },
    LifeLost { lives_left: u32 },
    ItemCollected { kind: CollectibleKind },
    RoomChanged { transition: RoomTransition },

    // ── Combat ──────────────────────────────────────────────────
    EnemyLassoed { id: EnemyId, points: u64 },
    EnemiesFrozen,
    EnemiesBlasted { count: usize },
    PowerActivated { kind: PowerKind },
    PowerFaded { kind: PowerKind },

    // ── Boss ────────────────────────────────────────────────────
    BossSwing { damage: u32 },
    BossThrow { boss: BossKind },
    BossDamaged { boss: BossKind, health_left: u32 },
    BossDefeated { boss: BossKind, points: u64 },

    // ── Win sequence ────────────────────────────────────────────
    WinPhaseChanged { phase: WinPhase },
    LevelComplete { level: Level },
    GameEnd { score: u64 },
}

impl TickEvent {
    /// One human-readable log line.
    pub fn message(&self) -> String {
        match self {
            TickEvent::MenuConfirmed => "Choose a level".to_string(),
            TickEvent::LevelChosen { level } => format!("Level {} selected", level.number()),
            TickEvent::LevelStarted { level } => {
                let config = level.config();
                format!(
                    "LEVEL {}: defeat {} and rescue {}!",
                    level.number(),
                    config.boss.name(),
                    config.companion.name()
                )
            }
            TickEvent::GameOver { score } => format!("GAME OVER (score {})", score),
            TickEvent::PlayerHurt {
                damage,
                health_left,
            } => format!("Took {} damage ({}% health)", damage, health_left),
            TickEvent::LifeLost { lives_left } => {
                format!("Lost a life! {} remaining", lives_left)
            }
            TickEvent::ItemCollected { kind } => match kind {
                CollectibleKind::Star => "Star collected: health restored".to_string(),
                CollectibleKind::Hat => "Hat collected: extra life".to_string(),
                CollectibleKind::Coin => "Coin +10".to_string(),
            },
            TickEvent::RoomChanged { transition } => match transition {
                RoomTransition::Advanced { room } => format!("Entered room {}", room + 1),
                RoomTransition::EnteredBossRoom { room } => {
                    format!("Entered room {}: the boss is here!", room + 1)
                }
                RoomTransition::Retreated { room } => format!("Back to room {}", room + 1),
            },
            TickEvent::EnemyLassoed { points, .. } => format!("Lassoed an enemy! +{}", points),
            TickEvent::EnemiesFrozen => "Enemies frozen in place".to_string(),
            TickEvent::EnemiesBlasted { count } => format!("Ray cleared {} enemies", count),
            TickEvent::PowerActivated { kind } => format!("{} power activated", kind.name()),
            TickEvent::PowerFaded { kind } => format!("{} power recharging", kind.name()),
            TickEvent::BossSwing { damage } => format!("The boss swings! -{}", damage),
            TickEvent::BossThrow { boss } => format!("{} throws something!", boss.name()),
            TickEvent::BossDamaged { boss, health_left } => {
                format!("Hit {}! {} health left", boss.name(), health_left)
            }
            TickEvent::BossDefeated { boss, points } => {
                format!("{} defeated! +{}", boss.name(), points)
            }
            TickEvent::WinPhaseChanged { phase } => format!("Rescue phase {}", phase.ordinal()),
            TickEvent::LevelComplete { level } => format!("LEVEL {} COMPLETE", level.number()),
            TickEvent::GameEnd { score } => format!("THE GAME END (final score {})", score),
        }
    }
}

/// Result of processing a single frame.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events produced during this frame, in chronological order.
    pub events: Vec<TickEvent>,
}

/// Processes a single frame.
///
/// Runs whichever screen is active. During play the order within a frame
/// is: banners and cooldowns, edge inputs, powers, pickups, enemies, boss,
/// projectiles, the win sequence (which suppresses everything after it),
/// movement, the lasso swing against the boss, and finally doors.
///
/// `rng` drives the boss's wandering; pass a seeded RNG for reproducible
/// runs.
pub fn game_tick<R: Rng>(state: &mut GameState, input: &InputFrame, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    state.frame += 1;

    match state.screen {
        Screen::Menu => {
            if input.confirm {
                state.screen = Screen::LevelSelect;
                result.events.push(TickEvent::MenuConfirmed);
            }
        }
        Screen::LevelSelect => {
            if let Some(level) = input.select_level {
                state.screen = Screen::Fade { level, timer: 0 };
                result.events.push(TickEvent::LevelChosen { level });
            }
        }
        Screen::Fade { level, timer } => {
            let timer = timer + 1;
            if timer > FADE_FRAMES {
                state.start_level(level);
                result.events.push(TickEvent::LevelStarted { level });
            } else {
                state.screen = Screen::Fade { level, timer };
            }
        }
        Screen::Playing => match tick_playing(state, input, rng, &mut result.events) {
            PlayOutcome::Continue => {}
            PlayOutcome::OutOfLives => state.screen = Screen::GameOver { timer: 0 },
            PlayOutcome::NextLevel(level) => {
                state.start_level(level);
                result.events.push(TickEvent::LevelStarted { level });
            }
        },
        Screen::GameOver { timer } => {
            state.screen = Screen::GameOver {
                timer: timer.saturating_add(1),
            };
        }
    }

    result
}

/// How a frame of play ended.
enum PlayOutcome {
    Continue,
    OutOfLives,
    NextLevel(Level),
}

/// One frame of play.
fn tick_playing<R: Rng>(
    state: &mut GameState,
    input: &InputFrame,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> PlayOutcome {
    let GameState { player, world, .. } = state;

    // ── 1. Timers ───────────────────────────────────────────────
    world.level_banner_frames = world.level_banner_frames.saturating_sub(1);
    player.lasso.tick_boss_cooldown();
    player.powers.tick_cooldowns();

    // ── 2. Edge inputs (suppressed during the rescue) ───────────
    if !world.win.is_running() {
        if input.jump {
            try_jump(player);
        }
        if input.lasso {
            player.lasso.start();
        }
        let tier = world.config().power_tier;
        if input.freeze_power && tier.freeze_enabled() && player.powers.freeze.activate() {
            events.push(TickEvent::PowerActivated {
                kind: PowerKind::Freeze,
            });
        }
        if input.ray_power && tier.ray_enabled() && player.powers.ray.activate() {
            events.push(TickEvent::PowerActivated {
                kind: PowerKind::Ray,
            });
        }
    }

    // ── 3. Power animations ─────────────────────────────────────
    for effect in player.powers.advance() {
        apply_power_effect(world, player, effect, events);
    }

    // ── 4. Room contents ────────────────────────────────────────
    if !world.in_boss_room() {
        for kind in collect_pickups(world.current_room_mut(), player) {
            events.push(TickEvent::ItemCollected { kind });
        }

        let frozen = world.enemies_frozen;
        let room_index = world.room_index;
        let room = world.current_room_mut();
        advance_enemies(room, player.position, frozen);
        let contacts = enemy_contacts(room, player.position);
        for id in lasso_enemies(room, room_index, player) {
            events.push(TickEvent::EnemyLassoed {
                id,
                points: ENEMY_DEFEAT_SCORE,
            });
        }
        for _ in 0..contacts {
            if hurt(player, ENEMY_CONTACT_DAMAGE, events) {
                return PlayOutcome::OutOfLives;
            }
        }
    }

    // ── 5. Boss ─────────────────────────────────────────────────
    if world.boss.is_active() && !world.win.is_running() {
        for attack in update_boss(&mut world.boss, player.position, rng) {
            match attack {
                BossAttack::Swing { damage } => {
                    events.push(TickEvent::BossSwing { damage });
                    if hurt(player, damage, events) {
                        return PlayOutcome::OutOfLives;
                    }
                }
                BossAttack::Throw => events.push(TickEvent::BossThrow {
                    boss: world.boss.kind,
                }),
            }
        }
    }

    let projectile_hits = update_projectiles(&mut world.boss.projectiles, player.position);
    for _ in 0..projectile_hits {
        if hurt(player, PROJECTILE_DAMAGE, events) {
            return PlayOutcome::OutOfLives;
        }
    }

    // ── 6. Win sequence ─────────────────────────────────────────
    if world.win.is_running() {
        let has_next = world.has_next_level();
        match world.win.advance(player, has_next) {
            WinStep::Continue => {}
            WinStep::PhaseChanged(phase) => {
                events.push(TickEvent::WinPhaseChanged { phase });
                if phase == WinPhase::Advancing {
                    events.push(if world.win.game_end {
                        TickEvent::GameEnd {
                            score: player.score,
                        }
                    } else {
                        TickEvent::LevelComplete {
                            level: world.level(),
                        }
                    });
                }
            }
            WinStep::AdvanceLevel => {
                if let Some(next) = world.level().next() {
                    return PlayOutcome::NextLevel(next);
                }
            }
        }
        return PlayOutcome::Continue;
    }

    // ── 7. Movement ─────────────────────────────────────────────
    steer(player, input);
    update_jump(player);

    // ── 8. Lasso against the boss ───────────────────────────────
    if world.in_boss_room()
        && world.boss.is_active()
        && lasso_reaches_boss(player, world.boss.position)
    {
        damage_boss(world, player, LASSO_BOSS_DAMAGE, events);
    }
    player.lasso.advance();

    // ── 9. Doors ────────────────────────────────────────────────
    if let Some(transition) = resolve_doors(world, player) {
        events.push(TickEvent::RoomChanged { transition });
    }

    PlayOutcome::Continue
}

fn apply_power_effect(
    world: &mut World,
    player: &mut Player,
    effect: PowerEffect,
    events: &mut Vec<TickEvent>,
) {
    match effect {
        PowerEffect::FreezeEnemies => {
            if !world.in_boss_room() {
                world.enemies_frozen = true;
                events.push(TickEvent::EnemiesFrozen);
            }
        }
        PowerEffect::RayBlast => {
            if world.in_boss_room() {
                if world.boss.is_active() {
                    damage_boss(world, player, RAY_BOSS_DAMAGE, events);
                }
            } else {
                let room_index = world.room_index;
                let count = ray_blast(world.current_room_mut(), room_index).len();
                events.push(TickEvent::EnemiesBlasted { count });
            }
        }
        PowerEffect::Finished(kind) => events.push(TickEvent::PowerFaded { kind }),
    }
}

/// Applies boss damage from any source. Defeat scores and starts the rescue.
fn damage_boss(world: &mut World, player: &mut Player, amount: u32, events: &mut Vec<TickEvent>) {
    let boss = world.boss.kind;
    match world.boss.take_damage(amount) {
        Some(BossHit::Damaged { health_left }) => {
            events.push(TickEvent::BossDamaged { boss, health_left });
        }
        Some(BossHit::Defeated) => {
            player.add_score(BOSS_DEFEAT_SCORE);
            events.push(TickEvent::BossDefeated {
                boss,
                points: BOSS_DEFEAT_SCORE,
            });
            if world.win.start() {
                events.push(TickEvent::WinPhaseChanged {
                    phase: world.win.phase,
                });
            }
        }
        None => {}
    }
}

/// Applies damage to the player. Returns true when it ends the game.
fn hurt(player: &mut Player, damage: u32, events: &mut Vec<TickEvent>) -> bool {
    match player.apply_damage(damage) {
        LifeOutcome::Hurt => {
            events.push(TickEvent::PlayerHurt {
                damage,
                health_left: player.health,
            });
            false
        }
        LifeOutcome::LifeLost { lives_left } => {
            events.push(TickEvent::LifeLost { lives_left });
            false
        }
        LifeOutcome::OutOfLives => {
            events.push(TickEvent::GameOver {
                score: player.score,
            });
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::GAME_OVER_FADE_FRAMES;
    use crate::geometry::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn playing(level: Level) -> GameState {
        let mut state = GameState::new();
        state.start_level(level);
        state
    }

    #[test]
    fn test_menu_to_playing() {
        let mut state = GameState::new();
        let mut rng = create_test_rng();

        let result = game_tick(&mut state, &InputFrame::idle(), &mut rng);
        assert!(result.events.is_empty());
        assert_eq!(state.screen, Screen::Menu);

        game_tick(&mut state, &InputFrame::confirm(), &mut rng);
        assert_eq!(state.screen, Screen::LevelSelect);

        game_tick(&mut state, &InputFrame::select(Level::Two), &mut rng);
        assert_eq!(
            state.screen,
            Screen::Fade {
                level: Level::Two,
                timer: 0
            }
        );

        for _ in 0..FADE_FRAMES {
            game_tick(&mut state, &InputFrame::idle(), &mut rng);
        }
        assert!(matches!(state.screen, Screen::Fade { .. }));
        let result = game_tick(&mut state, &InputFrame::idle(), &mut rng);
        assert!(state.is_playing());
        assert_eq!(state.world.level(), Level::Two);
        assert_eq!(
            result.events,
            vec![TickEvent::LevelStarted { level: Level::Two }]
        );
    }

    #[test]
    fn test_powers_gated_by_level() {
        let mut rng = create_test_rng();
        let both = InputFrame {
            freeze_power: true,
            ray_power: true,
            ..Default::default()
        };

        let mut state = playing(Level::One);
        game_tick(&mut state, &both, &mut rng);
        assert!(!state.player.powers.freeze.is_active());
        assert!(!state.player.powers.ray.is_active());

        let mut state = playing(Level::Two);
        game_tick(&mut state, &both, &mut rng);
        assert!(state.player.powers.freeze.is_active());
        assert!(!state.player.powers.ray.is_active());

        let mut state = playing(Level::Three);
        game_tick(&mut state, &both, &mut rng);
        assert!(state.player.powers.freeze.is_active());
        assert!(state.player.powers.ray.is_active());
    }

    #[test]
    fn test_running_out_of_lives_ends_game() {
        let mut state = playing(Level::One);
        let mut rng = create_test_rng();
        state.player.lives = 1;
        state.player.health = 5;
        state.world.room_index = 1;
        let room = state.world.current_room_mut();
        room.star = None;
        room.hat = None;
        room.coins.clear();
        room.enemies.truncate(1);
        room.enemies[0].position = state.player.position;

        let result = game_tick(&mut state, &InputFrame::idle(), &mut rng);
        assert!(state.is_game_over());
        assert_eq!(state.player.lives, 0);
        assert_eq!(state.player.health, 0);
        assert!(matches!(
            result.events.last(),
            Some(TickEvent::GameOver { .. })
        ));

        for _ in 0..GAME_OVER_FADE_FRAMES + 10 {
            let result = game_tick(&mut state, &InputFrame::idle(), &mut rng);
            assert!(result.events.is_empty());
        }
        assert!(state.is_game_over());
    }

    #[test]
    fn test_ray_defeat_starts_rescue() {
        let mut state = playing(Level::Three);
        let mut rng = create_test_rng();
        state.world.enter_boss_room();
        state.world.boss.health = 5;
        state.player.position = Vec2::new(0.0, 250.0);

        let ray = InputFrame {
            ray_power: true,
            ..Default::default()
        };
        game_tick(&mut state, &ray, &mut rng);

        let mut defeated = 0;
        for _ in 0..400 {
            let result = game_tick(&mut state, &InputFrame::idle(), &mut rng);
            defeated += result
                .events
                .iter()
                .filter(|e| matches!(e, TickEvent::BossDefeated { .. }))
                .count();
        }
        assert_eq!(defeated, 1);
        assert!(state.world.boss.is_defeated());
        assert!(state.world.win.is_running());
        assert_eq!(state.player.score, BOSS_DEFEAT_SCORE);
    }

    #[test]
    fn test_event_messages_are_readable() {
        let event = TickEvent::LevelStarted { level: Level::Three };
        assert!(event.message().contains("LEVEL 3"));
        let event = TickEvent::EnemyLassoed {
            id: EnemyId { room: 1, slot: 0 },
            points: 50,
        };
        assert_eq!(event.message(), "Lassoed an enemy! +50");
    }
}
