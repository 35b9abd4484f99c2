//! Read-only view of the game for renderers.
//!
//! `GameState::snapshot()` copies out everything a front end draws in one
//! frame, so renderers never reach into simulation state directly.

use crate::boss::BossStatus;
use crate::core::constants::GAME_OVER_FADE_FRAMES;
use crate::core::game_state::{GameState, Screen};
use crate::geometry::{Rect, Vec2};
use crate::level::{BossKind, CollectibleKind, Companion, EnemyKind, Level, ProjectileKind};
use crate::powers::{PowerKind, PowerPhase, PowerState};
use serde::{Deserialize, Serialize};

/// Text overlays that can be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    LevelIntro { level: Level },
    LevelComplete { level: Level },
    MissionComplete,
    GameEnd,
    GameOver,
}

impl Banner {
    pub fn text(&self) -> String {
        match self {
            Banner::LevelIntro { level } => format!("LEVEL {}", level.number()),
            Banner::LevelComplete { level } => format!("LEVEL {} COMPLETE", level.number()),
            Banner::MissionComplete => "MISSION COMPLETE".to_string(),
            Banner::GameEnd => "THE GAME END".to_string(),
            Banner::GameOver => "GAME OVER".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub height: f64,
    pub facing: f64,
    /// 1.0 normally, fading to 0.0 after game over.
    pub opacity: f64,
    pub health: u32,
    pub lives: u32,
    pub score: u64,
    pub lasso_active: bool,
    pub lasso_point: Option<Vec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Vec2,
    pub frozen: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleView {
    pub kind: CollectibleKind,
    pub position: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub kind: BossKind,
    pub status: BossStatus,
    pub position: Vec2,
    pub health: u32,
    pub max_health: u32,
    pub swinging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub position: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerView {
    pub kind: PowerKind,
    pub phase: PowerPhase,
    pub height: f64,
    pub ray_alpha: f64,
    pub cooldown: u32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionView {
    pub companion: Companion,
    pub position: Vec2,
    pub caged: bool,
    pub cage_opacity: f64,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub screen: Screen,
    pub level: Level,
    pub room: usize,
    pub total_rooms: usize,
    pub in_boss_room: bool,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub collectibles: Vec<CollectibleView>,
    pub furniture: Vec<Rect>,
    pub boss: Option<BossView>,
    pub projectiles: Vec<ProjectileView>,
    pub powers: Vec<PowerView>,
    pub companion: Option<CompanionView>,
    /// 0 outside the rescue, 1..=6 during it.
    pub win_phase: u8,
    pub banners: Vec<Banner>,
}

impl GameState {
    pub fn snapshot(&self) -> RenderSnapshot {
        let world = &self.world;
        let config = world.config();
        let room = world.current_room();
        let player = &self.player;

        let enemies = room
            .enemies
            .iter()
            .filter(|e| e.is_active())
            .map(|e| EnemyView {
                kind: config.enemy_kind,
                position: e.position,
                frozen: world.enemies_frozen,
            })
            .collect();

        let collectibles = if world.in_boss_room() {
            Vec::new()
        } else {
            room.collectibles()
                .filter(|c| c.is_present())
                .map(|c| CollectibleView {
                    kind: c.kind,
                    position: c.position,
                })
                .collect()
        };

        let boss = (world.in_boss_room() && !world.boss.is_defeated()).then(|| BossView {
            kind: world.boss.kind,
            status: world.boss.status,
            position: world.boss.position,
            health: world.boss.health,
            max_health: world.boss.max_health,
            swinging: world.boss.is_swinging(),
        });

        let projectiles = world
            .boss
            .projectiles
            .iter()
            .map(|p| ProjectileView {
                kind: p.kind,
                position: p.position,
            })
            .collect();

        let power_view = |state: &PowerState, enabled: bool| PowerView {
            kind: state.kind,
            phase: state.phase,
            height: state.height,
            ray_alpha: state.ray_alpha,
            cooldown: state.cooldown,
            enabled,
        };
        let powers = vec![
            power_view(&player.powers.freeze, config.power_tier.freeze_enabled()),
            power_view(&player.powers.ray, config.power_tier.ray_enabled()),
        ];

        let companion = (world.in_boss_room() && world.win.companion_visible).then(|| {
            CompanionView {
                companion: config.companion,
                position: world.win.companion_position,
                caged: !world.win.companion_freed(),
                cage_opacity: world.win.cage_opacity,
            }
        });

        RenderSnapshot {
            screen: self.screen,
            level: world.level(),
            room: world.room_index,
            total_rooms: config.total_rooms,
            in_boss_room: world.in_boss_room(),
            player: PlayerView {
                position: player.position,
                height: player.height,
                facing: player.facing,
                opacity: self.player_opacity(),
                health: player.health,
                lives: player.lives,
                score: player.score,
                lasso_active: player.lasso.active,
                lasso_point: player
                    .lasso
                    .active
                    .then(|| crate::combat::lasso_point(player)),
            },
            enemies,
            collectibles,
            furniture: room.furniture(),
            boss,
            projectiles,
            powers,
            companion,
            win_phase: world.win.phase.ordinal(),
            banners: self.banners(),
        }
    }

    fn player_opacity(&self) -> f64 {
        match self.screen {
            Screen::GameOver { timer } => {
                1.0 - f64::from(timer.min(GAME_OVER_FADE_FRAMES)) / f64::from(GAME_OVER_FADE_FRAMES)
            }
            _ => 1.0,
        }
    }

    /// Banners currently showing, in draw order.
    pub fn banners(&self) -> Vec<Banner> {
        let world = &self.world;
        let mut banners = Vec::new();
        match self.screen {
            Screen::Playing => {
                if world.level_banner_frames > 0 {
                    banners.push(Banner::LevelIntro {
                        level: world.level(),
                    });
                }
                if world.win.mission_complete {
                    banners.push(Banner::MissionComplete);
                }
                if world.win.level_complete {
                    banners.push(Banner::LevelComplete {
                        level: world.level(),
                    });
                }
                if world.win.game_end {
                    banners.push(Banner::GameEnd);
                }
            }
            Screen::GameOver { timer } if timer > GAME_OVER_FADE_FRAMES => {
                banners.push(Banner::GameOver);
            }
            _ => {}
        }
        banners
    }
}
