//! Top-level game state: the active screen, the player and the level world.

use crate::boss::Boss;
use crate::core::constants::LEVEL_BANNER_FRAMES;
use crate::level::{generate_level, Level, LevelConfig, LevelContent, Room};
use crate::player::Player;
use crate::win_sequence::WinSequence;
use serde::{Deserialize, Serialize};

/// Which top-level screen is running. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Menu,
    LevelSelect,
    /// Short fade before the chosen level starts.
    Fade { level: Level, timer: u32 },
    Playing,
    /// Terminal. The player fades out, then the banner stays up.
    GameOver { timer: u32 },
}

/// Everything that belongs to one level instance. Rebuilt from scratch
/// whenever a level starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub content: LevelContent,
    pub room_index: usize,
    /// Latched once the player first walks into the boss room.
    pub boss_room_entered: bool,
    /// Set by the freeze power; cleared on every room change.
    pub enemies_frozen: bool,
    pub boss: Boss,
    pub win: WinSequence,
    /// Frames the level intro banner has left.
    pub level_banner_frames: u32,
}

impl World {
    pub fn new(level: Level) -> Self {
        let config = level.config();
        Self {
            content: generate_level(level),
            room_index: 0,
            boss_room_entered: false,
            enemies_frozen: false,
            boss: Boss::new(config.boss),
            win: WinSequence::new(),
            level_banner_frames: LEVEL_BANNER_FRAMES,
        }
    }

    pub fn config(&self) -> &LevelConfig {
        &self.content.config
    }

    pub fn level(&self) -> Level {
        self.content.config.level
    }

    pub fn current_room(&self) -> &Room {
        self.content.room(self.room_index)
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        self.content.room_mut(self.room_index)
    }

    pub fn in_boss_room(&self) -> bool {
        self.content.config.is_boss_room(self.room_index)
    }

    pub fn has_next_level(&self) -> bool {
        self.level().next().is_some()
    }

    /// Moves into the boss room. The boss spawns only the first time.
    pub fn enter_boss_room(&mut self) -> bool {
        self.room_index = self.content.config.boss_room();
        self.enemies_frozen = false;
        if self.boss_room_entered {
            return false;
        }
        self.boss_room_entered = true;
        self.boss.spawn();
        self.win.companion_visible = true;
        true
    }
}

/// The whole simulation state for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub screen: Screen,
    pub player: Player,
    pub world: World,
    /// Frames simulated since the session began.
    pub frame: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh session at the title menu.
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            player: Player::new(),
            world: World::new(Level::One),
            frame: 0,
        }
    }

    /// Regenerates `level` and resets everything per-level. Lives and score
    /// carry over.
    pub fn start_level(&mut self, level: Level) {
        self.world = World::new(level);
        self.player.reset_for_level();
        self.screen = Screen::Playing;
    }

    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.screen, Screen::GameOver { .. })
    }
}
