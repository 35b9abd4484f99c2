//! Terminal rendering for every screen.

mod common;
mod menu_scene;
mod room_scene;

use rescue_run::core::{GameState, Screen};
use ratatui::Frame;
use std::collections::VecDeque;

/// Max number of log lines kept for the side panel
pub const MAX_LOG_ENTRIES: usize = 50;

/// Rolling log of tick event messages, oldest first.
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: VecDeque<String>,
}

impl MessageLog {
    pub fn push(&mut self, message: String) {
        if self.entries.len() >= MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &String> {
        self.entries.iter()
    }
}

/// Draws the active screen.
pub fn draw(frame: &mut Frame, state: &GameState, log: &MessageLog) {
    let area = frame.size();
    match state.screen {
        Screen::Menu => menu_scene::render_menu(frame, area),
        Screen::LevelSelect => menu_scene::render_level_select(frame, area),
        Screen::Fade { level, timer } => menu_scene::render_fade(frame, area, level, timer),
        Screen::Playing | Screen::GameOver { .. } => {
            room_scene::render_room_scene(frame, area, &state.snapshot(), log)
        }
    }
}
