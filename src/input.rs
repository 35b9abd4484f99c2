//! Keyboard handling for the terminal game.
//!
//! Maps crossterm key events onto the core's per-frame `InputFrame`.
//! Most terminals never report key releases, so movement keys count as held
//! for a short window after their last press or auto-repeat.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rescue_run::core::input::InputFrame;
use rescue_run::level::Level;
use std::time::{Duration, Instant};

/// How long a movement key stays held after its last press/repeat event.
const HOLD_WINDOW: Duration = Duration::from_millis(120);

/// What the main loop should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeldKey {
    Forward,
    Backward,
    Left,
    Right,
}

/// Accumulates key events between frames.
pub struct KeyTracker {
    held: [Option<Instant>; 4],
    pending: InputFrame,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: [None; 4],
            pending: InputFrame::default(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            if let Some(held) = held_key(key.code) {
                self.held[held as usize] = None;
            }
            return KeyAction::None;
        }

        if let Some(held) = held_key(key.code) {
            self.held[held as usize] = Some(now);
            return KeyAction::None;
        }

        // Edge-triggered keys fire once per press, not on auto-repeat.
        if key.kind == KeyEventKind::Repeat {
            return KeyAction::None;
        }
        match key.code {
            KeyCode::Char(' ') => self.pending.jump = true,
            KeyCode::Char('a') => self.pending.lasso = true,
            KeyCode::Char('j') => self.pending.freeze_power = true,
            KeyCode::Char('b') => self.pending.ray_power = true,
            KeyCode::Enter => self.pending.confirm = true,
            KeyCode::Char(c @ '1'..='3') => {
                self.pending.select_level = c.to_digit(10).and_then(Level::from_number);
            }
            KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
            _ => {}
        }
        KeyAction::None
    }

    /// Builds the input for the next frame and clears one-shot edges.
    pub fn take_frame(&mut self, now: Instant) -> InputFrame {
        let is_held = |key: HeldKey| {
            self.held[key as usize].is_some_and(|at| now.duration_since(at) <= HOLD_WINDOW)
        };
        let mut frame = std::mem::take(&mut self.pending);
        frame.move_forward = is_held(HeldKey::Forward);
        frame.move_backward = is_held(HeldKey::Backward);
        frame.turn_left = is_held(HeldKey::Left);
        frame.turn_right = is_held(HeldKey::Right);
        frame
    }
}

fn held_key(code: KeyCode) -> Option<HeldKey> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(HeldKey::Forward),
        KeyCode::Down | KeyCode::Char('s') => Some(HeldKey::Backward),
        KeyCode::Left => Some(HeldKey::Left),
        KeyCode::Right => Some(HeldKey::Right),
        _ => None,
    }
}
