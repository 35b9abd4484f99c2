//! Title menu, level select and the fade into a level.

use super::common::{create_game_layout, render_centered, render_status_bar};
use rescue_run::core::constants::FADE_FRAMES;
use rescue_run::level::Level;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render_menu(frame: &mut Frame, area: Rect) {
    let layout = create_game_layout(frame, area, " Rescue Run ", Color::LightYellow, 0);
    let title = Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
    render_centered(
        frame,
        layout.content,
        vec![
            Line::from(Span::styled("R E S C U E   R U N", title)),
            Line::from(""),
            Line::from("Fight through the rooms, beat the boss,"),
            Line::from("and free your friend from the cage."),
        ],
    );
    render_status_bar(
        frame,
        layout.status_bar,
        "Press Enter to start",
        Color::White,
        &[("[Enter]", "Start"), ("[Q]", "Quit")],
    );
}

pub fn render_level_select(frame: &mut Frame, area: Rect) {
    let layout = create_game_layout(frame, area, " Choose a Level ", Color::LightCyan, 0);
    let mut lines = Vec::new();
    for level in Level::ALL {
        let config = level.config();
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", level.number()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(
                    "Level {}: {} rooms, boss {}, rescue {}",
                    level.number(),
                    config.total_rooms,
                    config.boss.name(),
                    config.companion.name()
                ),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(""));
    }
    render_centered(frame, layout.content, lines);
    render_status_bar(
        frame,
        layout.status_bar,
        "Select a level",
        Color::White,
        &[("[1-3]", "Level"), ("[Q]", "Quit")],
    );
}

pub fn render_fade(frame: &mut Frame, area: Rect, level: Level, timer: u32) {
    let layout = create_game_layout(frame, area, " Rescue Run ", Color::DarkGray, 0);
    // brighten toward the level start
    let shade = (55 + 200 * timer.min(FADE_FRAMES) / FADE_FRAMES) as u8;
    render_centered(
        frame,
        layout.content,
        vec![Line::from(Span::styled(
            format!("LEVEL {}", level.number()),
            Style::default()
                .fg(Color::Rgb(shade, shade, shade))
                .add_modifier(Modifier::BOLD),
        ))],
    );
}
