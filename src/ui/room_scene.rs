//! Top-down room view, HUD and event log.
//!
//! Uses a cell buffer for per-character colour control: walls, furniture
//! and every entity are stamped into a grid, then written row by row as
//! Paragraph widgets. The far door (-Y) is at the top of the screen.

use super::common::{create_game_layout, render_centered, render_status_bar};
use super::MessageLog;
use rescue_run::core::constants::{
    DOOR_BAND_HALF_WIDTH, ROOM_HALF_LENGTH, ROOM_HALF_WIDTH,
};
use rescue_run::core::{Banner, RenderSnapshot};
use rescue_run::geometry::Vec2;
use rescue_run::level::{BossKind, CollectibleKind, EnemyKind, ProjectileKind};
use rescue_run::powers::PowerPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const WALL_COLOR: Color = Color::Rgb(120, 100, 80);
const FLOOR_DOT_COLOR: Color = Color::Rgb(45, 40, 35);

/// Render the playing and game-over screens.
pub fn render_room_scene(frame: &mut Frame, area: Rect, snap: &RenderSnapshot, log: &MessageLog) {
    let title = format!(
        " Level {} - Room {}/{} ",
        snap.level.number(),
        snap.room + 1,
        snap.total_rooms
    );
    let layout = create_game_layout(frame, area, &title, Color::LightYellow, 30);

    render_play_field(frame, layout.content, snap);
    render_banners(frame, layout.content, &snap.banners);
    render_room_status(frame, layout.status_bar, snap);
    render_info_panel(frame, layout.info_panel, snap, log);
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Maps room coordinates onto the cell grid.
struct Projection {
    width: usize,
    height: usize,
}

impl Projection {
    fn cell(&self, point: Vec2) -> Option<(usize, usize)> {
        let col = (point.x + ROOM_HALF_WIDTH) / (2.0 * ROOM_HALF_WIDTH) * (self.width - 1) as f64;
        let row =
            (point.y + ROOM_HALF_LENGTH) / (2.0 * ROOM_HALF_LENGTH) * (self.height - 1) as f64;
        let (col, row) = (col.round(), row.round());
        if col < 0.0 || row < 0.0 || col >= self.width as f64 || row >= self.height as f64 {
            return None;
        }
        Some((row as usize, col as usize))
    }
}

struct CellBuffer {
    cells: Vec<Vec<Cell>>,
    projection: Projection,
}

impl CellBuffer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![Cell::default(); width]; height],
            projection: Projection { width, height },
        }
    }

    fn put(&mut self, point: Vec2, ch: char, fg: Color) {
        if let Some((row, col)) = self.projection.cell(point) {
            self.cells[row][col] = Cell {
                ch,
                fg,
                bg: self.cells[row][col].bg,
            };
        }
    }

    fn tint(&mut self, point: Vec2, bg: Color) {
        if let Some((row, col)) = self.projection.cell(point) {
            self.cells[row][col].bg = bg;
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, snap: &RenderSnapshot) {
    if area.height < 4 || area.width < 10 {
        return;
    }
    let width = area.width as usize;
    let height = area.height as usize;
    let mut buffer = CellBuffer::new(width, height);

    // ── Floor and walls ───────────────────────────────────────────────
    for (row, line) in buffer.cells.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            let edge_row = row == 0 || row == height - 1;
            let edge_col = col == 0 || col == width - 1;
            *cell = if edge_row || edge_col {
                Cell {
                    ch: if edge_row { '─' } else { '│' },
                    fg: WALL_COLOR,
                    bg: Color::Reset,
                }
            } else if row % 3 == 0 && col % 6 == 0 {
                Cell {
                    ch: '.',
                    fg: FLOOR_DOT_COLOR,
                    bg: Color::Reset,
                }
            } else {
                Cell::default()
            };
        }
    }
    let last_room = snap.total_rooms.saturating_sub(1);
    if snap.room < last_room {
        stamp_door(&mut buffer, -ROOM_HALF_LENGTH);
    }
    if snap.room > 0 && snap.room < last_room {
        stamp_door(&mut buffer, ROOM_HALF_LENGTH);
    }

    // ── Furniture ─────────────────────────────────────────────────────
    for rect in &snap.furniture {
        let (hw, hh) = (rect.width / 2.0, rect.height / 2.0);
        let steps_x = (rect.width / 10.0).ceil() as i32;
        let steps_y = (rect.height / 10.0).ceil() as i32;
        for ix in 0..=steps_x {
            for iy in 0..=steps_y {
                let point = Vec2::new(
                    rect.center.x - hw + rect.width * f64::from(ix) / f64::from(steps_x.max(1)),
                    rect.center.y - hh + rect.height * f64::from(iy) / f64::from(steps_y.max(1)),
                );
                buffer.put(point, '▒', Color::Rgb(90, 70, 50));
            }
        }
    }

    // ── Pickups ───────────────────────────────────────────────────────
    for item in &snap.collectibles {
        let (ch, fg) = match item.kind {
            CollectibleKind::Star => ('*', Color::LightYellow),
            CollectibleKind::Hat => ('^', Color::Rgb(160, 110, 60)),
            CollectibleKind::Coin => ('o', Color::Yellow),
        };
        buffer.put(item.position, ch, fg);
    }

    // ── Enemies ───────────────────────────────────────────────────────
    for enemy in &snap.enemies {
        let (ch, fg) = match enemy.kind {
            EnemyKind::GreenArmyMan => ('g', Color::Green),
            EnemyKind::RedMonkey => ('m', Color::Red),
            EnemyKind::Benson => ('B', Color::Rgb(200, 180, 140)),
        };
        buffer.put(enemy.position, ch, if enemy.frozen { Color::LightCyan } else { fg });
    }

    // ── Boss, projectiles, companion ──────────────────────────────────
    if let Some(boss) = &snap.boss {
        let (ch, fg) = match boss.kind {
            BossKind::PotatoHead => ('P', Color::Rgb(190, 140, 80)),
            BossKind::Lotso => ('L', Color::LightMagenta),
            BossKind::Gabby => ('G', Color::LightRed),
        };
        buffer.put(boss.position, ch, fg);
        if boss.swinging {
            buffer.tint(boss.position, Color::Red);
        }
    }
    for projectile in &snap.projectiles {
        let ch = match projectile.kind {
            ProjectileKind::BlueBall | ProjectileKind::RedBall => '•',
            ProjectileKind::Cup => 'u',
        };
        let fg = match projectile.kind {
            ProjectileKind::BlueBall => Color::LightBlue,
            ProjectileKind::RedBall => Color::LightRed,
            ProjectileKind::Cup => Color::White,
        };
        buffer.put(projectile.position, ch, fg);
    }
    if let Some(companion) = &snap.companion {
        buffer.put(companion.position, '♥', Color::LightMagenta);
        if companion.caged && companion.cage_opacity > 0.0 {
            let level = (80.0 + 150.0 * companion.cage_opacity) as u8;
            buffer.tint(companion.position, Color::Rgb(level, level, level));
        }
    }

    // ── Player, lasso and helpers ─────────────────────────────────────
    let player = &snap.player;
    if player.opacity > 0.0 {
        let level = (255.0 * player.opacity) as u8;
        let player_color = Color::Rgb(level, level, level / 2);
        if let Some(point) = player.lasso_point {
            buffer.put(point, '~', Color::Rgb(200, 150, 90));
        }
        buffer.put(player.position, '@', player_color);
        let ahead = player.position + Vec2::from_angle(player.facing).scale(12.0);
        buffer.put(ahead, facing_glyph(player.facing), player_color);
    }
    for power in snap.powers.iter().filter(|p| p.phase != PowerPhase::Idle) {
        if power.ray_alpha > 0.0 {
            let level = (60.0 + 195.0 * power.ray_alpha) as u8;
            for step in 1..20 {
                let point = player.position
                    + Vec2::from_angle(player.facing).scale(f64::from(step) * 25.0);
                buffer.tint(point, Color::Rgb(level, 0, 0));
            }
        }
    }

    for (row, line) in buffer.cells.iter().enumerate() {
        let spans: Vec<Span> = line
            .iter()
            .map(|cell| Span::styled(cell.ch.to_string(), Style::default().fg(cell.fg).bg(cell.bg)))
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect {
                x: area.x,
                y: area.y + row as u16,
                width: area.width,
                height: 1,
            },
        );
    }
}

fn stamp_door(buffer: &mut CellBuffer, y: f64) {
    let mut x = -DOOR_BAND_HALF_WIDTH;
    while x <= DOOR_BAND_HALF_WIDTH {
        buffer.put(Vec2::new(x, y), ' ', Color::Reset);
        x += 5.0;
    }
}

/// Arrow for the facing direction. Screen rows grow toward +Y.
fn facing_glyph(facing: f64) -> char {
    const GLYPHS: [char; 8] = ['→', '↘', '↓', '↙', '←', '↖', '↑', '↗'];
    let sector = ((facing + 22.5).rem_euclid(360.0) / 45.0) as usize;
    GLYPHS[sector.min(7)]
}

fn render_banners(frame: &mut Frame, area: Rect, banners: &[Banner]) {
    if banners.is_empty() {
        return;
    }
    let lines = banners
        .iter()
        .map(|banner| {
            let color = match banner {
                Banner::GameOver => Color::LightRed,
                Banner::GameEnd | Banner::MissionComplete => Color::LightGreen,
                _ => Color::LightYellow,
            };
            Line::from(Span::styled(
                banner.text(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    render_centered(frame, area, lines);
}

fn render_room_status(frame: &mut Frame, area: Rect, snap: &RenderSnapshot) {
    let (status, color) = if snap.player.opacity < 1.0 {
        ("Out of lives...".to_string(), Color::LightRed)
    } else if snap.win_phase > 0 {
        (format!("Rescue in progress ({}/6)", snap.win_phase), Color::LightGreen)
    } else if snap.in_boss_room {
        ("Boss fight!".to_string(), Color::LightRed)
    } else {
        (
            format!("{} enemies left in this room", snap.enemies.len()),
            Color::White,
        )
    };
    render_status_bar(
        frame,
        area,
        &status,
        color,
        &[
            ("[↑↓←→]", "Move"),
            ("[Space]", "Jump"),
            ("[A]", "Lasso"),
            ("[J]", "Freeze"),
            ("[B]", "Ray"),
            ("[Q]", "Quit"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &RenderSnapshot, log: &MessageLog) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(3)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Status ");
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let player = &snap.player;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Health ", Style::default().fg(Color::Gray)),
            Span::styled(bar(player.health, 100, 12), Style::default().fg(Color::Green)),
            Span::raw(format!(" {}%", player.health)),
        ]),
        Line::from(format!("Lives  {}", player.lives)),
        Line::from(format!("Score  {}", player.score)),
    ];
    if let Some(boss) = &snap.boss {
        lines.push(Line::from(vec![
            Span::styled("Boss   ", Style::default().fg(Color::Gray)),
            Span::styled(
                bar(boss.health, boss.max_health, 12),
                Style::default().fg(Color::LightRed),
            ),
        ]));
    }
    for power in snap.powers.iter().filter(|p| p.enabled) {
        let state = match power.phase {
            PowerPhase::Idle if power.cooldown == 0 => "ready".to_string(),
            PowerPhase::Idle => format!("{}s", power.cooldown / 60 + 1),
            _ => "active".to_string(),
        };
        lines.push(Line::from(format!("{:<7}{}", power.kind.name(), state)));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Log ");
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let max_width = inner.width as usize;
    let lines: Vec<Line> = log
        .entries()
        .rev()
        .take(inner.height as usize)
        .map(|message| {
            let text: String = message.chars().take(max_width).collect();
            Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) as usize * width) / max as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
