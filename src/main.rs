mod input;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{KeyAction, KeyTracker};
use ratatui::{backend::CrosstermBackend, Terminal};
use rescue_run::core::constants::FRAME_MS;
use rescue_run::core::game_state::GameState;
use rescue_run::core::tick::game_tick;
use std::io;
use std::time::{Duration, Instant};
use ui::MessageLog;

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let state = result?;
    println!("Final score: {}", state.player.score);
    Ok(())
}

/// Fixed-step loop: one `game_tick()` every frame, input polled in between.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<GameState> {
    let frame_duration = Duration::from_millis(FRAME_MS);
    let mut state = GameState::new();
    let mut keys = KeyTracker::new();
    let mut log = MessageLog::default();
    let mut rng = rand::thread_rng();
    let mut next_frame = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &state, &log))?;

        // Drain input until the next frame is due
        loop {
            let now = Instant::now();
            if now >= next_frame {
                break;
            }
            if event::poll(next_frame - now)? {
                if let Event::Key(key_event) = event::read()? {
                    if keys.handle_key(key_event, Instant::now()) == KeyAction::Quit {
                        return Ok(state);
                    }
                }
            }
        }
        next_frame += frame_duration;

        let input = keys.take_frame(Instant::now());
        let result = game_tick(&mut state, &input, &mut rng);
        for event in &result.events {
            log.push(event.message());
        }
    }
}
