//! Rescue Run Headless Simulator
//!
//! Plays the game without any UI using a scripted autopilot. Uses the exact
//! same `game_tick()` function as the terminal game.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --level N       Level to start on (default: 1)
//!   --frames N      Frame limit per run (default: 216000 = 1 hour)
//!   --seed N        RNG seed (default: 42)
//!   --runs N        Number of runs with incrementing seeds (default: 1)
//!   --verbose       Per-frame event logging
//!   --json          JSON report on stdout
//!   --quiet         Only final summary line

use rescue_run::core::constants::FRAMES_PER_SECOND;
use rescue_run::core::tick::TickEvent;
use rescue_run::simulator::{run_simulation, SimConfig, USAGE};
use std::io::Write;

fn frames_to_time(frames: u64) -> String {
    let secs = frames / u64::from(FRAMES_PER_SECOND);
    format!("{}m{:02}s", secs / 60, secs % 60)
}

fn print_event(run: u32, frame: u64, event: &TickEvent) {
    eprintln!(
        "[run {} {:>8} {}] {}",
        run + 1,
        frame,
        frames_to_time(frame),
        event.message()
    );
}

fn main() -> std::io::Result<()> {
    let config = match SimConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            std::process::exit(1);
        }
    };
    if config.help {
        eprintln!("{USAGE}");
        return Ok(());
    }

    if !config.quiet && !config.json {
        eprintln!(
            "Rescue Run Simulator: level {} x {} run(s), up to {} frames ({}), seed={}",
            config.level.number(),
            config.runs,
            config.max_frames,
            frames_to_time(config.max_frames),
            config.seed,
        );
    }

    let verbose = config.verbose;
    let report = run_simulation(&config, |run, frame, event| {
        if verbose {
            print_event(run, frame, event);
        }
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if config.json {
        let json = serde_json::to_string_pretty(&report)?;
        writeln!(out, "{json}")?;
    } else if config.quiet {
        writeln!(
            out,
            "{} runs: {} game end, {} game over, {} timed out, avg score {:.0}",
            report.num_runs, report.game_ends, report.game_overs, report.timed_out, report.avg_score
        )?;
    } else {
        write!(out, "{}", report.to_text())?;
    }
    Ok(())
}
