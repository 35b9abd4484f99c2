//! Headless simulator.
//!
//! Drives the exact same `game_tick()` the terminal game uses with a simple
//! autopilot instead of a keyboard, and collects per-run statistics from
//! the emitted `TickEvent`s.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::{SimConfig, USAGE};
pub use report::{RunOutcome, RunStats, SimReport};
pub use runner::{run_simulation, run_single};
