//! Per-run statistics and the aggregated report.

use crate::level::Level;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Lives ran out.
    GameOver,
    /// The final boss fell and the game-end banner went up.
    GameEnd,
    /// The frame limit was reached first.
    TimedOut,
}

/// Statistics for one simulated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub seed: u64,
    pub outcome: RunOutcome,
    pub frames: u64,
    pub final_level: Level,
    /// Deepest room index reached on the final level.
    pub max_room: usize,
    pub score: u64,
    pub lives: u32,
    pub lives_lost: u32,
    pub enemies_lassoed: u64,
    pub enemies_blasted: u64,
    pub coins: u64,
    pub stars: u64,
    pub hats: u64,
    pub bosses_defeated: u32,
    pub levels_completed: u32,
}

impl RunStats {
    pub fn new(seed: u64, level: Level) -> Self {
        Self {
            seed,
            outcome: RunOutcome::TimedOut,
            frames: 0,
            final_level: level,
            max_room: 0,
            score: 0,
            lives: 0,
            lives_lost: 0,
            enemies_lassoed: 0,
            enemies_blasted: 0,
            coins: 0,
            stars: 0,
            hats: 0,
            bosses_defeated: 0,
            levels_completed: 0,
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "seed {} | {:?} after {} frames | level {} room {} | score {} | lives {} | bosses {}",
            self.seed,
            self.outcome,
            self.frames,
            self.final_level.number(),
            self.max_room + 1,
            self.score,
            self.lives,
            self.bosses_defeated
        )
    }
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub game_overs: u32,
    pub game_ends: u32,
    pub timed_out: u32,
    pub avg_score: f64,
    pub avg_frames: f64,
    pub avg_bosses: f64,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |outcome: RunOutcome| runs.iter().filter(|r| r.outcome == outcome).count() as u32;
        let divisor = f64::from(num_runs.max(1));
        Self {
            num_runs,
            game_overs: count(RunOutcome::GameOver),
            game_ends: count(RunOutcome::GameEnd),
            timed_out: count(RunOutcome::TimedOut),
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor,
            avg_frames: runs.iter().map(|r| r.frames as f64).sum::<f64>() / divisor,
            avg_bosses: runs
                .iter()
                .map(|r| f64::from(r.bosses_defeated))
                .sum::<f64>()
                / divisor,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");
        report.push_str(&format!(
            "Runs: {} total, {} game end, {} game over, {} timed out\n\n",
            self.num_runs, self.game_ends, self.game_overs, self.timed_out
        ));

        report.push_str("── AVERAGES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Score:           {:.0}\n", self.avg_score));
        report.push_str(&format!("  Frames:          {:.0}\n", self.avg_frames));
        report.push_str(&format!("  Bosses Defeated: {:.2}\n\n", self.avg_bosses));

        report.push_str("── RUNS ─────────────────────────────────────────────────────────\n");
        for run in &self.runs {
            report.push_str(&format!("  {}\n", run.summary_line()));
        }
        report
    }
}
