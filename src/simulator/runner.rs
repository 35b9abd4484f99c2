//! Runs sessions through the real `game_tick()` loop.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunOutcome, RunStats, SimReport};
use crate::core::game_state::GameState;
use crate::core::tick::{game_tick, TickEvent};
use crate::level::CollectibleKind;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Runs `config.runs` sessions with incrementing seeds.
///
/// `on_event` sees every event as `(run index, frame, event)`; pass a no-op
/// closure when nobody is listening.
pub fn run_simulation<F>(config: &SimConfig, mut on_event: F) -> SimReport
where
    F: FnMut(u32, u64, &TickEvent),
{
    let runs = (0..config.runs)
        .map(|run| {
            let seed = config.seed.wrapping_add(u64::from(run));
            run_single(config, seed, |frame, event| on_event(run, frame, event))
        })
        .collect();
    SimReport::from_runs(runs)
}

/// Plays one session from the title menu until game over, game end or the
/// frame limit.
pub fn run_single<F>(config: &SimConfig, seed: u64, mut on_event: F) -> RunStats
where
    F: FnMut(u64, &TickEvent),
{
    let mut state = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pilot = Autopilot::new(config.level);
    let mut stats = RunStats::new(seed, config.level);

    for frame in 0..config.max_frames {
        let input = pilot.next_input(&state);
        let result = game_tick(&mut state, &input, &mut rng);
        stats.frames = frame + 1;

        for event in &result.events {
            record(&mut stats, event);
            on_event(frame, event);
        }
        stats.max_room = stats.max_room.max(state.world.room_index);

        if state.is_game_over() {
            stats.outcome = RunOutcome::GameOver;
            break;
        }
        if state.world.win.game_end {
            stats.outcome = RunOutcome::GameEnd;
            break;
        }
    }

    stats.final_level = state.world.level();
    stats.score = state.player.score;
    stats.lives = state.player.lives;
    stats
}

fn record(stats: &mut RunStats, event: &TickEvent) {
    match event {
        TickEvent::LevelStarted { .. } => stats.max_room = 0,
        TickEvent::LifeLost { .. } | TickEvent::GameOver { .. } => stats.lives_lost += 1,
        TickEvent::ItemCollected { kind } => match kind {
            CollectibleKind::Coin => stats.coins += 1,
            CollectibleKind::Star => stats.stars += 1,
            CollectibleKind::Hat => stats.hats += 1,
        },
        TickEvent::EnemyLassoed { .. } => stats.enemies_lassoed += 1,
        TickEvent::EnemiesBlasted { count } => stats.enemies_blasted += *count as u64,
        TickEvent::BossDefeated { .. } => stats.bosses_defeated += 1,
        TickEvent::LevelComplete { .. } | TickEvent::GameEnd { .. } => {
            stats.levels_completed += 1
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    fn short_config() -> SimConfig {
        SimConfig {
            max_frames: 3_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let config = short_config();
        let a = run_single(&config, 5, |_, _| {});
        let b = run_single(&config, 5, |_, _| {});
        assert_eq!(a.frames, b.frames);
        assert_eq!(a.score, b.score);
        assert_eq!(a.max_room, b.max_room);
        assert_eq!(a.enemies_lassoed, b.enemies_lassoed);
    }

    #[test]
    fn test_autopilot_leaves_first_room() {
        let stats = run_single(&short_config(), 42, |_, _| {});
        assert_eq!(stats.final_level, Level::One);
        // room 0 is empty, so the walk to the far door is uninterrupted
        assert!(stats.max_room >= 1);
    }

    #[test]
    fn test_events_reach_listener() {
        let mut seen = Vec::new();
        run_single(&short_config(), 1, |frame, event| {
            seen.push((frame, event.clone()))
        });
        assert!(seen
            .iter()
            .any(|(_, e)| matches!(e, TickEvent::LevelStarted { level: Level::One })));
    }

    #[test]
    fn test_multiple_runs() {
        let config = SimConfig {
            runs: 3,
            max_frames: 200,
            ..Default::default()
        };
        let report = run_simulation(&config, |_, _, _| {});
        assert_eq!(report.num_runs, 3);
        let seeds: Vec<u64> = report.runs.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![42, 43, 44]);
    }
}
