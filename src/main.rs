//! Astro Blaster headless runner
//!
//! Plays autopilot runs against the simulation with no renderer attached and
//! records the results on the leaderboard.
//!
//! Usage: `astro-blaster [config.json]`

use std::time::{SystemTime, UNIX_EPOCH};

use astro_blaster::sim::{GameState, autopilot, tick};
use astro_blaster::{Config, HighScores};

/// Nominal frame length used to advance the power-up clock
const FRAME_MS: u64 = 16;

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Astro Blaster (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path),
        None => Config::default(),
    };
    log::info!(
        "Playfield {}x{}, seed {}",
        config.playfield.width,
        config.playfield.height,
        config.seed
    );

    let mut scores = config
        .highscores_path
        .as_deref()
        .map(HighScores::load)
        .unwrap_or_default();

    let mut state = GameState::from_config(&config);
    for run in 1..=config.runs {
        state.start_run();
        // Simulated clock so runs replay identically
        let mut now = 0;
        let mut last = None;
        while state.time_ticks < config.max_ticks {
            let input = autopilot(&state);
            let result = tick(&mut state, &input, now);
            now += FRAME_MS;
            let terminal = result.terminal;
            last = Some(result);
            if terminal {
                break;
            }
        }

        let Some(result) = last else {
            continue;
        };
        let outcome = if result.terminal { "destroyed" } else { "survived" };
        println!(
            "Run {}: {} on wave {} with score {} ({} ticks)",
            run, outcome, result.wave, result.score, state.time_ticks
        );
        if let Some(rank) = scores.add_score(result.score, result.wave, unix_millis()) {
            println!("  New high score! Rank #{}", rank);
        }
    }

    if let Some(path) = config.highscores_path.as_deref() {
        if let Err(e) = scores.save(path) {
            log::error!("Failed to save high scores: {}", e);
        }
    }
    if let Some(top) = scores.top_score() {
        println!("Best score: {}", top);
    }
}
