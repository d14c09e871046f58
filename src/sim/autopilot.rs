//! Demo autopilot
//!
//! Produces input from the current state so the game can play itself
//! (attract mode, headless soak runs). Purely a function of state, so an
//! autopilot run is as deterministic as the simulation.

use super::entity::Entity;
use super::rng::RandomSource;
use super::ship::DirectionalInput;
use super::state::GameState;
use super::tick::TickInput;
use crate::consts::*;

/// Horizontal slack before the ship bothers to move
const ALIGN_TOLERANCE: f32 = 6.0;
/// Enemies whose bottom edge is within this distance above the ship are threats
const DANGER_DISTANCE: f32 = 140.0;
/// Ticks between shots
const FIRE_INTERVAL: u64 = 8;

/// Decide this tick's input
pub fn autopilot<R: RandomSource>(state: &GameState<R>) -> TickInput {
    if !state.is_active() {
        return TickInput::default();
    }

    let ship = state.ship.bounds();
    let ship_center = ship.center().x;
    let home_y = state.playfield.height - SHIP_START_OFFSET;
    let mut direction = DirectionalInput {
        down: ship.pos.y < home_y,
        up: ship.pos.y > home_y,
        ..Default::default()
    };

    // Enemies about to land on the ship (same columns, close above)
    let threat = state
        .enemies
        .iter()
        .map(|e| e.bounds())
        .filter(|e| {
            let lane = e.pos.x < ship.max().x + ALIGN_TOLERANCE
                && e.max().x > ship.pos.x - ALIGN_TOLERANCE;
            let gap = ship.pos.y - e.max().y;
            lane && gap < DANGER_DISTANCE && e.pos.y < ship.max().y
        })
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let target_x = if let Some(threat) = threat {
        // Sidestep away from it, leftwards when pinned to the right wall
        if threat.center().x > ship_center || ship.max().x >= state.playfield.width {
            Some(threat.pos.x - ship.size.x)
        } else {
            Some(threat.max().x)
        }
    } else if let Some(power_up) = state
        .power_ups
        .iter()
        .filter(|p| p.pos.y < ship.max().y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    {
        Some(power_up.center().x - ship.size.x / 2.0)
    } else {
        // Lowest enemy on screen
        state
            .enemies
            .iter()
            .filter(|e| e.pos.y > -ENEMY_HEIGHT)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|e| e.center().x - ship.size.x / 2.0)
    };

    if let Some(target_x) = target_x {
        let target_x = target_x.clamp(0.0, (state.playfield.width - ship.size.x).max(0.0));
        if target_x < ship.pos.x - ALIGN_TOLERANCE {
            direction.left = true;
        } else if target_x > ship.pos.x + ALIGN_TOLERANCE {
            direction.right = true;
        }
    }

    let lined_up = state.enemies.iter().any(|e| {
        let b = e.bounds();
        b.pos.x < ship_center && b.max().x > ship_center && b.max().y < ship.pos.y
    });
    let fire = lined_up && state.time_ticks.is_multiple_of(FIRE_INTERVAL);

    TickInput { direction, fire }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Config;
    use crate::sim::enemy::{Enemy, EnemyKind};
    use crate::sim::tick::tick;
    use glam::Vec2;

    #[test]
    fn test_idle_when_not_playing() {
        let state = GameState::new(3);
        assert_eq!(autopilot(&state), TickInput::default());
    }

    #[test]
    fn test_tracks_and_fires_at_enemy() {
        let mut state = GameState::new(3);
        state.start_run();
        state
            .enemies
            .push(Enemy::new(Vec2::new(100.0, 50.0), 1.0, EnemyKind::Drone, 1));
        let input = autopilot(&state);
        assert!(input.direction.left);
        assert!(!input.direction.right);

        state.ship.pos.x = 100.0;
        state.time_ticks = FIRE_INTERVAL * 3;
        let input = autopilot(&state);
        assert!(input.fire);
    }

    #[test]
    fn test_dodges_incoming_enemy() {
        let mut state = GameState::new(3);
        state.start_run();
        let ship = state.ship.pos;
        // Slightly left of centre and just above
        state
            .enemies
            .push(Enemy::new(Vec2::new(ship.x - 10.0, ship.y - 60.0), 3.0, EnemyKind::Drone, 1));
        let input = autopilot(&state);
        assert!(input.direction.right);
    }

    #[test]
    fn test_autopilot_run_scores() {
        let config = Config {
            seed: 11,
            ..Config::default()
        };
        let mut state = GameState::from_config(&config);
        state.start_run();
        let mut score = 0;
        for i in 0..20_000u64 {
            let input = autopilot(&state);
            let result = tick(&mut state, &input, i * 16);
            score = result.score;
            if result.terminal {
                break;
            }
        }
        assert!(score > 0);
    }
}
