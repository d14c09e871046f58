//! Wave progression
//!
//! Enemies trickle in by a per-tick coin flip rather than on a timer; a wave
//! ends once its quota has spawned and the screen is clear.

use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::entity::Playfield;
use super::rng::RandomSource;
use crate::consts::*;

/// Where the current wave stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Quota not yet spawned
    Spawning,
    /// Quota spawned, enemies still alive
    Clearing,
    /// Quota spawned and nothing alive; next update starts a new wave
    Advancing,
}

/// What one director update did
#[derive(Debug, Default)]
pub struct WaveStep {
    pub spawned: Option<Enemy>,
    /// Number of the wave that just started
    pub advanced_to: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveDirector {
    pub wave: u32,
    pub enemies_in_wave: u32,
    pub enemies_spawned: u32,
    /// Ticks left on the "WAVE n" banner
    pub announce_ticks: u32,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self {
            wave: 1,
            enemies_in_wave: FIRST_WAVE_ENEMIES,
            enemies_spawned: 0,
            announce_ticks: 0,
        }
    }
}

/// Enemy quota for a wave
pub fn enemies_for_wave(wave: u32) -> u32 {
    WAVE_BASE_ENEMIES + wave * WAVE_ENEMIES_PER_WAVE
}

impl WaveDirector {
    pub fn phase(&self, alive: usize) -> WavePhase {
        if self.enemies_spawned < self.enemies_in_wave {
            WavePhase::Spawning
        } else if alive > 0 {
            WavePhase::Clearing
        } else {
            WavePhase::Advancing
        }
    }

    /// One tick of wave logic given the number of enemies currently alive.
    ///
    /// A spawned enemy counts as alive for the advance check on the same tick.
    pub fn update(
        &mut self,
        alive: usize,
        rng: &mut impl RandomSource,
        playfield: &Playfield,
    ) -> WaveStep {
        let mut step = WaveStep::default();
        let mut alive = alive;

        if self.enemies_spawned < self.enemies_in_wave && rng.chance(ENEMY_SPAWN_CHANCE) {
            step.spawned = Some(Enemy::spawn(rng, playfield, self.wave));
            self.enemies_spawned += 1;
            alive += 1;
        }

        if self.phase(alive) == WavePhase::Advancing {
            self.wave += 1;
            self.enemies_in_wave = enemies_for_wave(self.wave);
            self.enemies_spawned = 0;
            self.announce_ticks = WAVE_ANNOUNCE_TICKS;
            step.advanced_to = Some(self.wave);
        }

        self.announce_ticks = self.announce_ticks.saturating_sub(1);
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ReplayRng;

    #[test]
    fn test_initial_state() {
        let director = WaveDirector::default();
        assert_eq!(director.wave, 1);
        assert_eq!(director.enemies_in_wave, 5);
        assert_eq!(director.phase(0), WavePhase::Spawning);
    }

    #[test]
    fn test_spawn_roll() {
        let field = Playfield::default();
        let mut director = WaveDirector::default();

        // Miss: one draw consumed, nothing spawned
        let mut rng = ReplayRng::new(vec![0.5]);
        let step = director.update(0, &mut rng, &field);
        assert!(step.spawned.is_none());
        assert_eq!(rng.consumed(), 1);

        // Hit: roll, then column/speed/kind
        let mut rng = ReplayRng::new(vec![0.01, 0.0, 0.0, 0.0]);
        let step = director.update(0, &mut rng, &field);
        assert!(step.spawned.is_some());
        assert_eq!(director.enemies_spawned, 1);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_no_spawn_roll_once_quota_met() {
        let field = Playfield::default();
        let mut director = WaveDirector {
            enemies_spawned: 5,
            ..Default::default()
        };
        let mut rng = ReplayRng::new(vec![0.0]);
        let step = director.update(2, &mut rng, &field);
        assert!(step.spawned.is_none());
        assert_eq!(rng.consumed(), 0);
        assert_eq!(director.phase(2), WavePhase::Clearing);
    }

    #[test]
    fn test_wave_two_after_clear() {
        let field = Playfield::default();
        let mut director = WaveDirector::default();
        let mut rng = ReplayRng::new(vec![0.0]);
        for _ in 0..5 {
            director.update(1, &mut rng, &field);
        }
        assert_eq!(director.enemies_spawned, 5);
        assert_eq!(director.wave, 1);

        let step = director.update(0, &mut rng, &field);
        assert_eq!(step.advanced_to, Some(2));
        assert_eq!(director.wave, 2);
        assert_eq!(director.enemies_in_wave, 9);
        assert_eq!(director.enemies_spawned, 0);
        assert_eq!(director.announce_ticks, WAVE_ANNOUNCE_TICKS - 1);
    }

    #[test]
    fn test_last_spawn_blocks_advance_same_tick() {
        let field = Playfield::default();
        let mut director = WaveDirector {
            enemies_spawned: 4,
            ..Default::default()
        };
        let mut rng = ReplayRng::new(vec![0.0]);
        let step = director.update(0, &mut rng, &field);
        assert!(step.spawned.is_some());
        assert!(step.advanced_to.is_none());
        assert_eq!(director.phase(1), WavePhase::Clearing);
    }

    #[test]
    fn test_announce_counts_down_to_zero() {
        let field = Playfield::default();
        let mut director = WaveDirector {
            announce_ticks: 2,
            ..Default::default()
        };
        let mut rng = ReplayRng::new(vec![0.9]);
        director.update(0, &mut rng, &field);
        director.update(0, &mut rng, &field);
        director.update(0, &mut rng, &field);
        assert_eq!(director.announce_ticks, 0);
    }

    #[test]
    fn test_quota_grows() {
        assert_eq!(enemies_for_wave(2), 9);
        assert_eq!(enemies_for_wave(3), 11);
        assert_eq!(enemies_for_wave(10), 25);
    }
}
