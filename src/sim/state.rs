//! Game state and run lifecycle
//!
//! Everything a tick reads or writes lives in [`GameState`]. Entity containers
//! keep spawn order, and gameplay randomness comes only from the injected
//! [`RandomSource`].

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::effects::ActiveEffects;
use super::enemy::Enemy;
use super::entity::Playfield;
use super::fx::Decor;
use super::powerup::PowerUp;
use super::rng::{DECOR_STREAM, RandomSource, RngState};
use super::ship::Ship;
use super::wave::WaveDirector;
use crate::settings::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run started yet
    Title,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Complete game state (deterministic for a given random source)
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub playfield: Playfield,
    pub phase: GamePhase,
    pub score: u64,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    pub ship: Ship,
    /// Spawn order is kept for every container
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub effects: ActiveEffects,
    pub waves: WaveDirector,
    /// Starfield and explosions (not gameplay-affecting)
    pub decor: Decor,
    pub(crate) rng: R,
}

impl GameState<Pcg32> {
    /// Create a state on the title screen, seeded for reproducibility
    pub fn new(seed: u64) -> Self {
        Self::from_config(&Config {
            seed,
            ..Config::default()
        })
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_rng(RngState::new(config.seed).to_rng(), config)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a state driven by a caller-supplied random source
    pub fn with_rng(rng: R, config: &Config) -> Self {
        let playfield = config.playfield;
        let decor = Decor::new(
            RngState::with_stream(config.seed, DECOR_STREAM).to_rng(),
            &playfield,
            config.star_count,
            config.max_explosions,
        );
        Self {
            playfield,
            phase: GamePhase::Title,
            score: 0,
            time_ticks: 0,
            ship: Ship::spawn(&playfield),
            bullets: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            effects: ActiveEffects::default(),
            waves: WaveDirector::default(),
            decor,
            rng,
        }
    }

    /// Reset every run-scoped value and begin playing.
    ///
    /// Decorative state (stars, explosions still burning) carries over.
    pub fn start_run(&mut self) {
        self.ship = Ship::spawn(&self.playfield);
        self.bullets.clear();
        self.enemies.clear();
        self.power_ups.clear();
        self.effects = ActiveEffects::default();
        self.waves = WaveDirector::default();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        log::info!("Run started");
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
