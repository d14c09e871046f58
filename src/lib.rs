//! Astro Blaster - A vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, waves, power-ups)
//! - `settings`: Data-driven playfield configuration
//! - `highscores`: Leaderboard kept between runs

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Config;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player ship
    pub const SHIP_WIDTH: f32 = 50.0;
    pub const SHIP_HEIGHT: f32 = 60.0;
    pub const SHIP_BASE_SPEED: f32 = 5.0;
    pub const SHIP_BOOSTED_SPEED: f32 = 8.0;
    /// Distance of the ship's top edge above the bottom of the playfield at run start
    pub const SHIP_START_OFFSET: f32 = 100.0;

    /// Bullets
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 8.0;
    /// Side bullets of a rapid-fire volley start this much lower than the centre one
    pub const RAPID_FIRE_DROP: f32 = 5.0;

    /// Enemies
    pub const ENEMY_WIDTH: f32 = 50.0;
    pub const ENEMY_HEIGHT: f32 = 50.0;
    pub const ENEMY_KIND_COUNT: u8 = 4;
    /// First wave where enemies drift sideways
    pub const ENEMY_WEAVE_WAVE: u32 = 3;

    /// Power-ups
    pub const POWER_UP_SIZE: f32 = 30.0;
    pub const POWER_UP_SPEED: f32 = 2.0;
    pub const POWER_UP_DROP_CHANCE: f32 = 0.15;
    /// Lifetime of every timed effect (milliseconds of wall-clock time)
    pub const POWER_UP_DURATION_MS: u64 = 10_000;
    pub const SHIELD_HITS: u8 = 3;

    /// Waves
    pub const FIRST_WAVE_ENEMIES: u32 = 5;
    pub const WAVE_BASE_ENEMIES: u32 = 5;
    pub const WAVE_ENEMIES_PER_WAVE: u32 = 2;
    /// Per-tick probability of spawning an enemy while a wave is still spawning
    pub const ENEMY_SPAWN_CHANCE: f32 = 0.03;
    /// Wave banner duration (ticks, ~2 seconds at 60 Hz)
    pub const WAVE_ANNOUNCE_TICKS: u32 = 120;
}
