//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Speeds are per tick; only power-up timers read the host's clock
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod bullet;
pub mod collision;
pub mod effects;
pub mod enemy;
pub mod entity;
pub mod fx;
pub mod powerup;
pub mod rng;
pub mod ship;
pub mod state;
pub mod tick;
pub mod wave;

pub use autopilot::autopilot;
pub use bullet::Bullet;
pub use collision::{entities_overlap, overlaps};
pub use effects::{ActiveEffect, ActiveEffects, EffectSlot};
pub use enemy::{Enemy, EnemyKind};
pub use entity::{Entity, Playfield, Rect};
pub use fx::{Decor, Explosion, Particle, Star};
pub use powerup::{PowerUp, PowerUpKind};
pub use rng::{RandomSource, ReplayRng, RngState};
pub use ship::{DirectionalInput, Ship};
pub use state::{GamePhase, GameState};
pub use tick::{EnemyDestroyed, FrameEvents, FrameResult, PowerUpSpawned, TickInput, tick};
pub use wave::{WaveDirector, WavePhase, WaveStep, enemies_for_wave};
