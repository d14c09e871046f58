//! Decorative effects: explosions and the scrolling starfield
//!
//! These keep animating between runs and never feed back into gameplay.
//! They draw from their own RNG stream so cosmetics cannot shift a replay.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Playfield;
use super::rng::RandomSource;

const EXPLOSION_START_RADIUS: f32 = 5.0;
const EXPLOSION_MAX_RADIUS: f32 = 30.0;
const EXPLOSION_GROWTH: f32 = 1.5;
const EXPLOSION_PARTICLES: usize = 8;

/// A debris particle (presentation only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// HSL hue in degrees (orange to yellow)
    pub hue: f32,
}

/// An expanding blast ring with debris
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub center: Vec2,
    pub radius: f32,
    pub particles: Vec<Particle>,
}

impl Explosion {
    pub fn new(center: Vec2, rng: &mut impl RandomSource) -> Self {
        let particles = (0..EXPLOSION_PARTICLES)
            .map(|_| Particle {
                pos: center,
                vel: Vec2::new(rng.next_unit() * 6.0 - 3.0, rng.next_unit() * 6.0 - 3.0),
                size: rng.next_unit() * 3.0 + 2.0,
                hue: (rng.next_unit() * 60.0).floor(),
            })
            .collect();
        Self {
            center,
            radius: EXPLOSION_START_RADIUS,
            particles,
        }
    }

    /// Advance one tick; returns false once the blast has burnt out
    pub fn update(&mut self) -> bool {
        self.radius += EXPLOSION_GROWTH;
        for particle in &mut self.particles {
            particle.pos += particle.vel;
        }
        self.radius <= EXPLOSION_MAX_RADIUS
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

/// Background layer plus in-flight explosions
#[derive(Debug, Clone)]
pub struct Decor {
    pub stars: Vec<Star>,
    pub explosions: Vec<Explosion>,
    max_explosions: usize,
    rng: Pcg32,
}

impl Decor {
    pub fn new(mut rng: Pcg32, playfield: &Playfield, star_count: usize, max_explosions: usize) -> Self {
        let stars = (0..star_count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.next_unit() * playfield.width,
                    rng.next_unit() * playfield.height,
                ),
                size: rng.next_unit() * 2.0 + 1.0,
                speed: rng.next_unit() * 3.0 + 1.0,
            })
            .collect();
        Self {
            stars,
            explosions: Vec::new(),
            max_explosions,
            rng,
        }
    }

    /// Start a blast, dropping the oldest one if at capacity
    pub fn explode(&mut self, center: Vec2) {
        if self.max_explosions == 0 {
            return;
        }
        if self.explosions.len() >= self.max_explosions {
            self.explosions.remove(0);
        }
        self.explosions.push(Explosion::new(center, &mut self.rng));
    }

    pub fn update(&mut self, playfield: &Playfield) {
        for star in &mut self.stars {
            star.pos.y += star.speed;
            if star.pos.y > playfield.height {
                star.pos.y = 0.0;
                star.pos.x = self.rng.next_unit() * playfield.width;
            }
        }
        self.explosions.retain_mut(Explosion::update);
    }
}
