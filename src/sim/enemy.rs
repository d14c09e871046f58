//! Descending hostiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Playfield, Rect};
use super::rng::RandomSource;
use crate::consts::*;

/// Enemy variants; the variant alone fixes the point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Drone,
    Raider,
    Striker,
    Dreadnought,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; ENEMY_KIND_COUNT as usize] = [
        EnemyKind::Drone,
        EnemyKind::Raider,
        EnemyKind::Striker,
        EnemyKind::Dreadnought,
    ];

    /// Type number in `0..4`
    pub fn index(self) -> u8 {
        match self {
            EnemyKind::Drone => 0,
            EnemyKind::Raider => 1,
            EnemyKind::Striker => 2,
            EnemyKind::Dreadnought => 3,
        }
    }

    pub fn points(self) -> u64 {
        (self.index() as u64 + 1) * 10
    }

    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Fall distance per tick, drawn once at spawn
    pub speed: f32,
    pub kind: EnemyKind,
    /// Lateral weave enabled (waves 3+)
    pub weaving: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32, kind: EnemyKind, wave: u32) -> Self {
        Self {
            pos,
            speed,
            kind,
            weaving: wave >= ENEMY_WEAVE_WAVE,
        }
    }

    /// Spawn just above the top edge at a random column.
    ///
    /// Draw order: column, speed, kind.
    pub fn spawn(rng: &mut impl RandomSource, playfield: &Playfield, wave: u32) -> Self {
        let x = rng.next_unit() * (playfield.width - ENEMY_WIDTH).max(0.0);
        let speed = 1.0 + rng.next_unit() * (wave as f32 * 0.5);
        let kind = EnemyKind::random(rng);
        Self::new(Vec2::new(x, -ENEMY_HEIGHT), speed, kind, wave)
    }

    pub fn points(&self) -> u64 {
        self.kind.points()
    }
}

impl Entity for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT))
    }

    fn advance(&mut self) {
        self.pos.y += self.speed;
        if self.weaving {
            // Phase follows fall distance, not time
            self.pos.x += (self.pos.y / 30.0).sin() * 2.0;
        }
    }

    fn is_off_screen(&self, playfield: &Playfield) -> bool {
        self.pos.y > playfield.height
    }
}
