//! Collectible power-ups dropped by destroyed enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Playfield, Rect};
use super::rng::RandomSource;
use crate::consts::{POWER_UP_SIZE, POWER_UP_SPEED};

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerUpKind {
    RapidFire,
    Shield,
    DoubleDamage,
    SpeedBoost,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::RapidFire,
        PowerUpKind::Shield,
        PowerUpKind::DoubleDamage,
        PowerUpKind::SpeedBoost,
    ];

    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }

    /// HUD label
    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::RapidFire => "Rapid Fire",
            PowerUpKind::Shield => "Shield",
            PowerUpKind::DoubleDamage => "Double Damage",
            PowerUpKind::SpeedBoost => "Speed Boost",
        }
    }
}

const ROTATION_STEP: f32 = 0.05;
const PULSE_STEP: f32 = 0.05;
const PULSE_MIN: f32 = 0.8;
const PULSE_MAX: f32 = 1.2;

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    /// Presentation only
    pub rotation: f32,
    /// Presentation only
    pub pulse: f32,
    pulse_growing: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            kind,
            rotation: 0.0,
            pulse: 0.0,
            pulse_growing: true,
        }
    }

    /// Power-up centred on `center`
    pub fn centered_at(center: Vec2, kind: PowerUpKind) -> Self {
        Self::new(center - Vec2::splat(POWER_UP_SIZE / 2.0), kind)
    }

    fn animate(&mut self) {
        self.rotation += ROTATION_STEP;
        if self.pulse_growing {
            self.pulse += PULSE_STEP;
            if self.pulse >= PULSE_MAX {
                self.pulse_growing = false;
            }
        } else {
            self.pulse -= PULSE_STEP;
            if self.pulse <= PULSE_MIN {
                self.pulse_growing = true;
            }
        }
    }
}

impl Entity for PowerUp {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(POWER_UP_SIZE))
    }

    fn advance(&mut self) {
        self.pos.y += POWER_UP_SPEED;
        self.animate();
    }

    fn is_off_screen(&self, playfield: &Playfield) -> bool {
        self.pos.y > playfield.height
    }
}
