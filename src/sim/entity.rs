//! Shared entity geometry
//!
//! Every simulated object is an axis-aligned rectangle in playfield space
//! (origin top-left, +y pointing down) that moves by a fixed rule each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// The visible play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest top-left position that keeps a box of `size` fully inside
    pub fn max_origin(&self, size: Vec2) -> Vec2 {
        Vec2::new(
            (self.width - size.x).max(0.0),
            (self.height - size.y).max(0.0),
        )
    }

    /// Clamp a box origin so the box stays inside the playfield
    pub fn clamp_origin(&self, pos: Vec2, size: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, self.max_origin(size))
    }
}

/// Common shape of every simulated object
pub trait Entity {
    /// Current bounding box
    fn bounds(&self) -> Rect;

    /// Advance one tick by the entity's own motion rule
    fn advance(&mut self);

    /// Whether the entity has left the playfield and should be pruned
    fn is_off_screen(&self, playfield: &Playfield) -> bool;

    fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}
