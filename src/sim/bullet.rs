//! Player projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Playfield, Rect};
use crate::consts::{BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}

impl Entity for Bullet {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT))
    }

    fn advance(&mut self) {
        self.pos.y -= BULLET_SPEED;
    }

    fn is_off_screen(&self, _playfield: &Playfield) -> bool {
        self.pos.y < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_up() {
        let mut bullet = Bullet::new(Vec2::new(10.0, 100.0));
        bullet.advance();
        assert_eq!(bullet.pos, Vec2::new(10.0, 92.0));
    }

    #[test]
    fn test_off_screen_only_below_zero() {
        let field = Playfield::default();
        let mut bullet = Bullet::new(Vec2::new(10.0, 8.0));
        bullet.advance();
        assert!(!bullet.is_off_screen(&field));
        bullet.advance();
        assert!(bullet.is_off_screen(&field));
    }
}
