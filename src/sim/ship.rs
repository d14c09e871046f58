//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::entity::{Entity, Playfield, Rect};
use crate::consts::*;

/// Raw directional key state for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub size: Vec2,
    /// Units moved per tick on each requested axis
    pub speed: f32,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
            speed: SHIP_BASE_SPEED,
        }
    }

    /// Ship placed at its run-start position, horizontally centred near the bottom
    pub fn spawn(playfield: &Playfield) -> Self {
        let pos = Vec2::new(
            playfield.width / 2.0 - SHIP_WIDTH / 2.0,
            playfield.height - SHIP_START_OFFSET,
        );
        Self::new(playfield.clamp_origin(pos, Vec2::new(SHIP_WIDTH, SHIP_HEIGHT)))
    }

    /// Move one tick in the requested directions.
    ///
    /// Each direction is applied in turn (left, right, up, down) and clamped
    /// on its own axis, so opposite keys cancel and diagonals are faster
    /// than straight moves.
    pub fn update(&mut self, input: &DirectionalInput, playfield: &Playfield) {
        let max = playfield.max_origin(self.size);
        if input.left {
            self.pos.x = (self.pos.x - self.speed).clamp(0.0, max.x);
        }
        if input.right {
            self.pos.x = (self.pos.x + self.speed).clamp(0.0, max.x);
        }
        if input.up {
            self.pos.y = (self.pos.y - self.speed).clamp(0.0, max.y);
        }
        if input.down {
            self.pos.y = (self.pos.y + self.speed).clamp(0.0, max.y);
        }
    }

    /// Bullets for a single fire action
    pub fn fire(&self, rapid_fire: bool) -> Vec<Bullet> {
        let half_bullet = BULLET_WIDTH / 2.0;
        let mut volley = Vec::with_capacity(if rapid_fire { 3 } else { 1 });
        volley.push(Bullet::new(Vec2::new(
            self.pos.x + self.size.x / 2.0 - half_bullet,
            self.pos.y,
        )));
        if rapid_fire {
            let y = self.pos.y + RAPID_FIRE_DROP;
            volley.push(Bullet::new(Vec2::new(self.pos.x + self.size.x / 4.0 - half_bullet, y)));
            volley.push(Bullet::new(Vec2::new(
                self.pos.x + self.size.x * 3.0 / 4.0 - half_bullet,
                y,
            )));
        }
        volley
    }
}

impl Entity for Ship {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Ships only move from input
    fn advance(&mut self) {}

    fn is_off_screen(&self, _playfield: &Playfield) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    #[test]
    fn test_spawn_position() {
        let ship = Ship::spawn(&field());
        assert_eq!(ship.pos, Vec2::new(375.0, 500.0));
        assert_eq!(ship.speed, SHIP_BASE_SPEED);
    }

    #[test]
    fn test_diagonal_moves_both_axes() {
        let mut ship = Ship::new(Vec2::new(100.0, 100.0));
        let input = DirectionalInput {
            right: true,
            down: true,
            ..Default::default()
        };
        ship.update(&input, &field());
        assert_eq!(ship.pos, Vec2::new(105.0, 105.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut ship = Ship::new(Vec2::new(100.0, 100.0));
        let input = DirectionalInput {
            left: true,
            right: true,
            ..Default::default()
        };
        ship.update(&input, &field());
        assert_eq!(ship.pos.x, 100.0);
    }

    #[test]
    fn test_opposite_keys_at_wall_later_branch_wins() {
        // Left clamps at 0, then right moves off the wall
        let mut ship = Ship::new(Vec2::new(2.0, 100.0));
        let input = DirectionalInput {
            left: true,
            right: true,
            ..Default::default()
        };
        ship.update(&input, &field());
        assert_eq!(ship.pos.x, 5.0);
    }

    #[test]
    fn test_clamped_at_edges() {
        let mut ship = Ship::new(Vec2::new(748.0, 538.0));
        let input = DirectionalInput {
            right: true,
            down: true,
            ..Default::default()
        };
        ship.update(&input, &field());
        assert_eq!(ship.pos, Vec2::new(750.0, 540.0));
    }

    #[test]
    fn test_single_shot() {
        let ship = Ship::new(Vec2::new(100.0, 300.0));
        let volley = ship.fire(false);
        assert_eq!(volley.len(), 1);
        assert_eq!(volley[0].pos, Vec2::new(122.5, 300.0));
    }

    #[test]
    fn test_rapid_fire_volley() {
        let ship = Ship::new(Vec2::new(100.0, 300.0));
        let volley = ship.fire(true);
        assert_eq!(volley.len(), 3);
        assert_eq!(volley[1].pos, Vec2::new(110.0, 305.0));
        assert_eq!(volley[2].pos, Vec2::new(135.0, 305.0));
    }

    proptest! {
        #[test]
        fn ship_stays_in_bounds(
            x in 0.0f32..750.0,
            y in 0.0f32..540.0,
            boosted in any::<bool>(),
            moves in prop::collection::vec(any::<(bool, bool, bool, bool)>(), 1..200),
        ) {
            let playfield = field();
            let mut ship = Ship::new(Vec2::new(x, y));
            if boosted {
                ship.speed = SHIP_BOOSTED_SPEED;
            }
            for (left, right, up, down) in moves {
                ship.update(&DirectionalInput { left, right, up, down }, &playfield);
                prop_assert!(ship.pos.x >= 0.0 && ship.pos.x <= 750.0);
                prop_assert!(ship.pos.y >= 0.0 && ship.pos.y <= 540.0);
            }
        }
    }
}
