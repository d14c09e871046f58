//! Collision detection
//!
//! All pairwise checks (bullet/enemy, ship/enemy, ship/power-up) use the same
//! axis-aligned bounding box test.

use super::entity::{Entity, Rect};

/// True iff the two rectangles intersect.
///
/// All four comparisons are strict, so boxes that only share an edge do not
/// overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// Bounding box overlap between two entities
#[inline]
pub fn entities_overlap(a: &impl Entity, b: &impl Entity) -> bool {
    overlaps(&a.bounds(), &b.bounds())
}
