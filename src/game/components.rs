//! Shared Geometry
//!
//! Plain data shared by every arena entity: positions, axis-aligned
//! bounding boxes, the `Body` capability used by collision, and the arena
//! bounds that monsters are kept inside.
//!
//! Arena coordinates are y-up with the origin at the bottom-left corner,
//! so "top" means larger y. The renderer flips to screen space.

use macroquad::math::{vec2, Vec2};
use rand::Rng;

/// Axis-aligned bounding box in arena space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box centred on `center` extending `half_extents` each way
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Strict overlap test: boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Anything that occupies space in the arena.
///
/// Collision only needs a centre and an extent, so entities stay plain
/// records instead of sharing a framework base type.
pub trait Body {
    /// Centre of the entity in arena space
    fn position(&self) -> Vec2;

    /// Half of the entity's width and height
    fn half_extents(&self) -> Vec2;

    fn bounding_box(&self) -> Aabb {
        Aabb::from_center(self.position(), self.half_extents())
    }
}

/// Playable area, `width` x `height` units.
///
/// Valid coordinates run from 0 to `width - 1` / `height - 1` inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn right(&self) -> f32 {
        self.width - 1.0
    }

    pub fn top(&self) -> f32 {
        self.height - 1.0
    }

    pub fn center(&self) -> Vec2 {
        // Integer centre (W / 2, H / 2 rounded down)
        vec2((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }

    /// Uniformly random point inside the arena
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        vec2(
            rng.gen_range(0.0..self.width),
            rng.gen_range(0.0..self.height),
        )
    }

    /// Pull a box back inside the arena.
    ///
    /// Only the side that crossed a bound moves; the opposite side is left
    /// alone. Returns the corrected centre.
    pub fn clamp_box(&self, center: Vec2, half_extents: Vec2) -> Vec2 {
        let mut c = center;

        if c.x - half_extents.x < 0.0 {
            c.x = half_extents.x;
        } else if c.x + half_extents.x > self.right() {
            c.x = self.right() - half_extents.x;
        }

        if c.y - half_extents.y < 0.0 {
            c.y = half_extents.y;
        } else if c.y + half_extents.y > self.top() {
            c.y = self.top() - half_extents.y;
        }

        c
    }

    /// Is the whole box inside the arena?
    pub fn contains_box(&self, aabb: &Aabb) -> bool {
        aabb.min.x >= 0.0 && aabb.min.y >= 0.0 && aabb.max.x <= self.right() && aabb.max.y <= self.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::from_center(vec2(10.0, 10.0), vec2(5.0, 5.0));
        let b = Aabb::from_center(vec2(14.0, 12.0), vec2(5.0, 5.0));
        let c = Aabb::from_center(vec2(40.0, 10.0), vec2(5.0, 5.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::from_center(vec2(10.0, 10.0), vec2(5.0, 5.0));
        let b = Aabb::from_center(vec2(20.0, 10.0), vec2(5.0, 5.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_clamp_only_moves_offending_side() {
        let bounds = Bounds::new(800.0, 600.0);
        let half = vec2(10.0, 10.0);

        assert_eq!(bounds.clamp_box(vec2(-3.0, 300.0), half), vec2(10.0, 300.0));
        assert_eq!(bounds.clamp_box(vec2(795.0, 300.0), half), vec2(789.0, 300.0));
        assert_eq!(bounds.clamp_box(vec2(400.0, 2.0), half), vec2(400.0, 10.0));
        assert_eq!(bounds.clamp_box(vec2(400.0, 599.0), half), vec2(400.0, 589.0));
        // Already inside: untouched
        assert_eq!(bounds.clamp_box(vec2(400.0, 300.0), half), vec2(400.0, 300.0));
    }

    #[test]
    fn test_center_is_integral() {
        assert_eq!(Bounds::new(800.0, 600.0).center(), vec2(400.0, 300.0));
        assert_eq!(Bounds::new(801.0, 601.0).center(), vec2(400.0, 300.0));
    }
}
