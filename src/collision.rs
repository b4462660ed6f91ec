//! Axis-aligned bounding-box collision.
//!
//! Every check is a plain rectangle overlap test. Alpha and pixel content
//! are ignored, and a body that is not solid never collides, whatever its
//! geometry.

use crate::sprite::{AnimatedSprite, ImageSprite};

/// An axis-aligned rectangle in surface pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Anything that takes part in collision checks.
pub trait Body {
    fn bounds(&self) -> Rect;

    /// Whether the body currently collides at all.
    fn is_solid(&self) -> bool;
}

/// AABB overlap of two bodies; false if either one is not solid.
pub fn check_collision<A, B>(a: &A, b: &B) -> bool
where
    A: Body + ?Sized,
    B: Body + ?Sized,
{
    if !a.is_solid() || !b.is_solid() {
        return false;
    }
    a.bounds().intersects(&b.bounds())
}

pub fn check_image_collision(a: &ImageSprite, b: &ImageSprite) -> bool {
    check_collision(a, b)
}

/// Checks only the animation's current frame against `other`.
pub fn check_animated_collision(anim: &AnimatedSprite, other: &ImageSprite) -> bool {
    check_collision(anim, other)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Block {
        rect: Rect,
        solid: bool,
    }

    impl Body for Block {
        fn bounds(&self) -> Rect {
            self.rect
        }

        fn is_solid(&self) -> bool {
            self.solid
        }
    }

    fn block(x: f32, y: f32, w: f32, h: f32) -> Block {
        Block {
            rect: Rect::new(x, y, w, h),
            solid: true,
        }
    }

    #[test]
    fn overlapping_rects_intersect() {
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn containment_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn collision_is_symmetric() {
        let cases = [
            (block(0.0, 0.0, 10.0, 10.0), block(9.5, 9.5, 1.0, 1.0)),
            (block(0.0, 0.0, 10.0, 10.0), block(10.0, 0.0, 1.0, 1.0)),
            (block(-5.0, -5.0, 3.0, 30.0), block(-4.0, 20.0, 1.0, 1.0)),
            (block(50.0, 0.0, 1.0, 1.0), block(0.0, 0.0, 10.0, 10.0)),
        ];
        for (a, b) in &cases {
            assert_eq!(check_collision(a, b), check_collision(b, a));
        }
    }

    #[test]
    fn inactive_bodies_never_collide() {
        let a = block(0.0, 0.0, 10.0, 10.0);
        let mut b = block(0.0, 0.0, 10.0, 10.0);
        assert!(check_collision(&a, &b));
        b.solid = false;
        assert!(!check_collision(&a, &b));
        assert!(!check_collision(&b, &a));
    }
}
