//! Axis-aligned collision detection
//!
//! Everything in the game is a rectangle, so the whole collision story
//! is a single AABB overlap test. Strict inequalities on all four
//! half-plane checks: rectangles that merely touch edges do not overlap.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, like canvas coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Center point, used as the origin for particle bursts
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Test whether two rectangles overlap
///
/// Edge-touching counts as non-overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));

        let far = Rect::new(100.0, 100.0, 10.0, 10.0);
        assert!(!overlaps(&a, &far));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge exactly
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        // Shares the y=10 edge exactly
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &below));
        // Corner touch
        let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &corner));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 40.0, 40.0);
        assert_eq!(r.center(), Vec2::new(30.0, 40.0));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn zero_size_never_overlaps(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
        ) {
            let point = Rect::new(x, y, 0.0, 0.0);
            prop_assert!(!overlaps(&point, &point));
        }
    }
}
