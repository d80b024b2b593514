//! Axis-aligned rectangle geometry for hitboxes
//!
//! Screen space: origin at the top-left, y grows downward. A rectangle covers
//! `[x, x + w)` horizontally and `[y, y + h)` vertically.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: IVec2,
    /// Width and height (never negative)
    pub size: IVec2,
}

impl Rect {
    /// Negative extents are clamped to zero, producing an empty box.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: IVec2::new(w.max(0), h.max(0)),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x == 0 || self.size.y == 0
    }

    /// Shrink by `pad` on every side
    pub fn inset(&self, pad: i32) -> Self {
        Self::new(
            self.origin.x + pad,
            self.origin.y + pad,
            self.size.x - 2 * pad,
            self.size.y - 2 * pad,
        )
    }

    /// Strict overlap test: shared edges and empty boxes never intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    }

    #[test]
    fn test_empty_box_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let empty = Rect::new(2, 2, 0, 5);
        assert!(empty.is_empty());
        assert!(!a.intersects(&empty));
        // Negative sizes clamp to empty
        assert!(Rect::new(0, 0, 5, -3).is_empty());
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(100, 300, 24, 20).inset(2);
        assert_eq!(r, Rect::new(102, 302, 20, 16));
        assert_eq!(r.right(), 122);
        assert_eq!(r.bottom(), 318);
    }
}
