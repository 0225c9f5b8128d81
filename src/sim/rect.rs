//! Axis-aligned rectangles for plastic, bins and buttons
//!
//! Screen space: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Midpoint of the top edge
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_contains_point_half_open() {
        let r = rect(10.0, 10.0, 40.0, 40.0);
        assert!(r.contains_point(Vec2::new(10.0, 10.0)));
        assert!(r.contains_point(Vec2::new(49.9, 49.9)));
        assert!(!r.contains_point(Vec2::new(50.0, 20.0)));
        assert!(!r.contains_point(Vec2::new(20.0, 50.0)));
        assert!(!r.contains_point(Vec2::new(9.9, 20.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 40.0, 40.0);
        let b = rect(40.0, 0.0, 40.0, 40.0);
        let c = rect(0.0, 40.0, 40.0, 40.0);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = rect(0.0, 0.0, 40.0, 40.0);
        let b = rect(39.0, 39.0, 60.0, 60.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Containment counts as overlap
        let inner = rect(10.0, 10.0, 5.0, 5.0);
        assert!(a.overlaps(&inner));
    }

    #[test]
    fn test_centers() {
        let r = Rect::from_center(Vec2::new(100.0, 50.0), Vec2::new(60.0, 20.0));
        assert_eq!(r.pos, Vec2::new(70.0, 40.0));
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
        assert_eq!(r.top_center(), Vec2::new(100.0, 40.0));
    }
}
