//! Core geometric types for the layout engine

use serde::{Deserialize, Serialize};

use crate::spec::Corner;

/// A 2D point in plan units (y grows downward, as in SVG).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The origin (0,0), also the virtual zero-point anchor.
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned rectangle: top-left corner plus width and depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub depth: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, depth: i64) -> Self {
        Self {
            x,
            y,
            width,
            depth,
        }
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> i64 {
        self.y + self.depth
    }

    /// One of the rectangle's four corner points.
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(self.x, self.y),
            Corner::TopRight => Point::new(self.right(), self.y),
            Corner::BottomLeft => Point::new(self.x, self.bottom()),
            Corner::BottomRight => Point::new(self.right(), self.bottom()),
        }
    }

    /// True if the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.depth == 0
    }
}

/// A room or part with computed absolute coordinates.
///
/// Only successfully placed entries become `ResolvedEntry` values; an entry
/// that failed to resolve never appears in the result map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEntry {
    pub id: String,
    pub width: i64,
    pub depth: i64,
    /// Absolute x of the top-left corner, in the shared coordinate space.
    pub x: i64,
    /// Absolute y of the top-left corner, in the shared coordinate space.
    pub y: i64,
}

impl ResolvedEntry {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.depth)
    }
}

/// Axis-aligned bounds of a composite shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompositeBounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
    pub width: i64,
    pub depth: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
    }

    #[test]
    fn test_rect_corners() {
        let r = Rect::new(0, 0, 100, 50);
        assert_eq!(r.corner(Corner::TopLeft), Point::new(0, 0));
        assert_eq!(r.corner(Corner::TopRight), Point::new(100, 0));
        assert_eq!(r.corner(Corner::BottomLeft), Point::new(0, 50));
        assert_eq!(r.corner(Corner::BottomRight), Point::new(100, 50));
    }

    #[test]
    fn test_rect_is_empty() {
        assert!(Rect::new(0, 0, 0, 50).is_empty());
        assert!(Rect::new(0, 0, 50, 0).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_point_translate() {
        assert_eq!(Point::new(3, 4).translate(-3, -4), Point::zero());
    }

    #[test]
    fn test_resolved_entry_rect() {
        let entry = ResolvedEntry {
            id: "a".to_string(),
            width: 4000,
            depth: 3000,
            x: 100,
            y: 200,
        };
        assert_eq!(entry.rect(), Rect::new(100, 200, 4000, 3000));
    }
}
