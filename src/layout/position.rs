//! Pure corner and offset arithmetic for placing a single rectangle
//!
//! Every placement in the resolver reduces to the same sum: take the anchor
//! point on the reference rectangle, add the author's offset, then shift by
//! the vector from the chosen anchor corner back to the top-left origin.

use crate::spec::{Corner, Offset};

use super::types::{Point, Rect};

/// One of the rectangle's four corner points.
pub fn corner_point(rect: &Rect, corner: Corner) -> Point {
    rect.corner(corner)
}

/// The vector from a rectangle's anchor corner to its top-left origin.
///
/// Adding this to an anchor's absolute position yields the rectangle's
/// top-left: (0,0) for top-left, (-width,0) for top-right, (0,-depth) for
/// bottom-left, (-width,-depth) for bottom-right.
pub fn anchor_adjustment(anchor: Corner, width: i64, depth: i64) -> Point {
    match anchor {
        Corner::TopLeft => Point::zero(),
        Corner::TopRight => Point::new(-width, 0),
        Corner::BottomLeft => Point::new(0, -depth),
        Corner::BottomRight => Point::new(-width, -depth),
    }
}

/// Compute a rectangle's top-left position from an anchor point.
///
/// `anchor_point + offset + anchor_adjustment`. Pure and total.
pub fn calculate_position(
    anchor_point: Point,
    anchor: Corner,
    width: i64,
    depth: i64,
    offset: Offset,
) -> Point {
    let adjustment = anchor_adjustment(anchor, width, depth);
    Point::new(
        anchor_point.x + offset.dx + adjustment.x,
        anchor_point.y + offset.dy + adjustment.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_adjustment_all_corners() {
        assert_eq!(anchor_adjustment(Corner::TopLeft, 100, 50), Point::zero());
        assert_eq!(
            anchor_adjustment(Corner::TopRight, 100, 50),
            Point::new(-100, 0)
        );
        assert_eq!(
            anchor_adjustment(Corner::BottomLeft, 100, 50),
            Point::new(0, -50)
        );
        assert_eq!(
            anchor_adjustment(Corner::BottomRight, 100, 50),
            Point::new(-100, -50)
        );
    }

    #[test]
    fn test_calculate_position_top_left_is_identity() {
        let pos = calculate_position(Point::new(30, 40), Corner::TopLeft, 100, 50, Offset::default());
        assert_eq!(pos, Point::new(30, 40));
    }

    #[test]
    fn test_calculate_position_bottom_right_anchor() {
        // Hanging the bottom-right corner at (200, 100) puts the top-left at
        // (200 - width, 100 - depth).
        let pos = calculate_position(
            Point::new(200, 100),
            Corner::BottomRight,
            100,
            50,
            Offset::default(),
        );
        assert_eq!(pos, Point::new(100, 50));
    }

    #[test]
    fn test_calculate_position_applies_offset_before_adjustment() {
        let pos = calculate_position(
            Point::new(0, 0),
            Corner::TopRight,
            100,
            50,
            Offset::new(10, -5),
        );
        assert_eq!(pos, Point::new(-90, -5));
    }

    #[test]
    fn test_corner_point_matches_rect() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(corner_point(&r, Corner::BottomRight), Point::new(110, 70));
    }
}
