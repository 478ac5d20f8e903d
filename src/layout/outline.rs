//! Composite room outline tracing by edge cancellation
//!
//! A composite room is a union of axis-aligned rectangles (the room plus its
//! parts) that tile one connected region. The outer boundary falls out of a
//! cancellation argument: walk every rectangle's edges clockwise, split them
//! so that coincident pieces match exactly, and delete every pair of
//! identical segments running in opposite directions. What survives is
//! precisely the outer boundary, because a wall shared by two adjacent
//! rectangles is traversed once in each direction and a wall on the outside
//! is traversed once.
//!
//! All arithmetic is exact integer arithmetic, so segment matching needs no
//! epsilon.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::warn;

use super::error::OutlineError;
use super::types::{CompositeBounds, Point, Rect};

type Segment = (Point, Point);

/// Trace the outer boundary of a union of rectangles.
///
/// Returns the boundary's vertex sequence, wound clockwise (y-down),
/// starting from the leftmost-topmost vertex, with collinear runs merged to
/// the minimal vertex count. Empty input yields an empty outline; a single
/// rectangle yields exactly its four corners.
///
/// The rectangles must form one connected region. Disconnected input, which
/// includes rectangles touching only at a single point, produces
/// [`OutlineError::Disconnected`] rather than an arbitrary loop.
pub fn calculate_composite_room_outline(rects: &[Rect]) -> Result<Vec<Point>, OutlineError> {
    let surviving = cancel_interior_walls(boundary_segments(rects));
    if surviving.is_empty() {
        return Ok(vec![]);
    }

    let loops = chain_loops(surviving);
    if loops.len() > 1 {
        warn!(loops = loops.len(), "composite rectangles are disconnected");
        return Err(OutlineError::Disconnected { loops: loops.len() });
    }

    // One loop by construction: surviving segments are non-empty and every
    // vertex has balanced in/out degree.
    let outline = loops.into_iter().next().unwrap_or_default();
    Ok(merge_collinear(outline))
}

/// Axis-aligned bounds of a set of rectangles.
///
/// Plain min/max fold: order-invariant, correct for negative coordinates,
/// and independent of the boundary trace. Empty input yields zero bounds.
pub fn composite_bounds(rects: &[Rect]) -> CompositeBounds {
    let mut iter = rects.iter();
    let Some(first) = iter.next() else {
        return CompositeBounds::default();
    };

    let mut bounds = CompositeBounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.right(),
        max_y: first.bottom(),
        width: 0,
        depth: 0,
    };
    for rect in iter {
        bounds.min_x = bounds.min_x.min(rect.x);
        bounds.min_y = bounds.min_y.min(rect.y);
        bounds.max_x = bounds.max_x.max(rect.right());
        bounds.max_y = bounds.max_y.max(rect.bottom());
    }
    bounds.width = bounds.max_x - bounds.min_x;
    bounds.depth = bounds.max_y - bounds.min_y;
    bounds
}

/// Decompose every rectangle into directed boundary sub-segments.
///
/// Edges are walked clockwise (top left-to-right, right downward, bottom
/// right-to-left, left upward) and split at every x (for horizontal edges)
/// and y (for vertical edges) at which any rectangle starts or stops. The
/// split is a superset of the collinear touch points, which is all the
/// cancellation step needs; the collinear merge at the end restores the
/// minimal vertex count.
fn boundary_segments(rects: &[Rect]) -> Vec<Segment> {
    let rects: Vec<&Rect> = rects.iter().filter(|r| !r.is_empty()).collect();

    let xs: BTreeSet<i64> = rects.iter().flat_map(|r| [r.x, r.right()]).collect();
    let ys: BTreeSet<i64> = rects.iter().flat_map(|r| [r.y, r.bottom()]).collect();

    let mut segments = Vec::new();
    for rect in rects {
        let (left, right) = (rect.x, rect.right());
        let (top, bottom) = (rect.y, rect.bottom());

        push_horizontal(&mut segments, &xs, left, right, top, false);
        push_vertical(&mut segments, &ys, top, bottom, right, false);
        push_horizontal(&mut segments, &xs, left, right, bottom, true);
        push_vertical(&mut segments, &ys, top, bottom, left, true);
    }
    segments
}

fn push_horizontal(
    segments: &mut Vec<Segment>,
    xs: &BTreeSet<i64>,
    x0: i64,
    x1: i64,
    y: i64,
    reversed: bool,
) {
    let mut cuts = vec![x0];
    cuts.extend(xs.range(x0 + 1..x1).copied());
    cuts.push(x1);
    for pair in cuts.windows(2) {
        let seg = (Point::new(pair[0], y), Point::new(pair[1], y));
        segments.push(if reversed { (seg.1, seg.0) } else { seg });
    }
}

fn push_vertical(
    segments: &mut Vec<Segment>,
    ys: &BTreeSet<i64>,
    y0: i64,
    y1: i64,
    x: i64,
    reversed: bool,
) {
    let mut cuts = vec![y0];
    cuts.extend(ys.range(y0 + 1..y1).copied());
    cuts.push(y1);
    for pair in cuts.windows(2) {
        let seg = (Point::new(x, pair[0]), Point::new(x, pair[1]));
        segments.push(if reversed { (seg.1, seg.0) } else { seg });
    }
}

/// Delete every pair of identical segments running in opposite directions.
///
/// Those are the interior walls between adjacent rectangles. Counted as a
/// multiset so that coincident duplicates cancel pairwise.
fn cancel_interior_walls(segments: Vec<Segment>) -> HashMap<Segment, usize> {
    let mut counts: HashMap<Segment, usize> = HashMap::new();
    for segment in segments {
        let reverse = (segment.1, segment.0);
        if let Some(count) = counts.get_mut(&reverse) {
            *count -= 1;
            if *count == 0 {
                counts.remove(&reverse);
            }
        } else {
            *counts.entry(segment).or_insert(0) += 1;
        }
    }
    counts
}

/// Chain surviving segments head-to-tail into closed loops.
///
/// Each loop starts at its lexicographically smallest remaining point. At a
/// vertex with several continuations (boundaries meeting at a single point),
/// the walk takes the sharpest clockwise turn relative to the incoming
/// direction: that keeps it on the current loop instead of jumping across
/// the pinch into the other shape's boundary, so point contacts come out as
/// separate loops. Cancellation leaves in-degree equal to out-degree at
/// every vertex, so every walk closes.
fn chain_loops(surviving: HashMap<Segment, usize>) -> Vec<Vec<Point>> {
    let mut by_start: BTreeMap<Point, Vec<Point>> = BTreeMap::new();
    for ((start, end), count) in surviving {
        let ends = by_start.entry(start).or_default();
        for _ in 0..count {
            ends.push(end);
        }
    }
    for ends in by_start.values_mut() {
        ends.sort();
    }

    let mut loops = Vec::new();
    loop {
        let Some(start) = by_start.keys().next().copied() else {
            break;
        };
        let mut points = Vec::new();
        let mut previous = None;
        let mut current = start;
        loop {
            points.push(current);
            let Some(next) = take_continuation(&mut by_start, current, previous) else {
                break;
            };
            previous = Some(current);
            current = next;
            if current == start {
                break;
            }
        }
        loops.push(points);
    }
    loops
}

fn take_continuation(
    by_start: &mut BTreeMap<Point, Vec<Point>>,
    from: Point,
    previous: Option<Point>,
) -> Option<Point> {
    let ends = by_start.get_mut(&from)?;
    let index = match previous {
        Some(previous) if ends.len() > 1 => {
            let incoming = direction_index(previous, from);
            (0..ends.len())
                .min_by_key(|&i| turn_key(incoming, direction_index(from, ends[i])))
                .unwrap_or(0)
        }
        _ => 0,
    };
    let next = ends.remove(index);
    if ends.is_empty() {
        by_start.remove(&from);
    }
    Some(next)
}

/// Cardinal direction of an axis-aligned segment, indexed in clockwise
/// order (y-down): right, down, left, up.
fn direction_index(from: Point, to: Point) -> i32 {
    match ((to.x - from.x).signum(), (to.y - from.y).signum()) {
        (1, 0) => 0,
        (0, 1) => 1,
        (-1, 0) => 2,
        _ => 3,
    }
}

/// Rank an outgoing direction against the incoming one: sharpest clockwise
/// turn first, then straight on, then the counter-clockwise turn. A reversal
/// cannot occur, since the opposite segment would have cancelled.
fn turn_key(incoming: i32, outgoing: i32) -> i32 {
    (incoming + 1 - outgoing).rem_euclid(4)
}

/// Drop every vertex whose incoming and outgoing segments run the same
/// direction, including across the loop's wrap-around.
fn merge_collinear(points: Vec<Point>) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points;
    }

    let direction = |a: Point, b: Point| ((b.x - a.x).signum(), (b.y - a.y).signum());

    let mut merged = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let curr = points[i];
        let next = points[(i + 1) % n];
        if direction(prev, curr) != direction(curr, next) {
            merged.push(curr);
        }
    }
    merged
}
