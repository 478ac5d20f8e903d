//! Fixed-point resolution of room and part positions
//!
//! Every room hangs off another room's corner, the virtual zero point, or
//! (for parts) its owning room. Resolution is a worklist fixed point: each
//! pass places every pending entry whose reference is already placed, until
//! the worklist drains or the pass budget runs out. Entries left over are
//! reported as errors; the algorithm deliberately does not distinguish a
//! reference that never existed from one whose chain cycles back, since
//! both simply never leave the worklist.
//!
//! The resolver never fails as a whole. It returns the entries it could
//! place plus one error per entry it could not, and callers render the
//! partial result.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::spec::{AttachTarget, Attachment, Corner, Offset, PartSpec, RoomSpec, PARENT};

use super::config::ResolverConfig;
use super::error::ResolveError;
use super::position::{calculate_position, corner_point};
use super::registry::PartRegistry;
use super::types::{Point, Rect, ResolvedEntry};

/// The complete result of a resolution call.
///
/// Rooms and parts share the `room_map` namespace so downstream lookups
/// (wall-mounted elements, drag targets) need not care which kind an id
/// names; [`PartRegistry`] distinguishes them when it matters.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Every successfully placed room and part, by identifier.
    pub room_map: HashMap<String, ResolvedEntry>,
    /// Part-to-room index for the placed parts.
    pub registry: PartRegistry,
    /// One error per entry that could not be placed, in input order.
    pub errors: Vec<ResolveError>,
}

impl Resolution {
    /// A room's own rectangle followed by its parts' rectangles, in
    /// registration order. Input for the composite outline tracer.
    pub fn composite_rects(&self, room_id: &str) -> Vec<Rect> {
        let mut rects = Vec::new();
        if let Some(room) = self.room_map.get(room_id) {
            rects.push(room.rect());
        }
        for part_id in self.registry.parts_of(room_id) {
            if let Some(part) = self.room_map.get(part_id) {
                rects.push(part.rect());
            }
        }
        rects
    }
}

/// Resolve a plan with the default pass budget.
pub fn resolve(specs: &[RoomSpec]) -> Resolution {
    resolve_with_config(specs, &ResolverConfig::default())
}

/// Resolve a plan: rooms first, then each resolved room's parts, then
/// normalize so the union's bounding box starts at (0,0).
pub fn resolve_with_config(specs: &[RoomSpec], config: &ResolverConfig) -> Resolution {
    let mut result = Resolution::default();

    let rooms: Vec<Entry> = specs.iter().map(Entry::from).collect();
    resolve_entries(rooms, &HashMap::new(), config, &mut result);

    for spec in specs {
        if spec.parts.is_empty() {
            continue;
        }
        let room_rect = result.room_map.get(&spec.id).map(ResolvedEntry::rect);
        match room_rect {
            Some(rect) => {
                // Parts resolve against each other like rooms do, with the
                // owning room reachable under the `parent` name.
                let env = HashMap::from([(PARENT.to_string(), rect)]);
                let parts: Vec<Entry> = spec.parts.iter().map(Entry::from).collect();
                let placed = resolve_entries(parts, &env, config, &mut result);
                for part_id in placed {
                    result.registry.register(part_id, spec.id.clone());
                }
            }
            None => {
                // The room itself failed, so its parts have nothing to hang
                // off: report each as a transitive failure.
                for part in &spec.parts {
                    result.errors.push(ResolveError::unresolvable(
                        part.id.clone(),
                        part.attach_to.target.name(),
                    ));
                }
            }
        }
    }

    normalize(&mut result.room_map);

    if !result.errors.is_empty() {
        warn!(
            unresolved = result.errors.len(),
            resolved = result.room_map.len(),
            "plan resolved partially"
        );
    }

    result
}

/// A pending entry in the worklist. Rooms and parts flatten to the same
/// shape here; only the reference namespace differs between the two runs.
struct Entry<'a> {
    id: &'a str,
    width: i64,
    depth: i64,
    anchor: Corner,
    attach_to: &'a Attachment,
    offset: Offset,
}

impl<'a> From<&'a RoomSpec> for Entry<'a> {
    fn from(spec: &'a RoomSpec) -> Self {
        Self {
            id: &spec.id,
            width: spec.width,
            depth: spec.depth,
            anchor: spec.anchor,
            attach_to: &spec.attach_to,
            offset: spec.offset,
        }
    }
}

impl<'a> From<&'a PartSpec> for Entry<'a> {
    fn from(spec: &'a PartSpec) -> Self {
        Self {
            id: &spec.id,
            width: spec.width,
            depth: spec.depth,
            anchor: spec.anchor,
            attach_to: &spec.attach_to,
            offset: spec.offset,
        }
    }
}

/// Run the fixed point over one batch of entries.
///
/// `env` holds pre-resolved rectangles reachable by name (the `parent`
/// rectangle during part resolution). Placed entries land in
/// `result.room_map`; leftovers land in `result.errors`. Returns the ids
/// placed by this batch, in placement order.
fn resolve_entries(
    mut pending: Vec<Entry<'_>>,
    env: &HashMap<String, Rect>,
    config: &ResolverConfig,
    result: &mut Resolution,
) -> Vec<String> {
    let mut placed_rects: HashMap<String, Rect> = env.clone();
    let mut placed_ids = Vec::new();

    // Seeding only applies to the room pass. During part resolution the
    // owning room in the environment already anchors the graph, and a first
    // part with a dangling sibling reference must fail, not become a root.
    if env.is_empty() {
        seed_root(&mut pending, &mut placed_rects, result, &mut placed_ids);
    }

    let mut pass = 0;
    while !pending.is_empty() && pass < config.max_passes {
        pass += 1;
        let before = pending.len();

        // Rebuild the worklist each pass instead of mutating it mid-scan.
        // Entries placed earlier in a pass are visible to later ones, so a
        // straight chain in input order resolves in a single pass.
        let mut still_pending = Vec::with_capacity(pending.len());
        for entry in pending {
            match try_place(&entry, &placed_rects) {
                Some(origin) => {
                    place(&entry, origin, &mut placed_rects, result, &mut placed_ids);
                }
                None => still_pending.push(entry),
            }
        }
        pending = still_pending;

        debug!(pass, remaining = pending.len(), "resolution pass");
        if pending.len() == before {
            // No progress; further passes cannot place anything either.
            break;
        }
    }

    for entry in &pending {
        result.errors.push(ResolveError::unresolvable(
            entry.id,
            entry.attach_to.target.name(),
        ));
    }

    placed_ids
}

/// Guarantee the room graph has a concrete root.
///
/// If the first room's target is neither the zero point nor any other
/// entry's identifier, the author never anchored the plan; force that room
/// to (0,0) so everything attached to it still resolves.
fn seed_root(
    pending: &mut Vec<Entry<'_>>,
    placed_rects: &mut HashMap<String, Rect>,
    result: &mut Resolution,
    placed_ids: &mut Vec<String>,
) {
    let Some(first) = pending.first() else {
        return;
    };

    let target_could_resolve = match &first.attach_to.target {
        AttachTarget::ZeroPoint => true,
        target => {
            let name = target.name();
            pending[1..].iter().any(|entry| entry.id == name)
        }
    };

    if !target_could_resolve {
        let first = pending.remove(0);
        place(&first, Point::zero(), placed_rects, result, placed_ids);
    }
}

/// Try to compute an entry's top-left position from what is placed so far.
fn try_place(entry: &Entry<'_>, placed_rects: &HashMap<String, Rect>) -> Option<Point> {
    let anchor_point = match &entry.attach_to.target {
        AttachTarget::ZeroPoint => Point::zero(),
        target => {
            let rect = placed_rects.get(target.name())?;
            corner_point(rect, entry.attach_to.corner)
        }
    };
    Some(calculate_position(
        anchor_point,
        entry.anchor,
        entry.width,
        entry.depth,
        entry.offset,
    ))
}

fn place(
    entry: &Entry<'_>,
    origin: Point,
    placed_rects: &mut HashMap<String, Rect>,
    result: &mut Resolution,
    placed_ids: &mut Vec<String>,
) {
    placed_rects.insert(
        entry.id.to_string(),
        Rect::new(origin.x, origin.y, entry.width, entry.depth),
    );
    result.room_map.insert(
        entry.id.to_string(),
        ResolvedEntry {
            id: entry.id.to_string(),
            width: entry.width,
            depth: entry.depth,
            x: origin.x,
            y: origin.y,
        },
    );
    placed_ids.push(entry.id.to_string());
}

/// Shift every resolved entry so the union's bounding box starts at (0,0).
///
/// This makes the zero point's absolute position an implementation detail:
/// plans anchored far from it, or with negative offsets, come out identical
/// up to translation.
fn normalize(room_map: &mut HashMap<String, ResolvedEntry>) {
    let Some(min_x) = room_map.values().map(|e| e.x).min() else {
        return;
    };
    let min_y = room_map.values().map(|e| e.y).min().unwrap_or(0);

    if min_x == 0 && min_y == 0 {
        return;
    }
    for entry in room_map.values_mut() {
        entry.x -= min_x;
        entry.y -= min_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Attachment;

    fn room(id: &str, attach_to: &str) -> RoomSpec {
        RoomSpec::new(id, 4000, 3000, attach_to.parse::<Attachment>().unwrap())
    }

    #[test]
    fn test_single_room_at_zero_point() {
        let result = resolve(&[room("a", "zeropoint:top-left")]);
        assert!(result.errors.is_empty());
        let a = &result.room_map["a"];
        assert_eq!((a.x, a.y), (0, 0));
    }

    #[test]
    fn test_chain_resolves_left_to_right() {
        let result = resolve(&[room("a", "zeropoint:top-left"), room("b", "a:top-right")]);
        assert!(result.errors.is_empty());
        assert_eq!((result.room_map["a"].x, result.room_map["a"].y), (0, 0));
        assert_eq!((result.room_map["b"].x, result.room_map["b"].y), (4000, 0));
    }

    #[test]
    fn test_forward_reference_needs_second_pass() {
        // b is declared before a, so the first pass places only a.
        let result = resolve(&[room("b", "a:top-right"), room("a", "zeropoint:top-left")]);
        assert!(result.errors.is_empty());
        assert_eq!((result.room_map["b"].x, result.room_map["b"].y), (4000, 0));
    }

    #[test]
    fn test_unanchored_first_room_is_seeded_at_origin() {
        // Neither room references the zero point and "nowhere" names nothing;
        // the first room becomes the forced root.
        let result = resolve(&[room("a", "nowhere:top-left"), room("b", "a:top-right")]);
        assert!(result.errors.is_empty());
        assert_eq!((result.room_map["a"].x, result.room_map["a"].y), (0, 0));
        assert_eq!((result.room_map["b"].x, result.room_map["b"].y), (4000, 0));
    }

    #[test]
    fn test_missing_reference_reports_error() {
        let result = resolve(&[room("a", "zeropoint:top-left"), room("b", "ghost:top-left")]);
        assert!(!result.room_map.contains_key("b"));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].name(), "b");
        assert_eq!(result.errors[0].reference(), "ghost");
    }

    #[test]
    fn test_missing_reference_fails_transitively() {
        let result = resolve(&[
            room("a", "zeropoint:top-left"),
            room("b", "ghost:top-left"),
            room("c", "b:top-right"),
        ]);
        assert!(result.room_map.contains_key("a"));
        assert!(!result.room_map.contains_key("b"));
        assert!(!result.room_map.contains_key("c"));
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_cycle_reports_both_entries() {
        // a and b reference each other; the seeding rule does not apply
        // because each target names an existing entry.
        let result = resolve(&[
            room("root", "zeropoint:top-left"),
            room("a", "b:top-left"),
            room("b", "a:top-left"),
        ]);
        assert_eq!(result.room_map.len(), 1);
        assert_eq!(result.errors.len(), 2);
        let names: Vec<&str> = result.errors.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_pass_budget_limits_chain_depth() {
        // A 4-deep dependent chain declared in reverse order needs one pass
        // per link; a budget of 2 strands the tail.
        let specs = vec![
            room("d", "c:top-right"),
            room("c", "b:top-right"),
            room("b", "a:top-right"),
            room("a", "zeropoint:top-left"),
        ];
        let tight = resolve_with_config(&specs, &ResolverConfig::new().with_max_passes(2));
        assert!(!tight.errors.is_empty());

        let roomy = resolve_with_config(&specs, &ResolverConfig::new().with_max_passes(4));
        assert!(roomy.errors.is_empty());
        assert_eq!(roomy.room_map["d"].x, 12000);
    }

    #[test]
    fn test_normalization_pulls_bounding_box_to_origin() {
        // b hangs off a's top-left growing up and left via its bottom-right
        // anchor, so raw coordinates go negative before normalization.
        let specs = vec![
            room("a", "zeropoint:top-left"),
            RoomSpec::new(
                "b",
                1000,
                1000,
                "a:top-left".parse().unwrap(),
            )
            .with_anchor(crate::spec::Corner::BottomRight),
        ];
        let result = resolve(&specs);
        assert!(result.errors.is_empty());
        assert_eq!((result.room_map["b"].x, result.room_map["b"].y), (0, 0));
        assert_eq!((result.room_map["a"].x, result.room_map["a"].y), (1000, 1000));
    }

    #[test]
    fn test_parts_resolve_against_parent_and_siblings() {
        let spec = room("a", "zeropoint:top-left")
            .with_part(PartSpec::new(
                "p1",
                1000,
                500,
                Attachment::parent(crate::spec::Corner::TopRight),
            ))
            .with_part(PartSpec::new(
                "p2",
                1000,
                500,
                "p1:bottom-left".parse().unwrap(),
            ));
        let result = resolve(&[spec]);
        assert!(result.errors.is_empty(), "{:?}", result.errors);

        let p1 = &result.room_map["p1"];
        assert_eq!((p1.x, p1.y), (4000, 0));
        let p2 = &result.room_map["p2"];
        assert_eq!((p2.x, p2.y), (4000, 500));

        assert!(result.registry.is_part("p1"));
        assert_eq!(result.registry.parent_id("p2"), Some("a"));
        assert!(!result.registry.is_part("a"));
    }

    #[test]
    fn test_first_part_with_dangling_sibling_is_not_seeded() {
        // The seeding rule must not fire inside a part pass: the owning room
        // already anchors the graph, so a dangling first part is an error.
        let spec = room("main", "zeropoint:top-left").with_part(PartSpec::new(
            "p1",
            1000,
            500,
            "ghost:top-left".parse().unwrap(),
        ));
        let result = resolve(&[spec]);

        assert!(result.room_map.contains_key("main"));
        assert!(!result.room_map.contains_key("p1"));
        assert!(!result.registry.is_part("p1"));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].name(), "p1");
        assert_eq!(result.errors[0].reference(), "ghost");
    }

    #[test]
    fn test_parts_of_failed_room_report_errors() {
        let spec = room("a", "ghost:top-left").with_part(PartSpec::new(
            "p1",
            1000,
            500,
            Attachment::parent(crate::spec::Corner::TopRight),
        ));
        // A second, valid room keeps the seeding rule away from "a".
        let result = resolve(&[room("root", "zeropoint:top-left"), spec]);
        assert!(!result.room_map.contains_key("a"));
        assert!(!result.room_map.contains_key("p1"));
        let names: Vec<&str> = result.errors.iter().map(|e| e.name()).collect();
        assert!(names.contains(&"a"));
        assert!(names.contains(&"p1"));
    }

    #[test]
    fn test_composite_rects_includes_room_then_parts() {
        let spec = room("a", "zeropoint:top-left").with_part(PartSpec::new(
            "p1",
            1000,
            500,
            Attachment::parent(crate::spec::Corner::TopRight),
        ));
        let result = resolve(&[spec]);
        let rects = result.composite_rects("a");
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], Rect::new(0, 0, 4000, 3000));
        assert_eq!(rects[1], Rect::new(4000, 0, 1000, 500));
    }
}
