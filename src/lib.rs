//! Floorplan - declarative room layout resolution and outline tracing
//!
//! This library turns declarative room specifications - each rectangle
//! positioned relative to another room's corner, a part's owning room, or a
//! virtual zero point - into absolute coordinates, and traces the outer
//! boundary of composite rooms built from adjacent rectangles.
//!
//! # Example
//!
//! ```rust
//! use floorplan::{resolve_plan, Attachment, Corner, RoomSpec};
//!
//! let plan = vec![
//!     RoomSpec::new("kitchen", 4000, 3000, Attachment::zero_point(Corner::TopLeft)),
//!     RoomSpec::new("hall", 2000, 3000, "kitchen:top-right".parse().unwrap()),
//! ];
//!
//! let resolution = resolve_plan(&plan);
//! assert!(resolution.errors.is_empty());
//! assert_eq!(resolution.room_map["hall"].x, 4000);
//! ```
//!
//! Resolution never fails as a whole: entries whose references are missing
//! or cyclic are reported in [`Resolution::errors`] while everything else
//! resolves normally, so callers can render the partial plan and surface the
//! errors.

pub mod layout;
pub mod render;
pub mod spec;

pub use layout::{
    calculate_composite_room_outline, composite_bounds, CompositeBounds, OutlineError,
    PartRegistry, Point, Rect, ResolveError, ResolvedEntry, Resolution, ResolverConfig,
};
pub use render::polygon_to_svg_path;
pub use spec::{AttachTarget, Attachment, Corner, Offset, PartSpec, RoomSpec};

/// Resolve a plan with the default configuration.
///
/// This is the main entry point. Rooms resolve first, then each resolved
/// room's parts, and finally all coordinates are normalized so the plan's
/// bounding box starts at (0,0).
pub fn resolve_plan(specs: &[RoomSpec]) -> Resolution {
    layout::resolve(specs)
}

/// Resolve a plan with a custom configuration.
///
/// # Example
///
/// ```rust
/// use floorplan::{resolve_plan_with_config, ResolverConfig, RoomSpec};
///
/// let plan = vec![RoomSpec::new("a", 4000, 3000, "zeropoint:top-left".parse().unwrap())];
/// let config = ResolverConfig::new().with_max_passes(50);
/// let resolution = resolve_plan_with_config(&plan, &config);
/// assert!(resolution.errors.is_empty());
/// ```
pub fn resolve_plan_with_config(specs: &[RoomSpec], config: &ResolverConfig) -> Resolution {
    layout::resolve_with_config(specs, config)
}
