//! Layout engine: position resolution and composite outline tracing
//!
//! This module takes room and part specifications and computes absolute
//! coordinates for every entry, then derives the merged boundary of each
//! composite room for rendering.

pub mod config;
pub mod error;
pub mod outline;
pub mod position;
pub mod registry;
pub mod resolver;
pub mod types;

pub use config::ResolverConfig;
pub use error::{OutlineError, ResolveError};
pub use outline::{calculate_composite_room_outline, composite_bounds};
pub use registry::PartRegistry;
pub use resolver::{resolve, resolve_with_config, Resolution};
pub use types::*;
