//! Wall geometry primitives and plan-level algorithms.
//!
//! This module defines the core data for the wall editor:
//! - [`Point`]: pointer positions, snap targets and intersections
//! - [`Wall`]: a segment with a derived rounded length
//! - [`FloorPlan`]: the committed, ordered wall collection
//! - Snap resolution and intersection splitting over wall slices

pub mod plan;
pub mod point;
pub mod snap;
pub mod split;
pub mod wall;

// Re-export commonly used types at module level
pub use plan::FloorPlan;
pub use point::Point;
pub use snap::{SNAP_DISTANCE, SnapSettings, find_snap_point, find_snap_point_within};
pub use split::{split_intersecting_walls, split_intersecting_walls_with};
pub use wall::{Endpoint, Wall};
