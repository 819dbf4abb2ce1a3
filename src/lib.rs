//! Wall drawing core for 2D floor-plan editors.
//!
//! Exposes the geometry primitives, the pointer-driven editing state machine
//! and configuration so that UI hosts can forward press/move/release events
//! and render the resulting walls. Snapping and intersection splitting are
//! applied by the core; rendering and hit-testing stay with the host.

pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
pub use draw::{Endpoint, FloorPlan, Point, Wall};
pub use input::WallEditor;
