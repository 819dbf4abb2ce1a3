//! Pointer event types forwarded by a host UI.

use crate::draw::{Endpoint, Point};
use serde::{Deserialize, Serialize};

/// One pointer-level input the wall editor understands.
///
/// Hosts that record or script interaction (see [`crate::replay`]) use this
/// as the serialized form; live hosts usually call the `WallEditor`
/// handlers directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    /// Primary button pressed on empty space
    Press(Point),
    /// Pointer moved (with or without the button held)
    Move(Point),
    /// Primary button released
    Release,
    /// Press landed on a wall key, as determined by host hit-testing
    DragStart {
        /// Index of the wall in the plan
        wall: usize,
        /// Which key of that wall
        endpoint: Endpoint,
    },
    /// Abandon the current gesture (pointer left the surface, Escape, ...)
    Cancel,
}
