//! Pointer handling and the wall editing state machine.
//!
//! This module translates host pointer events (press, move, release, key drag
//! start) into wall edits. It owns the committed plan and the transient
//! preview/drag state, and applies snapping on every pointer position.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use crate::draw::Endpoint;
pub use events::PointerEvent;
pub use state::{DraggedKey, DrawingState, WallEditor};
