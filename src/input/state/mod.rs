mod core;
mod mouse;
#[cfg(test)]
mod tests;

pub use self::core::{DraggedKey, DrawingState, WallEditor};
