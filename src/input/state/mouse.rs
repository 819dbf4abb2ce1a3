use crate::draw::{Endpoint, Point, Wall};
use crate::input::events::PointerEvent;
use log::{debug, info, warn};

use super::{DraggedKey, DrawingState, WallEditor};

impl WallEditor {
    /// Processes a press on empty space.
    ///
    /// # Behavior
    /// - While Idle: starts a zero-length preview at the snapped (or raw) point
    /// - While drawing or dragging: ignored
    pub fn on_press_start(&mut self, x: f64, y: f64) {
        if !self.is_idle() {
            debug!("Ignoring press at ({x}, {y}) during an active gesture");
            return;
        }

        let start = self.resolve_point(x, y);
        self.state = DrawingState::DrawingPreview {
            preview: Wall::at(start),
        };
        self.needs_redraw = true;
    }

    /// Starts dragging one key of an existing wall.
    ///
    /// Hit-testing belongs to the host; this is called once it has decided the
    /// press landed on `endpoint` of the wall at `wall_index`. Unknown indices
    /// and requests during another gesture are ignored.
    pub fn on_key_drag_start(&mut self, wall_index: usize, endpoint: Endpoint) {
        if !self.is_idle() {
            debug!("Ignoring key drag start during an active gesture");
            return;
        }

        if self.plan.get(wall_index).is_none() {
            warn!(
                "Key drag requested for wall {} but plan has {} wall(s)",
                wall_index,
                self.plan.len()
            );
            return;
        }

        self.state = DrawingState::DraggingKey {
            key: DraggedKey {
                wall: wall_index,
                endpoint,
            },
        };
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Dragging a key: moves that endpoint to the snapped (or raw) point
    /// - Drawing: moves the preview end, locked to the dominant axis so the
    ///   preview is always horizontal or vertical
    /// - Idle: no-op
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.is_idle() {
            return;
        }

        let target = self.resolve_point(x, y);

        match &mut self.state {
            DrawingState::Idle => {}
            DrawingState::DraggingKey { key } => match self.plan.get_mut(key.wall) {
                Some(wall) => {
                    wall.set_endpoint(key.endpoint, target);
                    self.needs_redraw = true;
                }
                None => warn!("Dragged wall {} no longer exists", key.wall),
            },
            DrawingState::DrawingPreview { preview } => {
                preview.set_end(axis_locked_end(preview.start(), target));
                self.needs_redraw = true;
            }
        }
    }

    /// Processes the button release.
    ///
    /// # Behavior
    /// - Dragging a key: ends the drag; the wall keeps its last position
    /// - Drawing: commits the preview, splitting it and every wall it crosses
    /// - Idle: no-op
    pub fn on_press_end(&mut self) {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Idle => {}
            DrawingState::DraggingKey { key } => {
                debug!("Finished dragging {:?} key of wall {}", key.endpoint, key.wall);
                self.needs_redraw = true;
            }
            DrawingState::DrawingPreview { preview } => {
                let added = self.plan.insert_wall(preview, self.key_precision);
                info!(
                    "Committed wall; plan grew by {} to {} wall(s)",
                    added,
                    self.plan.len()
                );
                self.needs_redraw = true;
            }
        }
    }

    /// Abandons the current gesture without committing anything further.
    ///
    /// A preview is discarded. A drag simply ends: the endpoint stays where the
    /// last move put it, since moves are applied in place.
    pub fn cancel(&mut self) {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Idle => {}
            DrawingState::DraggingKey { .. } => {
                debug!("Key drag cancelled");
            }
            DrawingState::DrawingPreview { .. } => {
                debug!("Wall preview discarded");
                self.needs_redraw = true;
            }
        }
    }

    /// Dispatches a serialized pointer event to the matching handler.
    pub fn apply_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(Point { x, y }) => self.on_press_start(x, y),
            PointerEvent::Move(Point { x, y }) => self.on_pointer_move(x, y),
            PointerEvent::Release => self.on_press_end(),
            PointerEvent::DragStart { wall, endpoint } => self.on_key_drag_start(wall, endpoint),
            PointerEvent::Cancel => self.cancel(),
        }
    }
}

/// Constrains `target` to the horizontal or vertical line through `start`,
/// whichever axis the pointer has moved further along. Ties lock vertically.
fn axis_locked_end(start: Point, target: Point) -> Point {
    let delta_x = (target.x - start.x).abs();
    let delta_y = (target.y - start.y).abs();

    if delta_x > delta_y {
        Point::new(target.x, start.y)
    } else {
        Point::new(start.x, target.y)
    }
}
