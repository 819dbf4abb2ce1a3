//! Drawing state machine and wall editor state.

use crate::config::Config;
use crate::draw::{Endpoint, FloorPlan, Point, SnapSettings, Wall, find_snap_point_within};
use crate::util::DEFAULT_KEY_PRECISION;

/// Reference to a wall key being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggedKey {
    /// Index of the wall in the plan
    pub wall: usize,
    /// Which end of the wall follows the pointer
    pub endpoint: Endpoint,
}

/// Current editing mode state machine.
///
/// Tracks whether the user is idle, drawing a new wall, or dragging a key.
/// State transitions occur on press, move and release events.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not drawing or dragging - waiting for a press
    Idle,
    /// Drawing a new wall (button held on empty space)
    DrawingPreview {
        /// In-progress wall; committed (with splitting) on release
        preview: Wall,
    },
    /// Dragging an existing wall's key (button held on an endpoint)
    DraggingKey {
        /// Targeted wall and endpoint
        key: DraggedKey,
    },
}

/// Editing session owning the committed walls and transient gesture state.
///
/// Hosts forward pointer events to the `on_*` handlers and read back
/// [`walls`](Self::walls) and [`preview`](Self::preview) for rendering.
/// Handlers never fail; invalid requests are logged and ignored.
#[derive(Debug, Clone)]
pub struct WallEditor {
    /// Committed wall collection
    pub(super) plan: FloorPlan,
    /// Current gesture state machine
    pub(super) state: DrawingState,
    /// Snapping parameters applied to every pointer position
    pub snap: SnapSettings,
    /// Decimal precision for intersection deduplication
    pub key_precision: u32,
    /// Whether visible state changed since the host last drew
    pub needs_redraw: bool,
}

impl Default for WallEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl WallEditor {
    /// Creates an editor with an empty plan and default settings.
    pub fn new() -> Self {
        Self::with_settings(SnapSettings::default(), DEFAULT_KEY_PRECISION)
    }

    pub fn with_settings(snap: SnapSettings, key_precision: u32) -> Self {
        Self {
            plan: FloorPlan::new(),
            state: DrawingState::Idle,
            snap,
            key_precision,
            needs_redraw: true,
        }
    }

    /// Creates an editor using the snap and split sections of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_settings(SnapSettings::from(&config.snap), config.split.key_precision)
    }

    /// Replaces the committed walls (e.g. after the host loaded a plan).
    ///
    /// Any in-progress gesture is dropped since drag indices would no longer
    /// be meaningful.
    pub fn set_plan(&mut self, plan: FloorPlan) {
        if !matches!(self.state, DrawingState::Idle) {
            log::debug!("Replacing plan mid-gesture; returning to idle");
        }
        self.plan = plan;
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    pub fn walls(&self) -> &[Wall] {
        self.plan.walls()
    }

    pub fn into_plan(self) -> FloorPlan {
        self.plan
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DrawingState::Idle)
    }

    /// The in-progress wall while drawing.
    pub fn preview(&self) -> Option<&Wall> {
        match &self.state {
            DrawingState::DrawingPreview { preview } => Some(preview),
            _ => None,
        }
    }

    /// The key currently being dragged.
    pub fn dragged_key(&self) -> Option<DraggedKey> {
        match self.state {
            DrawingState::DraggingKey { key } => Some(key),
            _ => None,
        }
    }

    /// Snaps a pointer position against the committed walls, falling back to
    /// the raw position when nothing is in range.
    pub(super) fn resolve_point(&self, x: f64, y: f64) -> Point {
        find_snap_point_within(x, y, self.plan.walls(), &self.snap)
            .unwrap_or_else(|| Point::new(x, y))
    }
}
