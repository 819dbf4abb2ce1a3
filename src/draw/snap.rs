//! Snap resolution: attracting pointer input to existing wall geometry.

use super::{Point, Wall};
use crate::config::SnapConfig;
use crate::util;

/// Default snap radius in plan units.
pub const SNAP_DISTANCE: f64 = 30.0;

/// Runtime snapping parameters, derived from [`SnapConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings {
    /// When false, pointer positions are never adjusted.
    pub enabled: bool,
    /// Candidates must be strictly closer than this.
    pub radius: f64,
    /// Also consider the perpendicular foot on each wall, not only its keys.
    pub project_onto_walls: bool,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: SNAP_DISTANCE,
            project_onto_walls: true,
        }
    }
}

impl From<&SnapConfig> for SnapSettings {
    fn from(config: &SnapConfig) -> Self {
        Self {
            enabled: config.enabled,
            radius: config.radius,
            project_onto_walls: config.project_onto_walls,
        }
    }
}

/// Finds the nearest snap target within [`SNAP_DISTANCE`] of `(x, y)`.
pub fn find_snap_point(x: f64, y: f64, walls: &[Wall]) -> Option<Point> {
    find_snap_point_within(x, y, walls, &SnapSettings::default())
}

/// Finds the nearest snap target using explicit settings.
///
/// Candidates per wall, in order: start key, end key, then the foot of the
/// perpendicular from `(x, y)` when it falls on the segment itself. The
/// closest candidate strictly inside the radius wins; on equal distances the
/// first one encountered is kept.
pub fn find_snap_point_within(
    x: f64,
    y: f64,
    walls: &[Wall],
    settings: &SnapSettings,
) -> Option<Point> {
    if !settings.enabled {
        return None;
    }

    let target = Point::new(x, y);
    let mut closest = None;
    let mut min_distance = settings.radius;

    let mut consider = |candidate: Point| {
        let distance = util::distance(candidate, target);
        if distance < min_distance {
            closest = Some(candidate);
            min_distance = distance;
        }
    };

    for wall in walls {
        consider(wall.start());
        consider(wall.end());

        if settings.project_onto_walls {
            if let Some(foot) = project_onto_segment(wall, target) {
                consider(foot);
            }
        }
    }

    closest
}

/// Perpendicular projection of `point` onto `wall`, if it lands on the segment.
///
/// Zero-length walls have no direction and never produce a projection.
fn project_onto_segment(wall: &Wall, point: Point) -> Option<Point> {
    let wall_length = wall.exact_length();
    if wall_length == 0.0 || !wall_length.is_finite() {
        return None;
    }

    let ux = (wall.x2() - wall.x1()) / wall_length;
    let uy = (wall.y2() - wall.y1()) / wall_length;
    let projection = (point.x - wall.x1()) * ux + (point.y - wall.y1()) * uy;

    if (0.0..=wall_length).contains(&projection) {
        Some(Point::new(
            wall.x1() + ux * projection,
            wall.y1() + uy * projection,
        ))
    } else {
        None
    }
}
