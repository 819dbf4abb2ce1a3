//! Geometry helpers shared by the wall editor.
//!
//! This module provides:
//! - Rounded length calculation with fail-soft handling of invalid input
//! - Point-to-point distance
//! - Segment/segment intersection
//! - Precision-bucketed keys for deduplicating intersection points

use crate::draw::{Point, Wall};
use log::error;

// ============================================================================
// Lengths and Distances
// ============================================================================

/// Calculates the rounded Euclidean distance between two points.
///
/// Wall lengths are whole units; fractional precision is dropped by rounding
/// to the nearest integer.
///
/// # Returns
/// The rounded distance, or `0` if any coordinate is NaN or infinite. Invalid
/// input is logged at error level instead of being propagated so that a
/// pointer handler can never fail because of a bad coordinate.
pub fn calculate_length(x1: f64, y1: f64, x2: f64, y2: f64) -> u32 {
    if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
        error!(
            "Invalid coordinates for length calculation: ({}, {}) -> ({}, {})",
            x1, y1, x2, y2
        );
        return 0;
    }

    // `as` saturates for values beyond u32::MAX
    (x2 - x1).hypot(y2 - y1).round() as u32
}

/// Unrounded distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

// ============================================================================
// Segment Intersection
// ============================================================================

/// Finds the point where two wall segments cross.
///
/// Uses the determinant form of the two-line intersection. The lines'
/// crossing point is only reported when it lies inside the axis-aligned
/// bounding boxes of both segments (inclusive, exact comparisons).
///
/// # Returns
/// - `Some(Point)` for crossing or touching segments
/// - `None` when the denominator is zero (parallel or collinear, including
///   collinear overlap) or the crossing lies outside either segment
pub fn segment_intersection(a: &Wall, b: &Wall) -> Option<Point> {
    let (x1, y1, x2, y2) = (a.x1(), a.y1(), a.x2(), a.y2());
    let (x3, y3, x4, y4) = (b.x1(), b.y1(), b.x2(), b.y2());

    let denominator = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denominator == 0.0 {
        return None;
    }

    let a_cross = x1 * y2 - y1 * x2;
    let b_cross = x3 * y4 - y3 * x4;
    let px = (a_cross * (x3 - x4) - (x1 - x2) * b_cross) / denominator;
    let py = (a_cross * (y3 - y4) - (y1 - y2) * b_cross) / denominator;

    if within_bounds(px, py, x1, y1, x2, y2) && within_bounds(px, py, x3, y3, x4, y4) {
        Some(Point::new(px, py))
    } else {
        None
    }
}

fn within_bounds(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    px >= x1.min(x2) && px <= x1.max(x2) && py >= y1.min(y2) && py <= y1.max(y2)
}

// ============================================================================
// Intersection Keys
// ============================================================================

/// Upper bound for [`IntersectionKey`] precision; beyond this the scaled
/// coordinates lose integer resolution in an `i64`.
pub const MAX_KEY_PRECISION: u32 = 12;

/// Default number of decimal places kept when bucketing intersection points.
pub const DEFAULT_KEY_PRECISION: u32 = 6;

/// Hashable identity of an intersection point.
///
/// Coordinates are scaled by `10^precision` and rounded, so two points that
/// differ by less than half a bucket (computed along different arithmetic
/// paths) map to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntersectionKey {
    x: i64,
    y: i64,
}

impl IntersectionKey {
    pub fn new(point: Point, precision: u32) -> Self {
        let scale = 10f64.powi(precision.min(MAX_KEY_PRECISION) as i32);
        Self {
            x: (point.x * scale).round() as i64,
            y: (point.y * scale).round() as i64,
        }
    }
}
