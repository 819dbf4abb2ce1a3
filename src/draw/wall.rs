//! Wall records: straight segments with a derived, rounded length.

use super::point::Point;
use crate::util;
use serde::{Deserialize, Serialize};

/// Which end of a wall a drag handle ("key") refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// `(x1, y1)`
    Start,
    /// `(x2, y2)`
    End,
}

/// A straight wall segment on the floor plan.
///
/// Endpoints are only reachable through mutators that recompute `length`, so
/// the stored length always equals the rounded distance between the current
/// endpoints. Deserialization ignores any incoming `length` and recomputes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "WallRecord")]
pub struct Wall {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    length: u32,
}

/// Wire shape accepted when reading walls; `length` is optional and unused.
#[derive(Deserialize)]
struct WallRecord {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    #[serde(default)]
    #[allow(dead_code)]
    length: Option<u32>,
}

impl From<WallRecord> for Wall {
    fn from(record: WallRecord) -> Self {
        Wall::new(record.x1, record.y1, record.x2, record.y2)
    }
}

impl Wall {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            length: util::calculate_length(x1, y1, x2, y2),
        }
    }

    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Zero-length wall sitting on a single point (the shape of a fresh preview).
    pub fn at(point: Point) -> Self {
        Self::from_points(point, point)
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// Rounded length in whole units.
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> Point {
        match endpoint {
            Endpoint::Start => self.start(),
            Endpoint::End => self.end(),
        }
    }

    /// Moves one endpoint and recomputes the length.
    pub fn set_endpoint(&mut self, endpoint: Endpoint, point: Point) {
        match endpoint {
            Endpoint::Start => {
                self.x1 = point.x;
                self.y1 = point.y;
            }
            Endpoint::End => {
                self.x2 = point.x;
                self.y2 = point.y;
            }
        }
        self.recompute_length();
    }

    pub fn set_start(&mut self, point: Point) {
        self.set_endpoint(Endpoint::Start, point);
    }

    pub fn set_end(&mut self, point: Point) {
        self.set_endpoint(Endpoint::End, point);
    }

    /// Exact (unrounded) segment length, used for projection math.
    pub fn exact_length(&self) -> f64 {
        util::distance(self.start(), self.end())
    }

    /// Splits the wall at `point` into `start -> point` and `point -> end`.
    ///
    /// No minimum-length guard: a point on an endpoint yields a zero-length
    /// fragment.
    pub fn split_at(&self, point: Point) -> (Wall, Wall) {
        (
            Wall::from_points(self.start(), point),
            Wall::from_points(point, self.end()),
        )
    }

    fn recompute_length(&mut self) {
        self.length = util::calculate_length(self.x1, self.y1, self.x2, self.y2);
    }
}
