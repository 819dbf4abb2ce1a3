//! Floor plan container holding the committed wall collection.

use super::split::split_intersecting_walls_with;
use super::wall::Wall;
use serde::{Deserialize, Serialize};

/// Ordered collection of committed walls.
///
/// Walls are never deleted on their own; they are only replaced by their
/// split fragments when a newly inserted wall crosses them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorPlan {
    walls: Vec<Wall>,
}

impl FloorPlan {
    /// Creates a new empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing wall list as-is, without splitting.
    pub fn from_walls(walls: Vec<Wall>) -> Self {
        Self { walls }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn into_walls(self) -> Vec<Wall> {
        self.walls
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Wall> {
        self.walls.get(index)
    }

    /// Mutable access for endpoint dragging; lengths stay consistent because
    /// [`Wall`] only exposes recomputing mutators.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Wall> {
        self.walls.get_mut(index)
    }

    /// Commits a new wall, splitting it and any walls it crosses.
    ///
    /// Returns the number of walls added to the plan (fragments included).
    pub fn insert_wall(&mut self, wall: Wall, key_precision: u32) -> usize {
        let before = self.walls.len();
        self.walls = split_intersecting_walls_with(&self.walls, wall, key_precision);
        self.walls.len() - before
    }
}
