//! Configuration type definitions.

use crate::draw::SNAP_DISTANCE;
use crate::util::DEFAULT_KEY_PRECISION;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Snapping behaviour while drawing walls or dragging keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SnapConfig {
    /// Snap pointer positions to nearby wall keys and wall lines
    #[serde(default = "default_snap_enabled")]
    pub enabled: bool,

    /// Snap radius in plan units (valid range: 1.0 - 500.0)
    /// A candidate snaps only when it is strictly closer than this
    #[serde(default = "default_snap_radius")]
    pub radius: f64,

    /// Also snap onto the perpendicular foot on each wall, not just its keys
    #[serde(default = "default_project_onto_walls")]
    pub project_onto_walls: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: default_snap_enabled(),
            radius: default_snap_radius(),
            project_onto_walls: default_project_onto_walls(),
        }
    }
}

/// Intersection splitting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SplitConfig {
    /// Decimal places kept when comparing intersection points (valid range: 0 - 12)
    /// - 0 = points within one unit are treated as the same crossing
    /// - 6 = points within a millionth of a unit (default)
    #[serde(default = "default_key_precision")]
    pub key_precision: u32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            key_precision: default_key_precision(),
        }
    }
}

fn default_snap_enabled() -> bool {
    true
}

fn default_snap_radius() -> f64 {
    SNAP_DISTANCE
}

fn default_project_onto_walls() -> bool {
    true
}

fn default_key_precision() -> u32 {
    DEFAULT_KEY_PRECISION
}
