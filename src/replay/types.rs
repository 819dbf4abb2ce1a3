//! Data types for scripted replays.

use crate::draw::Wall;
use crate::input::PointerEvent;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Initial walls plus the pointer events to apply to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Walls present before the first event
    #[serde(default)]
    pub walls: Vec<Wall>,
    /// Events applied in order
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

/// Errors that can occur while loading or running a replay script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid replay script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Event {event} starts a drag on wall {wall}, but only {available} wall(s) exist")]
    UnknownWall {
        event: usize,
        wall: usize,
        available: usize,
    },
}
