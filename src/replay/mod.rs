//! Scripted replay of pointer events through a [`WallEditor`](crate::input::WallEditor).
//!
//! A replay script carries an initial wall list and a sequence of
//! [`PointerEvent`](crate::input::PointerEvent)s. Running it feeds every event
//! through a fresh editor and yields the resulting walls. This is the
//! headless host used by the `wallscriber` binary and by integration tests.

mod runner;
mod types;

pub use runner::{load_script, run_script};
pub use types::{ReplayError, ReplayScript};
