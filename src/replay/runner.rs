use super::types::{ReplayError, ReplayScript};
use crate::draw::{FloorPlan, Wall};
use crate::input::{PointerEvent, WallEditor};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Reads and parses a JSON replay script.
pub fn load_script(path: &Path) -> Result<ReplayScript, ReplayError> {
    let contents = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let script = serde_json::from_str(&contents)?;
    debug!("Loaded replay script from {}", path.display());
    Ok(script)
}

/// Feeds the script's events through `editor`, starting from the script's walls.
///
/// The editor itself ignores drags on unknown walls; a script asking for one
/// is almost certainly wrong, so it is reported instead of silently skipped.
pub fn run_script(
    editor: &mut WallEditor,
    script: &ReplayScript,
) -> Result<Vec<Wall>, ReplayError> {
    editor.set_plan(FloorPlan::from_walls(script.walls.clone()));

    for (index, event) in script.events.iter().copied().enumerate() {
        if let PointerEvent::DragStart { wall, .. } = event {
            if editor.is_idle() && wall >= editor.walls().len() {
                return Err(ReplayError::UnknownWall {
                    event: index,
                    wall,
                    available: editor.walls().len(),
                });
            }
        }
        editor.apply_event(event);
    }

    // A script that ends mid-gesture behaves like the pointer leaving the surface.
    if !editor.is_idle() {
        debug!("Script ended mid-gesture; treating as release");
        editor.on_press_end();
    }

    info!(
        "Replayed {} event(s); plan has {} wall(s)",
        script.events.len(),
        editor.walls().len()
    );
    Ok(editor.walls().to_vec())
}
