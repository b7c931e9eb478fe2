//! Use-Cases für den Drag festgeschriebener Kontrollpunkte.

use crate::app::AppState;
use crate::core::DragTarget;
use glam::Vec2;

/// Startet einen Drag. Ungültige Ziele werden verworfen.
pub fn begin_drag(state: &mut AppState, target: DragTarget) {
    if state.scene.begin_drag(target) {
        log::debug!(
            "Drag gestartet: Kurve {}, Punkt P{}",
            target.curve,
            target.point
        );
    } else {
        log::warn!(
            "Drag-Ziel existiert nicht: Kurve {}, Punkt {}",
            target.curve,
            target.point
        );
    }
}

/// Verschiebt den gegriffenen Punkt und meldet nur dessen Kurve zum Neuzeichnen.
pub fn update_drag(state: &mut AppState, pos: Vec2) {
    if let Some(change) = state.scene.drag_to(pos) {
        log::trace!("Drag nach ({:.1}, {:.1})", pos.x, pos.y);
        state.push_scene_changes([change]);
    }
}

/// Beendet den Drag ohne weitere Mutation.
pub fn end_drag(state: &mut AppState) {
    if let Some(target) = state.scene.end_drag() {
        log::debug!(
            "Drag beendet: Kurve {}, Punkt P{}",
            target.curve,
            target.point
        );
    }
}
