//! Handler für den Drag-Lifecycle festgeschriebener Kontrollpunkte.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::DragTarget;

/// Startet einen Drag auf dem getroffenen Kontrollpunkt.
pub fn begin(state: &mut AppState, target: DragTarget) {
    use_cases::drag::begin_drag(state, target);
}

/// Verschiebt den gegriffenen Kontrollpunkt.
pub fn update(state: &mut AppState, pos: glam::Vec2) {
    use_cases::drag::update_drag(state, pos);
}

/// Beendet den Drag.
pub fn end(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}
