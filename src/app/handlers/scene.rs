//! Handler für Rückgängig und Leeren der Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;

/// Entfernt den letzten Punkt im Aufbau bzw. die letzte Kurve.
pub fn undo_last_action(state: &mut AppState) {
    use_cases::scene::undo_last_action(state);
}

/// Leert die Zeichenfläche.
pub fn clear_all(state: &mut AppState) {
    use_cases::scene::clear_all(state);
}
