//! Use-Cases für Rückgängig und Leeren.

use crate::app::AppState;
use crate::shared::SceneChange;

/// Entfernt den letzten Punkt im Aufbau, sonst die letzte Kurve.
pub fn undo_last_action(state: &mut AppState) {
    match state.scene.undo_last_action() {
        Some(change) => {
            match change {
                SceneChange::CurveRemoved { index } => {
                    log::info!("Kurve {} entfernt", index)
                }
                _ => log::info!("Letzten Punkt im Aufbau entfernt"),
            }
            state.ui.status_message = None;
            state.push_scene_changes([change]);
        }
        None => log::debug!("Rückgängig: nichts zu tun"),
    }
}

/// Entfernt alle Kurven und Punkte im Aufbau.
pub fn clear_all(state: &mut AppState) {
    let curves = state.scene.curves().len();
    let change = state.scene.clear_all();
    state.ui.status_message = None;
    state.push_scene_changes([change]);
    log::info!("Zeichenfläche geleert ({} Kurven entfernt)", curves);
}
