//! Use-Cases für Punkt-Erfassung und Grad-Auswahl.

use crate::app::AppState;
use crate::core::CurveDegree;
use glam::Vec2;

/// Hängt einen Punkt an die Kurve im Aufbau an.
///
/// Erreicht die Punktanzahl den gewählten Grad, wird die Kurve
/// festgeschrieben und die Punktliste im Aufbau geleert.
pub fn add_point(state: &mut AppState, pos: Vec2) {
    let changes = state.scene.add_point(pos);
    log::debug!(
        "Punkt ({:.1}, {:.1}) hinzugefügt, {} im Aufbau",
        pos.x,
        pos.y,
        state.scene.pending().len()
    );
    state.ui.status_message = None;
    state.push_scene_changes(changes);
}

/// Setzt den Grad für künftige Kurven.
///
/// Bereits gezeichnete Elemente bleiben unverändert, daher kein Redraw.
pub fn set_degree(state: &mut AppState, degree: CurveDegree) {
    if state.scene.selected_degree() == degree {
        return;
    }
    state.scene.set_degree(degree);

    let pending = state.scene.pending().len();
    if pending >= degree.point_count() {
        state.ui.status_message = Some(format!(
            "{} Punkte im Aufbau, {} benötigt: Rückgängig entfernt überzählige Punkte",
            pending,
            degree.point_count()
        ));
    }
    log::info!("Kurven-Grad: {:?} ({} Punkte)", degree, degree.point_count());
}
