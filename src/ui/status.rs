//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorPhase};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Kurven: {}", state.curve_count()));
            ui.separator();

            let degree = state.scene.selected_degree();
            ui.label(format!(
                "Punkte im Aufbau: {}/{}",
                state.pending_count(),
                degree.point_count()
            ));
            ui.separator();

            ui.label(format!("Grad: {}", degree.label()));
            ui.separator();

            let phase = match state.scene.phase() {
                EditorPhase::Idle => "Bereit".to_string(),
                EditorPhase::DraggingPoint => match state.scene.drag_target() {
                    Some(target) => format!("Verschiebe P{} (Kurve {})", target.point, target.curve),
                    None => "Verschiebe Punkt".to_string(),
                },
            };
            ui.label(phase);

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(200, 120, 0), message);
            }
        });
    });
}
