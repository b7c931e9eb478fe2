//! Toolbar für Grad-Auswahl und Szenen-Aktionen.

use crate::app::{AppIntent, AppState, CurveDegree};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let selected = state.scene.selected_degree();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Kurven-Grad:");
            for degree in CurveDegree::ALL {
                if ui.radio(selected == degree, degree.label()).clicked() && selected != degree {
                    events.push(AppIntent::SetDegreeRequested {
                        point_count: degree.point_count() as u8,
                    });
                }
            }

            ui.separator();

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("Rückgängig"))
                .on_hover_text("Letzten Punkt bzw. letzte Kurve entfernen (Ctrl+Z)")
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("Alles löschen"))
                .on_hover_text("Alle Kurven entfernen (Ctrl+Entf)")
                .clicked()
            {
                events.push(AppIntent::ClearAllRequested);
            }

            ui.separator();

            if ui.button("Optionen...").clicked() {
                events.push(AppIntent::OpenOptionsRequested);
            }
        });
    });

    events
}
