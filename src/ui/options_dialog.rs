//! Optionen-Dialog für Pick-Radius, Abtastung, Farben und Größen.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
///
/// Bearbeitet wird `state.ui.options_draft`; erst "Übernehmen" erzeugt
/// `OptionsChanged`.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    if state.ui.options_draft.is_none() {
        state.ui.options_draft = Some(state.options.clone());
    }
    let Some(opts) = state.ui.options_draft.as_mut() else {
        return events;
    };
    let mut open = true;

    egui::Window::new("Optionen")
        .open(&mut open)
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Editor ──────────────────────────────────────
                    ui.collapsing("Editor", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Start-Grad (Punkte):");
                            ui.add(egui::DragValue::new(&mut opts.default_degree).range(2..=4));
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            ui.add(
                                egui::DragValue::new(&mut opts.hit_threshold_px)
                                    .range(0.0..=50.0)
                                    .speed(0.5),
                            );
                        });
                        ui.horizontal(|ui| {
                            ui.label("Segmente pro Kurve:");
                            ui.add(
                                egui::DragValue::new(&mut opts.sample_count)
                                    .range(1..=2000)
                                    .speed(1.0),
                            );
                        });
                        ui.checkbox(&mut opts.show_labels, "Punkt-Beschriftungen");
                    });

                    // ── Kurven ──────────────────────────────────────
                    ui.collapsing("Kurven", |ui| {
                        color_edit(ui, "Kurvenfarbe:", &mut opts.curve_color);
                        ui.horizontal(|ui| {
                            ui.label("Linienstärke:");
                            ui.add(
                                egui::DragValue::new(&mut opts.curve_width)
                                    .range(0.5..=10.0)
                                    .speed(0.1),
                            );
                        });
                        color_edit(ui, "Kontrollpolygon:", &mut opts.control_polygon_color);
                        color_edit(ui, "Punkt-Füllung:", &mut opts.control_point_fill);
                        color_edit(ui, "Punkt-Umriss:", &mut opts.control_point_outline);
                        ui.horizontal(|ui| {
                            ui.label("Punkt-Radius:");
                            ui.add(
                                egui::DragValue::new(&mut opts.control_point_radius)
                                    .range(1.0..=20.0)
                                    .speed(0.1),
                            );
                        });
                    });

                    // ── Aufbau ──────────────────────────────────────
                    ui.collapsing("Punkte im Aufbau", |ui| {
                        color_edit(ui, "Verbindungslinie:", &mut opts.pending_polygon_color);
                        color_edit(ui, "Punkt-Füllung:", &mut opts.pending_point_fill);
                        color_edit(ui, "Punkt-Umriss:", &mut opts.pending_point_outline);
                        ui.horizontal(|ui| {
                            ui.label("Punkt-Radius:");
                            ui.add(
                                egui::DragValue::new(&mut opts.pending_point_radius)
                                    .range(1.0..=20.0)
                                    .speed(0.1),
                            );
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Übernehmen").clicked() {
                    events.push(AppIntent::OptionsChanged {
                        options: opts.clone(),
                    });
                }
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsRequested);
                }
            });
        });

    if !open {
        events.push(AppIntent::CloseOptionsRequested);
    }

    events
}

fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
        }
    });
}
