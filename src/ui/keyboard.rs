//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Textfelder (z.B. im Optionen-Dialog) haben Vorrang
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_z, key_2, key_3, key_4, key_delete) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Num2),
            i.key_pressed(egui::Key::Num3),
            i.key_pressed(egui::Key::Num4),
            i.key_pressed(egui::Key::Delete),
        )
    });

    // Undo (Cmd/Ctrl + Z)
    if modifiers.command && key_z {
        events.push(AppIntent::UndoRequested);
    }

    // Grad-Auswahl über Punktanzahl
    for (pressed, point_count) in [(key_2, 2), (key_3, 3), (key_4, 4)] {
        if pressed && !modifiers.command {
            events.push(AppIntent::SetDegreeRequested { point_count });
        }
    }

    if modifiers.command && key_delete {
        events.push(AppIntent::ClearAllRequested);
    }

    events
}
