//! Input-Handling der Zeichenfläche: Maus-Events → AppIntent.

use super::keyboard;
use crate::app::{AppIntent, SceneModel};
use glam::Vec2;

/// Verwaltet den Maus-Zustand der Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primäre Taste wurde auf der Zeichenfläche gedrückt und ist noch unten
    pointer_down: bool,
    /// Letzte gemeldete Position (Canvas-Pixel)
    last_pos: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Zeichenflächen-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zur linken oberen Ecke von `response.rect`
    /// gemeldet. Zusätzlich wird der Mauszeiger über greifbaren
    /// Kontrollpunkten auf eine Hand umgestellt.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &SceneModel,
        hit_threshold: f32,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui);
        let origin = response.rect.min;

        let (pressed, released, pointer_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });
        let local = pointer_pos.map(|p| Vec2::new(p.x - origin.x, p.y - origin.y));

        if let Some(pos) = local {
            if pressed && response.hovered() {
                self.pointer_down = true;
                self.last_pos = Some(pos);
                events.push(AppIntent::PointerPressed { pos });
            } else if self.pointer_down && self.last_pos != Some(pos) {
                self.last_pos = Some(pos);
                events.push(AppIntent::PointerMoved { pos });
            }
        }

        if released && self.pointer_down {
            self.pointer_down = false;
            let pos = local.or(self.last_pos).unwrap_or(Vec2::ZERO);
            self.last_pos = None;
            events.push(AppIntent::PointerReleased { pos });
        }

        self.update_cursor(ui, response, scene, local, hit_threshold);
        events
    }

    fn update_cursor(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &SceneModel,
        local: Option<Vec2>,
        hit_threshold: f32,
    ) {
        if scene.drag_target().is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
            return;
        }

        let over_point = response.hovered()
            && local.is_some_and(|pos| scene.hit_test(pos, hit_threshold).is_some());
        if over_point {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }
}
