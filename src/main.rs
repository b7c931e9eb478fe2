//! Bézier-Kurven-Editor.
//!
//! Interaktive Zeichenfläche: Kontrollpunkte setzen, Kurven festschreiben,
//! Kontrollpunkte verschieben. egui + eframe (glow).

use bezier_curve_editor::{ui, AppController, AppIntent, AppState, CanvasSync, EditorOptions};
use eframe::egui;

/// Hinweistext oben links auf der Zeichenfläche.
const CANVAS_HINT: &str =
    "Klicken, um Kontrollpunkte zu setzen. Rote Punkte ziehen, um Kurven zu verändern.";

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bézier-Kurven-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 760.0])
                .with_title("Bézier-Kurven-Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier-Kurven-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    canvas: ui::EguiCanvas,
    sync: CanvasSync,
}

/// Painter und Fläche der Zeichenfläche im aktuellen Frame.
struct CanvasArea {
    painter: egui::Painter,
    rect: egui::Rect,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        state.options_path = Some(config_path);

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            canvas: ui::EguiCanvas::new(),
            sync: CanvasSync::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let (events, area) = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);
        self.sync_canvas();

        if let Some(area) = area {
            self.canvas.paint(&area.painter, area.rect.min);
        }

        self.maybe_request_repaint(ctx, has_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> (Vec<AppIntent>, Option<CanvasArea>) {
        let mut events = Vec::new();
        let mut area = None;

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(
                    ui,
                    &response,
                    &self.state.scene,
                    self.state.options.hit_threshold_px,
                ));

                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
                painter.text(
                    rect.min + egui::vec2(10.0, 10.0),
                    egui::Align2::LEFT_TOP,
                    CANVAS_HINT,
                    egui::FontId::proportional(12.0),
                    egui::Color32::DARK_GRAY,
                );

                area = Some(CanvasArea { painter, rect });
            });

        (events, area)
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    fn sync_canvas(&mut self) {
        let changes = self.state.view.take_scene_changes();
        if changes.is_empty() {
            return;
        }
        self.sync.apply(
            &changes,
            &self.state.scene,
            &self.state.options,
            &mut self.canvas,
        );
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_events: bool) {
        if has_events || self.state.scene.drag_target().is_some() {
            ctx.request_repaint();
        }
    }
}
