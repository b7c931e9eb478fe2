//! UI-Komponenten: Menü, Toolbar, Statusleiste, Input-Handling, Zeichenfläche.

mod canvas;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialog).
/// Keyboard-Shortcuts und das Zeichen-Backend sind in eigene Dateien extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use canvas::EguiCanvas;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
