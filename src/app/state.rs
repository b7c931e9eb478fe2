//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::SceneModel;
use crate::shared::{EditorOptions, SceneChange};
use std::path::PathBuf;

/// Zeichenbezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Seit dem letzten Zeichnen angefallene Szenen-Änderungen
    pub scene_changes: Vec<SceneChange>,
}

impl ViewState {
    /// Erstellt einen leeren View-Zustand.
    pub fn new() -> Self {
        Self {
            scene_changes: Vec::new(),
        }
    }

    /// Übergibt alle offenen Änderungen an den Aufrufer.
    pub fn take_scene_changes(&mut self) -> Vec<SceneChange> {
        std::mem::take(&mut self.scene_changes)
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Statusnachricht für die Statusleiste
    pub status_message: Option<String>,
    /// Arbeitskopie der Optionen, solange der Dialog offen ist
    pub options_draft: Option<EditorOptions>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            show_options_dialog: false,
            status_message: None,
            options_draft: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kurven, Punkte im Aufbau und Drag-Zustand
    pub scene: SceneModel,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Grad, Pick-Radius, Sample-Anzahl, Farben)
    pub options: EditorOptions,
    /// Speicherort der Optionen (None = nicht persistieren)
    pub options_path: Option<PathBuf>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            scene: SceneModel::new(options.initial_degree(), options.sample_count),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            options_path: None,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kurven zurück (für UI-Anzeige)
    pub fn curve_count(&self) -> usize {
        self.scene.curves().len()
    }

    /// Gibt die Anzahl der Punkte im Aufbau zurück (für UI-Anzeige)
    pub fn pending_count(&self) -> usize {
        self.scene.pending().len()
    }

    /// Gibt zurück, ob ein Undo-Schritt etwas bewirkt.
    pub fn can_undo(&self) -> bool {
        !self.scene.is_empty()
    }

    /// Merkt Szenen-Änderungen für den nächsten Zeichen-Abgleich vor.
    pub fn push_scene_changes(&mut self, changes: impl IntoIterator<Item = SceneChange>) {
        self.view.scene_changes.extend(changes);
    }
}
