//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::{CurveDegree, DragTarget};
use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste auf der Zeichenfläche gedrückt (Canvas-Pixel)
    PointerPressed { pos: Vec2 },
    /// Mauszeiger bei gedrückter Taste bewegt
    PointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased { pos: Vec2 },
    /// Grad für neue Kurven wählen (Punktanzahl 2, 3 oder 4)
    SetDegreeRequested { point_count: u8 },
    /// Letzten Punkt bzw. letzte Kurve entfernen
    UndoRequested,
    /// Zeichenfläche leeren
    ClearAllRequested,
    /// Optionen-Dialog öffnen
    OpenOptionsRequested,
    /// Optionen-Dialog schließen
    CloseOptionsRequested,
    /// Optionen im Dialog übernommen
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands, die der Controller ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt an die Kurve im Aufbau anhängen (ggf. festschreiben)
    AddPoint { pos: Vec2 },
    /// Drag auf einem festgeschriebenen Kontrollpunkt beginnen
    BeginDrag { target: DragTarget },
    /// Gegriffenen Kontrollpunkt verschieben
    DragPointTo { pos: Vec2 },
    /// Drag beenden
    EndDrag,
    /// Grad für neue Kurven setzen
    SetDegree { degree: CurveDegree },
    /// Letzten Punkt im Aufbau oder letzte Kurve entfernen
    UndoLastAction,
    /// Alle Kurven und Punkte entfernen
    ClearAll,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Neue Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
