//! Änderungsmeldungen vom Szenen-Modell an den Zeichen-Kollaborator.
//!
//! Lebt im shared-Modul, da `core` sie erzeugt und `render` sie konsumiert.

/// Ein von einer Mutation betroffenes Szenen-Element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChange {
    /// Neue Kurve am Ende angehängt
    CurveAdded { index: usize },
    /// Kontrollpunkte (und damit Polyline) einer Kurve geändert
    CurveUpdated { index: usize },
    /// Letzte Kurve entfernt (`index` = bisheriger letzter Index)
    CurveRemoved { index: usize },
    /// Punkte im Aufbau geändert
    PendingUpdated,
    /// Alle Kurven neu ausgewertet (z.B. neue Sample-Anzahl)
    AllCurvesUpdated,
    /// Szene vollständig geleert
    Cleared,
}
