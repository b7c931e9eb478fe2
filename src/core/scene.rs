//! Szenen-Modell: festgeschriebene Kurven, Punkte im Aufbau und Drag-Zustand.
//!
//! Alle Zustandsübergänge des Editors laufen über die Methoden dieses Typs.
//! Jede Mutation liefert die betroffenen Elemente als [`SceneChange`] zurück,
//! damit der Zeichen-Kollaborator nur diese neu zeichnet.

use super::curve::{Curve, CurveDegree};
use crate::shared::SceneChange;
use glam::Vec2;

/// Gegriffener Kontrollpunkt: Kurven-Index und Punkt-Index in dieser Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragTarget {
    /// Index der Kurve in Einfüge-Reihenfolge
    pub curve: usize,
    /// Index des Kontrollpunkts innerhalb der Kurve
    pub point: usize,
}

/// Zustand der Editor-Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    /// Keine Maustaste gedrückt
    #[default]
    Idle,
    /// Ein Kontrollpunkt einer festgeschriebenen Kurve wird verschoben
    DraggingPoint,
}

/// Gesamtzustand der Zeichenfläche.
#[derive(Debug, Clone)]
pub struct SceneModel {
    curves: Vec<Curve>,
    pending: Vec<Vec2>,
    selected_degree: CurveDegree,
    drag_target: Option<DragTarget>,
    sample_count: usize,
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new(CurveDegree::default(), super::bezier::DEFAULT_SAMPLE_COUNT)
    }
}

impl SceneModel {
    /// Erstellt eine leere Szene.
    pub fn new(selected_degree: CurveDegree, sample_count: usize) -> Self {
        Self {
            curves: Vec::new(),
            pending: Vec::new(),
            selected_degree,
            drag_target: None,
            sample_count: sample_count.max(1),
        }
    }

    /// Alle festgeschriebenen Kurven (Einfüge-Reihenfolge = Z-Reihenfolge).
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Kurve an `index`, falls vorhanden.
    pub fn curve(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    /// Punkte der Kurve im Aufbau.
    pub fn pending(&self) -> &[Vec2] {
        &self.pending
    }

    /// Aktuell gewählter Grad für neue Kurven.
    pub fn selected_degree(&self) -> CurveDegree {
        self.selected_degree
    }

    /// Aktiver Drag, falls vorhanden.
    pub fn drag_target(&self) -> Option<DragTarget> {
        self.drag_target
    }

    /// Sample-Anzahl für neue und neu berechnete Kurven.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Aktueller Zustand der Zustandsmaschine.
    pub fn phase(&self) -> EditorPhase {
        if self.drag_target.is_some() {
            EditorPhase::DraggingPoint
        } else {
            EditorPhase::Idle
        }
    }

    /// `true`, wenn weder Kurven noch Punkte im Aufbau existieren.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty() && self.pending.is_empty()
    }

    /// Sucht den ersten festgeschriebenen Kontrollpunkt im Radius `threshold`.
    ///
    /// Reihenfolge: Kurve für Kurve, darin Punkt für Punkt. Der erste Treffer
    /// gewinnt, nicht der nächstgelegene. Punkte im Aufbau werden ignoriert.
    pub fn hit_test(&self, pos: Vec2, threshold: f32) -> Option<DragTarget> {
        self.curves
            .iter()
            .enumerate()
            .find_map(|(curve_idx, curve)| {
                curve
                    .control_points()
                    .iter()
                    .position(|p| p.distance(pos) <= threshold)
                    .map(|point_idx| DragTarget {
                        curve: curve_idx,
                        point: point_idx,
                    })
            })
    }

    /// Hängt einen Punkt an die Kurve im Aufbau an.
    ///
    /// Erreicht die Anzahl genau den gewählten Grad, wird daraus eine neue
    /// Kurve, und die Punktliste im Aufbau beginnt leer.
    pub fn add_point(&mut self, pos: Vec2) -> Vec<SceneChange> {
        self.pending.push(pos);

        if self.pending.len() != self.selected_degree.point_count() {
            return vec![SceneChange::PendingUpdated];
        }

        let points = std::mem::take(&mut self.pending);
        self.curves.push(Curve::new(points, self.sample_count));
        let index = self.curves.len() - 1;
        log::info!(
            "Kurve {} festgeschrieben ({} Punkte)",
            index,
            self.selected_degree.point_count()
        );

        vec![SceneChange::CurveAdded { index }, SceneChange::PendingUpdated]
    }

    /// Beginnt einen Drag auf `target`.
    ///
    /// Gibt `false` zurück (ohne Zustandsänderung), wenn das Ziel nicht
    /// existiert.
    pub fn begin_drag(&mut self, target: DragTarget) -> bool {
        let valid = self
            .curves
            .get(target.curve)
            .is_some_and(|c| target.point < c.point_count());
        if valid {
            self.drag_target = Some(target);
        }
        valid
    }

    /// Verschiebt den gegriffenen Punkt nach `pos` und berechnet nur dessen
    /// Kurve neu. Ohne aktiven Drag passiert nichts.
    pub fn drag_to(&mut self, pos: Vec2) -> Option<SceneChange> {
        let target = self.drag_target?;
        let curve = self.curves.get_mut(target.curve)?;
        if !curve.move_point(target.point, pos) {
            return None;
        }
        Some(SceneChange::CurveUpdated {
            index: target.curve,
        })
    }

    /// Beendet den Drag. Gibt das bisherige Ziel zurück.
    pub fn end_drag(&mut self) -> Option<DragTarget> {
        self.drag_target.take()
    }

    /// Macht die letzte Aktion rückgängig.
    ///
    /// Zuerst wird der letzte Punkt im Aufbau entfernt; ist dort nichts,
    /// die zuletzt festgeschriebene Kurve. Beendet immer einen laufenden Drag.
    pub fn undo_last_action(&mut self) -> Option<SceneChange> {
        self.drag_target = None;

        if self.pending.pop().is_some() {
            return Some(SceneChange::PendingUpdated);
        }
        self.curves.pop()?;
        Some(SceneChange::CurveRemoved {
            index: self.curves.len(),
        })
    }

    /// Entfernt alle Kurven und Punkte im Aufbau.
    pub fn clear_all(&mut self) -> SceneChange {
        self.curves.clear();
        self.pending.clear();
        self.drag_target = None;
        SceneChange::Cleared
    }

    /// Setzt den Grad für künftige Kurven.
    ///
    /// Bestehende Kurven und die Punkte im Aufbau bleiben unverändert, auch
    /// wenn dort bereits mehr Punkte liegen als der neue Grad verlangt.
    pub fn set_degree(&mut self, degree: CurveDegree) {
        self.selected_degree = degree;
    }

    /// Ändert die Sample-Anzahl und berechnet alle Kurven neu.
    pub fn set_sample_count(&mut self, sample_count: usize) -> Option<SceneChange> {
        let sample_count = sample_count.max(1);
        if sample_count == self.sample_count {
            return None;
        }
        self.sample_count = sample_count;
        for curve in &mut self.curves {
            curve.set_sample_count(sample_count);
        }
        Some(SceneChange::AllCurvesUpdated)
    }
}
