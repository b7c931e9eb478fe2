//! Abgleich zwischen Szenen-Modell und Zeichen-Kollaborator.
//!
//! `CanvasSync` hält pro Kurve und für die Punkte im Aufbau die Handles der
//! gezeichneten Objekte. Es interpretiert sie nie, sondern reicht sie nur zum
//! Löschen an das Backend zurück.

use super::types::{CanvasBackend, CanvasShape, ShapeHandle};
use super::visuals::{curve_shapes, pending_shapes};
use crate::core::SceneModel;
use crate::shared::{EditorOptions, SceneChange};

/// Handle-Buchhaltung für alle gezeichneten Szenen-Elemente.
#[derive(Debug, Default)]
pub struct CanvasSync {
    /// Handles pro Kurve, parallel zu `SceneModel::curves()`
    curve_handles: Vec<Vec<ShapeHandle>>,
    /// Handles der Punkte im Aufbau
    pending_handles: Vec<ShapeHandle>,
}

impl CanvasSync {
    /// Erstellt eine leere Buchhaltung (nichts gezeichnet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Kurven, für die Handles gehalten werden.
    pub fn curve_count(&self) -> usize {
        self.curve_handles.len()
    }

    /// Handles einer Kurve (leer, wenn unbekannt).
    pub fn curve_handles(&self, index: usize) -> &[ShapeHandle] {
        self.curve_handles
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Handles der Punkte im Aufbau.
    pub fn pending_handles(&self) -> &[ShapeHandle] {
        &self.pending_handles
    }

    /// Arbeitet die Änderungen ab und zeichnet nur die genannten Elemente neu.
    pub fn apply(
        &mut self,
        changes: &[SceneChange],
        scene: &SceneModel,
        options: &EditorOptions,
        canvas: &mut dyn CanvasBackend,
    ) {
        for change in changes {
            match *change {
                SceneChange::CurveAdded { index } | SceneChange::CurveUpdated { index } => {
                    self.redraw_curve(index, scene, options, canvas);
                }
                SceneChange::CurveRemoved { index } => {
                    if index < self.curve_handles.len() {
                        let handles = self.curve_handles.remove(index);
                        remove_all(canvas, handles);
                    }
                }
                SceneChange::PendingUpdated => {
                    remove_all(canvas, std::mem::take(&mut self.pending_handles));
                    self.pending_handles =
                        draw_all(canvas, pending_shapes(scene.pending(), options));
                }
                SceneChange::AllCurvesUpdated => {
                    for index in 0..scene.curves().len() {
                        self.redraw_curve(index, scene, options, canvas);
                    }
                }
                SceneChange::Cleared => {
                    for handles in self.curve_handles.drain(..) {
                        remove_all(canvas, handles);
                    }
                    remove_all(canvas, std::mem::take(&mut self.pending_handles));
                }
            }
        }
    }

    fn redraw_curve(
        &mut self,
        index: usize,
        scene: &SceneModel,
        options: &EditorOptions,
        canvas: &mut dyn CanvasBackend,
    ) {
        let Some(curve) = scene.curve(index) else {
            log::warn!("Redraw für unbekannte Kurve {} ignoriert", index);
            return;
        };
        if self.curve_handles.len() <= index {
            self.curve_handles.resize_with(index + 1, Vec::new);
        }
        let old = std::mem::take(&mut self.curve_handles[index]);
        remove_all(canvas, old);
        self.curve_handles[index] = draw_all(canvas, curve_shapes(curve, options));
    }
}

fn remove_all(canvas: &mut dyn CanvasBackend, handles: Vec<ShapeHandle>) {
    for handle in handles {
        canvas.remove(handle);
    }
}

fn draw_all(canvas: &mut dyn CanvasBackend, shapes: Vec<CanvasShape>) -> Vec<ShapeHandle> {
    shapes.into_iter().map(|shape| canvas.draw(shape)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurveDegree, DragTarget};
    use glam::Vec2;
    use std::collections::BTreeMap;

    fn draw_scene(
        sync: &mut CanvasSync,
        scene: &SceneModel,
        options: &EditorOptions,
        canvas: &mut RecordingCanvas,
    ) {
        let changes = [SceneChange::AllCurvesUpdated, SceneChange::PendingUpdated];
        sync.apply(&changes, scene, options, canvas);
    }

    /// Backend, das Aufrufe zählt und lebende Shapes hält.
    #[derive(Default)]
    struct RecordingCanvas {
        next: u64,
        live: BTreeMap<ShapeHandle, CanvasShape>,
        draws: usize,
        removes: Vec<ShapeHandle>,
    }

    impl CanvasBackend for RecordingCanvas {
        fn draw(&mut self, shape: CanvasShape) -> ShapeHandle {
            self.next += 1;
            let handle = ShapeHandle(self.next);
            self.live.insert(handle, shape);
            self.draws += 1;
            handle
        }

        fn remove(&mut self, handle: ShapeHandle) {
            self.live.remove(&handle);
            self.removes.push(handle);
        }
    }

    fn linear_scene_with_two_curves() -> SceneModel {
        let mut scene = SceneModel::new(CurveDegree::Linear, 8);
        for p in [(0.0, 0.0), (10.0, 0.0), (0.0, 50.0), (10.0, 50.0)] {
            scene.add_point(Vec2::new(p.0, p.1));
        }
        scene
    }

    #[test]
    fn drag_redraws_only_affected_curve() {
        let options = EditorOptions::default();
        let mut scene = linear_scene_with_two_curves();
        let mut canvas = RecordingCanvas::default();
        let mut sync = CanvasSync::new();
        draw_scene(&mut sync, &scene, &options, &mut canvas);

        let curve1_handles = sync.curve_handles(1).to_vec();
        let curve0_handles = sync.curve_handles(0).to_vec();
        canvas.removes.clear();

        assert!(scene.begin_drag(DragTarget { curve: 0, point: 0 }));
        let change = scene.drag_to(Vec2::new(5.0, 5.0)).expect("Drag aktiv");
        sync.apply(&[change], &scene, &options, &mut canvas);

        assert_eq!(sync.curve_handles(1), curve1_handles.as_slice());
        assert_eq!(canvas.removes, curve0_handles);
        assert!(curve1_handles.iter().all(|h| canvas.live.contains_key(h)));
    }

    #[test]
    fn commit_replaces_pending_with_curve() {
        let options = EditorOptions::default();
        let mut scene = SceneModel::new(CurveDegree::Linear, 8);
        let mut canvas = RecordingCanvas::default();
        let mut sync = CanvasSync::new();

        let changes = scene.add_point(Vec2::ZERO);
        sync.apply(&changes, &scene, &options, &mut canvas);
        assert_eq!(sync.pending_handles().len(), 2);

        let changes = scene.add_point(Vec2::new(30.0, 0.0));
        sync.apply(&changes, &scene, &options, &mut canvas);
        assert!(sync.pending_handles().is_empty());
        assert_eq!(sync.curve_count(), 1);
        // Polygon + Kurve + 2 × (Marker + Label)
        assert_eq!(canvas.live.len(), 6);
    }

    #[test]
    fn undo_and_clear_remove_all_visuals() {
        let options = EditorOptions::default();
        let mut scene = linear_scene_with_two_curves();
        let mut canvas = RecordingCanvas::default();
        let mut sync = CanvasSync::new();
        draw_scene(&mut sync, &scene, &options, &mut canvas);

        let change = scene.undo_last_action().expect("Kurve vorhanden");
        sync.apply(&[change], &scene, &options, &mut canvas);
        assert_eq!(sync.curve_count(), 1);
        assert_eq!(canvas.live.len(), sync.curve_handles(0).len());

        let change = scene.clear_all();
        sync.apply(&[change], &scene, &options, &mut canvas);
        assert_eq!(sync.curve_count(), 0);
        assert!(canvas.live.is_empty());
    }
}
