#![no_main]

use bezier_curve_editor::core::bezier::evaluate;
use bezier_curve_editor::{AppController, AppIntent, AppState, EditorPhase};
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

/// Übersetzt je drei Bytes in einen Intent auf einem 256×256-Raster.
fn decode(chunk: &[u8]) -> Option<AppIntent> {
    let [kind, x, y] = *chunk else {
        return None;
    };
    let pos = Vec2::new(x as f32 * 4.0, y as f32 * 4.0);
    Some(match kind % 8 {
        0 | 1 => AppIntent::PointerPressed { pos },
        2 | 3 => AppIntent::PointerMoved { pos },
        4 => AppIntent::PointerReleased { pos },
        5 => AppIntent::SetDegreeRequested { point_count: x % 6 },
        6 => AppIntent::UndoRequested,
        _ => AppIntent::ClearAllRequested,
    })
}

fuzz_target!(|data: &[u8]| {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for intent in data.chunks(3).filter_map(decode) {
        let _ = controller.handle_intent(&mut state, intent);

        let scene = &state.scene;
        for curve in scene.curves() {
            assert!((2..=4).contains(&curve.point_count()));
            assert_eq!(
                curve.polyline(),
                evaluate(curve.control_points(), scene.sample_count()).as_slice()
            );
        }
        if let Some(target) = scene.drag_target() {
            assert_eq!(scene.phase(), EditorPhase::DraggingPoint);
            let curve = scene.curve(target.curve).expect("Drag-Ziel muss existieren");
            assert!(target.point < curve.point_count());
        }
    }
});
