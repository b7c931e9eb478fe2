use approx::assert_relative_eq;
use bezier_curve_editor::core::bezier::{bezier_point, evaluate};
use bezier_curve_editor::{CurveDegree, DragTarget, EditorPhase, SceneModel};
use glam::Vec2;

fn scene(degree: CurveDegree) -> SceneModel {
    SceneModel::new(degree, 200)
}

#[test]
fn test_committed_curves_have_degree_points_and_fresh_samples() {
    for degree in CurveDegree::ALL {
        let mut scene = scene(degree);
        for i in 0..degree.point_count() * 3 {
            scene.add_point(Vec2::new(i as f32 * 13.0, (i % 3) as f32 * 29.0));
        }
        assert_eq!(scene.curves().len(), 3);
        assert!(scene.pending().is_empty());

        for curve in scene.curves() {
            assert_eq!(curve.point_count(), degree.point_count());
            assert_eq!(curve.polyline(), evaluate(curve.control_points(), 200).as_slice());
        }
    }
}

#[test]
fn test_endpoint_interpolation() {
    let points = [
        Vec2::new(3.0, 7.0),
        Vec2::new(-20.0, 40.0),
        Vec2::new(80.0, -5.0),
        Vec2::new(120.0, 60.0),
    ];
    for n in 1..=points.len() {
        let polyline = evaluate(&points[..n], 200);
        assert_eq!(polyline.len(), 201);
        assert_eq!(polyline[0], points[0]);
        assert_eq!(polyline[200], points[n - 1]);
    }
}

#[test]
fn test_cubic_midpoint() {
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 100.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0, 0.0),
    ];
    let mid = bezier_point(&points, 0.5);
    assert_relative_eq!(mid.x, 50.0, epsilon = 1e-4);
    assert_relative_eq!(mid.y, 75.0, epsilon = 1e-4);
}

#[test]
fn test_drag_isolation_keeps_other_curves_bitwise_equal() {
    let mut scene = scene(CurveDegree::Cubic);
    for i in 0..12 {
        scene.add_point(Vec2::new(i as f32 * 25.0, (i * 7 % 5) as f32 * 20.0));
    }
    let before = scene.curves().to_vec();

    assert!(scene.begin_drag(DragTarget { curve: 1, point: 2 }));
    scene.drag_to(Vec2::new(-40.0, 400.0));
    scene.end_drag();

    assert_eq!(scene.curves()[0], before[0]);
    assert_eq!(scene.curves()[2], before[2]);
    assert_ne!(scene.curves()[1], before[1]);
    assert_eq!(scene.curves()[1].control_points()[2], Vec2::new(-40.0, 400.0));
}

#[test]
fn test_hit_test_first_match_wins() {
    let mut scene = scene(CurveDegree::Linear);
    scene.add_point(Vec2::new(0.0, 0.0));
    scene.add_point(Vec2::new(100.0, 0.0));
    scene.add_point(Vec2::new(2.0, 0.0));
    scene.add_point(Vec2::new(100.0, 100.0));

    // Kurve 1, Punkt 0 liegt näher, Kurve 0 gewinnt trotzdem
    assert_eq!(
        scene.hit_test(Vec2::new(2.0, 0.0), 10.0),
        Some(DragTarget { curve: 0, point: 0 })
    );
    assert_eq!(scene.hit_test(Vec2::new(50.0, 50.0), 10.0), None);
    assert_eq!(
        scene.hit_test(Vec2::new(110.0, 0.0), 10.0),
        Some(DragTarget { curve: 0, point: 1 })
    );
}

#[test]
fn test_over_full_pending_never_commits() {
    let mut scene = scene(CurveDegree::Cubic);
    scene.add_point(Vec2::ZERO);
    scene.add_point(Vec2::ONE);
    scene.add_point(Vec2::new(2.0, 2.0));

    scene.set_degree(CurveDegree::Linear);
    scene.add_point(Vec2::new(3.0, 3.0));
    assert!(scene.curves().is_empty());
    assert_eq!(scene.pending().len(), 4);

    scene.undo_last_action();
    scene.undo_last_action();
    scene.undo_last_action();
    assert_eq!(scene.pending().len(), 1);
    scene.add_point(Vec2::new(9.0, 9.0));
    assert_eq!(scene.curves().len(), 1);
}

#[test]
fn test_phase_follows_drag_target() {
    let mut scene = scene(CurveDegree::Linear);
    assert_eq!(scene.phase(), EditorPhase::Idle);
    scene.add_point(Vec2::ZERO);
    scene.add_point(Vec2::X);

    assert!(!scene.begin_drag(DragTarget { curve: 3, point: 0 }));
    assert_eq!(scene.phase(), EditorPhase::Idle);

    assert!(scene.begin_drag(DragTarget { curve: 0, point: 1 }));
    assert_eq!(scene.phase(), EditorPhase::DraggingPoint);

    scene.clear_all();
    assert_eq!(scene.phase(), EditorPhase::Idle);
    assert_eq!(scene.drag_to(Vec2::ONE), None);
}
