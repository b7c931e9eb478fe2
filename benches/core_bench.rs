use bezier_curve_editor::core::bezier::evaluate;
use bezier_curve_editor::{CurveDegree, SceneModel};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

const CUBIC: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(120.0, 340.0),
    Vec2::new(480.0, -60.0),
    Vec2::new(600.0, 200.0),
];

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &sample_count in &[50usize, 200, 2000] {
        group.bench_with_input(
            BenchmarkId::new("cubic", sample_count),
            &sample_count,
            |b, &samples| b.iter(|| black_box(evaluate(black_box(&CUBIC), samples).len())),
        );
    }

    group.finish();
}

fn build_scene(curve_count: usize) -> SceneModel {
    let mut scene = SceneModel::new(CurveDegree::Cubic, 200);
    for i in 0..curve_count * 4 {
        let column = (i % 100) as f32;
        let row = (i / 100) as f32;
        scene.add_point(Vec2::new(column * 30.0 + row * 0.5, row * 30.0 + column * 0.5));
    }
    scene
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");

    for &curve_count in &[10usize, 1000] {
        let scene = build_scene(curve_count);

        group.bench_with_input(
            BenchmarkId::new("miss", curve_count),
            &scene,
            |b, scene| {
                b.iter(|| black_box(scene.hit_test(black_box(Vec2::new(-500.0, -500.0)), 10.0)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("drag_move", curve_count),
            &scene,
            |b, scene| {
                let mut scene = scene.clone();
                let target = scene.hit_test(Vec2::ZERO, 10.0);
                if let Some(target) = target {
                    scene.begin_drag(target);
                }
                let mut x = 0.0f32;
                b.iter(|| {
                    x = (x + 1.0) % 100.0;
                    black_box(scene.drag_to(Vec2::new(x, x)))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_evaluation, bench_hit_test);
criterion_main!(core_benches);
