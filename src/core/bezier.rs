//! Bézier-Auswertung über Bernstein-Polynome.
//!
//! Reine Funktionen ohne Zustand: gleiche Kontrollpunkte und gleiche
//! Sample-Anzahl liefern immer dieselbe Polyline.

use glam::Vec2;

/// Standard-Anzahl linearer Segmente pro Kurve.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Binomialkoeffizient C(n, k) als Gleitkommazahl.
///
/// Multiplikative Form, damit Zwischenergebnisse klein bleiben.
pub fn binomial(n: usize, k: usize) -> f32 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0f64;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result.round() as f32
}

/// Berechnet den Kurvenpunkt B(t) für beliebig viele Kontrollpunkte.
///
/// B(t) = Σ C(n, i) · tⁱ · (1-t)ⁿ⁻ⁱ · Pᵢ  mit n = Anzahl - 1.
/// `powi(0)` liefert auch für t = 0 bzw. t = 1 exakt 1.
pub fn bezier_point(control_points: &[Vec2], t: f32) -> Vec2 {
    let Some(n) = control_points.len().checked_sub(1) else {
        return Vec2::ZERO;
    };
    let inv = 1.0 - t;

    let mut x = 0.0f32;
    let mut y = 0.0f32;
    for (i, p) in control_points.iter().enumerate() {
        let b = binomial(n, i) * t.powi(i as i32) * inv.powi((n - i) as i32);
        x += b * p.x;
        y += b * p.y;
    }
    Vec2::new(x, y)
}

/// Tastet die Kurve an `sample_count + 1` gleichverteilten Parametern ab.
///
/// t = j / sample_count für j = 0..=sample_count. Eine leere Punktliste
/// ergibt eine leere Polyline, ein einzelner Punkt wird wiederholt.
/// `sample_count == 0` wird wie 1 behandelt.
pub fn evaluate(control_points: &[Vec2], sample_count: usize) -> Vec<Vec2> {
    if control_points.is_empty() {
        return Vec::new();
    }
    let steps = sample_count.max(1);

    (0..=steps)
        .map(|j| {
            let t = j as f32 / steps as f32;
            bezier_point(control_points, t)
        })
        .collect()
}
