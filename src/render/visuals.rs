//! Aufbau der Shapes für Kurven und Punkte im Aufbau.

use super::types::{CanvasShape, LineStyle};
use crate::core::Curve;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Label-Versatz festgeschriebener Kontrollpunkte.
const CURVE_LABEL_OFFSET: Vec2 = Vec2::new(-15.0, -15.0);
/// Label-Versatz vorläufiger Punkte.
const PENDING_LABEL_OFFSET: Vec2 = Vec2::new(-12.0, -12.0);
const CURVE_LABEL_SIZE: f32 = 10.0;
const PENDING_LABEL_SIZE: f32 = 9.0;

/// Shapes einer festgeschriebenen Kurve.
///
/// Reihenfolge von unten nach oben: Kontrollpolygon, Kurve, Marker + Labels.
pub fn curve_shapes(curve: &Curve, options: &EditorOptions) -> Vec<CanvasShape> {
    let points = curve.control_points();
    let mut shapes = Vec::with_capacity(2 + points.len() * 2);

    if points.len() > 1 {
        shapes.push(CanvasShape::Polyline {
            points: points.to_vec(),
            color: options.control_polygon_color,
            width: 1.0,
            style: LineStyle::Dashed {
                dash: 4.0,
                gap: 4.0,
            },
        });
    }

    shapes.push(CanvasShape::Polyline {
        points: curve.polyline().to_vec(),
        color: options.curve_color,
        width: options.curve_width,
        style: LineStyle::Solid,
    });

    push_point_markers(
        &mut shapes,
        points,
        PointStyle {
            radius: options.control_point_radius,
            fill: options.control_point_fill,
            outline: options.control_point_outline,
            label_offset: CURVE_LABEL_OFFSET,
            label_size: CURVE_LABEL_SIZE,
            labels: options.show_labels,
        },
    );

    shapes
}

/// Shapes der Punkte im Aufbau (leer, wenn keine Punkte vorhanden).
pub fn pending_shapes(pending: &[Vec2], options: &EditorOptions) -> Vec<CanvasShape> {
    let mut shapes = Vec::with_capacity(1 + pending.len() * 2);

    if pending.len() > 1 {
        shapes.push(CanvasShape::Polyline {
            points: pending.to_vec(),
            color: options.pending_polygon_color,
            width: 1.0,
            style: LineStyle::Dashed {
                dash: 3.0,
                gap: 3.0,
            },
        });
    }

    push_point_markers(
        &mut shapes,
        pending,
        PointStyle {
            radius: options.pending_point_radius,
            fill: options.pending_point_fill,
            outline: options.pending_point_outline,
            label_offset: PENDING_LABEL_OFFSET,
            label_size: PENDING_LABEL_SIZE,
            labels: options.show_labels,
        },
    );

    shapes
}

struct PointStyle {
    radius: f32,
    fill: [f32; 4],
    outline: [f32; 4],
    label_offset: Vec2,
    label_size: f32,
    labels: bool,
}

fn push_point_markers(shapes: &mut Vec<CanvasShape>, points: &[Vec2], style: PointStyle) {
    for (i, &p) in points.iter().enumerate() {
        shapes.push(CanvasShape::Marker {
            center: p,
            radius: style.radius,
            fill: style.fill,
            outline: style.outline,
        });
        if style.labels {
            shapes.push(CanvasShape::Label {
                pos: p + style.label_offset,
                text: format!("P{}", i),
                color: style.fill,
                size: style.label_size,
            });
        }
    }
}
