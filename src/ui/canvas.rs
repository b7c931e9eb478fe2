//! Retained Zeichen-Backend auf Basis des egui-Painters.
//!
//! egui zeichnet im Immediate-Mode. `EguiCanvas` hält deshalb alle
//! gezeichneten Objekte bis zu ihrem `remove` und malt sie jeden Frame neu.

use crate::render::{CanvasBackend, CanvasShape, LineStyle, ShapeHandle};
use std::collections::BTreeMap;

/// Zeichenfläche mit stabiler Z-Reihenfolge (Handle-Reihenfolge).
#[derive(Debug, Default)]
pub struct EguiCanvas {
    shapes: BTreeMap<ShapeHandle, CanvasShape>,
    next_id: u64,
}

impl EguiCanvas {
    /// Erstellt eine leere Zeichenfläche.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der aktuell gehaltenen Objekte.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Malt alle Objekte; `origin` ist die linke obere Ecke der Zeichenfläche.
    pub fn paint(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let to_screen = |p: glam::Vec2| origin + egui::vec2(p.x, p.y);

        for shape in self.shapes.values() {
            match shape {
                CanvasShape::Polyline {
                    points,
                    color,
                    width,
                    style,
                } => {
                    let points: Vec<egui::Pos2> = points.iter().map(|p| to_screen(*p)).collect();
                    let stroke = egui::Stroke::new(*width, to_color32(*color));
                    match style {
                        LineStyle::Solid => {
                            painter.add(egui::Shape::line(points, stroke));
                        }
                        LineStyle::Dashed { dash, gap } => {
                            painter.extend(egui::Shape::dashed_line(&points, stroke, *dash, *gap));
                        }
                    }
                }
                CanvasShape::Marker {
                    center,
                    radius,
                    fill,
                    outline,
                } => {
                    let center = to_screen(*center);
                    painter.circle_filled(center, *radius, to_color32(*fill));
                    painter.circle_stroke(
                        center,
                        *radius,
                        egui::Stroke::new(1.0, to_color32(*outline)),
                    );
                }
                CanvasShape::Label {
                    pos,
                    text,
                    color,
                    size,
                } => {
                    painter.text(
                        to_screen(*pos),
                        egui::Align2::CENTER_CENTER,
                        text,
                        egui::FontId::proportional(*size),
                        to_color32(*color),
                    );
                }
            }
        }
    }
}

impl CanvasBackend for EguiCanvas {
    fn draw(&mut self, shape: CanvasShape) -> ShapeHandle {
        let handle = ShapeHandle(self.next_id);
        self.next_id += 1;
        self.shapes.insert(handle, shape);
        handle
    }

    fn remove(&mut self, handle: ShapeHandle) {
        self.shapes.remove(&handle);
    }
}

/// Konvertiert RGBA-Farbwerte (0..1) in `egui::Color32`.
fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn marker() -> CanvasShape {
        CanvasShape::Marker {
            center: Vec2::ZERO,
            radius: 5.0,
            fill: [1.0, 0.0, 0.0, 1.0],
            outline: [0.5, 0.0, 0.0, 1.0],
        }
    }

    #[test]
    fn handles_are_unique_and_removable() {
        let mut canvas = EguiCanvas::new();
        let a = canvas.draw(marker());
        let b = canvas.draw(marker());
        assert_ne!(a, b);
        assert_eq!(canvas.shape_count(), 2);

        canvas.remove(a);
        canvas.remove(a);
        assert_eq!(canvas.shape_count(), 1);
    }

    #[test]
    fn color_conversion_covers_full_range() {
        assert_eq!(to_color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
        assert_eq!(to_color32([0.0, 0.0, 0.0, 1.0]), egui::Color32::BLACK);
    }
}
