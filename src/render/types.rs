//! Zeichen-Primitive und der Vertrag zum Zeichen-Kollaborator.

use glam::Vec2;

/// Undurchsichtiger Verweis auf ein gezeichnetes Objekt.
///
/// Wird vom Backend vergeben und nur zum Löschen zurückgereicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeHandle(pub u64);

/// Strichmuster für Linien.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    /// Durchgezogen
    Solid,
    /// Gestrichelt (Strichlänge, Lückenlänge)
    Dashed { dash: f32, gap: f32 },
}

/// Ein zeichenbares Objekt in Canvas-Koordinaten (Pixel).
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasShape {
    /// Offener Linienzug
    Polyline {
        points: Vec<Vec2>,
        color: [f32; 4],
        width: f32,
        style: LineStyle,
    },
    /// Gefüllter Kreis mit Umrandung
    Marker {
        center: Vec2,
        radius: f32,
        fill: [f32; 4],
        outline: [f32; 4],
    },
    /// Text, zentriert auf `pos`
    Label {
        pos: Vec2,
        text: String,
        color: [f32; 4],
        size: f32,
    },
}

/// Zeichen-Kollaborator: nimmt Objekte entgegen und löscht sie auf Anfrage.
///
/// Das Backend liest nie das Szenen-Modell, es kennt nur Shapes und Handles.
pub trait CanvasBackend {
    /// Zeichnet ein Objekt und gibt dessen Handle zurück.
    fn draw(&mut self, shape: CanvasShape) -> ShapeHandle;

    /// Entfernt ein zuvor gezeichnetes Objekt. Unbekannte Handles werden ignoriert.
    fn remove(&mut self, handle: ShapeHandle);
}
