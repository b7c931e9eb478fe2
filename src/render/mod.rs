//! Zeichen-Kollaborator: Shapes, Handles und Abgleich mit dem Szenen-Modell.
//!
//! Der Kern kennt nur den `CanvasBackend`-Vertrag. Die egui-Implementierung
//! lebt in `ui::canvas`.

mod sync;
mod types;
pub mod visuals;

pub use sync::CanvasSync;
pub use types::{CanvasBackend, CanvasShape, LineStyle, ShapeHandle};
