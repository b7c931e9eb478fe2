//! Core-Domänentypen: Bézier-Auswertung, Kurven und Szenen-Modell.

pub mod bezier;
pub mod curve;
pub mod scene;

pub use bezier::{evaluate, DEFAULT_SAMPLE_COUNT};
pub use curve::{Curve, CurveDegree, DegreeError};
pub use scene::{DragTarget, EditorPhase, SceneModel};
