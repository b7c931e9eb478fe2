//! Bézier-Kurven-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{Curve, CurveDegree, DegreeError, DragTarget, EditorPhase, SceneModel};
pub use render::{CanvasBackend, CanvasShape, CanvasSync, ShapeHandle};
pub use shared::{EditorOptions, SceneChange};
