//! Handler für Punkt-Erfassung und Grad-Auswahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveDegree;

/// Fügt einen Punkt an der übergebenen Canvas-Position hinzu.
pub fn add_point(state: &mut AppState, pos: glam::Vec2) {
    use_cases::editing::add_point(state, pos);
}

/// Setzt den Grad für künftige Kurven.
pub fn set_degree(state: &mut AppState, degree: CurveDegree) {
    use_cases::editing::set_degree(state, degree);
}
