//! Kurven-Grad und festgeschriebene Bézier-Kurve.

use super::bezier;
use glam::Vec2;
use thiserror::Error;

/// Anzahl der Kontrollpunkte, die eine neue Kurve abschließen.
///
/// Der Grad wird hier als Punktanzahl (2/3/4) geführt, nicht als
/// Polynomgrad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveDegree {
    /// Gerade Strecke aus 2 Punkten
    Linear,
    /// Quadratische Kurve aus 3 Punkten
    Quadratic,
    /// Kubische Kurve aus 4 Punkten
    #[default]
    Cubic,
}

/// Ungültige Punktanzahl für einen Kurven-Grad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ungültiger Kurven-Grad: {0} Punkte (erlaubt: 2, 3 oder 4)")]
pub struct DegreeError(pub u8);

impl CurveDegree {
    /// Alle wählbaren Grade in Anzeige-Reihenfolge.
    pub const ALL: [CurveDegree; 3] = [
        CurveDegree::Linear,
        CurveDegree::Quadratic,
        CurveDegree::Cubic,
    ];

    /// Anzahl der Kontrollpunkte für diesen Grad.
    pub fn point_count(self) -> usize {
        match self {
            CurveDegree::Linear => 2,
            CurveDegree::Quadratic => 3,
            CurveDegree::Cubic => 4,
        }
    }

    /// Anzeigename für Toolbar und Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            CurveDegree::Linear => "Linear (2 Pkt)",
            CurveDegree::Quadratic => "Quadratisch (3 Pkt)",
            CurveDegree::Cubic => "Kubisch (4 Pkt)",
        }
    }
}

impl TryFrom<u8> for CurveDegree {
    type Error = DegreeError;

    fn try_from(point_count: u8) -> Result<Self, Self::Error> {
        match point_count {
            2 => Ok(CurveDegree::Linear),
            3 => Ok(CurveDegree::Quadratic),
            4 => Ok(CurveDegree::Cubic),
            other => Err(DegreeError(other)),
        }
    }
}

/// Festgeschriebene Bézier-Kurve.
///
/// Die Anzahl der Kontrollpunkte ist ab Erstellung fix, nur ihre Positionen
/// ändern sich (per Drag). Die Polyline wird nach jeder Positionsänderung
/// vollständig neu berechnet.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    control_points: Vec<Vec2>,
    polyline: Vec<Vec2>,
    sample_count: usize,
}

impl Curve {
    /// Erstellt eine Kurve und wertet sie sofort aus.
    pub fn new(control_points: Vec<Vec2>, sample_count: usize) -> Self {
        let polyline = bezier::evaluate(&control_points, sample_count);
        Self {
            control_points,
            polyline,
            sample_count,
        }
    }

    /// Geordnete Kontrollpunkte (P0, P1, …).
    pub fn control_points(&self) -> &[Vec2] {
        &self.control_points
    }

    /// Abgetastete Kurve (`sample_count + 1` Punkte).
    pub fn polyline(&self) -> &[Vec2] {
        &self.polyline
    }

    /// Anzahl der Kontrollpunkte (fix seit Erstellung).
    pub fn point_count(&self) -> usize {
        self.control_points.len()
    }

    /// Sample-Anzahl, mit der die Polyline berechnet wurde.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Verschiebt einen Kontrollpunkt und berechnet die Polyline neu.
    ///
    /// Gibt `false` zurück, wenn der Index nicht existiert.
    pub fn move_point(&mut self, index: usize, pos: Vec2) -> bool {
        let Some(point) = self.control_points.get_mut(index) else {
            return false;
        };
        *point = pos;
        self.reevaluate();
        true
    }

    /// Ändert die Sample-Anzahl und berechnet die Polyline neu.
    pub fn set_sample_count(&mut self, sample_count: usize) {
        self.sample_count = sample_count;
        self.reevaluate();
    }

    fn reevaluate(&mut self) {
        self.polyline = bezier::evaluate(&self.control_points, self.sample_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_from_point_count() {
        assert_eq!(CurveDegree::try_from(2), Ok(CurveDegree::Linear));
        assert_eq!(CurveDegree::try_from(3), Ok(CurveDegree::Quadratic));
        assert_eq!(CurveDegree::try_from(4), Ok(CurveDegree::Cubic));
        assert_eq!(CurveDegree::try_from(1), Err(DegreeError(1)));
        assert_eq!(CurveDegree::try_from(5), Err(DegreeError(5)));
    }

    #[test]
    fn point_count_roundtrips_through_try_from() {
        for degree in CurveDegree::ALL {
            let count = degree.point_count() as u8;
            assert_eq!(CurveDegree::try_from(count), Ok(degree));
        }
    }

    #[test]
    fn new_curve_is_evaluated() {
        let curve = Curve::new(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)], 4);
        assert_eq!(curve.point_count(), 2);
        assert_eq!(curve.polyline().len(), 5);
        assert_eq!(curve.polyline()[2], Vec2::new(5.0, 0.0));
    }

    #[test]
    fn move_point_recomputes_polyline() {
        let mut curve = Curve::new(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)], 4);
        assert!(curve.move_point(1, Vec2::new(0.0, 20.0)));
        assert_eq!(curve.control_points()[1], Vec2::new(0.0, 20.0));
        assert_eq!(*curve.polyline().last().unwrap(), Vec2::new(0.0, 20.0));
        assert_eq!(curve.polyline()[2], Vec2::new(0.0, 10.0));
    }

    #[test]
    fn move_point_out_of_range_is_rejected() {
        let mut curve = Curve::new(vec![Vec2::ZERO, Vec2::ONE], 4);
        let before = curve.clone();
        assert!(!curve.move_point(2, Vec2::new(9.0, 9.0)));
        assert_eq!(curve, before);
    }

    #[test]
    fn sample_count_change_reevaluates() {
        let mut curve = Curve::new(vec![Vec2::ZERO, Vec2::ONE], 4);
        curve.set_sample_count(10);
        assert_eq!(curve.sample_count(), 10);
        assert_eq!(curve.polyline().len(), 11);
    }
}
