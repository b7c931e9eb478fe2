//! Zentrale Konfiguration für den Bézier-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurveDegree, DEFAULT_SAMPLE_COUNT};
use serde::{Deserialize, Serialize};

// ── Editor ──────────────────────────────────────────────────────────

/// Standard-Punktanzahl neuer Kurven (kubisch).
pub const DEFAULT_DEGREE_POINTS: u8 = 4;
/// Pick-Radius für festgeschriebene Kontrollpunkte in Pixeln.
pub const HIT_THRESHOLD_PX: f32 = 10.0;
/// Anzahl linearer Segmente pro Kurve.
pub const SAMPLE_COUNT: usize = DEFAULT_SAMPLE_COUNT;

// ── Festgeschriebene Kurven ────────────────────────────────────────

/// Farbe der abgetasteten Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Linienstärke der abgetasteten Kurve.
pub const CURVE_WIDTH: f32 = 2.0;
/// Farbe des Kontrollpolygons (RGBA: Rot).
pub const CONTROL_POLYGON_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Füllfarbe der Kontrollpunkt-Marker (RGBA: Rot).
pub const CONTROL_POINT_FILL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Outline-Farbe der Kontrollpunkt-Marker (RGBA: Dunkelrot).
pub const CONTROL_POINT_OUTLINE: [f32; 4] = [0.55, 0.0, 0.0, 1.0];
/// Marker-Radius festgeschriebener Kontrollpunkte.
pub const CONTROL_POINT_RADIUS: f32 = 5.0;

// ── Punkte im Aufbau ───────────────────────────────────────────────

/// Farbe des vorläufigen Kontrollpolygons (RGBA: Grau).
pub const PENDING_POLYGON_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Füllfarbe vorläufiger Punkte (RGBA: Orange).
pub const PENDING_POINT_FILL: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
/// Outline-Farbe vorläufiger Punkte (RGBA: Dunkelorange).
pub const PENDING_POINT_OUTLINE: [f32; 4] = [1.0, 0.55, 0.0, 1.0];
/// Marker-Radius vorläufiger Punkte.
pub const PENDING_POINT_RADIUS: f32 = 4.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Editor ──────────────────────────────────────────────────
    /// Punktanzahl neuer Kurven beim Start (2, 3 oder 4)
    pub default_degree: u8,
    /// Pick-Radius für Kontrollpunkte in Pixeln
    pub hit_threshold_px: f32,
    /// Anzahl linearer Segmente pro Kurve
    pub sample_count: usize,

    // ── Kurven ──────────────────────────────────────────────────
    /// Farbe der abgetasteten Kurve
    pub curve_color: [f32; 4],
    /// Linienstärke der abgetasteten Kurve
    pub curve_width: f32,
    /// Farbe des Kontrollpolygons (gestrichelt)
    pub control_polygon_color: [f32; 4],
    /// Füllfarbe der Kontrollpunkte
    pub control_point_fill: [f32; 4],
    /// Outline-Farbe der Kontrollpunkte
    pub control_point_outline: [f32; 4],
    /// Marker-Radius der Kontrollpunkte
    pub control_point_radius: f32,

    // ── Aufbau ──────────────────────────────────────────────────
    /// Farbe des vorläufigen Kontrollpolygons
    pub pending_polygon_color: [f32; 4],
    /// Füllfarbe vorläufiger Punkte
    pub pending_point_fill: [f32; 4],
    /// Outline-Farbe vorläufiger Punkte
    pub pending_point_outline: [f32; 4],
    /// Marker-Radius vorläufiger Punkte
    pub pending_point_radius: f32,

    /// `P0, P1, …`-Beschriftungen zeichnen
    #[serde(default = "default_show_labels")]
    pub show_labels: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_degree: DEFAULT_DEGREE_POINTS,
            hit_threshold_px: HIT_THRESHOLD_PX,
            sample_count: SAMPLE_COUNT,

            curve_color: CURVE_COLOR,
            curve_width: CURVE_WIDTH,
            control_polygon_color: CONTROL_POLYGON_COLOR,
            control_point_fill: CONTROL_POINT_FILL,
            control_point_outline: CONTROL_POINT_OUTLINE,
            control_point_radius: CONTROL_POINT_RADIUS,

            pending_polygon_color: PENDING_POLYGON_COLOR,
            pending_point_fill: PENDING_POINT_FILL,
            pending_point_outline: PENDING_POINT_OUTLINE,
            pending_point_radius: PENDING_POINT_RADIUS,

            show_labels: true,
        }
    }
}

/// Serde-Default für `show_labels` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_labels() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML und begrenzt die Werte auf gültige Bereiche.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.sanitized())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }

    /// Start-Grad aus `default_degree`. Ungültige Werte fallen auf kubisch zurück.
    pub fn initial_degree(&self) -> CurveDegree {
        CurveDegree::try_from(self.default_degree).unwrap_or_else(|e| {
            log::warn!("{}, verwende kubisch", e);
            CurveDegree::Cubic
        })
    }

    /// Begrenzt Sample-Anzahl (≥ 1) und Pick-Radius (≥ 0).
    pub fn sanitized(mut self) -> Self {
        self.sample_count = self.sample_count.max(1);
        if !self.hit_threshold_px.is_finite() || self.hit_threshold_px < 0.0 {
            self.hit_threshold_px = 0.0;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut opts = EditorOptions::default();
        opts.sample_count = 64;
        opts.hit_threshold_px = 6.5;
        let content = toml::to_string_pretty(&opts).expect("serialisierbar");
        let parsed = EditorOptions::from_toml_str(&content).expect("parsebar");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn invalid_values_are_clamped() {
        let mut opts = EditorOptions::default();
        opts.sample_count = 0;
        opts.hit_threshold_px = -3.0;
        let opts = opts.sanitized();
        assert_eq!(opts.sample_count, 1);
        assert_eq!(opts.hit_threshold_px, 0.0);
    }

    #[test]
    fn invalid_default_degree_falls_back_to_cubic() {
        let opts = EditorOptions {
            default_degree: 7,
            ..EditorOptions::default()
        };
        assert_eq!(opts.initial_degree(), CurveDegree::Cubic);

        let opts = EditorOptions {
            default_degree: 2,
            ..EditorOptions::default()
        };
        assert_eq!(opts.initial_degree(), CurveDegree::Linear);
    }

    #[test]
    fn broken_toml_is_an_error() {
        assert!(EditorOptions::from_toml_str("sample_count = \"viele\"").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::path::Path::new("/nonexistent/bezier_curve_editor.toml");
        assert_eq!(EditorOptions::load_from_file(path), EditorOptions::default());
    }
}
