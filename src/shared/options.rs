//! Zentrale Konfiguration des Plotters.
//!
//! `PlotterOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Viewport ────────────────────────────────────────────────────────

/// Zoom-Faktor fuer Hineinzoomen (Ausschnitt × 0,9).
pub const ZOOM_IN_FACTOR: f64 = 0.9;
/// Zoom-Faktor fuer Herauszoomen (Ausschnitt × 1,1).
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

// ── Kurven-Rendering ───────────────────────────────────────────────

/// Linienstaerke der Kurve in Pixeln.
pub const CURVE_STROKE_WIDTH: f32 = 1.5;
/// Farbe der Kurve (RGBA: Violett).
pub const CURVE_COLOR: [u8; 4] = [128, 0, 128, 255];

// ── Sternpolygon-Rendering ─────────────────────────────────────────

/// Farbe der Sternsehnen (RGBA: Rot).
pub const STAR_CHORD_COLOR: [u8; 4] = [200, 40, 40, 255];
/// Farbe der p-Eck-Referenzkontur (RGBA: Blau, halbtransparent).
pub const STAR_OUTLINE_COLOR: [u8; 4] = [70, 110, 220, 128];
/// Farbe der Eckpunkt-Marker (RGBA: Schwarz).
pub const STAR_VERTEX_COLOR: [u8; 4] = [20, 20, 20, 255];
/// Eckpunkt-Radius in Pixeln.
pub const STAR_VERTEX_RADIUS: f32 = 4.0;
/// Abstandsfaktor der Index-Beschriftung vom Einheitskreis.
pub const STAR_LABEL_OFFSET: f64 = 1.1;

// ── Gitter ─────────────────────────────────────────────────────────

/// Farbe der Gitterlinien (RGBA: Grau, transparent).
pub const GRID_COLOR: [u8; 4] = [140, 140, 140, 70];
/// Farbe der Achsen durch den Ursprung.
pub const AXIS_COLOR: [u8; 4] = [140, 140, 140, 140];

/// Zur Laufzeit aenderbare Darstellungs- und Bedienoptionen.
///
/// Wird als TOML neben der Binary gespeichert; fehlende oder fehlerhafte
/// Dateien fallen auf die Defaults zurueck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotterOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Linienstaerke der Kurve in Pixeln
    pub curve_stroke_width: f32,
    /// Farbe der Kurve (RGBA)
    pub curve_color: [u8; 4],

    // ── Sternpolygon ────────────────────────────────────────────
    /// Farbe der Sternsehnen (RGBA)
    pub star_chord_color: [u8; 4],
    /// Farbe der p-Eck-Referenzkontur (RGBA)
    pub star_outline_color: [u8; 4],
    /// Farbe der Eckpunkt-Marker (RGBA)
    pub star_vertex_color: [u8; 4],
    /// Eckpunkt-Radius in Pixeln
    pub star_vertex_radius: f32,
    /// Eckpunkte mit ihrem Index beschriften
    pub star_vertex_labels: bool,

    // ── Gitter ──────────────────────────────────────────────────
    /// Gitter im Viewport zeichnen
    pub show_grid: bool,
    /// Farbe der Gitterlinien (RGBA)
    pub grid_color: [u8; 4],

    // ── Viewport ────────────────────────────────────────────────
    /// Zoom-Faktor fuer Hineinzoomen
    pub zoom_in_factor: f64,
    /// Zoom-Faktor fuer Herauszoomen
    pub zoom_out_factor: f64,
}

impl Default for PlotterOptions {
    fn default() -> Self {
        Self {
            curve_stroke_width: CURVE_STROKE_WIDTH,
            curve_color: CURVE_COLOR,

            star_chord_color: STAR_CHORD_COLOR,
            star_outline_color: STAR_OUTLINE_COLOR,
            star_vertex_color: STAR_VERTEX_COLOR,
            star_vertex_radius: STAR_VERTEX_RADIUS,
            star_vertex_labels: true,

            show_grid: true,
            grid_color: GRID_COLOR,

            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}

impl PlotterOptions {
    /// Laedt Optionen aus einer TOML-Datei. Fehlende oder fehlerhafte
    /// Dateien liefern die Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
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
            .unwrap_or_else(|_| std::path::PathBuf::from("polar_kurven_plotter"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("polar_kurven_plotter.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roundtrips_through_toml() {
        let options = PlotterOptions::default();
        let toml_text = toml::to_string_pretty(&options).expect("Serialisierung");
        let back: PlotterOptions = toml::from_str(&toml_text).expect("Deserialisierung");
        assert_eq!(options, back);
    }

    #[test]
    fn zoom_factors_are_inverse_within_tolerance() {
        let options = PlotterOptions::default();
        assert!((options.zoom_in_factor * options.zoom_out_factor - 0.99).abs() < 1e-12);
    }
}
