//! Render-Szene als expliziter Uebergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::PlotterOptions;
use crate::core::{SampledCurve, StarPolygonGeometry, ViewRect};
use std::sync::Arc;

/// Read-only Daten fuer einen Render-Frame.
///
/// Genau eine der beiden Geometrien ist gesetzt: Punktfolge einer
/// Kurvenfamilie oder diskrete Sternpolygon-Geometrie.
#[derive(Clone)]
pub struct RenderScene {
    /// Abgetastete Kurve (Schmetterling/Rosette; Arc fuer O(1)-Clone pro Frame)
    pub curve: Option<Arc<SampledCurve>>,
    /// Sternpolygon-Geometrie
    pub star: Option<Arc<StarPolygonGeometry>>,
    /// Sichtbarer Ausschnitt fuer diesen Frame
    pub view_rect: ViewRect,
    /// Viewport-Groesse in Pixeln [Breite, Hoehe]
    pub viewport_size: [f32; 2],
    /// Anzeigetitel der aktiven Geometrie
    pub title: String,
    /// Laufzeit-Optionen fuer Farben, Staerken, Gitter
    pub options: PlotterOptions,
}

impl RenderScene {
    /// Gibt die Punktzahl der aktiven Geometrie zurueck (Status-Anzeige).
    pub fn point_count(&self) -> usize {
        if let Some(curve) = &self.curve {
            curve.points.len()
        } else if let Some(star) = &self.star {
            star.vertices.len()
        } else {
            0
        }
    }
}
