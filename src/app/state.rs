//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{ButterflyParams, PetalParams, SampledCurve, StarPolygonGeometry, ViewRect};
use crate::shared::PlotterOptions;
use std::sync::Arc;

/// Aktive Kurvenfamilie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveFamily {
    /// Schmetterlingskurve (transzendent)
    #[default]
    Butterfly,
    /// Rosetten/Spiralen-Familie mit Formelvarianten
    Petal,
    /// Sternpolygon {p/q}
    Star,
}

impl CurveFamily {
    /// Anzeigename der Familie.
    pub fn label(self) -> &'static str {
        match self {
            CurveFamily::Butterfly => "Butterfly Curve",
            CurveFamily::Petal => "Petal / Rose",
            CurveFamily::Star => "Star Polygon",
        }
    }
}

/// Kurvenbezogener Anwendungszustand.
///
/// Haelt pro Familie den zuletzt akzeptierten Parametersatz; genau eine
/// Geometrie (Punktfolge oder Sternpolygon) ist aktiv.
pub struct CurveState {
    /// Aktive Familie
    pub family: CurveFamily,
    /// Parameter der Schmetterlingskurve
    pub butterfly: ButterflyParams,
    /// Parameter der Rosetten-Familie
    pub petal: PetalParams,
    /// Zuletzt akzeptiertes p des Sternpolygons
    pub star_p: i64,
    /// Zuletzt akzeptiertes q des Sternpolygons
    pub star_q: i64,
    /// Aktive Punktfolge (Butterfly/Petal; Arc fuer O(1)-Clone pro Frame)
    pub sampled: Option<Arc<SampledCurve>>,
    /// Aktive Sternpolygon-Geometrie
    pub star_geometry: Option<Arc<StarPolygonGeometry>>,
}

impl CurveState {
    /// Erstellt den Startzustand (Schmetterlingskurve mit Defaults,
    /// noch ohne erzeugte Geometrie).
    pub fn new() -> Self {
        Self {
            family: CurveFamily::Butterfly,
            butterfly: ButterflyParams::default(),
            petal: PetalParams::default(),
            star_p: 5,
            star_q: 2,
            sampled: None,
            star_geometry: None,
        }
    }

    /// Titel der aktiven Geometrie (Status/Overlay).
    pub fn title(&self) -> &str {
        if let Some(star) = &self.star_geometry {
            &star.title
        } else if let Some(curve) = &self.sampled {
            &curve.title
        } else {
            ""
        }
    }
}

impl Default for CurveState {
    fn default() -> Self {
        Self::new()
    }
}

/// Rohe Texteingaben der Parameterfelder.
///
/// Korrigierte Werte werden nach Clamp/Default hierher zurueckgeschrieben;
/// bei abgelehnten Sternpolygon-Eingaben bleibt der getippte Text stehen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Eingabefeld Fluegel-Frequenz
    pub wing_frequency: String,
    /// Eingabefeld Fluegel-Amplitude
    pub wing_amplitude: String,
    /// Eingabefeld Sinus-Streckung
    pub sine_stretch: String,
    /// Eingabefeld Blattzahl
    pub n_petals: String,
    /// Eingabefeld Gesichtsradius
    pub face_radius: String,
    /// Eingabefeld p
    pub star_p: String,
    /// Eingabefeld q
    pub star_q: String,
}

impl EditState {
    /// Initialisiert die Eingabefelder aus den aktuellen Parametern.
    pub fn from_params(curve: &CurveState) -> Self {
        Self {
            wing_frequency: curve.butterfly.wing_frequency.to_string(),
            wing_amplitude: curve.butterfly.wing_amplitude.to_string(),
            sine_stretch: curve.butterfly.sine_stretch.to_string(),
            n_petals: curve.petal.n_petals.to_string(),
            face_radius: curve.petal.face_radius.to_string(),
            star_p: curve.star_p.to_string(),
            star_q: curve.star_q.to_string(),
        }
    }
}

/// View-bezogener Anwendungszustand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Sichtbarer Ausschnitt in Datenkoordinaten (einzige Quelle der Wahrheit)
    pub rect: ViewRect,
    /// Aktuelle Viewport-Groesse in Pixeln
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            rect: ViewRect::default(),
            viewport_size: [0.0, 0.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Letzte abgelehnte Sternpolygon-Eingabe (Anzeige im Panel/Status)
    pub validation_error: Option<String>,
    /// Gleichungs-Info im Panel aufgeklappt
    pub show_equation_info: bool,
    /// Bedienhinweise im Panel aufgeklappt
    pub show_instructions: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            validation_error: None,
            show_equation_info: true,
            show_instructions: false,
        }
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Kurven-State (Parameter + aktive Geometrie)
    pub curve: CurveState,
    /// Rohe Parametereingaben
    pub edit: EditState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Staerken, Zoom-Faktoren)
    pub options: PlotterOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit erzeugter Default-Kurve und
    /// daraus initialisiertem Ausschnitt.
    pub fn new() -> Self {
        let curve = CurveState::new();
        let edit = EditState::from_params(&curve);
        let mut state = Self {
            curve,
            edit,
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: PlotterOptions::default(),
            should_exit: false,
        };
        super::use_cases::curve::regenerate(&mut state);
        state
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
