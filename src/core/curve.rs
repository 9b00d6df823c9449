//! Kurvenfamilien: Schmetterlingskurve und Rosetten/Spiralen.
//!
//! Reine Berechnung: validierte Parameter + Aufloesung → geordnete
//! Punktfolge, vorgeschlagene Bounds und Anzeigetitel. Kein Zustand,
//! keine Seiteneffekte.

use super::params::{FloatRange, IntRange};
use super::viewport::ViewRect;
use glam::DVec2;
use std::f64::consts::PI;

/// Fester Winkelbereich der Abtastung (θ ∈ [0, 24π]).
pub const THETA_SPAN: f64 = 24.0 * PI;
/// Abtastpunkte fuer die Schmetterlingskurve.
pub const BUTTERFLY_RESOLUTION: usize = 5000;
/// Abtastpunkte fuer die Rosetten/Spiralen-Familie.
pub const PETAL_RESOLUTION: usize = 3000;
/// Rand-Faktor fuer datenbasierte Bounds.
pub const BOUNDS_MARGIN: f64 = 1.1;
/// Kanonische Halbbreite fuer beschraenkte Rosen/Rhodonea-Kurven.
pub const ROSE_CANONICAL_HALF_EXTENT: f64 = 1.5;

/// Parameter der Schmetterlingskurve.
///
/// r = e^sin(θ) − A·cos(F·θ) + sin⁵((2θ − π) / S)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButterflyParams {
    /// F — Anzahl der Fluegel
    pub wing_frequency: i64,
    /// A — Groesse der Fluegel
    pub wing_amplitude: f64,
    /// S — Streckungsfaktor des Sinus-Terms
    pub sine_stretch: i64,
}

impl ButterflyParams {
    /// Deklarierter Bereich fuer `wing_frequency`.
    pub const WING_FREQUENCY: IntRange = IntRange {
        min: 0,
        max: i64::MAX,
        default: 4,
    };
    /// Deklarierter Bereich fuer `wing_amplitude`.
    pub const WING_AMPLITUDE: FloatRange = FloatRange {
        min: 0.0,
        max: f64::MAX,
        default: 2.0,
    };
    /// Deklarierter Bereich fuer `sine_stretch`.
    pub const SINE_STRETCH: IntRange = IntRange {
        min: 0,
        max: i64::MAX,
        default: 24,
    };
}

impl Default for ButterflyParams {
    fn default() -> Self {
        Self {
            wing_frequency: Self::WING_FREQUENCY.default,
            wing_amplitude: Self::WING_AMPLITUDE.default,
            sine_stretch: Self::SINE_STRETCH.default,
        }
    }
}

/// Formelvariante der Rosetten/Spiralen-Familie.
///
/// Geschlossene Menge von Kurvenarten: pro Variante genau eine reine
/// Auswertungsfunktion, Auswahl ueber einen einzigen Dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetalVariant {
    /// r = θ·sin(nθ) — expandierende Blütenspirale
    Spiral,
    /// r = cos(nθ) — klassische Rose (2n Blaetter bei geradem n)
    Rose,
    /// r = cos(kθ) mit Paritaetskorrektur — exakt n Blaetter
    #[default]
    Rhodonea,
    /// r = θ·cos(kθ) — expandierende Rhodonea
    SpiralRhodonea,
    /// r = θ·sin²(nθ/2) — exakt n Blaetter, monoton wachsende Huelle
    SpiralSin,
    /// r = θ·cos²(nθ/2)
    SpiralCos,
    /// r = sin(kθ) + Gesichtsradius (Betragsfaltung bei geradem n)
    RhodoneaSin,
    /// r = cos(kθ) + Gesichtsradius (Betragsfaltung bei geradem n)
    RhodoneaCos,
}

impl PetalVariant {
    /// Alle Varianten in Anzeige-Reihenfolge.
    pub const ALL: [PetalVariant; 8] = [
        PetalVariant::Spiral,
        PetalVariant::Rose,
        PetalVariant::Rhodonea,
        PetalVariant::SpiralRhodonea,
        PetalVariant::SpiralSin,
        PetalVariant::SpiralCos,
        PetalVariant::RhodoneaSin,
        PetalVariant::RhodoneaCos,
    ];

    /// Anzeigename der Variante.
    pub fn label(self) -> &'static str {
        match self {
            PetalVariant::Spiral => "Spiral Petal Pattern",
            PetalVariant::Rose => "Rose Curve",
            PetalVariant::Rhodonea => "Rhodonea Curve",
            PetalVariant::SpiralRhodonea => "Spiral Rhodonea",
            PetalVariant::SpiralSin => "Spiral (sin², exact petals)",
            PetalVariant::SpiralCos => "Spiral (cos², exact petals)",
            PetalVariant::RhodoneaSin => "Rhodonea (sin, face radius)",
            PetalVariant::RhodoneaCos => "Rhodonea (cos, face radius)",
        }
    }

    /// Expandiert die Kurve mit θ (Spiral-Typ) oder bleibt sie beschraenkt?
    /// Entscheidet die Bounds-Politik: Spiral-Typen = Daten-Bounds × 1,1,
    /// einfache Rose/Rhodonea = kanonische Box.
    pub fn is_expanding(self) -> bool {
        matches!(
            self,
            PetalVariant::Spiral
                | PetalVariant::SpiralRhodonea
                | PetalVariant::SpiralSin
                | PetalVariant::SpiralCos
        )
    }

    /// Nutzt die Variante den Gesichtsradius?
    pub fn uses_face_radius(self) -> bool {
        matches!(self, PetalVariant::RhodoneaSin | PetalVariant::RhodoneaCos)
    }
}

/// Parameter der Rosetten/Spiralen-Familie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalParams {
    /// n — gewuenschte Blattzahl
    pub n_petals: i64,
    /// Gesichtsradius fuer die Rhodonea-sin/cos-Varianten
    pub face_radius: f64,
    /// Aktive Formelvariante
    pub variant: PetalVariant,
}

impl PetalParams {
    /// Deklarierter Bereich fuer `n_petals`.
    pub const N_PETALS: IntRange = IntRange {
        min: 1,
        max: 20,
        default: 3,
    };
    /// Deklarierter Bereich fuer `face_radius`.
    pub const FACE_RADIUS: FloatRange = FloatRange {
        min: 0.0,
        max: 2.0,
        default: 1.0,
    };
}

impl Default for PetalParams {
    fn default() -> Self {
        Self {
            n_petals: Self::N_PETALS.default,
            face_radius: Self::FACE_RADIUS.default,
            variant: PetalVariant::default(),
        }
    }
}

/// Abgetastete Kurve: geordnete Punktfolge plus vorgeschlagene Bounds.
///
/// Wird bei jeder Parameter- oder Variantenaenderung komplett neu erzeugt.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    /// Kartesische Punkte in Abtastreihenfolge
    pub points: Vec<DVec2>,
    /// Vorgeschlagener "Fit"-Ausschnitt fuer die Ansicht
    pub bounds: ViewRect,
    /// Anzeigetitel (Familie + Parameterwerte)
    pub title: String,
}

/// Paritaetskorrigierter Blattfaktor: k = n fuer ungerades n, sonst n/2.
///
/// Korrektur gegenueber der einfachen Rosenformel, die bei geradem n
/// 2n Blaetter liefert.
pub fn effective_k(n: i64) -> f64 {
    if n % 2 != 0 {
        n as f64
    } else {
        (n / 2) as f64
    }
}

/// Tastet eine Polarfunktion r(θ) ueber [0, span] gleichmaessig ab und
/// liefert kartesische Punkte.
///
/// Vorbedingungen (vom Aufrufer garantiert): `resolution >= 2`, `span > 0`.
pub fn sample_polar(span: f64, resolution: usize, r: impl Fn(f64) -> f64) -> Vec<DVec2> {
    debug_assert!(resolution >= 2, "Aufloesung muss mindestens 2 sein");
    debug_assert!(span > 0.0, "Winkelbereich muss positiv sein");

    let step = span / (resolution - 1) as f64;
    (0..resolution)
        .map(|i| {
            let theta = i as f64 * step;
            let radius = r(theta);
            DVec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Datenbasierte Bounds: groesste Achsen-Absolutausdehnung, symmetrisch um
/// den Ursprung, skaliert mit `margin`. Seitenverhaeltnis bleibt erhalten,
/// da derselbe Wert fuer beide Achsen gilt.
pub fn data_bounds(points: &[DVec2], margin: f64) -> ViewRect {
    let max_abs_x = points.iter().fold(0.0_f64, |m, p| m.max(p.x.abs()));
    let max_abs_y = points.iter().fold(0.0_f64, |m, p| m.max(p.y.abs()));
    let extent = max_abs_x.max(max_abs_y).max(f64::EPSILON) * margin;
    ViewRect::symmetric(extent)
}

/// Erzeugt die Schmetterlingskurve fuer die gegebenen Parameter.
///
/// r = e^sin(θ) − A·cos(F·θ) + sin⁵((2θ − π) / S); bei S = 0 entfaellt
/// der Streckungsterm (Division durch Null).
pub fn generate_butterfly(params: &ButterflyParams, resolution: usize) -> SampledCurve {
    let amplitude = params.wing_amplitude;
    let frequency = params.wing_frequency as f64;
    let stretch = params.sine_stretch as f64;

    let points = sample_polar(THETA_SPAN, resolution, |theta| {
        let stretch_term = if stretch > 0.0 {
            ((2.0 * theta - PI) / stretch).sin().powi(5)
        } else {
            0.0
        };
        theta.sin().exp() - amplitude * (frequency * theta).cos() + stretch_term
    });

    let bounds = data_bounds(&points, BOUNDS_MARGIN);
    let title = format!(
        "Butterfly Curve — Frequency: {}, Amplitude: {}, Stretch: {}",
        params.wing_frequency, params.wing_amplitude, params.sine_stretch
    );

    SampledCurve {
        points,
        bounds,
        title,
    }
}

/// Erzeugt eine Kurve der Rosetten/Spiralen-Familie.
///
/// Ein Dispatch pro Variante; die Betragsfaltung bei geradem n der
/// Rhodonea-sin/cos-Varianten ist Absicht und bleibt exakt erhalten
/// (sie verhindert die Blattverdopplung durch negative Radien).
pub fn generate_petal(params: &PetalParams, resolution: usize) -> SampledCurve {
    let n = params.n_petals;
    let nf = n as f64;
    let k = effective_k(n);
    let face = params.face_radius;
    let even = n % 2 == 0;

    let points = match params.variant {
        PetalVariant::Spiral => sample_polar(THETA_SPAN, resolution, |t| t * (nf * t).sin()),
        PetalVariant::Rose => sample_polar(THETA_SPAN, resolution, |t| (nf * t).cos()),
        PetalVariant::Rhodonea => sample_polar(THETA_SPAN, resolution, |t| (k * t).cos()),
        PetalVariant::SpiralRhodonea => {
            sample_polar(THETA_SPAN, resolution, |t| t * (k * t).cos())
        }
        PetalVariant::SpiralSin => {
            sample_polar(THETA_SPAN, resolution, |t| t * (nf * t / 2.0).sin().powi(2))
        }
        PetalVariant::SpiralCos => {
            sample_polar(THETA_SPAN, resolution, |t| t * (nf * t / 2.0).cos().powi(2))
        }
        PetalVariant::RhodoneaSin => sample_polar(THETA_SPAN, resolution, |t| {
            let base = (k * t).sin();
            if even {
                base.abs() + face
            } else {
                base + face
            }
        }),
        PetalVariant::RhodoneaCos => sample_polar(THETA_SPAN, resolution, |t| {
            let base = (k * t).cos();
            if even {
                base.abs() + face
            } else {
                base + face
            }
        }),
    };

    let bounds = if params.variant.is_expanding() || params.variant.uses_face_radius() {
        data_bounds(&points, BOUNDS_MARGIN)
    } else {
        ViewRect::symmetric(ROSE_CANONICAL_HALF_EXTENT)
    };

    let title = if params.variant.uses_face_radius() {
        format!(
            "{} — Petals: {}, Face Radius: {}",
            params.variant.label(),
            params.n_petals,
            params.face_radius
        )
    } else {
        format!("{} — Petals: {}", params.variant.label(), params.n_petals)
    };

    SampledCurve {
        points,
        bounds,
        title,
    }
}
