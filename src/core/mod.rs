//! Core-Domaene: Kurvenfamilien, Sternpolygone, Parameterbereiche, Viewport.
//!
//! Reine Berechnung ohne UI-Abhaengigkeiten:
//! - Kurven-Engine: validierte Parameter → Punktfolge + Bounds + Titel
//! - Sternpolygon: zahlentheoretische Validierung + diskrete Geometrie
//! - ViewRect: cursor-verankerter Zoom, Pan, Welt↔Bildschirm-Abbildung

pub mod curve;
pub mod params;
pub mod star_polygon;
pub mod viewport;

pub use curve::{
    generate_butterfly, generate_petal, ButterflyParams, PetalParams, PetalVariant, SampledCurve,
    BUTTERFLY_RESOLUTION, PETAL_RESOLUTION,
};
pub use params::{FloatRange, IntRange};
pub use star_polygon::{gcd, validate, StarPolygonError, StarPolygonGeometry};
pub use viewport::{ViewRect, ZoomDirection};
