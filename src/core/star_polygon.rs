//! Sternpolygone {p/q}: Validierung und Geometrie.
//!
//! Abweichend von den Kurvenfamilien gilt hier Ablehnen-statt-Korrigieren:
//! jede Verletzung bricht das Update komplett ab, das zuletzt akzeptierte
//! Paar bleibt unveraendert.

use super::viewport::ViewRect;
use glam::DVec2;
use std::f64::consts::PI;
use std::fmt;

/// Fester "Fit"-Ausschnitt: Einheitskreis plus 0,2 Rand.
pub const STAR_HALF_EXTENT: f64 = 1.2;

/// Ablehnungsgrund einer Sternpolygon-Eingabe.
///
/// Die Pruefreihenfolge ist fest und bricht beim ersten Fehler ab;
/// jeder Grund traegt eine eigene, nutzerseitig anzeigbare Meldung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarPolygonError {
    /// Eingabe ist keine Ganzzahl
    NonInteger,
    /// p < 3
    PTooSmall,
    /// q ausserhalb von [1, p/2)
    QOutOfRange,
    /// gcd(p, q) ≠ 1; traegt den berechneten gcd
    NotCoprime(i64),
}

impl fmt::Display for StarPolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarPolygonError::NonInteger => write!(f, "P und Q muessen positive Ganzzahlen sein"),
            StarPolygonError::PTooSmall => write!(f, "P muss mindestens 3 sein"),
            StarPolygonError::QOutOfRange => write!(f, "Q muss in [1, P/2) liegen"),
            StarPolygonError::NotCoprime(g) => {
                write!(f, "P und Q muessen teilerfremd sein (gcd = {g})")
            }
        }
    }
}

impl std::error::Error for StarPolygonError {}

/// Groesster gemeinsamer Teiler (euklidischer Algorithmus, gcd(a, 0) = a).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Prueft ein {p/q}-Paar. Kurzschluss beim ersten Fehler:
/// p ≥ 3 → q ≥ 1 → q < p/2 (strikt) → gcd(p, q) = 1.
pub fn validate(p: i64, q: i64) -> Result<(), StarPolygonError> {
    if p < 3 {
        return Err(StarPolygonError::PTooSmall);
    }
    // q < p/2 strikt, als q < p − q formuliert: vermeidet die
    // Bruchrechnung und den Ueberlauf von 2q bei riesigem q
    if q < 1 || q >= p - q {
        return Err(StarPolygonError::QOutOfRange);
    }
    let g = gcd(p, q);
    if g != 1 {
        return Err(StarPolygonError::NotCoprime(g));
    }
    Ok(())
}

/// Geometrie eines Sternpolygons {p/q}.
///
/// Jede Sehne ist ein eigenes Segment (expliziter Pfadbruch nach jeder
/// Sehne); die konvexe p-Eck-Kontur bleibt als Referenz-Polylinie erhalten.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPolygonGeometry {
    /// Akzeptiertes p
    pub p: i64,
    /// Akzeptiertes q
    pub q: i64,
    /// p Eckpunkte auf dem Einheitskreis (Index i bei Winkel 2πi/p)
    pub vertices: Vec<DVec2>,
    /// Sehnen i → (i+q) mod p als Index-Paare
    pub edges: Vec<(usize, usize)>,
    /// Vorgeschlagener "Fit"-Ausschnitt
    pub bounds: ViewRect,
    /// Anzeigetitel
    pub title: String,
}

impl StarPolygonGeometry {
    /// Geschlossene Kontur des regulaeren p-Ecks (letzter Punkt = erster Punkt).
    pub fn outline(&self) -> Vec<DVec2> {
        let mut outline = self.vertices.clone();
        if let Some(first) = self.vertices.first() {
            outline.push(*first);
        }
        outline
    }
}

/// Erzeugt die Geometrie eines validierten {p/q}-Paars.
///
/// Vorbedingung: `validate(p, q)` war erfolgreich.
pub fn generate(p: i64, q: i64) -> StarPolygonGeometry {
    debug_assert!(validate(p, q).is_ok(), "generate setzt validiertes Paar voraus");

    let count = p as usize;
    let vertices: Vec<DVec2> = (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / p as f64;
            DVec2::new(angle.cos(), angle.sin())
        })
        .collect();

    let step = q as usize;
    let edges: Vec<(usize, usize)> = (0..count).map(|i| (i, (i + step) % count)).collect();

    StarPolygonGeometry {
        p,
        q,
        vertices,
        edges,
        bounds: ViewRect::symmetric(STAR_HALF_EXTENT),
        title: format!("Star Polygon {{p/q}} = {{{p}/{q}}}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gcd_euclidean_basics() {
        assert_eq!(gcd(9, 3), 3);
        assert_eq!(gcd(9, 2), 1);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn gcd_is_symmetric() {
        for (a, b) in [(12, 18), (5, 2), (100, 75), (9, 3)] {
            assert_eq!(gcd(a, b), gcd(b, a));
        }
    }

    #[test]
    fn validate_accepts_pentagram() {
        assert!(validate(5, 2).is_ok());
        assert!(validate(7, 3).is_ok());
        assert!(validate(9, 2).is_ok());
    }

    #[test]
    fn validate_rejects_non_coprime_with_gcd() {
        assert_eq!(validate(9, 3), Err(StarPolygonError::NotCoprime(3)));
        assert_eq!(validate(10, 4), Err(StarPolygonError::NotCoprime(2)));
    }

    #[test]
    fn validate_rejects_q_at_or_above_half_p() {
        // q = 3 ≥ 5/2 = 2,5
        assert_eq!(validate(5, 3), Err(StarPolygonError::QOutOfRange));
        // Grenzfall: 2q = p
        assert_eq!(validate(8, 4), Err(StarPolygonError::QOutOfRange));
        assert_eq!(validate(5, 0), Err(StarPolygonError::QOutOfRange));
    }

    #[test]
    fn validate_rejects_huge_q_without_overflow() {
        // Riesiges q kommt ueber das Textfeld herein; die Bereichspruefung
        // darf nicht an 2q scheitern
        assert_eq!(validate(3, i64::MAX), Err(StarPolygonError::QOutOfRange));
        assert_eq!(validate(i64::MAX, i64::MAX), Err(StarPolygonError::QOutOfRange));
    }

    #[test]
    fn validate_rejects_small_p_first() {
        assert_eq!(validate(2, 1), Err(StarPolygonError::PTooSmall));
        // p-Pruefung kommt vor der q-Pruefung
        assert_eq!(validate(1, 99), Err(StarPolygonError::PTooSmall));
    }

    #[test]
    fn generate_places_vertices_on_unit_circle() {
        let geometry = generate(5, 2);

        assert_eq!(geometry.vertices.len(), 5);
        for v in &geometry.vertices {
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(geometry.vertices[0].x, 1.0);
        assert_relative_eq!(geometry.vertices[0].y, 0.0);
    }

    #[test]
    fn generate_builds_one_chord_per_vertex() {
        let geometry = generate(7, 3);

        assert_eq!(geometry.edges.len(), 7);
        assert_eq!(geometry.edges[0], (0, 3));
        assert_eq!(geometry.edges[6], (6, 2));
    }

    #[test]
    fn outline_is_closed() {
        let geometry = generate(5, 2);
        let outline = geometry.outline();

        assert_eq!(outline.len(), 6);
        assert_eq!(outline[0], outline[5]);
    }

    #[test]
    fn bounds_are_unit_circle_plus_padding() {
        let geometry = generate(5, 2);
        assert_relative_eq!(geometry.bounds.x_max, 1.2);
        assert_relative_eq!(geometry.bounds.y_min, -1.2);
    }

    #[test]
    fn title_formats_schlaefli_symbol() {
        assert_eq!(generate(5, 2).title, "Star Polygon {p/q} = {5/2}");
    }
}
