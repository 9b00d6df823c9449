//! Use-Case-Funktionen fuer Kurvenerzeugung und Parameter-Uebernahme.
//!
//! Hier leben die beiden Validierungs-Politiken aus dem Datenmodell:
//! Clamp/Default fuer Schmetterling und Rosetten (Eingabe wird korrigiert,
//! zurueckgeschrieben und die Kurve immer neu erzeugt) und
//! Ablehnen-und-Behalten fuer Sternpolygone (keine Teilmutation).

use crate::app::state::CurveFamily;
use crate::app::AppState;
use crate::core::{
    curve, star_polygon, ButterflyParams, PetalParams, PetalVariant, BUTTERFLY_RESOLUTION,
    PETAL_RESOLUTION,
};
use std::sync::Arc;

/// Erzeugt die aktive Geometrie komplett neu und passt den Ausschnitt auf
/// die frisch berechneten Bounds ein.
///
/// Wird bei jeder Parameter-, Varianten- oder Familienaenderung gerufen;
/// alte Punktfolge und Bounds werden vollstaendig ersetzt, bevor der
/// naechste Frame gezeichnet wird.
pub fn regenerate(state: &mut AppState) {
    match state.curve.family {
        CurveFamily::Butterfly => {
            let sampled = curve::generate_butterfly(&state.curve.butterfly, BUTTERFLY_RESOLUTION);
            state.view.rect = sampled.bounds;
            state.curve.sampled = Some(Arc::new(sampled));
            state.curve.star_geometry = None;
        }
        CurveFamily::Petal => {
            let sampled = curve::generate_petal(&state.curve.petal, PETAL_RESOLUTION);
            state.view.rect = sampled.bounds;
            state.curve.sampled = Some(Arc::new(sampled));
            state.curve.star_geometry = None;
        }
        CurveFamily::Star => {
            let geometry = star_polygon::generate(state.curve.star_p, state.curve.star_q);
            state.view.rect = geometry.bounds;
            state.curve.star_geometry = Some(Arc::new(geometry));
            state.curve.sampled = None;
        }
    }

    log::info!(
        "Kurve neu erzeugt: {} ({} Punkte)",
        state.curve.title(),
        state
            .curve
            .sampled
            .as_ref()
            .map(|c| c.points.len())
            .or_else(|| state.curve.star_geometry.as_ref().map(|g| g.vertices.len()))
            .unwrap_or(0)
    );
}

/// Wechselt die aktive Kurvenfamilie und erzeugt deren Geometrie.
pub fn set_family(state: &mut AppState, family: CurveFamily) {
    if state.curve.family == family {
        return;
    }
    state.curve.family = family;
    state.ui.validation_error = None;
    regenerate(state);
    log::info!("Kurvenfamilie gewechselt: {}", family.label());
}

/// Wechselt die Formelvariante der Rosetten-Familie.
pub fn set_petal_variant(state: &mut AppState, variant: PetalVariant) {
    if state.curve.petal.variant == variant {
        return;
    }
    state.curve.petal.variant = variant;
    regenerate(state);
}

/// Uebernimmt die Schmetterlings-Eingaben.
///
/// Ungueltige oder ausserhalb liegende Eingaben werden stillschweigend
/// durch den Familien-Default ersetzt; der korrigierte Wert wandert in
/// das Eingabefeld zurueck und die Kurve wird immer neu erzeugt.
pub fn apply_butterfly_edits(state: &mut AppState) {
    let params = ButterflyParams {
        wing_frequency: ButterflyParams::WING_FREQUENCY.parse_or_default(&state.edit.wing_frequency),
        wing_amplitude: ButterflyParams::WING_AMPLITUDE.parse_or_default(&state.edit.wing_amplitude),
        sine_stretch: ButterflyParams::SINE_STRETCH.parse_or_default(&state.edit.sine_stretch),
    };

    state.edit.wing_frequency = params.wing_frequency.to_string();
    state.edit.wing_amplitude = params.wing_amplitude.to_string();
    state.edit.sine_stretch = params.sine_stretch.to_string();

    state.curve.butterfly = params;
    regenerate(state);
}

/// Uebernimmt die Rosetten-Eingaben.
///
/// Nicht-numerische Eingaben fallen auf den Default zurueck,
/// Bereichsverletzungen klemmen auf die naechste Grenze.
pub fn apply_petal_edits(state: &mut AppState) {
    let n_petals = PetalParams::N_PETALS.parse_clamped(&state.edit.n_petals);
    let face_radius = PetalParams::FACE_RADIUS.parse_clamped(&state.edit.face_radius);

    state.edit.n_petals = n_petals.to_string();
    state.edit.face_radius = face_radius.to_string();

    state.curve.petal.n_petals = n_petals;
    state.curve.petal.face_radius = face_radius;
    regenerate(state);
}

/// Prueft die Sternpolygon-Eingaben und uebernimmt sie nur als Ganzes.
///
/// Jede Verletzung bricht ohne Mutation ab: das zuvor akzeptierte Paar
/// und seine Geometrie bleiben unveraendert, der Ablehnungsgrund wird
/// zur Anzeige abgelegt. Nicht-ganzzahlige Eingaben werden vor den
/// Zahlenpruefungen gemeldet.
pub fn apply_star_edits(state: &mut AppState) {
    let Ok(p) = state.edit.star_p.trim().parse::<i64>() else {
        reject(state, star_polygon::StarPolygonError::NonInteger);
        return;
    };
    if p < 3 {
        reject(state, star_polygon::StarPolygonError::PTooSmall);
        return;
    }
    let Ok(q) = state.edit.star_q.trim().parse::<i64>() else {
        reject(state, star_polygon::StarPolygonError::NonInteger);
        return;
    };
    if let Err(reason) = star_polygon::validate(p, q) {
        reject(state, reason);
        return;
    }

    state.ui.validation_error = None;
    state.curve.star_p = p;
    state.curve.star_q = q;
    regenerate(state);
}

fn reject(state: &mut AppState, reason: star_polygon::StarPolygonError) {
    log::warn!(
        "Sternpolygon-Eingabe abgelehnt (p='{}', q='{}'): {}",
        state.edit.star_p,
        state.edit.star_q,
        reason
    );
    state.ui.validation_error = Some(reason.to_string());
}
