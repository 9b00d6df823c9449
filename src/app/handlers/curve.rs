//! Handler fuer Kurven- und Parameter-Commands.

use crate::app::state::CurveFamily;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PetalVariant;

/// Wechselt die aktive Kurvenfamilie.
pub fn set_family(state: &mut AppState, family: CurveFamily) {
    use_cases::curve::set_family(state, family);
}

/// Wechselt die Formelvariante der Rosetten-Familie.
pub fn set_petal_variant(state: &mut AppState, variant: PetalVariant) {
    use_cases::curve::set_petal_variant(state, variant);
}

/// Uebernimmt die Schmetterlings-Eingaben (Clamp/Default-Politik).
pub fn apply_butterfly_edits(state: &mut AppState) {
    use_cases::curve::apply_butterfly_edits(state);
}

/// Uebernimmt die Rosetten-Eingaben (Clamp/Default-Politik).
pub fn apply_petal_edits(state: &mut AppState) {
    use_cases::curve::apply_petal_edits(state);
}

/// Prueft und uebernimmt die Sternpolygon-Eingaben (Ablehnen-und-Behalten).
pub fn apply_star_edits(state: &mut AppState) {
    use_cases::curve::apply_star_edits(state);
}
