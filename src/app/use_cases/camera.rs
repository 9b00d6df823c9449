//! Use-Case-Funktionen fuer die Viewport-Steuerung.

use crate::app::AppState;
use crate::core::ZoomDirection;
use glam::DVec2;

/// Cursor-verankerter Zoom auf einen Datenpunkt.
///
/// Liegt der Cursor ausserhalb des aktuellen Ausschnitts, passiert
/// nichts (nicht-fataler No-op). Der Punkt unter dem Cursor bleibt
/// nach dem Zoom an derselben relativen Position.
pub fn zoom_at(state: &mut AppState, cursor: DVec2, direction: ZoomDirection) {
    if !state.view.rect.contains(cursor) {
        return;
    }
    let factor = match direction {
        ZoomDirection::In => state.options.zoom_in_factor,
        ZoomDirection::Out => state.options.zoom_out_factor,
    };
    state.view.rect = state.view.rect.zoomed_at(cursor, factor);
}

/// Verschiebt den Ausschnitt um ein Datenkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.rect = state.view.rect.translated(delta);
}

/// Passt die Ansicht auf die aktuelle Kurve ein.
///
/// Erzeugt die aktive Geometrie neu und ersetzt den Ausschnitt durch
/// die frisch berechneten Bounds, nicht durch den gemerkten
/// Start-Ausschnitt. Nach Parameteraenderungen spiegelt der Reset also
/// die aktuelle Kurve wider.
pub fn reset_to_fit(state: &mut AppState) {
    super::curve::regenerate(state);
}

/// Aktualisiert die gespeicherte Viewport-Groesse.
pub fn resize_viewport(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
