//! Handler fuer Viewport-Commands.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ZoomDirection;
use glam::DVec2;

/// Cursor-verankerter Zoom auf einen Datenpunkt.
pub fn zoom_at(state: &mut AppState, cursor: DVec2, direction: ZoomDirection) {
    use_cases::camera::zoom_at(state, cursor, direction);
}

/// Verschiebt den Ausschnitt um ein Datenkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    use_cases::camera::pan(state, delta);
}

/// Passt die Ansicht auf die aktuelle Kurve ein.
pub fn reset_to_fit(state: &mut AppState) {
    use_cases::camera::reset_to_fit(state);
}

/// Aktualisiert die Viewport-Groesse im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize_viewport(state, size);
}
