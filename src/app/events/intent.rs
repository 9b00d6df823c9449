use crate::app::state::CurveFamily;
use crate::core::{PetalVariant, ZoomDirection};
use glam::DVec2;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Kurvenfamilie wechseln (Toolbar)
    CurveFamilySelected { family: CurveFamily },
    /// Formelvariante der Rosetten-Familie wechseln
    PetalVariantSelected { variant: PetalVariant },
    /// "Apply Changes": Parameter-Eingaben der aktiven Familie uebernehmen
    ApplyParamsRequested,
    /// Mausrad im Viewport.
    ///
    /// `precision` ist der extern behauptete Praezisions-Zoom-Modifier
    /// (Ctrl gehalten); ohne ihn wird das Event ignoriert. `cursor_world`
    /// ist die Mausposition in Datenkoordinaten (None wenn ausserhalb).
    ViewZoom {
        cursor_world: Option<DVec2>,
        direction: ZoomDirection,
        precision: bool,
    },
    /// Ansicht um ein Datenkoordinaten-Delta verschieben (Drag-Pan)
    ViewPan { delta_world: DVec2 },
    /// Ansicht auf die aktuelle Kurve einpassen (Doppelklick / Reset-Button)
    ResetViewRequested,
    /// Viewport-Groesse hat sich geaendert
    ViewportResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
}
