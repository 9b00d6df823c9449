use crate::app::state::CurveFamily;
use crate::core::{PetalVariant, ZoomDirection};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgefuehrt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kurvenfamilie wechseln und neu erzeugen
    SetCurveFamily { family: CurveFamily },
    /// Formelvariante der Rosetten-Familie setzen und neu erzeugen
    SetPetalVariant { variant: PetalVariant },
    /// Schmetterlings-Eingaben validieren (Clamp/Default) und uebernehmen
    ApplyButterflyEdits,
    /// Rosetten-Eingaben validieren (Clamp/Default) und uebernehmen
    ApplyPetalEdits,
    /// Sternpolygon-Eingaben pruefen; bei Fehler ohne Mutation ablehnen
    ApplyStarEdits,
    /// Cursor-verankerter Zoom auf einen Datenpunkt
    ZoomAt {
        cursor: DVec2,
        direction: ZoomDirection,
    },
    /// Ansicht um ein Datenkoordinaten-Delta verschieben
    PanView { delta: DVec2 },
    /// Ansicht aus frisch berechneten Kurven-Bounds neu einpassen
    ResetViewToFit,
    /// Viewport-Groesse im State aktualisieren
    SetViewportSize { size: [f32; 2] },
    /// Anwendung kontrolliert beenden
    RequestExit,
}
