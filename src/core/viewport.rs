//! Sichtbarer Datenausschnitt mit cursor-verankertem Zoom.

use glam::DVec2;

/// Richtung eines Zoom-Events (Mausrad).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Hineinzoomen (Ausschnitt wird kleiner)
    In,
    /// Herauszoomen (Ausschnitt wird groesser)
    Out,
}

impl ZoomDirection {
    /// Skalierungsfaktor fuer Breite/Hoehe des Ausschnitts.
    /// Hineinzoomen verkleinert den sichtbaren Bereich um 10%,
    /// Herauszoomen vergroessert ihn um 10%.
    pub fn scale_factor(self) -> f64 {
        match self {
            ZoomDirection::In => 0.9,
            ZoomDirection::Out => 1.1,
        }
    }
}

/// Achsenparalleler sichtbarer Ausschnitt in Datenkoordinaten.
///
/// Einzige Quelle der Wahrheit fuer die aktuelle Ansicht: wird aus den
/// vorgeschlagenen Kurven-Bounds initialisiert, durch Zoom/Pan mutiert
/// und bei Reset komplett ersetzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    /// Linke Grenze
    pub x_min: f64,
    /// Rechte Grenze
    pub x_max: f64,
    /// Untere Grenze
    pub y_min: f64,
    /// Obere Grenze
    pub y_max: f64,
}

impl ViewRect {
    /// Erstellt einen Ausschnitt aus expliziten Grenzen.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Um den Ursprung symmetrischer, quadratischer Ausschnitt.
    pub fn symmetric(half_extent: f64) -> Self {
        Self::new(-half_extent, half_extent, -half_extent, half_extent)
    }

    /// Breite des Ausschnitts.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Hoehe des Ausschnitts.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Mittelpunkt des Ausschnitts.
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Liegt der Punkt innerhalb des Ausschnitts (inklusive Raender)?
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Cursor-verankerter Zoom: der Datenpunkt unter dem Cursor bleibt
    /// nach dem Zoom an derselben relativen Position.
    ///
    /// Asymmetrische Skalierung, kein Zentrums-Zoom: die neuen Grenzen
    /// teilen den Ausschnitt im selben Verhaeltnis wie der Cursor den
    /// alten geteilt hat. Zustandslos, gibt einen neuen Ausschnitt zurueck.
    pub fn zoomed_at(&self, cursor: DVec2, scale: f64) -> ViewRect {
        let width = self.width();
        let height = self.height();
        let new_width = width * scale;
        let new_height = height * scale;

        ViewRect {
            x_min: cursor.x - new_width * (cursor.x - self.x_min) / width,
            x_max: cursor.x + new_width * (self.x_max - cursor.x) / width,
            y_min: cursor.y - new_height * (cursor.y - self.y_min) / height,
            y_max: cursor.y + new_height * (self.y_max - cursor.y) / height,
        }
    }

    /// Verschobener Ausschnitt (Pan um ein Datenkoordinaten-Delta).
    pub fn translated(&self, delta: DVec2) -> ViewRect {
        ViewRect {
            x_min: self.x_min + delta.x,
            x_max: self.x_max + delta.x,
            y_min: self.y_min + delta.y,
            y_max: self.y_max + delta.y,
        }
    }

    /// Pixel pro Dateneinheit bei uniformer Skalierung.
    ///
    /// Das Seitenverhaeltnis der Daten bleibt erhalten: es gilt der
    /// kleinere der beiden Achsen-Massstaebe.
    pub fn pixels_per_unit(&self, viewport_size: [f32; 2]) -> f64 {
        let sx = f64::from(viewport_size[0]) / self.width();
        let sy = f64::from(viewport_size[1]) / self.height();
        sx.min(sy)
    }

    /// Rechnet einen Datenpunkt in Bildschirm-Pixel um (Ursprung links oben,
    /// Y nach unten). Der Ausschnitt wird im Viewport zentriert.
    pub fn world_to_screen(&self, p: DVec2, viewport_size: [f32; 2]) -> DVec2 {
        let s = self.pixels_per_unit(viewport_size);
        let c = self.center();
        DVec2::new(
            f64::from(viewport_size[0]) / 2.0 + (p.x - c.x) * s,
            f64::from(viewport_size[1]) / 2.0 - (p.y - c.y) * s,
        )
    }

    /// Rechnet eine Pixelposition (relativ zum Viewport) in Datenkoordinaten um.
    pub fn screen_to_world(&self, screen_pos: DVec2, viewport_size: [f32; 2]) -> DVec2 {
        let s = self.pixels_per_unit(viewport_size);
        let c = self.center();
        DVec2::new(
            c.x + (screen_pos.x - f64::from(viewport_size[0]) / 2.0) / s,
            c.y - (screen_pos.y - f64::from(viewport_size[1]) / 2.0) / s,
        )
    }
}

impl Default for ViewRect {
    fn default() -> Self {
        Self::symmetric(2.0)
    }
}
