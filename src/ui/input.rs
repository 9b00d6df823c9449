//! Viewport-Input-Handling: Scroll, Drag-Pan, Doppelklick → AppIntent.

use crate::app::AppIntent;
use crate::core::{ViewRect, ZoomDirection};
use glam::DVec2;

/// Verwaltet den Input-Zustand fuer das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Laeuft gerade ein Pan-Drag mit der linken Maustaste?
    panning: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { panning: false }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurueck.
    ///
    /// Zentrale UI→Intent-Stelle fuer Maus- und Scroll-Interaktionen im
    /// Viewport. Die Entscheidung, ob ein Zoom tatsaechlich ausgefuehrt
    /// wird (Praezisions-Modifier, Cursor im Datenausschnitt), trifft
    /// die App-Schicht.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        view_rect: &ViewRect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        self.handle_pan_drag(ui, response, viewport_size, view_rect, &mut events);
        handle_double_click(response, &mut events);
        handle_scroll_zoom(ui, response, viewport_size, view_rect, &mut events);

        events
    }

    // ── Drag-Pan ────────────────────────────────────────────────

    fn handle_pan_drag(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        view_rect: &ViewRect,
        events: &mut Vec<AppIntent>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary) {
            self.panning = true;
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.panning = false;
        }
        if !self.panning || !response.dragged_by(egui::PointerButton::Primary) {
            return;
        }

        let pointer_delta = ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        // Grab-Pan: der Inhalt folgt dem Cursor, der Ausschnitt wandert
        // entgegengesetzt. Y ist auf dem Bildschirm nach unten gerichtet.
        let ppu = view_rect.pixels_per_unit(viewport_size);
        if ppu <= 0.0 || !ppu.is_finite() {
            return;
        }
        events.push(AppIntent::ViewPan {
            delta_world: DVec2::new(
                -f64::from(pointer_delta.x) / ppu,
                f64::from(pointer_delta.y) / ppu,
            ),
        });
    }
}

// ── Doppelklick (Reset) ─────────────────────────────────────────

fn handle_double_click(response: &egui::Response, events: &mut Vec<AppIntent>) {
    if response.double_clicked_by(egui::PointerButton::Primary) {
        events.push(AppIntent::ResetViewRequested);
    }
}

// ── Scroll-Zoom (auf Mausposition) ──────────────────────────────

fn handle_scroll_zoom(
    ui: &egui::Ui,
    response: &egui::Response,
    viewport_size: [f32; 2],
    view_rect: &ViewRect,
    events: &mut Vec<AppIntent>,
) {
    if !response.hovered() {
        return;
    }
    let (zoom_delta, scroll) = ui.input(|i| (i.zoom_delta(), i.smooth_scroll_delta.y));
    let cursor_world = response.hover_pos().map(|pos| {
        let local = pos - response.rect.min;
        view_rect.screen_to_world(
            DVec2::new(f64::from(local.x), f64::from(local.y)),
            viewport_size,
        )
    });

    events.extend(zoom_intent(zoom_delta, scroll, cursor_world));
}

/// Uebersetzt egui-Zoom/Scroll-Eingaben in einen Zoom-Intent.
///
/// egui leitet Mausrad mit gehaltenem Strg (Zoom-Modifier) als
/// `zoom_delta` um und entfernt das Event aus `smooth_scroll_delta`;
/// der Praezisions-Zoom kommt deshalb ausschliesslich ueber
/// `zoom_delta != 1` herein. Rad ohne Modifier bleibt ein reines
/// Scroll-Event und wird ohne Praezisions-Flag gemeldet (die
/// App-Schicht verwirft es dann).
fn zoom_intent(zoom_delta: f32, scroll: f32, cursor_world: Option<DVec2>) -> Option<AppIntent> {
    if zoom_delta != 1.0 {
        let direction = if zoom_delta > 1.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };
        return Some(AppIntent::ViewZoom {
            cursor_world,
            direction,
            precision: true,
        });
    }

    if scroll == 0.0 {
        return None;
    }
    let direction = if scroll > 0.0 {
        ZoomDirection::In
    } else {
        ZoomDirection::Out
    };
    Some(AppIntent::ViewZoom {
        cursor_world,
        direction,
        precision: false,
    })
}
