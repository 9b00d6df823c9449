//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let title = state.curve.title();
            if title.is_empty() {
                ui.label("Keine Kurve");
            } else {
                ui.label(title);
            }

            ui.separator();

            let rect = state.view.rect;
            ui.label(format!(
                "Ausschnitt: x ∈ [{:.2}, {:.2}], y ∈ [{:.2}, {:.2}]",
                rect.x_min, rect.x_max, rect.y_min, rect.y_max
            ));

            ui.separator();

            let ppu = rect.pixels_per_unit(state.view.viewport_size);
            if ppu.is_finite() && ppu > 0.0 {
                ui.label(format!("Massstab: {:.1} px/Einheit", ppu));
            }

            ui.separator();

            let count = if let Some(curve) = &state.curve.sampled {
                curve.points.len()
            } else if let Some(star) = &state.curve.star_geometry {
                star.vertices.len()
            } else {
                0
            };
            ui.label(format!("Punkte: {}", count));

            // Abgelehnte Sternpolygon-Eingabe
            if let Some(error) = &state.ui.validation_error {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", error)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
