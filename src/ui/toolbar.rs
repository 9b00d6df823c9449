//! Toolbar fuer die Auswahl der Kurvenfamilie.

use crate::app::{AppIntent, AppState, CurveFamily};

/// Rendert die Toolbar und gibt erzeugte Events zurueck.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.curve.family;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Kurvenfamilie:");
            ui.separator();

            for family in [CurveFamily::Butterfly, CurveFamily::Petal, CurveFamily::Star] {
                let button = egui::Button::new(family.label());
                if ui.add(button.selected(active == family)).clicked() {
                    events.push(AppIntent::CurveFamilySelected { family });
                }
            }

            ui.separator();

            if ui.button("Reset View").clicked() {
                events.push(AppIntent::ResetViewRequested);
            }

            // Aktive Variante (rechts ausgerichtet)
            if active == CurveFamily::Petal {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(state.curve.petal.variant.label());
                });
            }
        });
    });

    events
}
