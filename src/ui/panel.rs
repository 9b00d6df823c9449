//! Seitliches Parameter-Panel der aktiven Kurvenfamilie.
//!
//! Die Textfelder binden direkt an die rohen Eingabe-Strings in
//! `EditState`; uebernommen wird erst per "Apply Changes"-Intent.
//! Abgelehnte Sternpolygon-Eingaben bleiben als Text stehen und werden
//! mit der Ablehnungsbegruendung angezeigt.

use crate::app::{AppIntent, AppState, CurveFamily};
use crate::core::{ButterflyParams, PetalParams, PetalVariant};

/// Rendert das Parameter-Panel und gibt erzeugte Events zurueck.
pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("parameter_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading(state.curve.family.label());
            ui.separator();

            match state.curve.family {
                CurveFamily::Butterfly => render_butterfly_fields(ui, state),
                CurveFamily::Petal => render_petal_fields(ui, state, &mut events),
                CurveFamily::Star => render_star_fields(ui, state),
            }

            ui.add_space(8.0);
            if ui.button("Apply Changes").clicked() {
                events.push(AppIntent::ApplyParamsRequested);
            }

            if let Some(error) = &state.ui.validation_error {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("⚠ {}", error)).color(egui::Color32::LIGHT_RED),
                );
            }

            ui.add_space(8.0);
            ui.separator();

            egui::CollapsingHeader::new("Gleichung")
                .default_open(state.ui.show_equation_info)
                .show(ui, |ui| {
                    render_equation_info(ui, state);
                });

            egui::CollapsingHeader::new("Bedienung")
                .default_open(state.ui.show_instructions)
                .show(ui, |ui| {
                    ui.label("Strg + Mausrad: Zoom auf Mausposition");
                    ui.label("Ziehen mit linker Maustaste: Verschieben");
                    ui.label("Doppelklick: Ansicht auf Kurve einpassen");
                });
        });

    events
}

/// Ein beschriftetes Textfeld mit Wertebereich-Hinweis.
fn labelled_field(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(70.0));
        ui.weak(hint);
    });
}

fn render_butterfly_fields(ui: &mut egui::Ui, state: &mut AppState) {
    let f = ButterflyParams::WING_FREQUENCY;
    let a = ButterflyParams::WING_AMPLITUDE;
    let s = ButterflyParams::SINE_STRETCH;

    labelled_field(
        ui,
        "Frequenz F:",
        &format!("[{}, {}]", f.min, f.max),
        &mut state.edit.wing_frequency,
    );
    labelled_field(
        ui,
        "Amplitude A:",
        &format!("[{}, {}]", a.min, a.max),
        &mut state.edit.wing_amplitude,
    );
    labelled_field(
        ui,
        "Streckung S:",
        &format!("[{}, {}]", s.min, s.max),
        &mut state.edit.sine_stretch,
    );
}

fn render_petal_fields(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    let active = state.curve.petal.variant;

    egui::ComboBox::from_label("Variante")
        .selected_text(active.label())
        .show_ui(ui, |ui| {
            for variant in PetalVariant::ALL {
                if ui
                    .selectable_label(active == variant, variant.label())
                    .clicked()
                {
                    events.push(AppIntent::PetalVariantSelected { variant });
                }
            }
        });

    ui.add_space(4.0);

    let n = PetalParams::N_PETALS;
    labelled_field(
        ui,
        "Blaetter n:",
        &format!("[{}, {}]", n.min, n.max),
        &mut state.edit.n_petals,
    );

    if active.uses_face_radius() {
        let r = PetalParams::FACE_RADIUS;
        labelled_field(
            ui,
            "Radius r:",
            &format!("[{}, {}]", r.min, r.max),
            &mut state.edit.face_radius,
        );
    }
}

fn render_star_fields(ui: &mut egui::Ui, state: &mut AppState) {
    labelled_field(ui, "Ecken p:", "p ≥ 3", &mut state.edit.star_p);
    labelled_field(ui, "Schritt q:", "1 ≤ q < p/2", &mut state.edit.star_q);
    ui.weak("p und q muessen teilerfremd sein");
}

/// Formel der aktiven Familie/Variante als Klartext.
fn render_equation_info(ui: &mut egui::Ui, state: &AppState) {
    match state.curve.family {
        CurveFamily::Butterfly => {
            ui.monospace("r(θ) = e^sin(θ) − A·cos(F·θ)");
            ui.monospace("       + sin⁵((2θ − π) / S)");
            ui.weak("θ ∈ [0, 24π]");
        }
        CurveFamily::Petal => {
            let formula = match state.curve.petal.variant {
                PetalVariant::Spiral => "r(θ) = θ · sin(n·θ)",
                PetalVariant::Rose => "r(θ) = cos(n·θ)",
                PetalVariant::Rhodonea => "r(θ) = cos(k·θ)",
                PetalVariant::SpiralRhodonea => "r(θ) = θ · cos(k·θ)",
                PetalVariant::SpiralSin => "r(θ) = θ · sin²(n·θ / 2)",
                PetalVariant::SpiralCos => "r(θ) = θ · cos²(n·θ / 2)",
                PetalVariant::RhodoneaSin => "r(θ) = sin(k·θ) + r_f",
                PetalVariant::RhodoneaCos => "r(θ) = cos(k·θ) + r_f",
            };
            ui.monospace(formula);
            ui.weak("k = n fuer ungerades n, sonst n/2");
            if state.curve.petal.variant.uses_face_radius() {
                ui.weak("bei geradem n mit |sin(k·θ)| bzw. |cos(k·θ)|");
            }
        }
        CurveFamily::Star => {
            ui.monospace("Eckpunkte auf dem Einheitskreis,");
            ui.monospace("Sehnen i → (i + q) mod p");
            ui.weak(format!(
                "{{{}/{}}}, gueltig wenn ggT(p, q) = 1",
                state.curve.star_p, state.curve.star_q
            ));
        }
    }
}
