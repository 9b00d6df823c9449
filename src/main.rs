//! Polar-Kurven-Plotter.
//!
//! Interaktiver Plotter fuer parametrische 2D-Kurven: Schmetterlingskurve,
//! Rosetten/Spiralen-Familie und Sternpolygone, mit zoom- und
//! verschiebbarem Viewport auf Basis von egui.

use eframe::egui;
use polar_kurven_plotter::{render, ui, AppController, AppIntent, AppState, PlotterOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Polar-Kurven-Plotter v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 780.0])
                .with_title("Polar-Kurven-Plotter"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Polar-Kurven-Plotter",
            options,
            Box::new(|_cc| Ok(Box::new(PlotterApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PlotterApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl PlotterApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = PlotterOptions::config_path();
        let plotter_options = PlotterOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = plotter_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            if let Err(e) = self.state.options.save_to_file(&PlotterOptions::config_path()) {
                log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
            }
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}

impl PlotterApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        // Strg+Q beendet die Anwendung kontrolliert
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Q)) {
            events.push(AppIntent::ExitRequested);
        }

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_side_panel(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.rect,
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);
                render::draw(ui.painter(), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
