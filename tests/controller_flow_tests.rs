//! End-to-End-Flows ueber den Controller: Intent → Command → State.

use glam::DVec2;
use polar_kurven_plotter::{
    AppCommand, AppController, AppIntent, AppState, CurveFamily, PetalVariant, ViewRect,
    ZoomDirection,
};
use std::sync::Arc;

fn star_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::CurveFamilySelected {
                family: CurveFamily::Star,
            },
        )
        .expect("Familienwechsel sollte ohne Fehler durchlaufen");
    state
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_startup_state_has_butterfly_curve_fitted() {
    let state = AppState::new();

    assert_eq!(state.curve.family, CurveFamily::Butterfly);
    let sampled = state.curve.sampled.as_ref().expect("Startkurve erzeugt");
    assert_eq!(sampled.points.len(), 5000);
    assert_eq!(state.view.rect, sampled.bounds);
    assert!(sampled.title.starts_with("Butterfly Curve"));
}

#[test]
fn test_butterfly_out_of_range_input_falls_back_to_default_and_regenerates() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.curve.sampled.clone().expect("Startkurve");

    state.edit.wing_frequency = "-5".into();
    state.edit.wing_amplitude = "nonsense".into();
    controller
        .handle_intent(&mut state, AppIntent::ApplyParamsRequested)
        .expect("Apply sollte ohne Fehler durchlaufen");

    // Clamp/Default-Politik: korrigierte Werte zurueck ins Eingabefeld
    assert_eq!(state.curve.butterfly.wing_frequency, 4);
    assert_eq!(state.edit.wing_frequency, "4");
    assert_eq!(state.edit.wing_amplitude, "2");

    // Kurve wurde trotzdem neu erzeugt (neues Arc, gleicher Inhalt)
    let after = state.curve.sampled.as_ref().expect("Kurve");
    assert!(!Arc::ptr_eq(&before, after));
}

#[test]
fn test_petal_clamp_policy_writes_bound_back() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CurveFamilySelected {
                family: CurveFamily::Petal,
            },
        )
        .expect("Familienwechsel");

    state.edit.n_petals = "-7".into();
    state.edit.face_radius = "5.0".into();
    controller
        .handle_intent(&mut state, AppIntent::ApplyParamsRequested)
        .expect("Apply");

    assert_eq!(state.curve.petal.n_petals, 1);
    assert_eq!(state.edit.n_petals, "1");
    assert_eq!(state.curve.petal.face_radius, 2.0);
    assert_eq!(state.edit.face_radius, "2");
}

#[test]
fn test_petal_variant_switch_regenerates_with_3000_samples() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CurveFamilySelected {
                family: CurveFamily::Petal,
            },
        )
        .expect("Familienwechsel");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PetalVariantSelected {
                variant: PetalVariant::Spiral,
            },
        )
        .expect("Variantenwechsel");

    let sampled = state.curve.sampled.as_ref().expect("Kurve");
    assert_eq!(sampled.points.len(), 3000);
    assert_eq!(state.curve.petal.variant, PetalVariant::Spiral);
}

#[test]
fn test_star_rejection_keeps_previous_geometry_untouched() {
    let mut controller = AppController::new();
    let mut state = star_state(&mut controller);
    let geometry_before = state.curve.star_geometry.clone().expect("Geometrie");
    let rect_before = state.view.rect;

    // (9, 3) passiert beide Bereichspruefungen und scheitert erst an
    // der Teilerfremdheit
    state.edit.star_p = "9".into();
    state.edit.star_q = "3".into();
    controller
        .handle_intent(&mut state, AppIntent::ApplyParamsRequested)
        .expect("Apply sollte trotz Ablehnung ohne Fehler durchlaufen");

    // Ablehnen-und-Behalten: Paar, Geometrie und Ausschnitt unveraendert
    assert_eq!(state.curve.star_p, 5);
    assert_eq!(state.curve.star_q, 2);
    let geometry_after = state.curve.star_geometry.as_ref().expect("Geometrie");
    assert!(Arc::ptr_eq(&geometry_before, geometry_after));
    assert_eq!(state.view.rect, rect_before);

    // Getippter Text bleibt stehen, Begruendung wird angezeigt
    assert_eq!(state.edit.star_p, "9");
    let error = state.ui.validation_error.as_deref().expect("Fehlermeldung");
    assert!(error.contains("gcd = 3"), "Meldung: {error}");
}

#[test]
fn test_star_acceptance_updates_pair_and_view() {
    let mut controller = AppController::new();
    let mut state = star_state(&mut controller);

    state.edit.star_p = "7".into();
    state.edit.star_q = "2".into();
    controller
        .handle_intent(&mut state, AppIntent::ApplyParamsRequested)
        .expect("Apply");

    assert_eq!(state.curve.star_p, 7);
    assert_eq!(state.curve.star_q, 2);
    assert!(state.ui.validation_error.is_none());
    let geometry = state.curve.star_geometry.as_ref().expect("Geometrie");
    assert_eq!(geometry.vertices.len(), 7);
    assert_eq!(geometry.title, "Star Polygon {p/q} = {7/2}");
    assert_eq!(state.view.rect, ViewRect::symmetric(1.2));
}

#[test]
fn test_zoom_without_precision_modifier_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.view.rect;
    let log_len = state.command_log.len();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewZoom {
                cursor_world: Some(DVec2::ZERO),
                direction: ZoomDirection::In,
                precision: false,
            },
        )
        .expect("Zoom-Intent");

    // Kein Command ausgefuehrt, kein Log-Eintrag
    assert_eq!(state.view.rect, before);
    assert_eq!(state.command_log.len(), log_len);
}

#[test]
fn test_precision_zoom_shrinks_rect_around_cursor() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.view.rect;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewZoom {
                cursor_world: Some(DVec2::ZERO),
                direction: ZoomDirection::In,
                precision: true,
            },
        )
        .expect("Zoom-Intent");

    let after = state.view.rect;
    assert!((after.width() - before.width() * 0.9).abs() < 1e-9);
    assert!(after.contains(DVec2::ZERO));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::ZoomAt { .. } => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_zoom_outside_data_rect_is_nonfatal_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.view.rect;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewZoom {
                cursor_world: Some(DVec2::new(before.x_max * 10.0, 0.0)),
                direction: ZoomDirection::Out,
                precision: true,
            },
        )
        .expect("Zoom ausserhalb sollte robust sein");

    assert_eq!(state.view.rect, before);
}

#[test]
fn test_pan_then_reset_restores_fitted_bounds() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let fitted = state.view.rect;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewPan {
                delta_world: DVec2::new(2.5, -1.5),
            },
        )
        .expect("Pan");
    assert_ne!(state.view.rect, fitted);

    controller
        .handle_intent(&mut state, AppIntent::ResetViewRequested)
        .expect("Reset");
    assert_eq!(state.view.rect, fitted);
}

#[test]
fn test_reset_after_parameter_change_fits_current_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    state.edit.wing_amplitude = "4.5".into();
    controller
        .handle_intent(&mut state, AppIntent::ApplyParamsRequested)
        .expect("Apply");
    let fitted = state.view.rect;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewPan {
                delta_world: DVec2::new(10.0, 0.0),
            },
        )
        .expect("Pan");
    controller
        .handle_intent(&mut state, AppIntent::ResetViewRequested)
        .expect("Reset");

    // Reset passt auf die aktuelle Kurve ein, nicht auf den Startzustand
    assert_eq!(state.view.rect, fitted);
    assert_eq!(state.curve.butterfly.wing_amplitude, 4.5);
}

#[test]
fn test_render_scene_reflects_active_family() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);
    assert!(scene.curve.is_some());
    assert!(scene.star.is_none());
    assert_eq!(scene.point_count(), 5000);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CurveFamilySelected {
                family: CurveFamily::Star,
            },
        )
        .expect("Familienwechsel");

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);
    assert!(scene.curve.is_none());
    assert!(scene.star.is_some());
    assert_eq!(scene.point_count(), 5);
    assert_eq!(scene.title, "Star Polygon {p/q} = {5/2}");
}

#[test]
fn test_viewport_resize_is_tracked_in_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1024.0, 768.0],
            },
        )
        .expect("Resize");

    assert_eq!(state.view.viewport_size, [1024.0, 768.0]);
}
