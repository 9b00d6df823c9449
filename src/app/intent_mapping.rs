//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::CurveFamily;
use super::{AppCommand, AppIntent, AppState};

/// Uebersetzt einen `AppIntent` in eine Sequenz ausfuehrbarer `AppCommand`s.
///
/// Hier wird auch entschieden, welche Events folgenlos bleiben:
/// Mausrad ohne Praezisions-Modifier oder ohne Cursor im Datenbereich
/// erzeugt keinen Command.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CurveFamilySelected { family } => {
            vec![AppCommand::SetCurveFamily { family }]
        }
        AppIntent::PetalVariantSelected { variant } => {
            vec![AppCommand::SetPetalVariant { variant }]
        }
        AppIntent::ApplyParamsRequested => match state.curve.family {
            CurveFamily::Butterfly => vec![AppCommand::ApplyButterflyEdits],
            CurveFamily::Petal => vec![AppCommand::ApplyPetalEdits],
            CurveFamily::Star => vec![AppCommand::ApplyStarEdits],
        },
        AppIntent::ViewZoom {
            cursor_world,
            direction,
            precision,
        } => {
            if !precision {
                return Vec::new();
            }
            match cursor_world {
                Some(cursor) => vec![AppCommand::ZoomAt { cursor, direction }],
                None => Vec::new(),
            }
        }
        AppIntent::ViewPan { delta_world } => vec![AppCommand::PanView { delta: delta_world }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetViewToFit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZoomDirection;
    use glam::DVec2;

    #[test]
    fn wheel_without_precision_modifier_maps_to_nothing() {
        let state = AppState::new();

        let commands = map_intent_to_commands(
            &state,
            AppIntent::ViewZoom {
                cursor_world: Some(DVec2::ZERO),
                direction: ZoomDirection::In,
                precision: false,
            },
        );

        assert!(commands.is_empty());
    }

    #[test]
    fn wheel_without_cursor_maps_to_nothing() {
        let state = AppState::new();

        let commands = map_intent_to_commands(
            &state,
            AppIntent::ViewZoom {
                cursor_world: None,
                direction: ZoomDirection::Out,
                precision: true,
            },
        );

        assert!(commands.is_empty());
    }

    #[test]
    fn apply_maps_to_active_family() {
        let mut state = AppState::new();

        let commands = map_intent_to_commands(&state, AppIntent::ApplyParamsRequested);
        assert!(matches!(commands[..], [AppCommand::ApplyButterflyEdits]));

        crate::app::use_cases::curve::set_family(&mut state, CurveFamily::Star);
        let commands = map_intent_to_commands(&state, AppIntent::ApplyParamsRequested);
        assert!(matches!(commands[..], [AppCommand::ApplyStarEdits]));
    }
}
