//! Builder fuer Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        curve: state.curve.sampled.clone(),
        star: state.curve.star_geometry.clone(),
        view_rect: state.view.rect,
        viewport_size,
        title: state.curve.title().to_owned(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::CurveFamily;
    use crate::app::use_cases::curve::set_family;
    use crate::app::AppState;

    #[test]
    fn build_carries_active_geometry_and_rect() {
        let mut state = AppState::new();

        let scene = build(&state, [1280.0, 720.0]);
        assert!(scene.curve.is_some());
        assert!(scene.star.is_none());
        assert_eq!(scene.view_rect, state.view.rect);
        assert_eq!(scene.point_count(), crate::core::BUTTERFLY_RESOLUTION);

        set_family(&mut state, CurveFamily::Star);
        let scene = build(&state, [1280.0, 720.0]);
        assert!(scene.curve.is_none());
        assert_eq!(scene.point_count(), 5);
        assert_eq!(scene.title, "Star Polygon {p/q} = {5/2}");
    }
}
