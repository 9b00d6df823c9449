//! Renderer: zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Konsumiert ausschliesslich den Read-only-Vertrag aus `shared`;
//! saemtliche Welt→Bildschirm-Abbildung laeuft ueber den `ViewRect`
//! der Szene.

use crate::core::ViewRect;
use crate::shared::{options, RenderScene};
use glam::DVec2;

/// Wandelt eine RGBA-Byte-Farbe aus den Optionen in egui-Farbe um.
fn color(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Bildet einen Datenpunkt in den Viewport-Screen-Raum ab.
fn to_screen(view_rect: &ViewRect, viewport: egui::Rect, size: [f32; 2], p: DVec2) -> egui::Pos2 {
    let s = view_rect.world_to_screen(p, size);
    egui::Pos2::new(viewport.min.x + s.x as f32, viewport.min.y + s.y as f32)
}

/// Zeichnet die komplette Szene: Gitter, Geometrie, Titel.
pub fn draw(painter: &egui::Painter, viewport: egui::Rect, scene: &RenderScene) {
    let size = scene.viewport_size;
    if size[0] <= 0.0 || size[1] <= 0.0 {
        return;
    }

    if scene.options.show_grid {
        draw_grid(painter, viewport, scene);
    }

    if let Some(curve) = &scene.curve {
        draw_curve(painter, viewport, scene, &curve.points);
    }
    if let Some(star) = &scene.star {
        draw_star(painter, viewport, scene, star);
    }

    // Titel als Plot-Ueberschrift oben zentriert
    painter.text(
        egui::Pos2::new(viewport.center().x, viewport.min.y + 18.0),
        egui::Align2::CENTER_CENTER,
        &scene.title,
        egui::FontId::proportional(16.0),
        egui::Color32::GRAY,
    );
}

/// Gitterlinien in "schoenen" Schritten (1/2/5 × 10^k) plus Achsen
/// durch den Ursprung.
fn draw_grid(painter: &egui::Painter, viewport: egui::Rect, scene: &RenderScene) {
    let rect = &scene.view_rect;
    let size = scene.viewport_size;
    let grid = egui::Stroke::new(0.5, color(scene.options.grid_color));
    let axis = egui::Stroke::new(1.0, color(options::AXIS_COLOR));

    // Sichtbarer Bereich kann durch uniforme Skalierung breiter sein als
    // der ViewRect; beide Grenzen aus den Viewport-Ecken ableiten.
    let top_left = rect.screen_to_world(DVec2::new(0.0, 0.0), size);
    let bottom_right = rect.screen_to_world(DVec2::new(f64::from(size[0]), f64::from(size[1])), size);

    let step = nice_step(rect.width().max(rect.height()) / 8.0);

    // Achsen durchgezogen, Gitterlinien gestrichelt
    let mut x = (top_left.x / step).floor() * step;
    while x <= bottom_right.x {
        let a = to_screen(rect, viewport, size, DVec2::new(x, top_left.y));
        let b = to_screen(rect, viewport, size, DVec2::new(x, bottom_right.y));
        if x.abs() < step / 2.0 {
            painter.line_segment([a, b], axis);
        } else {
            painter.extend(egui::Shape::dashed_line(&[a, b], grid, 4.0, 4.0));
        }
        x += step;
    }

    let mut y = (bottom_right.y / step).floor() * step;
    while y <= top_left.y {
        let a = to_screen(rect, viewport, size, DVec2::new(top_left.x, y));
        let b = to_screen(rect, viewport, size, DVec2::new(bottom_right.x, y));
        if y.abs() < step / 2.0 {
            painter.line_segment([a, b], axis);
        } else {
            painter.extend(egui::Shape::dashed_line(&[a, b], grid, 4.0, 4.0));
        }
        y += step;
    }
}

/// Rundet eine Rohschrittweite auf 1, 2 oder 5 × 10^k.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.abs().max(f64::MIN_POSITIVE).log10().floor());
    let residual = raw / magnitude;
    let factor = if residual < 1.5 {
        1.0
    } else if residual < 3.5 {
        2.0
    } else if residual < 7.5 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Punktfolge als durchgehende Polylinie.
fn draw_curve(
    painter: &egui::Painter,
    viewport: egui::Rect,
    scene: &RenderScene,
    points: &[DVec2],
) {
    if points.len() < 2 {
        return;
    }
    let rect = &scene.view_rect;
    let size = scene.viewport_size;
    let screen_points: Vec<egui::Pos2> = points
        .iter()
        .map(|p| to_screen(rect, viewport, size, *p))
        .collect();

    painter.add(egui::Shape::line(
        screen_points,
        egui::Stroke::new(
            scene.options.curve_stroke_width,
            color(scene.options.curve_color),
        ),
    ));
}

/// Sternpolygon: p-Eck-Kontur (gestrichelt), Sehnen als getrennte
/// Segmente, Eckpunkt-Marker und optionale Index-Beschriftung.
fn draw_star(
    painter: &egui::Painter,
    viewport: egui::Rect,
    scene: &RenderScene,
    star: &crate::core::StarPolygonGeometry,
) {
    let rect = &scene.view_rect;
    let size = scene.viewport_size;

    // Referenzkontur des regulaeren p-Ecks
    let outline: Vec<egui::Pos2> = star
        .outline()
        .iter()
        .map(|p| to_screen(rect, viewport, size, *p))
        .collect();
    painter.extend(egui::Shape::dashed_line(
        &outline,
        egui::Stroke::new(1.0, color(scene.options.star_outline_color)),
        6.0,
        4.0,
    ));

    // Jede Sehne ist ein eigenes Segment: expliziter Pfadbruch,
    // aufeinanderfolgende Sehnen werden nie verbunden.
    let chord_stroke = egui::Stroke::new(
        scene.options.curve_stroke_width,
        color(scene.options.star_chord_color),
    );
    for &(from, to) in &star.edges {
        let a = to_screen(rect, viewport, size, star.vertices[from]);
        let b = to_screen(rect, viewport, size, star.vertices[to]);
        painter.line_segment([a, b], chord_stroke);
    }

    let vertex_color = color(scene.options.star_vertex_color);
    for (i, v) in star.vertices.iter().enumerate() {
        painter.circle_filled(
            to_screen(rect, viewport, size, *v),
            scene.options.star_vertex_radius,
            vertex_color,
        );

        if scene.options.star_vertex_labels {
            let label_pos = *v * options::STAR_LABEL_OFFSET;
            painter.text(
                to_screen(rect, viewport, size, label_pos),
                egui::Align2::CENTER_CENTER,
                i.to_string(),
                egui::FontId::proportional(12.0),
                vertex_color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::nice_step;
    use approx::assert_relative_eq;

    #[test]
    fn nice_step_snaps_to_1_2_5() {
        assert_relative_eq!(nice_step(0.9), 1.0);
        assert_relative_eq!(nice_step(1.8), 2.0);
        assert_relative_eq!(nice_step(4.0), 5.0);
        assert_relative_eq!(nice_step(8.0), 10.0);
        assert_relative_eq!(nice_step(0.03), 0.02, epsilon = 1e-12);
        assert_relative_eq!(nice_step(12.0), 10.0);
    }
}
