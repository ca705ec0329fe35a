//! Zeichnet Stopps, Startpunkt und Hover-Info in den Karten-Viewport.

use crate::core::Stop;
use crate::shared::RenderScene;

use super::color32;

const MAP_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(228, 232, 224);
const SELECTION_RING: egui::Color32 = egui::Color32::from_rgb(255, 140, 0);
const START_FLAG: egui::Color32 = egui::Color32::from_rgb(20, 120, 60);

/// Zeichnet die komplette Szene in `rect`.
///
/// `hover_pos` ist die Mausposition in Screen-Koordinaten; liegt sie über
/// einem Stopp, wird dessen Titel als Info-Box angezeigt.
pub fn paint_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &RenderScene,
    hover_pos: Option<egui::Pos2>,
) {
    painter.rect_filled(rect, 0.0, MAP_BACKGROUND);

    let size = glam::Vec2::new(rect.width(), rect.height());
    let to_screen = |stop: &Stop| {
        let p = scene.camera.geo_to_screen(stop.position, size);
        rect.min + egui::vec2(p.x, p.y)
    };

    let start_screen = scene.start_point.map(|start| {
        let p = scene.camera.geo_to_screen(start, size);
        rect.min + egui::vec2(p.x, p.y)
    });

    if scene.is_sequenced() {
        let mut points: Vec<egui::Pos2> = Vec::with_capacity(scene.stops.len() + 1);
        points.extend(start_screen);
        points.extend(scene.stops.iter().map(to_screen));
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(1.5, egui::Color32::from_gray(120)),
        ));
    }

    let radius = scene.options.stop_radius_px;
    for stop in scene.stops.iter() {
        let center = to_screen(stop);
        if !rect.expand(radius).contains(center) {
            continue;
        }
        paint_stop(painter, center, radius, stop, scene.is_selected(stop.id));
    }

    if let Some(base) = start_screen {
        paint_start_flag(painter, base);
    }

    if let Some(hover) = hover_pos {
        let local = hover - rect.min;
        let hit = super::input::pick_stop(
            scene,
            glam::Vec2::new(local.x, local.y),
            [rect.width(), rect.height()],
        );
        if let Some(stop) = hit.and_then(|id| scene.stops.iter().find(|s| s.id == id)) {
            paint_info_box(painter, to_screen(stop) + egui::vec2(radius + 4.0, -radius), stop);
        }
    }

    if scene.drop_pending {
        painter.text(
            rect.center_top() + egui::vec2(0.0, 16.0),
            egui::Align2::CENTER_CENTER,
            "Auf die Karte klicken, um den Startpunkt zu setzen",
            egui::FontId::proportional(16.0),
            egui::Color32::DARK_GRAY,
        );
    }
}

fn paint_stop(painter: &egui::Painter, center: egui::Pos2, radius: f32, stop: &Stop, selected: bool) {
    if selected {
        painter.circle_stroke(center, radius + 3.0, egui::Stroke::new(3.0, SELECTION_RING));
    }

    painter.circle(
        center,
        radius,
        color32(stop.color.rgba()),
        egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
    );

    if let Some(label) = stop.label {
        let text_color = if stop.color.needs_dark_text() {
            egui::Color32::BLACK
        } else {
            egui::Color32::WHITE
        };
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            label.to_string(),
            egui::FontId::proportional(radius),
            text_color,
        );
    }
}

fn paint_start_flag(painter: &egui::Painter, base: egui::Pos2) {
    let top = base - egui::vec2(0.0, 24.0);
    painter.line_segment([base, top], egui::Stroke::new(2.0, egui::Color32::BLACK));
    painter.add(egui::Shape::convex_polygon(
        vec![top, top + egui::vec2(14.0, 5.0), top + egui::vec2(0.0, 10.0)],
        START_FLAG,
        egui::Stroke::new(1.0, egui::Color32::BLACK),
    ));
    painter.circle_filled(base, 3.0, egui::Color32::BLACK);
}

fn paint_info_box(painter: &egui::Painter, anchor: egui::Pos2, stop: &Stop) {
    let text = format!(
        "{}\n{} · {}\n({:.5}, {:.5})",
        stop.display_title(),
        stop.category,
        stop.color.name(),
        stop.position.lat,
        stop.position.lng
    );
    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::proportional(13.0),
        egui::Color32::BLACK,
    );
    let box_rect = egui::Rect::from_min_size(anchor, galley.size() + egui::vec2(12.0, 8.0));
    painter.rect_filled(box_rect, 4.0, egui::Color32::from_white_alpha(235));
    painter.galley(box_rect.min + egui::vec2(6.0, 4.0), galley, egui::Color32::BLACK);
}
