//! Overlay rendering: target pulse, dashed guides, current-year badge, and
//! the hover tooltip.
//!
//! The pulse runs off wall-clock time rather than the reveal progress, so it
//! keeps breathing after the reveal animation has completed.

use egui::{FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::theme::{with_alpha, GraphColors};

const DASH_LENGTH: f32 = 4.0;
const GAP_LENGTH: f32 = 4.0;

/// Renders the pulsing radial highlight and dashed vertical guide at the
/// target year's position.
///
/// # Arguments
/// * `painter` - The painter for the graph rect
/// * `rect` - The graph rectangle
/// * `target_pos` - On-curve position of the target marker
/// * `time` - Wall-clock time in seconds, drives the continuous pulse
/// * `colors` - Color palette for the current theme
pub fn render_target_highlight(
    painter: &Painter,
    rect: Rect,
    target_pos: Pos2,
    time: f64,
    colors: &GraphColors,
) {
    // Breathing pulse: period ~2.1s, radius and alpha swing together.
    let phase = (time * 3.0).sin() as f32;
    let pulse_radius = 12.0 + 4.0 * phase;
    let pulse_alpha = (40.0 + 20.0 * phase) as u8;
    painter.circle_filled(target_pos, pulse_radius, with_alpha(colors.target_guide, pulse_alpha));

    painter.extend(Shape::dashed_line(
        &[
            Pos2::new(target_pos.x, rect.top() + 8.0),
            Pos2::new(target_pos.x, rect.bottom() - 8.0),
        ],
        Stroke::new(1.0, with_alpha(colors.target_guide, 140)),
        DASH_LENGTH,
        GAP_LENGTH,
    ));
}

/// Renders the dashed vertical guide and label badge for the decorative
/// current-year indicator. Drawn independent of marker roles; the year need
/// not lie within the axis range.
pub fn render_current_year_guide(
    painter: &Painter,
    rect: Rect,
    x: f32,
    current_year: i32,
    colors: &GraphColors,
) {
    painter.extend(Shape::dashed_line(
        &[
            Pos2::new(x, rect.top() + 24.0),
            Pos2::new(x, rect.bottom() - 8.0),
        ],
        Stroke::new(1.0, with_alpha(colors.current_guide, 160)),
        DASH_LENGTH,
        GAP_LENGTH,
    ));

    // Small label badge above the axis
    let label = format!("{}", current_year);
    let font_id = FontId::proportional(11.0);
    let galley = painter.layout_no_wrap(label.clone(), font_id.clone(), colors.tooltip_text);
    let text_size = galley.size();
    let padding = egui::vec2(5.0, 2.0);

    let badge_rect = Rect::from_center_size(
        Pos2::new(x, rect.top() + 12.0),
        text_size + padding * 2.0,
    );
    painter.rect_filled(badge_rect, 3.0, with_alpha(colors.current_guide, 220));
    painter.text(
        badge_rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        font_id,
        colors.tooltip_background,
    );
}

/// Renders a rounded-rectangle tooltip above the hovered marker showing the
/// year number.
pub fn render_hover_tooltip(
    painter: &Painter,
    marker_pos: Pos2,
    year: i32,
    colors: &GraphColors,
) {
    let label = year.to_string();
    let font_id = FontId::proportional(12.0);

    // Measure text size to create background box
    let galley = painter.layout_no_wrap(label.clone(), font_id.clone(), colors.tooltip_text);
    let text_size = galley.size();
    let padding = egui::vec2(6.0, 3.0);

    let tooltip_rect = Rect::from_center_size(
        Pos2::new(marker_pos.x, marker_pos.y - 24.0),
        text_size + padding * 2.0,
    );
    painter.rect_filled(tooltip_rect, 4.0, with_alpha(colors.tooltip_background, 230));
    painter.rect_stroke(
        tooltip_rect,
        4.0,
        Stroke::new(1.0, colors.tooltip_text),
        egui::StrokeKind::Outside,
    );
    painter.text(
        tooltip_rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        font_id,
        colors.tooltip_text,
    );
}
