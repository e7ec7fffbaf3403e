//! Growth-curve rendering.
//!
//! Draws the year-to-year polyline, clipped to the eased reveal progress.
//! The span between the strategy-init and target markers is stroked thicker
//! and in a distinct color; the segment's start year decides its styling.

use egui::{Painter, Rect, Stroke};

use crate::domain::geometry;
use crate::state::MarkerState;
use crate::theme::GraphColors;

const CURVE_STROKE_WIDTH: f32 = 2.0;
const STRATEGY_STROKE_WIDTH: f32 = 3.5;

/// Renders the growth curve across the graph rect.
///
/// `eased_progress` is the eased global reveal in `[0, 1]`; segments beyond
/// it are not drawn, and the frontier segment is drawn partially so the curve
/// sweeps in from the left.
pub fn render_curve(
    painter: &Painter,
    rect: Rect,
    markers: &MarkerState,
    eased_progress: f32,
    colors: &GraphColors,
) {
    let start_year = markers.start_year();
    let end_year = markers.end_year();
    let segments = (end_year - start_year) as f32;
    if segments < 1.0 {
        return;
    }

    for year in start_year..end_year {
        let seg_start_t = geometry::year_t(year, start_year, end_year);
        let seg_end_t = geometry::year_t(year + 1, start_year, end_year);
        if eased_progress <= seg_start_t {
            break;
        }

        let from = geometry::year_pos(year, start_year, end_year, rect);
        let mut to = geometry::year_pos(year + 1, start_year, end_year, rect);

        // Frontier segment: interpolate along the curve up to the reveal edge.
        if eased_progress < seg_end_t {
            let frac = (eased_progress - seg_start_t) / (seg_end_t - seg_start_t);
            let t = seg_start_t + frac * (seg_end_t - seg_start_t);
            to = egui::pos2(
                from.x + frac * (to.x - from.x),
                geometry::curve_y(t, rect),
            );
        }

        let stroke = if markers.in_strategy_span(year) {
            Stroke::new(STRATEGY_STROKE_WIDTH, colors.strategy_segment)
        } else {
            Stroke::new(CURVE_STROKE_WIDTH, colors.curve)
        };
        painter.line_segment([from, to], stroke);
    }
}
