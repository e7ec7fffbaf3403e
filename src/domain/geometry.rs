//! Year-axis geometry: coordinate mapping and hit-testing.
//!
//! This module provides pure functions for:
//! - Placing each year of the range at its x position within the graph rect
//! - Computing the decorative growth-curve y position for a year
//! - Hit-testing a pointer x position against the year slots
//!
//! These functions are stateless and can be tested independently. The same
//! functions feed both the renderers and the input handler, so the drawn
//! marker positions and the hit targets always coincide.

use egui::{Pos2, Rect};

/// Horizontal margin between the graph rect edges and the first/last year slot.
pub const EDGE_PADDING: f32 = 40.0;

/// Pixel distance within which a pointer x counts as "over" a year slot.
pub const HIT_TOLERANCE: f32 = 15.0;

/// Exponent of the decorative growth curve. Must keep the curve monotonic
/// in the normalized year index.
pub const CURVE_EXPONENT: f32 = 1.8;

/// Curve amplitude as a fraction of the graph rect height.
pub const AMPLITUDE_RATIO: f32 = 0.45;

/// Returns the normalized index of `year` within `[start_year, end_year]`,
/// i.e. 0.0 for the first year and 1.0 for the last.
///
/// Returns 0.0 for a degenerate range so callers never divide by zero.
pub fn year_t(year: i32, start_year: i32, end_year: i32) -> f32 {
    let span = end_year - start_year;
    if span <= 0 {
        return 0.0;
    }
    (year - start_year) as f32 / span as f32
}

/// Converts a year to an x coordinate within the graph rect.
///
/// Years are spaced uniformly across the interior region (rect minus the
/// edge padding on both sides).
///
/// # Arguments
/// * `year` - The year to convert
/// * `start_year` - First year of the range
/// * `end_year` - Last year of the range
/// * `rect` - The graph rectangle for positioning
pub fn year_to_x(year: i32, start_year: i32, end_year: i32, rect: Rect) -> f32 {
    let interior = (rect.width() - 2.0 * EDGE_PADDING).max(0.0);
    rect.left() + EDGE_PADDING + year_t(year, start_year, end_year) * interior
}

/// Returns the y coordinate of the growth curve at normalized index `t`.
///
/// The curve descends from `center_y + amplitude/2` at `t = 0` to
/// `center_y - amplitude/2` at `t = 1`, strictly monotonic in `t`.
pub fn curve_y(t: f32, rect: Rect) -> f32 {
    let amplitude = rect.height() * AMPLITUDE_RATIO;
    rect.center().y + amplitude / 2.0 - t.powf(CURVE_EXPONENT) * amplitude
}

/// Returns the on-curve position of a year. Markers are drawn here and the
/// click/hover hit-test resolves against the same x.
pub fn year_pos(year: i32, start_year: i32, end_year: i32, rect: Rect) -> Pos2 {
    let t = year_t(year, start_year, end_year);
    Pos2::new(year_to_x(year, start_year, end_year, rect), curve_y(t, rect))
}

/// Hit-tests a pointer x position against all year slots in the range.
///
/// Scans years in ascending order and returns the first whose slot x is
/// within [`HIT_TOLERANCE`] pixels of the pointer. There is no tolerance on
/// y: horizontal proximity to the slot is sufficient.
///
/// Returns `None` for a degenerate range or when no slot is close enough.
pub fn hit_test(pointer_x: f32, start_year: i32, end_year: i32, rect: Rect) -> Option<i32> {
    if end_year <= start_year || rect.width() <= 0.0 {
        return None;
    }
    (start_year..=end_year)
        .find(|&year| (year_to_x(year, start_year, end_year, rect) - pointer_x).abs() <= HIT_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(width: f32, height: f32) -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(width, height))
    }

    #[test]
    fn test_x_positions_strictly_increasing() {
        let r = rect(800.0, 300.0);
        let xs: Vec<f32> = (2025..=2030).map(|y| year_to_x(y, 2025, 2030, r)).collect();
        for pair in xs.windows(2) {
            assert!(pair[1] > pair[0], "x positions must increase: {:?}", xs);
        }
    }

    #[test]
    fn test_uniform_spacing() {
        let r = rect(800.0, 300.0);
        let xs: Vec<f32> = (2025..=2030).map(|y| year_to_x(y, 2025, 2030, r)).collect();
        let expected = (800.0 - 2.0 * EDGE_PADDING) / 5.0;
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_range_endpoints_at_padding() {
        let r = rect(640.0, 300.0);
        assert_eq!(year_to_x(2025, 2025, 2030, r), EDGE_PADDING);
        assert_eq!(year_to_x(2030, 2025, 2030, r), 640.0 - EDGE_PADDING);
    }

    #[test]
    fn test_curve_monotonic() {
        let r = rect(800.0, 300.0);
        let mut prev = curve_y(0.0, r);
        for i in 1..=20 {
            let y = curve_y(i as f32 / 20.0, r);
            assert!(y < prev, "curve must descend in screen y as t grows");
            prev = y;
        }
    }

    #[test]
    fn test_hit_test_symmetry() {
        let r = rect(800.0, 300.0);
        for year in 2025..=2030 {
            let x = year_to_x(year, 2025, 2030, r);
            assert_eq!(hit_test(x, 2025, 2030, r), Some(year));
        }
    }

    #[test]
    fn test_hit_test_miss_between_slots() {
        let r = rect(800.0, 300.0);
        let mid = (year_to_x(2025, 2025, 2030, r) + year_to_x(2026, 2025, 2030, r)) / 2.0;
        // Slots are 144px apart here, so the midpoint is outside both bands.
        assert_eq!(hit_test(mid, 2025, 2030, r), None);
    }

    #[test]
    fn test_hit_test_tolerance_band() {
        let r = rect(800.0, 300.0);
        let x = year_to_x(2027, 2025, 2030, r);
        assert_eq!(hit_test(x + HIT_TOLERANCE, 2025, 2030, r), Some(2027));
        assert_eq!(hit_test(x + HIT_TOLERANCE + 1.0, 2025, 2030, r), None);
    }

    #[test]
    fn test_degenerate_range_guards() {
        let r = rect(800.0, 300.0);
        assert_eq!(year_t(2025, 2025, 2025), 0.0);
        assert_eq!(year_to_x(2025, 2025, 2025, r), EDGE_PADDING);
        assert_eq!(hit_test(EDGE_PADDING, 2025, 2025, r), None);
    }

    #[test]
    fn test_zero_width_never_nan() {
        let r = rect(0.0, 300.0);
        let x = year_to_x(2027, 2025, 2030, r);
        assert!(x.is_finite());
        assert_eq!(hit_test(x, 2025, 2030, r), None);
    }
}
