//! Year marker rendering.
//!
//! Each year on the axis gets a marker whose shape and color depend on its
//! role. Roles are a tagged enum mapped through the theme palette instead of
//! nested conditionals, and the hovered marker is drawn larger and brighter
//! regardless of role.

use egui::{Color32, FontId, Painter, Pos2, Shape, Stroke};

use crate::theme::{adjust_brightness, with_alpha, GraphColors};

/// Role of a year on the axis, deciding marker shape and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// Ordinary year: small neutral circle
    Plain,
    /// First or last year of the range: triangle
    Boundary,
    /// Strategy-init marker (dual-marker variant): triangle in the init hue
    Init,
    /// The selected target year: diamond with a soft radial glow
    Target,
    /// The decorative "today" indicator (drawn as an overlay, not a marker)
    Current,
}

/// Resolves the role of a year. The target wins over every other role, the
/// init marker over the boundaries.
pub fn role_for_year(
    year: i32,
    start_year: i32,
    end_year: i32,
    target_year: i32,
    strategy_init_year: Option<i32>,
) -> MarkerRole {
    if year == target_year {
        MarkerRole::Target
    } else if strategy_init_year == Some(year) {
        MarkerRole::Init
    } else if year == start_year || year == end_year {
        MarkerRole::Boundary
    } else {
        MarkerRole::Plain
    }
}

/// Style lookup: marker color for a role.
pub fn role_color(role: MarkerRole, colors: &GraphColors) -> Color32 {
    match role {
        MarkerRole::Plain => colors.plain_marker,
        MarkerRole::Boundary => colors.boundary_marker,
        MarkerRole::Init => colors.init_marker,
        MarkerRole::Target => colors.target_marker,
        MarkerRole::Current => colors.current_guide,
    }
}

/// Style lookup: base marker radius for a role.
pub fn role_radius(role: MarkerRole) -> f32 {
    match role {
        MarkerRole::Plain => 4.0,
        MarkerRole::Boundary | MarkerRole::Init => 6.0,
        MarkerRole::Target => 7.0,
        MarkerRole::Current => 4.0,
    }
}

/// Renders one year marker at its on-curve position.
///
/// `reveal` is the marker's eased local reveal progress in `[0, 1]`; a marker
/// is scaled up from nothing as it reveals. The hovered marker is drawn at
/// 1.4x size and brightened, whatever its role.
pub fn render_marker(
    painter: &Painter,
    pos: Pos2,
    year: i32,
    role: MarkerRole,
    reveal: f32,
    hovered: bool,
    colors: &GraphColors,
) {
    if reveal <= 0.01 {
        return;
    }

    let mut radius = role_radius(role) * reveal;
    let mut color = role_color(role, colors);
    if hovered {
        radius *= 1.4;
        color = adjust_brightness(color, 1.3);
    }

    match role {
        MarkerRole::Plain | MarkerRole::Current => {
            painter.circle_filled(pos, radius, color);
        }
        MarkerRole::Boundary | MarkerRole::Init => {
            painter.add(Shape::convex_polygon(
                triangle_points(pos, radius),
                color,
                Stroke::NONE,
            ));
        }
        MarkerRole::Target => {
            // Soft radial glow behind the diamond
            painter.circle_filled(pos, radius * 2.4, with_alpha(color, 28));
            painter.circle_filled(pos, radius * 1.6, with_alpha(color, 56));
            painter.add(Shape::convex_polygon(
                diamond_points(pos, radius),
                color,
                Stroke::NONE,
            ));
        }
    }

    if hovered {
        painter.circle_stroke(pos, radius + 2.0, Stroke::new(1.5, color));
    }

    // Label the structurally meaningful years beneath their markers.
    if role != MarkerRole::Plain {
        painter.text(
            Pos2::new(pos.x, pos.y + radius + 6.0),
            egui::Align2::CENTER_TOP,
            year.to_string(),
            FontId::proportional(12.0),
            with_alpha(colors.label_text, (reveal * 255.0) as u8),
        );
    }
}

fn triangle_points(center: Pos2, radius: f32) -> Vec<Pos2> {
    vec![
        Pos2::new(center.x, center.y - radius),
        Pos2::new(center.x + radius, center.y + radius),
        Pos2::new(center.x - radius, center.y + radius),
    ]
}

fn diamond_points(center: Pos2, radius: f32) -> Vec<Pos2> {
    vec![
        Pos2::new(center.x, center.y - radius),
        Pos2::new(center.x + radius, center.y),
        Pos2::new(center.x, center.y + radius),
        Pos2::new(center.x - radius, center.y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_priority() {
        // Target wins even on a boundary year
        assert_eq!(
            role_for_year(2030, 2025, 2030, 2030, Some(2026)),
            MarkerRole::Target
        );
        // Init wins over boundary
        assert_eq!(
            role_for_year(2025, 2025, 2030, 2028, Some(2025)),
            MarkerRole::Init
        );
        assert_eq!(
            role_for_year(2025, 2025, 2030, 2028, None),
            MarkerRole::Boundary
        );
        assert_eq!(
            role_for_year(2027, 2025, 2030, 2028, None),
            MarkerRole::Plain
        );
    }
}
