//! Rendering subsystem for the yearline graph.
//!
//! This module contains all painter-level drawing logic:
//! - Curve rendering (reveal-clipped polyline, strategy-span styling)
//! - Marker rendering (role-styled shapes with staggered reveal)
//! - Overlays (target pulse, dashed guides, current-year badge, tooltip)

pub mod curve_renderer;
pub mod graph_overlays;
pub mod marker_renderer;
