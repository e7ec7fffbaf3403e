//! yearline: an animated year-axis selection widget for egui.
//!
//! The crate provides [`TimelineGraph`], a self-contained widget that renders
//! a year range as a decorative growth curve with role-styled markers, a
//! pulsing target highlight, and click-to-select interaction. Host
//! applications construct it once with a [`GraphConfig`], call
//! [`TimelineGraph::show`] every frame, and drive it through the public API.

pub mod config;
pub mod domain;
pub mod graph;
pub mod rendering;
pub mod state;
pub mod theme;
pub mod ui;

// Export the widget and its construction surface
pub use config::{GraphConfig, GraphError, DEFAULT_HEIGHT};
pub use graph::{ChangeCallback, GraphInteraction, TimelineGraph};

// Export state components
pub use state::{AnimationState, HoverState, MarkerState};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, with_alpha, GraphColors, GraphTheme, ThemeManager};

// Export input handling for hosts that simulate pointer interaction
pub use ui::input::{handle_graph_input, GraphInputResult};
