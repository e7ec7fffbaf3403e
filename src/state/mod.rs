//! State components for the yearline graph.
//!
//! This module contains state-only logic (no UI concerns):
//! - Marker state (year range, target/init/current markers, clamping)
//! - Animation state (reveal progress, replay)
//! - Hover state (hovered year, pointer position)
//!
//! Each component keeps its fields private and exposes intent-revealing
//! methods, so the range invariant (markers always within bounds) is enforced
//! in one place.

mod animation_state;
mod hover_state;
mod marker_state;

pub use animation_state::AnimationState;
pub use hover_state::HoverState;
pub use marker_state::MarkerState;
