//! Domain logic for the yearline graph.
//!
//! This module contains the pure math underneath the widget:
//! - Geometry (year-to-pixel mapping, curve shape, hit-testing)
//! - Animation (easing, staggered marker reveal)
//!
//! These functions are stateless and independently testable.

pub mod animation;
pub mod geometry;
