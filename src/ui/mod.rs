//! UI subsystem for the yearline graph.
//!
//! Contains pointer input handling. The widget itself lives in
//! [`crate::graph`] and composes the input handler with the renderers.

pub mod input;
