//! Pointer input handling for the yearline graph.
//!
//! This module translates pointer state into hover and selection changes:
//! - Pointer move: recompute the hovered year from horizontal proximity
//! - Pointer leave: clear hover state
//! - Click: select the hovered year as the new target
//!
//! It operates on extracted input values and split `&mut` borrows rather than
//! the egui context, so tests can simulate pointer moves and clicks directly.

use egui::{Pos2, Rect};

use crate::domain::geometry;

/// Result of graph input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphInputResult {
    /// No interaction occurred
    None,
    /// The hovered year changed (including hover cleared)
    HoverChanged,
    /// A year slot was clicked and should become the target
    YearClicked(i32),
}

/// Handles one frame of pointer input over the graph rect.
///
/// Hover is recomputed from the current pointer position on every call; only
/// the latest state survives, there is no queuing. A click while a year is
/// hovered selects it regardless of the pointer's vertical distance from the
/// curve.
///
/// # Arguments
/// * `rect` - The graph rectangle in screen coordinates
/// * `pointer_pos` - Current pointer position, `None` when the pointer left
/// * `clicked` - Whether the primary button was clicked this frame
/// * `start_year` / `end_year` - Current axis bounds
/// * `hovered_year` - Hover state (mutable)
/// * `last_pointer_pos` - Last known pointer position (mutable)
pub fn handle_graph_input(
    rect: Rect,
    pointer_pos: Option<Pos2>,
    clicked: bool,
    start_year: i32,
    end_year: i32,
    hovered_year: &mut Option<i32>,
    last_pointer_pos: &mut Option<Pos2>,
) -> GraphInputResult {
    let inside = pointer_pos.filter(|pos| rect.contains(*pos));

    let new_hover = match inside {
        Some(pos) => geometry::hit_test(pos.x, start_year, end_year, rect),
        None => None,
    };
    *last_pointer_pos = inside;

    let hover_changed = new_hover != *hovered_year;
    *hovered_year = new_hover;

    if clicked {
        if let Some(year) = new_hover {
            return GraphInputResult::YearClicked(year);
        }
    }
    if hover_changed {
        GraphInputResult::HoverChanged
    } else {
        GraphInputResult::None
    }
}
