//! Pointer hover state.
//!
//! Tracks which year slot (if any) is under the pointer, plus the last known
//! pointer position. Recomputed on every frame by the input handler; only the
//! latest hover state is ever rendered.

use egui::Pos2;

/// State related to pointer hover over the graph.
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    /// Year currently under the pointer, if any
    hovered_year: Option<i32>,
    /// Last known pointer position in graph coordinates
    pointer_pos: Option<Pos2>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the year currently under the pointer, if any.
    pub fn hovered_year(&self) -> Option<i32> {
        self.hovered_year
    }

    /// Returns the last known pointer position, if the pointer is over the graph.
    pub fn pointer_pos(&self) -> Option<Pos2> {
        self.pointer_pos
    }

    /// Clears hover state (pointer left the graph).
    pub fn clear(&mut self) {
        self.hovered_year = None;
        self.pointer_pos = None;
    }

    /// Returns mutable references for input handling (splits borrows).
    pub(crate) fn for_input_handler(&mut self) -> (&mut Option<i32>, &mut Option<Pos2>) {
        (&mut self.hovered_year, &mut self.pointer_pos)
    }
}
