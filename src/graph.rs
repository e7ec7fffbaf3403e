//! The `TimelineGraph` widget.
//!
//! Renders a year axis as an animated growth curve with selectable markers
//! and lets the user pick a target year by clicking near its slot. The graph
//! owns its state components and exposes a small programmatic API so host
//! code can read and write the marked years and receive change notifications.

use std::time::Duration;

use egui::Sense;

use crate::config::{GraphConfig, GraphError};
use crate::domain::geometry;
use crate::rendering::{curve_renderer, graph_overlays, marker_renderer};
use crate::state::{AnimationState, HoverState, MarkerState};
use crate::theme::GraphTheme;
use crate::ui::input::{handle_graph_input, GraphInputResult};

/// Host callback invoked with the new year when a marker changes.
pub type ChangeCallback = Box<dyn FnMut(i32) + Send>;

/// Interactions reported by [`TimelineGraph::show`] for hosts that prefer
/// polling the return value over registering a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphInteraction {
    /// The user clicked a year slot and it became the new target.
    TargetChanged(i32),
}

/// An animated, interactive year-axis selection widget.
///
/// One instance per graph; create it once and call [`show`](Self::show) every
/// frame. The reveal animation replays on configuration changes, and the
/// target pulse keeps breathing afterwards, so the widget requests a repaint
/// on every shown frame while it is alive.
pub struct TimelineGraph {
    markers: MarkerState,
    animation: AnimationState,
    hover: HoverState,
    theme: GraphTheme,
    height: f32,
    /// Cleared by `destroy()`; a dead graph draws nothing and schedules no repaints
    alive: bool,
    on_change: Option<ChangeCallback>,
}

impl TimelineGraph {
    /// Builds a graph from its configuration.
    ///
    /// Marker years outside `[start_year, end_year]` are clamped to the
    /// nearest bound; an omitted target defaults to `end_year`. The only
    /// rejected input is a degenerate range.
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;
        let target = config.target_year.unwrap_or(config.end_year);
        Ok(Self {
            markers: MarkerState::new(
                config.start_year,
                config.end_year,
                target,
                config.strategy_init_year,
                config.current_year,
            ),
            animation: AnimationState::new(),
            hover: HoverState::new(),
            theme: crate::theme::ThemeManager::new().current_theme().clone(),
            height: config.height,
            alive: true,
            on_change: None,
        })
    }

    // ===== Public API =====

    /// Registers the host change callback. It fires for pointer-driven and
    /// API-driven marker changes alike.
    pub fn set_on_change(&mut self, callback: ChangeCallback) {
        self.on_change = Some(callback);
    }

    /// Sets the target year. Out-of-range input is a silent no-op; on
    /// success the reveal animation replays and `on_change` fires.
    pub fn set_target_year(&mut self, year: i32) {
        if self.markers.set_target_year(year) {
            self.animation.replay();
            self.notify(year);
        }
    }

    /// Sets the strategy-init year (dual-marker variant). Same contract as
    /// [`set_target_year`](Self::set_target_year).
    pub fn set_strategy_init_year(&mut self, year: i32) {
        if self.markers.set_strategy_init_year(year) {
            self.animation.replay();
            self.notify(year);
        }
    }

    /// Updates the axis bounds, clamping every marker into the new interval.
    /// A degenerate range is a silent no-op. Triggers a re-reveal.
    pub fn set_year_range(&mut self, new_start: i32, new_end: i32) {
        if self.markers.set_year_range(new_start, new_end) {
            self.animation.replay();
        }
    }

    /// Sets or clears the decorative current-year indicator.
    pub fn set_current_year(&mut self, year: Option<i32>) {
        self.markers.set_current_year(year);
    }

    pub fn get_target_year(&self) -> i32 {
        self.markers.target_year()
    }

    pub fn get_strategy_init_year(&self) -> Option<i32> {
        self.markers.strategy_init_year()
    }

    pub fn get_year_range(&self) -> (i32, i32) {
        (self.markers.start_year(), self.markers.end_year())
    }

    /// Year currently under the pointer, if any.
    pub fn hovered_year(&self) -> Option<i32> {
        self.hover.hovered_year()
    }

    /// Swaps the color palette without replaying the reveal.
    pub fn set_theme(&mut self, theme: GraphTheme) {
        self.theme = theme;
    }

    /// Tears the graph down: a destroyed graph ignores input, draws nothing,
    /// and stops requesting repaints. Calling this twice is a harmless no-op.
    pub fn destroy(&mut self) {
        self.alive = false;
        self.hover.clear();
    }

    /// Returns false after [`destroy`](Self::destroy).
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    // ===== Per-frame rendering =====

    /// Renders one frame of the graph into the available width.
    ///
    /// If the host has not laid the container out yet (zero available
    /// width), the frame is skipped and a delayed repaint is scheduled so
    /// measurement retries instead of dividing by zero.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<GraphInteraction> {
        if !self.alive {
            return None;
        }

        let width = ui.available_width();
        if width <= 0.0 {
            ui.ctx().request_repaint_after(Duration::from_millis(100));
            return None;
        }

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(width, self.height),
            Sense::click().union(Sense::hover()),
        );
        let painter = ui.painter_at(rect);
        let colors = self.theme.colors.clone();

        painter.rect_filled(rect, 4.0, colors.background);

        // Input: recompute hover, pick up clicks.
        let pointer_pos = response.hover_pos();
        let clicked = response.clicked();
        let (start_year, end_year) = (self.markers.start_year(), self.markers.end_year());
        let (hovered_year, last_pointer_pos) = self.hover.for_input_handler();
        let input_result = handle_graph_input(
            rect,
            pointer_pos,
            clicked,
            start_year,
            end_year,
            hovered_year,
            last_pointer_pos,
        );

        let mut interaction = None;
        if let GraphInputResult::YearClicked(year) = input_result {
            // Route through the setter so state, animation replay, and
            // on_change behave identically for clicks and API calls.
            if year != self.markers.target_year() {
                self.set_target_year(year);
                interaction = Some(GraphInteraction::TargetChanged(year));
            }
        }

        self.animation.tick();

        curve_renderer::render_curve(
            &painter,
            rect,
            &self.markers,
            self.animation.eased_progress(),
            &colors,
        );

        for year in start_year..=end_year {
            let t = geometry::year_t(year, start_year, end_year);
            let pos = geometry::year_pos(year, start_year, end_year, rect);
            let role = marker_renderer::role_for_year(
                year,
                start_year,
                end_year,
                self.markers.target_year(),
                self.markers.strategy_init_year(),
            );
            marker_renderer::render_marker(
                &painter,
                pos,
                year,
                role,
                self.animation.marker_reveal(t),
                self.hover.hovered_year() == Some(year),
                &colors,
            );
        }

        // Time-based pulse so it keeps breathing after the reveal settles.
        let time = ui.input(|i| i.time);
        let target_pos = geometry::year_pos(self.markers.target_year(), start_year, end_year, rect);
        graph_overlays::render_target_highlight(&painter, rect, target_pos, time, &colors);

        if let Some(current) = self.markers.current_year() {
            let x = geometry::year_to_x(current, start_year, end_year, rect);
            graph_overlays::render_current_year_guide(&painter, rect, x, current, &colors);
        }

        if let Some(year) = self.hover.hovered_year() {
            let pos = geometry::year_pos(year, start_year, end_year, rect);
            graph_overlays::render_hover_tooltip(&painter, pos, year, &colors);
        }

        // Continuous render loop: the pulse and hover feedback need a frame
        // every refresh, not just while the reveal is in flight.
        ui.ctx().request_repaint();

        interaction
    }

    fn notify(&mut self, year: i32) {
        if let Some(callback) = &mut self.on_change {
            callback(year);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> TimelineGraph {
        TimelineGraph::new(GraphConfig::new(2025, 2030).with_target_year(2027)).unwrap()
    }

    #[test]
    fn test_construction_defaults_target_to_end() {
        let g = TimelineGraph::new(GraphConfig::new(2025, 2030)).unwrap();
        assert_eq!(g.get_target_year(), 2030);
    }

    #[test]
    fn test_construction_rejects_degenerate_range() {
        assert!(TimelineGraph::new(GraphConfig::new(2030, 2030)).is_err());
    }

    #[test]
    fn test_api_setter_fires_on_change() {
        use std::sync::atomic::{AtomicI32, Ordering};
        use std::sync::Arc;

        let mut g = graph();
        let seen = Arc::new(AtomicI32::new(0));
        let seen_clone = Arc::clone(&seen);
        g.set_on_change(Box::new(move |year| {
            seen_clone.store(year, Ordering::SeqCst);
        }));

        g.set_target_year(2029);
        assert_eq!(seen.load(Ordering::SeqCst), 2029);

        // Out-of-range: no-op, no callback.
        g.set_target_year(2040);
        assert_eq!(g.get_target_year(), 2029);
        assert_eq!(seen.load(Ordering::SeqCst), 2029);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut g = graph();
        g.destroy();
        g.destroy();
        assert!(!g.is_alive());
    }
}
