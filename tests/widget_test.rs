use std::sync::{Arc, Mutex};

use anyhow::Result;
use egui::{Pos2, Rect};
use yearline::domain::geometry;
use yearline::{handle_graph_input, GraphConfig, GraphInputResult, TimelineGraph};

fn counting_graph(config: GraphConfig) -> (TimelineGraph, Arc<Mutex<Vec<i32>>>) {
    let mut graph = TimelineGraph::new(config).expect("valid config");
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    graph.set_on_change(Box::new(move |year| {
        sink.lock().unwrap().push(year);
    }));
    (graph, log)
}

fn graph_rect() -> Rect {
    Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 300.0))
}

#[test]
fn test_constructor_clamps_out_of_range_target() -> Result<()> {
    let graph = TimelineGraph::new(GraphConfig::new(2025, 2030).with_target_year(2031))?;
    assert_eq!(graph.get_target_year(), 2030);

    let graph = TimelineGraph::new(GraphConfig::new(2025, 2030).with_target_year(2019))?;
    assert_eq!(graph.get_target_year(), 2025);
    Ok(())
}

#[test]
fn test_constructor_rejects_degenerate_range() {
    assert!(TimelineGraph::new(GraphConfig::new(2030, 2030)).is_err());
    assert!(TimelineGraph::new(GraphConfig::new(2031, 2025)).is_err());
}

#[test]
fn test_range_shrink_keeps_in_range_target() -> Result<()> {
    // Shrinking 2025-2030 to 2026-2029 leaves an in-range target untouched.
    let mut graph = TimelineGraph::new(GraphConfig::new(2025, 2030).with_target_year(2027))?;
    graph.set_year_range(2026, 2029);

    assert_eq!(graph.get_target_year(), 2027);
    let (start, end) = graph.get_year_range();
    assert_eq!(end - start + 1, 4);
    Ok(())
}

#[test]
fn test_clamping_law_on_range_change() -> Result<()> {
    let mut graph = TimelineGraph::new(
        GraphConfig::new(2020, 2040)
            .with_target_year(2022)
            .with_strategy_init_year(2039),
    )?;

    graph.set_year_range(2025, 2035);
    assert_eq!(graph.get_target_year(), 2025);
    assert_eq!(graph.get_strategy_init_year(), Some(2035));
    Ok(())
}

#[test]
fn test_range_invariant_over_any_sequence() -> Result<()> {
    let mut graph = TimelineGraph::new(GraphConfig::new(2000, 2100).with_target_year(2050))?;
    for (s, e) in [(2040, 2060), (2000, 2003), (2090, 2099), (1990, 1995), (2050, 2049)] {
        graph.set_year_range(s, e);
        let (start, end) = graph.get_year_range();
        assert!(start < end);
        let target = graph.get_target_year();
        assert!(target >= start && target <= end, "target {} outside {}..={}", target, start, end);
    }
    Ok(())
}

#[test]
fn test_out_of_range_setter_is_silent_noop() {
    let (mut graph, log) = counting_graph(GraphConfig::new(2025, 2030).with_target_year(2027));

    graph.set_target_year(2031);
    graph.set_target_year(2024);

    assert_eq!(graph.get_target_year(), 2027);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_api_setter_fires_on_change_once() {
    let (mut graph, log) = counting_graph(GraphConfig::new(2025, 2030).with_target_year(2027));

    graph.set_target_year(2029);

    assert_eq!(graph.get_target_year(), 2029);
    assert_eq!(*log.lock().unwrap(), vec![2029]);
}

#[test]
fn test_strategy_init_setter_fires_on_change() {
    let (mut graph, log) = counting_graph(
        GraphConfig::new(2025, 2030)
            .with_target_year(2029)
            .with_strategy_init_year(2026),
    );

    graph.set_strategy_init_year(2027);
    assert_eq!(graph.get_strategy_init_year(), Some(2027));
    assert_eq!(*log.lock().unwrap(), vec![2027]);
}

#[test]
fn test_simulated_hover_and_click_selects_year() {
    // Drive the input handler exactly the way the widget does each frame:
    // a pointer move over year 2028's slot, then a click.
    let (mut graph, log) = counting_graph(GraphConfig::new(2025, 2030).with_target_year(2026));
    let rect = graph_rect();
    let (start, end) = graph.get_year_range();
    let x = geometry::year_to_x(2028, start, end, rect);

    let mut hovered = None;
    let mut last_pos = None;

    let moved = handle_graph_input(
        rect,
        Some(Pos2::new(x, 150.0)),
        false,
        start,
        end,
        &mut hovered,
        &mut last_pos,
    );
    assert_eq!(moved, GraphInputResult::HoverChanged);
    assert_eq!(hovered, Some(2028));

    let clicked = handle_graph_input(
        rect,
        Some(Pos2::new(x, 150.0)),
        true,
        start,
        end,
        &mut hovered,
        &mut last_pos,
    );
    assert_eq!(clicked, GraphInputResult::YearClicked(2028));

    // The widget routes a click through the target setter.
    graph.set_target_year(2028);
    assert_eq!(graph.get_target_year(), 2028);
    assert_eq!(*log.lock().unwrap(), vec![2028]);
}

#[test]
fn test_pointer_far_from_slots_reports_no_hover() {
    let rect = graph_rect();
    let mut hovered = None;
    let mut last_pos = None;

    let between = (geometry::year_to_x(2025, 2025, 2030, rect)
        + geometry::year_to_x(2026, 2025, 2030, rect))
        / 2.0;
    handle_graph_input(
        rect,
        Some(Pos2::new(between, 150.0)),
        false,
        2025,
        2030,
        &mut hovered,
        &mut last_pos,
    );
    assert_eq!(hovered, None);
}

#[test]
fn test_destroy_twice_is_harmless() {
    let (mut graph, log) = counting_graph(GraphConfig::new(2025, 2030).with_target_year(2027));

    graph.destroy();
    graph.destroy();

    assert!(!graph.is_alive());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_hit_and_render_positions_coincide() {
    // The hit-test and the marker renderer both consume year_pos/year_to_x,
    // so a pointer at a rendered marker's x must resolve to that year.
    let rect = graph_rect();
    for year in 2025..=2030 {
        let pos = geometry::year_pos(year, 2025, 2030, rect);
        assert_eq!(geometry::hit_test(pos.x, 2025, 2030, rect), Some(year));
    }
}
