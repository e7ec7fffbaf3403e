//! Yearline demo host application.
//!
//! Stands in for the page that embeds the graph: form controls feed the
//! widget through its public API, a summary line re-renders from the
//! accessors after each change, and a change log shows every `on_change`
//! notification. Theme choice and the last graph configuration persist
//! across runs via eframe storage.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::{Arc, Mutex};

use eframe::egui;
use serde::{de::DeserializeOwned, Serialize};

use yearline::{GraphConfig, ThemeManager, TimelineGraph};

const THEME_KEY: &str = "theme_name";
const CONFIG_KEY: &str = "graph_config";

/// Main application entry point for the yearline demo.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_title("Yearline Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Yearline Demo",
        options,
        Box::new(|cc| Ok(Box::new(YearlineApp::new(cc)))),
    )
}

/// Loads a JSON-encoded setting from eframe storage, falling back to a default.
fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
where
    T: DeserializeOwned,
{
    storage
        .and_then(|s| s.get_string(key))
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or(default)
}

/// Saves a JSON-encoded setting to eframe storage.
fn save_setting<T: Serialize>(storage: &mut dyn eframe::Storage, key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        storage.set_string(key, json);
    }
}

/// The demo host application.
struct YearlineApp {
    graph: TimelineGraph,
    /// Control values mirrored into the graph through its API
    config: GraphConfig,
    themes: ThemeManager,
    /// Years reported by `on_change`, newest last
    change_log: Arc<Mutex<Vec<i32>>>,
}

impl YearlineApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let default_config = GraphConfig::new(2025, 2030)
            .with_target_year(2028)
            .with_strategy_init_year(2026)
            .with_current_year(2026);
        let config = load_setting(cc.storage, CONFIG_KEY, default_config.clone());
        let theme_name: String = load_setting(cc.storage, THEME_KEY, "Dark".to_string());

        // A persisted config can only be invalid if hand-edited; fall back
        // rather than refuse to start.
        let mut graph = TimelineGraph::new(config.clone())
            .unwrap_or_else(|_| TimelineGraph::new(default_config.clone()).expect("default config is valid"));

        let mut themes = ThemeManager::new();
        let _ = themes.set_current_theme(&theme_name);
        graph.set_theme(themes.current_theme().clone());

        let change_log = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&change_log);
        graph.set_on_change(Box::new(move |year| {
            if let Ok(mut entries) = log.lock() {
                entries.push(year);
            }
        }));

        Self {
            graph,
            config,
            themes,
            change_log,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Start");
            let mut start = self.config.start_year;
            ui.add(egui::DragValue::new(&mut start).range(1900..=2200));
            ui.label("End");
            let mut end = self.config.end_year;
            ui.add(egui::DragValue::new(&mut end).range(1900..=2200));
            if (start, end) != (self.config.start_year, self.config.end_year) && start < end {
                self.config.start_year = start;
                self.config.end_year = end;
                self.graph.set_year_range(start, end);
            }

            ui.separator();

            ui.label("Target");
            let mut target = self.graph.get_target_year();
            ui.add(egui::DragValue::new(&mut target));
            if target != self.graph.get_target_year() {
                self.graph.set_target_year(target);
            }

            ui.label("Init");
            let mut init = self.graph.get_strategy_init_year().unwrap_or(self.config.start_year);
            ui.add(egui::DragValue::new(&mut init));
            if Some(init) != self.graph.get_strategy_init_year() {
                self.graph.set_strategy_init_year(init);
            }

            ui.separator();

            let current_name = self.themes.current_theme().name.clone();
            egui::ComboBox::from_label("Theme")
                .selected_text(current_name.clone())
                .show_ui(ui, |ui| {
                    let names: Vec<String> =
                        self.themes.list_themes().iter().map(|s| s.to_string()).collect();
                    for name in names {
                        if ui.selectable_label(name == current_name, &name).clicked()
                            && self.themes.set_current_theme(&name).is_ok()
                        {
                            self.graph.set_theme(self.themes.current_theme().clone());
                        }
                    }
                });
        });

        // Keep the mirrored config in sync for persistence.
        self.config.target_year = Some(self.graph.get_target_year());
        self.config.strategy_init_year = self.graph.get_strategy_init_year();
    }

    fn summary(&self, ui: &mut egui::Ui) {
        let (start, end) = self.graph.get_year_range();
        ui.label(format!(
            "Year Range: {}\u{2013}{}   Target: {}",
            start,
            end,
            self.graph.get_target_year()
        ));
        if let Ok(entries) = self.change_log.lock() {
            if let Some(latest) = entries.last() {
                ui.label(format!(
                    "on_change fired {} time(s), last year: {}",
                    entries.len(),
                    latest
                ));
            }
        }
    }
}

impl eframe::App for YearlineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.graph.show(ui);
            ui.add_space(8.0);
            self.summary(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        save_setting(storage, CONFIG_KEY, &self.config);
        save_setting(storage, THEME_KEY, &self.themes.current_theme().name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_config_round_trips_through_storage() {
        let mut storage = MockStorage {
            data: HashMap::new(),
        };
        let config = GraphConfig::new(2025, 2030).with_target_year(2027);
        save_setting(&mut storage, CONFIG_KEY, &config);

        let loaded: GraphConfig =
            load_setting(Some(&storage), CONFIG_KEY, GraphConfig::new(2000, 2001));
        assert_eq!(loaded.start_year, 2025);
        assert_eq!(loaded.target_year, Some(2027));
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        let storage = MockStorage {
            data: HashMap::new(),
        };
        let loaded: String = load_setting(Some(&storage), THEME_KEY, "Dark".to_string());
        assert_eq!(loaded, "Dark");
    }
}
