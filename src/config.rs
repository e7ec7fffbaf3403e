//! Graph construction configuration.
//!
//! `GraphConfig` is the plain-data half of the construction contract: year
//! range, initial markers, and surface height. It is serializable so host
//! applications can persist it alongside their other settings. The change
//! callback is not part of the config; hosts attach it on the built graph
//! via `TimelineGraph::set_on_change`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default logical pixel height of the graph surface.
pub const DEFAULT_HEIGHT: f32 = 300.0;

/// Construction-time configuration for a [`crate::TimelineGraph`].
///
/// `start_year < end_year` is the one hard precondition; everything else is
/// clamped or defaulted. Marker years outside the range are clamped to the
/// nearest bound before the first render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// First year of the axis (inclusive)
    pub start_year: i32,
    /// Last year of the axis (inclusive)
    pub end_year: i32,
    /// Initial target marker; defaults to `end_year` when omitted
    pub target_year: Option<i32>,
    /// Initial strategy-init marker; present only in the dual-marker variant
    pub strategy_init_year: Option<i32>,
    /// Decorative "today" indicator; unconstrained
    pub current_year: Option<i32>,
    /// Logical pixel height of the graph surface
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_height() -> f32 {
    DEFAULT_HEIGHT
}

impl GraphConfig {
    /// Creates a configuration for the given year range with all optional
    /// fields unset and the default height.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            target_year: None,
            strategy_init_year: None,
            current_year: None,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_target_year(mut self, year: i32) -> Self {
        self.target_year = Some(year);
        self
    }

    pub fn with_strategy_init_year(mut self, year: i32) -> Self {
        self.strategy_init_year = Some(year);
        self
    }

    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Validates the hard precondition of the construction contract.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.start_year >= self.end_year {
            return Err(GraphError::InvalidRange {
                start_year: self.start_year,
                end_year: self.end_year,
            });
        }
        Ok(())
    }
}

/// Errors surfaced by graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// `start_year >= end_year`: the axis would have degenerate spacing.
    InvalidRange { start_year: i32, end_year: i32 },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidRange {
                start_year,
                end_year,
            } => write!(
                f,
                "invalid year range: start {} must be strictly before end {}",
                start_year, end_year
            ),
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_degenerate_range() {
        assert!(GraphConfig::new(2025, 2030).validate().is_ok());
        assert_eq!(
            GraphConfig::new(2030, 2030).validate(),
            Err(GraphError::InvalidRange {
                start_year: 2030,
                end_year: 2030
            })
        );
        assert!(GraphConfig::new(2031, 2025).validate().is_err());
    }

    #[test]
    fn test_serde_round_trip_with_defaults() {
        let json = r#"{"start_year":2025,"end_year":2030,"target_year":2027,"strategy_init_year":null,"current_year":null}"#;
        let config: GraphConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.target_year, Some(2027));
    }
}
