//! Year range and marker state management.
//!
//! This module encapsulates the year axis bounds and the marker years placed
//! on it, and enforces the one invariant the widget guarantees: every marker
//! year always lies within the current `[start_year, end_year]` range.

/// State for the year range and the markers placed on it.
///
/// Responsibilities:
/// - Holding the axis bounds and the target / strategy-init / current markers
/// - Rejecting out-of-range marker mutations (silent no-op, never a panic)
/// - Clamping existing markers when the range itself changes
#[derive(Debug, Clone)]
pub struct MarkerState {
    /// First year of the axis (inclusive)
    start_year: i32,
    /// Last year of the axis (inclusive), always > start_year
    end_year: i32,
    /// The selected target year, always within range
    target_year: i32,
    /// Optional strategy-init marker (dual-marker variant), within range
    strategy_init_year: Option<i32>,
    /// Optional decorative "today" indicator, deliberately unconstrained
    current_year: Option<i32>,
}

impl MarkerState {
    /// Creates marker state for the given range, clamping the initial markers
    /// into `[start_year, end_year]`.
    ///
    /// The caller guarantees `start_year < end_year`; `GraphConfig::build`
    /// validates this before constructing the state.
    pub fn new(
        start_year: i32,
        end_year: i32,
        target_year: i32,
        strategy_init_year: Option<i32>,
        current_year: Option<i32>,
    ) -> Self {
        Self {
            start_year,
            end_year,
            target_year: target_year.clamp(start_year, end_year),
            strategy_init_year: strategy_init_year.map(|y| y.clamp(start_year, end_year)),
            current_year,
        }
    }

    // ===== Queries =====

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn target_year(&self) -> i32 {
        self.target_year
    }

    pub fn strategy_init_year(&self) -> Option<i32> {
        self.strategy_init_year
    }

    pub fn current_year(&self) -> Option<i32> {
        self.current_year
    }

    /// Number of years on the axis, inclusive of both bounds.
    pub fn year_count(&self) -> i32 {
        self.end_year - self.start_year + 1
    }

    /// Returns true if `year` lies within the current range.
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }

    /// Returns true if the curve segment starting at `year` lies on the
    /// strategy span `[strategy_init_year, target_year)`. Segment styling
    /// is decided by the segment's start year.
    pub fn in_strategy_span(&self, year: i32) -> bool {
        match self.strategy_init_year {
            Some(init) => year >= init.min(self.target_year) && year < self.target_year.max(init),
            None => false,
        }
    }

    // ===== Mutations =====

    /// Sets the target year. Out-of-range input is a silent no-op.
    ///
    /// Returns true if the state changed.
    pub fn set_target_year(&mut self, year: i32) -> bool {
        if !self.contains(year) || year == self.target_year {
            return false;
        }
        self.target_year = year;
        true
    }

    /// Sets the strategy-init year. Out-of-range input is a silent no-op.
    /// Setting it on a single-marker graph promotes it to dual-marker.
    ///
    /// Returns true if the state changed.
    pub fn set_strategy_init_year(&mut self, year: i32) -> bool {
        if !self.contains(year) || self.strategy_init_year == Some(year) {
            return false;
        }
        self.strategy_init_year = Some(year);
        true
    }

    /// Sets the decorative current-year indicator (or clears it).
    pub fn set_current_year(&mut self, year: Option<i32>) {
        self.current_year = year;
    }

    /// Updates the axis bounds and clamps every marker into the new range.
    ///
    /// A degenerate range (`new_start >= new_end`) is a silent no-op.
    /// Returns true if the state changed.
    pub fn set_year_range(&mut self, new_start: i32, new_end: i32) -> bool {
        if new_start >= new_end {
            return false;
        }
        if new_start == self.start_year && new_end == self.end_year {
            return false;
        }
        self.start_year = new_start;
        self.end_year = new_end;
        self.target_year = self.target_year.clamp(new_start, new_end);
        self.strategy_init_year = self.strategy_init_year.map(|y| y.clamp(new_start, new_end));
        true
    }
}
