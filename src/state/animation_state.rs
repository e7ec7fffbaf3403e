//! Reveal-animation progress state.
//!
//! This module tracks the single global progress value that drives the
//! eased left-to-right reveal of the curve and markers. The target pulse is
//! deliberately not driven from here: it runs off wall-clock time so it keeps
//! breathing after the reveal completes.

use crate::domain::animation;

/// Fixed per-frame progress step; the reveal takes ~50 frames.
const PROGRESS_STEP: f32 = 0.02;

/// State for the reveal animation.
///
/// Responsibilities:
/// - Advancing the global progress toward 1.0 each frame
/// - Replaying the reveal when the configuration changes
/// - Reporting eased progress to the renderers
#[derive(Debug, Clone)]
pub struct AnimationState {
    /// Raw progress in [0, 1], advanced by a fixed step per frame
    progress: f32,
    /// True while progress has not yet reached 1.0
    is_animating: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Creates animation state at the start of a reveal.
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            is_animating: true,
        }
    }

    /// Returns true while the reveal is still in flight.
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Raw global progress in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Eased global progress, used to clip the curve reveal.
    pub fn eased_progress(&self) -> f32 {
        animation::ease_out_cubic(self.progress)
    }

    /// Eased local reveal for the marker at normalized position `t`.
    pub fn marker_reveal(&self, t: f32) -> f32 {
        animation::marker_reveal(self.progress, t)
    }

    /// Advances the reveal by one frame step. Call once per rendered frame.
    pub fn tick(&mut self) {
        if !self.is_animating {
            return;
        }
        self.progress += PROGRESS_STEP;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.is_animating = false;
        }
    }

    /// Restarts the reveal from zero. Called when the target year or the
    /// year range changes.
    pub fn replay(&mut self) {
        self.progress = 0.0;
        self.is_animating = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_settles_at_one() {
        let mut anim = AnimationState::new();
        for _ in 0..200 {
            anim.tick();
        }
        assert!(!anim.is_animating());
        assert_eq!(anim.progress(), 1.0);
        assert_eq!(anim.eased_progress(), 1.0);
    }

    #[test]
    fn test_tick_after_settle_is_stable() {
        let mut anim = AnimationState::new();
        for _ in 0..200 {
            anim.tick();
        }
        anim.tick();
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_replay_restarts() {
        let mut anim = AnimationState::new();
        for _ in 0..200 {
            anim.tick();
        }
        anim.replay();
        assert!(anim.is_animating());
        assert_eq!(anim.progress(), 0.0);
    }
}
