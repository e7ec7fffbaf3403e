//! Reveal-animation math: easing and per-marker stagger.
//!
//! Pure functions shared by the animation state component and the renderers.
//! The reveal sweeps the curve left to right; each marker's local progress is
//! staggered by its normalized position so markers appear in year order.

/// Cubic ease-out: fast start, gentle settle. Input and output in `[0, 1]`.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Local reveal progress of the marker at normalized position `t`, given the
/// global reveal progress.
///
/// The marker starts revealing once the global progress passes `t * 0.5` and
/// completes over the following half unit, so the leftmost marker finishes
/// first and the rightmost last.
pub fn staggered_progress(global: f32, t: f32) -> f32 {
    ((global - t * 0.5) * 2.0).clamp(0.0, 1.0)
}

/// Eased local reveal for the marker at normalized position `t`.
pub fn marker_reveal(global: f32, t: f32) -> f32 {
    ease_out_cubic(staggered_progress(global, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_ease_monotonic_and_clamped() {
        let mut prev = 0.0;
        for i in 1..=10 {
            let v = ease_out_cubic(i as f32 / 10.0);
            assert!(v >= prev);
            prev = v;
        }
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(1.5), 1.0);
    }

    #[test]
    fn test_stagger_orders_markers() {
        // Mid-reveal, an earlier marker is always at least as revealed.
        let global = 0.4;
        assert!(staggered_progress(global, 0.0) >= staggered_progress(global, 0.5));
        assert!(staggered_progress(global, 0.5) >= staggered_progress(global, 1.0));
    }

    #[test]
    fn test_stagger_completes_for_all() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_eq!(staggered_progress(1.0, t), 1.0);
        }
    }

    #[test]
    fn test_stagger_clamps_before_start() {
        assert_eq!(staggered_progress(0.0, 1.0), 0.0);
        assert_eq!(marker_reveal(0.1, 1.0), 0.0);
    }
}
