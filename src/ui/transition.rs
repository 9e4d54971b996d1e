// SPDX-License-Identifier: MPL-2.0
//! Page transition played on every route change.
//!
//! The incoming page fades in while sliding up from [`PAGE_TRANSITION_OFFSET`]
//! to its rest position over [`PAGE_TRANSITION_DURATION`], following a
//! cubic-bezier easing curve. Progress is sampled on ticks, so rendering
//! stays pure. The outgoing page is replaced at once; it does not animate out.

use crate::config::{PAGE_TRANSITION_DURATION, PAGE_TRANSITION_EASING, PAGE_TRANSITION_OFFSET};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    started_at: Option<Instant>,
    progress: f32,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            started_at: None,
            progress: 1.0,
        }
    }
}

impl Transition {
    /// Restarts the transition from the beginning.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.progress = 0.0;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Samples the transition at `now`. Returns whether it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started_at);
        self.progress =
            (elapsed.as_secs_f32() / PAGE_TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        if self.progress >= 1.0 {
            self.started_at = None;
        }
        self.is_running()
    }

    /// Linear progress in `[0, 1]`; `1.0` when idle.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Vertical offset of the page, in logical pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        PAGE_TRANSITION_OFFSET * (1.0 - ease(self.progress))
    }

    /// Opacity of the page in `[0, 1]`, eased like the offset.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        ease(self.progress)
    }
}

/// The transition easing curve.
#[must_use]
pub fn ease(t: f32) -> f32 {
    let (x1, y1, x2, y2) = PAGE_TRANSITION_EASING;
    cubic_bezier(x1, y1, x2, y2, t)
}

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` evaluated at time `t`.
///
/// Finds the curve parameter whose x equals `t` (Newton steps, with
/// bisection as fallback) and returns the matching y.
#[must_use]
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }

    let mut s = t;
    for _ in 0..8 {
        let error = bezier(x1, x2, s) - t;
        if error.abs() < 1e-6 {
            return bezier(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - error / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = bezier(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(y1, y2, s)
}

/// One coordinate of a bezier with end points 0 and 1.
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::time::Duration;

    #[test]
    fn easing_end_points_are_fixed() {
        assert_abs_diff_eq!(ease(0.0), 0.0);
        assert_abs_diff_eq!(ease(1.0), 1.0);
    }

    #[test]
    fn easing_matches_reference_curve() {
        assert_abs_diff_eq!(ease(0.25), 0.2366, epsilon = 1e-3);
        assert_abs_diff_eq!(ease(0.5), 0.7756, epsilon = 1e-3);
        assert_abs_diff_eq!(ease(0.75), 0.9594, epsilon = 1e-3);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = ease(step as f32 / 100.0);
            assert!(value >= previous - 1e-5, "dip at step {step}");
            previous = value;
        }
    }

    #[test]
    fn linear_bezier_is_identity() {
        for t in [0.1, 0.3, 0.6, 0.9] {
            assert_abs_diff_eq!(cubic_bezier(0.25, 0.25, 0.75, 0.75, t), t, epsilon = 1e-4);
        }
    }

    #[test]
    fn idle_transition_has_no_offset() {
        let transition = Transition::default();
        assert!(!transition.is_running());
        assert_abs_diff_eq!(transition.offset(), 0.0);
    }

    #[test]
    fn transition_slides_up_then_stops() {
        let start = Instant::now();
        let mut transition = Transition::default();
        transition.start(start);
        assert_abs_diff_eq!(transition.offset(), PAGE_TRANSITION_OFFSET);

        assert!(transition.tick(start + Duration::from_millis(200)));
        let halfway = transition.offset();
        assert!(halfway > 0.0 && halfway < PAGE_TRANSITION_OFFSET);

        assert!(!transition.tick(start + PAGE_TRANSITION_DURATION));
        assert!(!transition.is_running());
        assert_abs_diff_eq!(transition.offset(), 0.0);
    }

    #[test]
    fn page_fades_in_alongside_the_slide() {
        let start = Instant::now();
        let mut transition = Transition::default();
        assert_abs_diff_eq!(transition.opacity(), 1.0);

        transition.start(start);
        assert_abs_diff_eq!(transition.opacity(), 0.0);

        transition.tick(start + Duration::from_millis(200));
        let opacity = transition.opacity();
        assert!(opacity > 0.0 && opacity < 1.0);
        assert_abs_diff_eq!(
            transition.offset(),
            PAGE_TRANSITION_OFFSET * (1.0 - opacity),
            epsilon = 1e-4
        );

        transition.tick(start + PAGE_TRANSITION_DURATION);
        assert_abs_diff_eq!(transition.opacity(), 1.0);
    }

    #[test]
    fn restart_resets_progress() {
        let start = Instant::now();
        let mut transition = Transition::default();
        transition.start(start);
        transition.tick(start + Duration::from_millis(300));
        transition.start(start + Duration::from_millis(300));
        assert_abs_diff_eq!(transition.progress(), 0.0);
    }
}
