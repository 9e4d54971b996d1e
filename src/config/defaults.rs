// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and UI timing constants.
//!
//! # Categories
//!
//! - **Overlay**: Video overlay controls auto-hide
//! - **Transition**: Page transition animation
//! - **Scroll**: Page scroll reactions
//! - **Ticks**: Animation/polling cadence

use std::time::Duration;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Inactivity window after which overlay controls hide while playing.
pub const CONTROLS_HIDE_DELAY: Duration = Duration::from_millis(3000);

/// Caption shown in the overlay's bottom bar when no translation applies.
pub const DEFAULT_OVERLAY_CAPTION: &str = "Exercise Tutorial";

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the page transition.
pub const PAGE_TRANSITION_DURATION: Duration = Duration::from_millis(400);

/// Vertical offset (logical pixels) a page slides up from.
pub const PAGE_TRANSITION_OFFSET: f32 = 20.0;

/// Cubic-bezier control points of the page transition easing.
pub const PAGE_TRANSITION_EASING: (f32, f32, f32, f32) = (0.4, 0.0, 0.2, 1.0);

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll distance (logical pixels) past which the navbar gets its solid,
/// bordered background.
pub const NAVBAR_SCROLL_THRESHOLD: f32 = 20.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the UI tick while a session is open or a transition runs.
pub const UI_TICK_INTERVAL: Duration = Duration::from_millis(16);

// ==========================================================================
// Video Defaults
// ==========================================================================

/// Whether elements start muted.
pub const DEFAULT_START_MUTED: bool = false;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_is_shorter_than_hide_delay() {
        assert!(PAGE_TRANSITION_DURATION < CONTROLS_HIDE_DELAY);
    }

    #[test]
    fn tick_is_fine_enough_for_transition() {
        assert!(UI_TICK_INTERVAL * 10 <= PAGE_TRANSITION_DURATION);
    }
}
