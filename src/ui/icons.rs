// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`;
//! handles are cached using `OnceLock`. Color comes from the `svg` style at
//! the call site, so one asset serves every theme.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let play_button = button(icons::play().width(24).height(24));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `close` not `dismiss_video`).

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines an icon function with a cached handle, created on first access.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Video Playback Icons
// =============================================================================

define_icon!(play, "play.svg", "Play icon: triangle pointing right.");
define_icon!(pause, "pause.svg", "Pause icon: two vertical bars.");
define_icon!(volume, "volume.svg", "Volume icon: speaker with sound waves.");
define_icon!(
    volume_mute,
    "volume_mute.svg",
    "Volume mute icon: speaker with X (crossed out)."
);
define_icon!(close, "close.svg", "Close icon: diagonal cross.");

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(
    chevron_right,
    "chevron_right.svg",
    "Chevron pointing right: collapsed section, forward link."
);
define_icon!(
    chevron_down,
    "chevron_down.svg",
    "Chevron pointing down: expanded section."
);

// =============================================================================
// Workout Icons
// =============================================================================

define_icon!(clock, "clock.svg", "Clock face: duration.");
define_icon!(target, "target.svg", "Concentric circles: difficulty or goal.");
define_icon!(calendar, "calendar.svg", "Calendar page: frequency.");
define_icon!(dumbbell, "dumbbell.svg", "Dumbbell: brand mark, exercise count.");
define_icon!(
    arrow_up_circle,
    "arrow_up_circle.svg",
    "Upward arrow in a circle: push movements."
);
define_icon!(
    arrow_down_circle,
    "arrow_down_circle.svg",
    "Downward arrow in a circle: pull movements."
);
define_icon!(zap, "zap.svg", "Lightning bolt: leg power.");
