// SPDX-License-Identifier: MPL-2.0
//! Scroll state of the page area below the navbar.
//!
//! The page scrollable is addressed by [`SCROLLABLE_ID`]. Its offset is
//! mirrored from `on_scroll` so the navbar can change style once the page
//! moves, and [`PageScroll::reset`] snaps back to the top on navigation.

use crate::config::NAVBAR_SCROLL_THRESHOLD;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::Task;

/// Identifier used for the page scrollable widget.
pub const SCROLLABLE_ID: &str = "page-scrollable";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageScroll {
    offset_y: f32,
}

impl PageScroll {
    /// Records the offset reported by the scrollable.
    pub fn scrolled_to(&mut self, offset: AbsoluteOffset) {
        self.offset_y = offset.y.max(0.0);
    }

    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Whether the page has moved past [`NAVBAR_SCROLL_THRESHOLD`].
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.offset_y > NAVBAR_SCROLL_THRESHOLD
    }

    /// Returns the page to the top.
    #[must_use]
    pub fn reset<Message: Send + 'static>(&mut self) -> Task<Message> {
        self.offset_y = 0.0;
        operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 0.0 })
    }
}
