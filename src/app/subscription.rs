// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Nothing is subscribed while the app is idle: the overlay contributes its
//! listeners and tick only while a clip is open, and the transition tick
//! only runs while a page slides in.

use super::Message;
use crate::config::UI_TICK_INTERVAL;
use crate::ui::video_overlay;
use iced::{time, Subscription};

/// Routes overlay listeners and ticks into the application.
pub fn create_overlay_subscription(overlay: &video_overlay::State) -> Subscription<Message> {
    overlay.subscription().map(Message::Overlay)
}

/// Creates the tick driving the page transition.
pub fn create_transition_subscription(running: bool) -> Subscription<Message> {
    if running {
        time::every(UI_TICK_INTERVAL).map(Message::TransitionTick)
    } else {
        Subscription::none()
    }
}
