// SPDX-License-Identifier: MPL-2.0
//! Auto-hide state machine for the overlay controls.
//!
//! `ControlsShown` ⇄ `ControlsHidden`. Controls hide only while playing and
//! only once [`CONTROLS_HIDE_DELAY`] has elapsed since the last qualifying
//! activity. Pointer movement and observed play/pause changes both count as
//! activity and show the controls again.
//!
//! Time is passed in by the caller so the machine stays deterministic.

use crate::config::CONTROLS_HIDE_DELAY;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
    playing: bool,
    last_activity: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Pointer moved over the overlay.
    PointerMoved,
    /// The observed play state changed.
    PlaybackChanged { playing: bool },
    /// Periodic deadline check.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    VisibilityChanged(bool),
}

impl State {
    /// Controls start shown, with the window starting at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            visible: true,
            playing: false,
            last_activity: now,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        match msg {
            Message::PointerMoved => self.activity(now),
            Message::PlaybackChanged { playing } => {
                self.playing = playing;
                self.activity(now)
            }
            Message::Tick => {
                let expired = now.saturating_duration_since(self.last_activity) >= CONTROLS_HIDE_DELAY;
                if self.visible && self.playing && expired {
                    self.visible = false;
                    Effect::VisibilityChanged(false)
                } else {
                    Effect::None
                }
            }
        }
    }

    fn activity(&mut self, now: Instant) -> Effect {
        self.last_activity = now;
        if self.visible {
            Effect::None
        } else {
            self.visible = true;
            Effect::VisibilityChanged(true)
        }
    }
}
