// SPDX-License-Identifier: MPL-2.0
//! One open playback session: from `open` to `close`.

use super::controls;
use super::listeners::ListenerScope;
use crate::application::port::{MediaElement, MediaEvent};
use crate::domain::media::{MediaSource, PlayOrigin, VideoFrame};
use iced::widget::image;
use std::time::{Duration, Instant};

/// Observed state of the clip being played.
///
/// `is_playing` and `is_muted` change only when the element confirms a
/// change through an event. Requests never touch them.
pub struct PlaybackSession {
    source: MediaSource,
    title: String,
    element: Box<dyn MediaElement>,
    is_playing: bool,
    is_muted: bool,
    controls: controls::State,
    frame: Option<image::Handle>,
    listeners: ListenerScope,
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("source", &self.source)
            .field("title", &self.title)
            .field("is_playing", &self.is_playing)
            .field("is_muted", &self.is_muted)
            .field("controls_visible", &self.controls.is_visible())
            .finish_non_exhaustive()
    }
}

impl PlaybackSession {
    /// Loads `source` into `element` and asks for autoplay.
    pub(super) fn start(
        source: MediaSource,
        title: String,
        mut element: Box<dyn MediaElement>,
        listeners: ListenerScope,
        now: Instant,
    ) -> Self {
        tracing::debug!(source = %source, %title, "opening video overlay");
        match element.load(&source) {
            Ok(()) => element.request_play(PlayOrigin::Autoplay),
            Err(err) => tracing::warn!(source = %source, "failed to load clip: {err}"),
        }

        Self {
            source,
            title,
            element,
            is_playing: false,
            is_muted: false,
            controls: controls::State::new(now),
            frame: None,
            listeners,
        }
    }

    #[must_use]
    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }

    #[must_use]
    pub fn position(&self) -> Duration {
        self.element.position()
    }

    /// Latest decoded frame, if any arrived yet.
    #[must_use]
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }

    pub(super) fn listener_subscription(&self) -> iced::Subscription<super::Message> {
        self.listeners.subscription()
    }

    pub(super) fn toggle_playback(&mut self) {
        if self.is_playing {
            self.element.request_pause();
        } else {
            self.element.request_play(PlayOrigin::User);
        }
    }

    pub(super) fn toggle_mute(&mut self) {
        self.element.set_muted(!self.is_muted);
    }

    pub(super) fn pointer_moved(&mut self, now: Instant) {
        self.controls.handle(controls::Message::PointerMoved, now);
    }

    pub(super) fn tick(&mut self, now: Instant) {
        self.controls.handle(controls::Message::Tick, now);
    }

    /// Applies every event the element has ready, in delivery order.
    pub(super) fn drain_events(&mut self, now: Instant) {
        while let Some(event) = self.element.poll_event() {
            self.apply(event, now);
        }
    }

    fn apply(&mut self, event: MediaEvent, now: Instant) {
        match event {
            MediaEvent::Playing => self.set_playing(true, now),
            MediaEvent::Paused => self.set_playing(false, now),
            MediaEvent::VolumeChanged { muted } => self.is_muted = muted,
            MediaEvent::PlayRejected { origin, reason } => match origin {
                PlayOrigin::Autoplay => tracing::debug!("autoplay declined: {reason}"),
                PlayOrigin::User => tracing::warn!("play request rejected: {reason}"),
            },
            MediaEvent::Frame(frame) => self.frame = Some(frame_handle(frame)),
            MediaEvent::Ended => tracing::debug!(source = %self.source, "clip ended"),
            MediaEvent::Error(err) => tracing::warn!(source = %self.source, "media error: {err}"),
        }
    }

    fn set_playing(&mut self, playing: bool, now: Instant) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.controls
                .handle(controls::Message::PlaybackChanged { playing }, now);
        }
    }

    /// Pauses and rewinds. The session must be dropped afterwards.
    pub(super) fn stop(&mut self) {
        self.element.request_pause();
        self.element.rewind();
        self.is_playing = false;
        tracing::debug!(source = %self.source, "video overlay closed");
    }
}

fn frame_handle(frame: VideoFrame) -> image::Handle {
    let (width, height) = (frame.width(), frame.height());
    image::Handle::from_rgba(width, height, frame.into_rgba())
}
