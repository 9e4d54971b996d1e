// SPDX-License-Identifier: MPL-2.0
//! Media element used when no decoding backend is compiled in.
//!
//! Loading succeeds so the overlay still opens, but the element immediately
//! reports [`MediaError::BackendUnavailable`] and declines every play request.

use crate::application::port::{MediaElement, MediaElementFactory, MediaEvent};
use crate::domain::error::MediaError;
use crate::domain::media::{AutoplayPolicy, MediaSource, PlayOrigin};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct UnavailableElement {
    muted: bool,
    events: VecDeque<MediaEvent>,
}

impl UnavailableElement {
    #[must_use]
    pub fn new(start_muted: bool) -> Self {
        Self {
            muted: start_muted,
            events: VecDeque::new(),
        }
    }
}

impl MediaElement for UnavailableElement {
    fn load(&mut self, source: &MediaSource) -> Result<(), MediaError> {
        tracing::debug!(%source, "no media backend, source will not play");
        self.events
            .push_back(MediaEvent::VolumeChanged { muted: self.muted });
        self.events
            .push_back(MediaEvent::Error(MediaError::BackendUnavailable));
        Ok(())
    }

    fn request_play(&mut self, origin: PlayOrigin) {
        self.events.push_back(MediaEvent::PlayRejected {
            origin,
            reason: MediaError::BackendUnavailable,
        });
    }

    fn request_pause(&mut self) {
        self.events.push_back(MediaEvent::Paused);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.events.push_back(MediaEvent::VolumeChanged { muted });
    }

    fn rewind(&mut self) {}

    fn position(&self) -> Duration {
        Duration::ZERO
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.pop_front()
    }
}

/// Factory for [`UnavailableElement`].
///
/// The autoplay policy is accepted for signature parity with real backends;
/// every request is declined regardless.
#[derive(Debug, Clone, Copy)]
pub struct UnavailableElementFactory {
    start_muted: bool,
}

impl UnavailableElementFactory {
    #[must_use]
    pub fn new(_policy: AutoplayPolicy, start_muted: bool) -> Self {
        Self { start_muted }
    }
}

impl MediaElementFactory for UnavailableElementFactory {
    fn create_element(&self) -> Box<dyn MediaElement> {
        Box::new(UnavailableElement::new(self.start_muted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reports_missing_backend() {
        let mut element = UnavailableElement::new(false);
        element.load(&MediaSource::new("clip.mp4")).unwrap();
        assert_eq!(
            element.poll_event(),
            Some(MediaEvent::VolumeChanged { muted: false })
        );
        assert_eq!(
            element.poll_event(),
            Some(MediaEvent::Error(MediaError::BackendUnavailable))
        );
        assert_eq!(element.poll_event(), None);
    }

    #[test]
    fn every_play_request_is_declined() {
        let factory = UnavailableElementFactory::new(AutoplayPolicy::Allow, false);
        let mut element = factory.create_element();
        for origin in [PlayOrigin::Autoplay, PlayOrigin::User] {
            element.request_play(origin);
            assert_eq!(
                element.poll_event(),
                Some(MediaEvent::PlayRejected {
                    origin,
                    reason: MediaError::BackendUnavailable,
                })
            );
        }
    }
}
