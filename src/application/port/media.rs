// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! A media element loads one source and plays it. Every request is
//! asynchronous: the call only asks for a change, and the element later
//! reports what actually happened through [`MediaEvent`]s. Callers must
//! mirror state from those events rather than from their own requests,
//! since a platform is free to refuse or delay any of them.
//!
//! # Lifecycle
//!
//! 1. Obtain an element from a [`MediaElementFactory`]
//! 2. Call [`MediaElement::load`]
//! 3. Issue play/pause/mute requests
//! 4. Drain [`MediaElement::poll_event`] until it returns `None`
//! 5. Drop the element to release the backend

use crate::domain::error::MediaError;
use crate::domain::media::{MediaSource, PlayOrigin, VideoFrame};
use std::time::Duration;

/// Notification emitted by a media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback started.
    Playing,
    /// Playback paused (explicitly or at end of stream).
    Paused,
    /// The mute state changed.
    VolumeChanged { muted: bool },
    /// A play request was refused; the element stays paused.
    PlayRejected {
        origin: PlayOrigin,
        reason: MediaError,
    },
    /// A new frame is ready to be shown.
    Frame(VideoFrame),
    /// The end of the stream was reached.
    Ended,
    /// A non-fatal load or decode failure.
    Error(MediaError),
}

/// Port for a single playable media element.
///
/// Implementations must be `Send`; they are owned by the UI thread but may
/// be created elsewhere.
pub trait MediaElement: Send {
    /// Starts loading `source`. Returns once loading has begun; failures
    /// that happen afterwards are reported as [`MediaEvent::Error`].
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if loading cannot even be started.
    fn load(&mut self, source: &MediaSource) -> Result<(), MediaError>;

    /// Asks for playback to start. Answered by `Playing` or `PlayRejected`.
    fn request_play(&mut self, origin: PlayOrigin);

    /// Asks for playback to pause. Answered by `Paused`.
    fn request_pause(&mut self);

    /// Asks for the mute state to change. Answered by `VolumeChanged`.
    fn set_muted(&mut self, muted: bool);

    /// Moves the playback position back to the start.
    fn rewind(&mut self);

    /// Current playback position.
    fn position(&self) -> Duration;

    /// Returns the next pending event, if any. Never blocks.
    fn poll_event(&mut self) -> Option<MediaEvent>;
}

/// Creates media elements for new playback sessions.
pub trait MediaElementFactory: Send + Sync {
    fn create_element(&self) -> Box<dyn MediaElement>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn _assert_object_safe(_: &dyn MediaElement, _: &dyn MediaElementFactory) {}

    /// Confirms every request immediately.
    #[derive(Default)]
    struct EchoElement {
        loaded: bool,
        position: Duration,
        events: VecDeque<MediaEvent>,
    }

    impl MediaElement for EchoElement {
        fn load(&mut self, _source: &MediaSource) -> Result<(), MediaError> {
            self.loaded = true;
            Ok(())
        }

        fn request_play(&mut self, origin: PlayOrigin) {
            if self.loaded {
                self.events.push_back(MediaEvent::Playing);
            } else {
                self.events.push_back(MediaEvent::PlayRejected {
                    origin,
                    reason: MediaError::NotLoaded,
                });
            }
        }

        fn request_pause(&mut self) {
            self.events.push_back(MediaEvent::Paused);
        }

        fn set_muted(&mut self, muted: bool) {
            self.events.push_back(MediaEvent::VolumeChanged { muted });
        }

        fn rewind(&mut self) {
            self.position = Duration::ZERO;
        }

        fn position(&self) -> Duration {
            self.position
        }

        fn poll_event(&mut self) -> Option<MediaEvent> {
            self.events.pop_front()
        }
    }

    #[test]
    fn requests_are_answered_through_events() {
        let mut element = EchoElement::default();
        element.request_play(PlayOrigin::User);
        assert!(matches!(
            element.poll_event(),
            Some(MediaEvent::PlayRejected {
                reason: MediaError::NotLoaded,
                ..
            })
        ));

        element.load(&MediaSource::new("clip.mp4")).unwrap();
        element.request_play(PlayOrigin::Autoplay);
        element.set_muted(true);
        assert_eq!(element.poll_event(), Some(MediaEvent::Playing));
        assert_eq!(
            element.poll_event(),
            Some(MediaEvent::VolumeChanged { muted: true })
        );
        assert_eq!(element.poll_event(), None);
    }
}
