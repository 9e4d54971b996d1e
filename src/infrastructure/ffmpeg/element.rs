// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg`-backed media element.

use super::audio::{SharedSink, SinkState};
use super::decoder::{DecoderCommand, DecoderEvent, DecoderHandle};
use crate::application::port::{MediaElement, MediaElementFactory, MediaEvent};
use crate::domain::error::MediaError;
use crate::domain::media::{AutoplayPolicy, MediaSource, PlayOrigin};
use std::collections::VecDeque;
use std::time::Duration;

/// Media element playing one source through a decoder thread.
///
/// Mute is applied to the audio sink before it is reported, so a
/// `VolumeChanged` event always describes what is audible.
pub struct FfmpegElement {
    policy: AutoplayPolicy,
    audio: SharedSink,
    decoder: Option<DecoderHandle>,
    position: Duration,
    /// Events raised by the element itself, delivered before decoder events.
    pending: VecDeque<MediaEvent>,
}

impl FfmpegElement {
    #[must_use]
    pub fn new(policy: AutoplayPolicy, start_muted: bool) -> Self {
        Self {
            policy,
            audio: SinkState::shared(start_muted),
            decoder: None,
            position: Duration::ZERO,
            pending: VecDeque::new(),
        }
    }

    fn is_muted(&self) -> bool {
        self.audio.is_muted()
    }

    fn reject(&mut self, origin: PlayOrigin, reason: MediaError) {
        self.pending
            .push_back(MediaEvent::PlayRejected { origin, reason });
    }

    fn translate(&mut self, event: DecoderEvent) -> MediaEvent {
        match event {
            DecoderEvent::Playing => MediaEvent::Playing,
            DecoderEvent::Paused => MediaEvent::Paused,
            DecoderEvent::Frame { frame, pts_secs } => {
                self.position = Duration::from_secs_f64(pts_secs.max(0.0));
                MediaEvent::Frame(frame)
            }
            DecoderEvent::EndOfStream => MediaEvent::Ended,
            DecoderEvent::Error(err) => MediaEvent::Error(err),
        }
    }
}

impl MediaElement for FfmpegElement {
    fn load(&mut self, source: &MediaSource) -> Result<(), MediaError> {
        if source.is_blank() {
            return Err(MediaError::LoadFailed("empty media location".into()));
        }
        // A fresh sink keeps an exiting decoder from pausing the new one.
        let audio = SinkState::shared(self.is_muted());
        // Replacing the handle stops any previous decoder.
        self.decoder = Some(DecoderHandle::spawn(
            source.as_str().to_owned(),
            std::sync::Arc::clone(&audio),
        )?);
        self.audio = audio;
        self.position = Duration::ZERO;
        self.pending.push_back(MediaEvent::VolumeChanged {
            muted: self.is_muted(),
        });
        Ok(())
    }

    fn request_play(&mut self, origin: PlayOrigin) {
        if !self.policy.permits(origin, self.is_muted()) {
            self.reject(origin, MediaError::AutoplayDeclined);
            return;
        }
        let sent = self
            .decoder
            .as_ref()
            .is_some_and(|decoder| decoder.send(DecoderCommand::Play));
        if !sent {
            self.reject(origin, MediaError::NotLoaded);
        }
    }

    fn request_pause(&mut self) {
        let sent = self
            .decoder
            .as_ref()
            .is_some_and(|decoder| decoder.send(DecoderCommand::Pause));
        if !sent {
            // Nothing is running, so the element already is paused.
            self.pending.push_back(MediaEvent::Paused);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.audio.set_muted(muted);
        self.pending.push_back(MediaEvent::VolumeChanged { muted });
    }

    fn rewind(&mut self) {
        if let Some(decoder) = &self.decoder {
            decoder.send(DecoderCommand::Seek { target_secs: 0.0 });
        }
        self.position = Duration::ZERO;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        let event = self.decoder.as_mut()?.try_recv()?;
        Some(self.translate(event))
    }
}

/// Creates [`FfmpegElement`]s sharing one autoplay configuration.
#[derive(Debug, Clone, Copy)]
pub struct FfmpegElementFactory {
    policy: AutoplayPolicy,
    start_muted: bool,
}

impl FfmpegElementFactory {
    #[must_use]
    pub fn new(policy: AutoplayPolicy, start_muted: bool) -> Self {
        Self {
            policy,
            start_muted,
        }
    }
}

impl MediaElementFactory for FfmpegElementFactory {
    fn create_element(&self) -> Box<dyn MediaElement> {
        Box::new(FfmpegElement::new(self.policy, self.start_muted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(element: &mut FfmpegElement) -> Vec<MediaEvent> {
        std::iter::from_fn(|| element.pending.pop_front()).collect()
    }

    #[test]
    fn play_before_load_is_rejected() {
        let mut element = FfmpegElement::new(AutoplayPolicy::Allow, false);
        element.request_play(PlayOrigin::User);
        assert_eq!(
            drain(&mut element),
            vec![MediaEvent::PlayRejected {
                origin: PlayOrigin::User,
                reason: MediaError::NotLoaded,
            }]
        );
    }

    #[test]
    fn blocked_autoplay_is_declined_without_touching_decoder() {
        let mut element = FfmpegElement::new(AutoplayPolicy::Block, false);
        element.request_play(PlayOrigin::Autoplay);
        assert_eq!(
            drain(&mut element),
            vec![MediaEvent::PlayRejected {
                origin: PlayOrigin::Autoplay,
                reason: MediaError::AutoplayDeclined,
            }]
        );
    }

    #[test]
    fn mute_is_reported_and_unlocks_muted_autoplay() {
        let mut element = FfmpegElement::new(AutoplayPolicy::AllowMuted, false);
        element.set_muted(true);
        element.request_play(PlayOrigin::Autoplay);
        let events = drain(&mut element);
        assert_eq!(events[0], MediaEvent::VolumeChanged { muted: true });
        // Unloaded, so it is refused for lack of media rather than by policy.
        assert!(matches!(
            events[1],
            MediaEvent::PlayRejected {
                reason: MediaError::NotLoaded,
                ..
            }
        ));
    }

    #[test]
    fn mute_silences_the_sink_before_it_is_reported() {
        let mut element = FfmpegElement::new(AutoplayPolicy::Allow, false);
        element.audio.set_paused(false);
        assert!((element.audio.gain() - 1.0).abs() < f32::EPSILON);

        element.set_muted(true);
        assert!(element.audio.gain().abs() < f32::EPSILON);
        assert_eq!(
            drain(&mut element),
            vec![MediaEvent::VolumeChanged { muted: true }]
        );

        element.set_muted(false);
        assert!((element.audio.gain() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn blank_source_fails_to_load() {
        let mut element = FfmpegElement::new(AutoplayPolicy::Allow, false);
        assert!(matches!(
            element.load(&MediaSource::new("")),
            Err(MediaError::LoadFailed(_))
        ));
    }

    #[test]
    fn pause_without_decoder_confirms_immediately() {
        let mut element = FfmpegElement::new(AutoplayPolicy::Allow, false);
        element.request_pause();
        element.rewind();
        assert_eq!(drain(&mut element), vec![MediaEvent::Paused]);
        assert_eq!(element.position(), Duration::ZERO);
    }
}
