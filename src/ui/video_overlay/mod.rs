// SPDX-License-Identifier: MPL-2.0
//! Video overlay widget.
//!
//! Plays one exercise clip on top of the current page. The widget owns at
//! most one [`PlaybackSession`]; every way of dismissing it (backdrop,
//! close button, Escape, navigation, opening another clip) goes through
//! [`State::close`], which pauses, rewinds and reports [`Effect::Closed`]
//! exactly once.
//!
//! The host forwards [`Message`]s to [`State::handle`] together with the
//! current instant, maps [`State::subscription`] into its own subscription
//! and layers [`State::view`] over the page.

pub mod controls;
pub mod listeners;
mod session;
mod view;

pub use listeners::{ListenerRegistry, ListenerScope};
pub use session::PlaybackSession;

use crate::application::port::MediaElementFactory;
use crate::config::UI_TICK_INTERVAL;
use crate::domain::media::MediaSource;
use crate::i18n::fluent::I18n;
use iced::keyboard::{self, key::Named};
use iced::{time, Element, Subscription};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Messages handled by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Open { source: MediaSource, title: String },
    Close,
    BackdropPressed,
    CloseButtonPressed,
    TogglePlayback,
    ToggleMute,
    PointerMoved,
    KeyPressed(keyboard::Key),
    Tick,
}

/// What the host needs to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A session was dismissed.
    Closed,
}

pub struct State {
    factory: Arc<dyn MediaElementFactory>,
    listeners: ListenerRegistry,
    session: Option<PlaybackSession>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("listeners", &self.listeners.active())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(factory: Arc<dyn MediaElementFactory>) -> Self {
        Self {
            factory,
            listeners: ListenerRegistry::new(),
            session: None,
        }
    }

    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        let effect = match msg {
            Message::Open { source, title } => self.open(source, title, now),
            Message::Close | Message::BackdropPressed | Message::CloseButtonPressed => self.close(),
            Message::KeyPressed(keyboard::Key::Named(Named::Escape)) => self.close(),
            Message::KeyPressed(_) => Effect::None,
            Message::TogglePlayback => {
                if let Some(session) = self.session.as_mut() {
                    session.toggle_playback();
                }
                Effect::None
            }
            Message::ToggleMute => {
                if let Some(session) = self.session.as_mut() {
                    session.toggle_mute();
                }
                Effect::None
            }
            Message::PointerMoved => {
                if let Some(session) = self.session.as_mut() {
                    session.pointer_moved(now);
                }
                Effect::None
            }
            Message::Tick => {
                if let Some(session) = self.session.as_mut() {
                    session.tick(now);
                }
                Effect::None
            }
        };

        if let Some(session) = self.session.as_mut() {
            session.drain_events(now);
        }
        effect
    }

    /// Starts a session, replacing any open one.
    ///
    /// Returns [`Effect::Closed`] when a previous session was dismissed.
    pub fn open(&mut self, source: MediaSource, title: impl Into<String>, now: Instant) -> Effect {
        let replaced = self.close();
        let element = self.factory.create_element();
        let scope = self.listeners.acquire();
        self.session = Some(PlaybackSession::start(
            source,
            title.into(),
            element,
            scope,
            now,
        ));
        replaced
    }

    /// Pauses, rewinds and drops the session. No-op when closed.
    pub fn close(&mut self) -> Effect {
        match self.session.take() {
            Some(mut session) => {
                session.stop();
                Effect::Closed
            }
            None => Effect::None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.session.as_ref().is_some_and(PlaybackSession::is_playing)
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.session.as_ref().is_some_and(PlaybackSession::is_muted)
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(PlaybackSession::controls_visible)
    }

    /// Playback position of the open session, zero when closed.
    #[must_use]
    pub fn position(&self) -> Duration {
        self.session
            .as_ref()
            .map_or(Duration::ZERO, PlaybackSession::position)
    }

    /// Registry observing the listener scopes handed to sessions.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Listeners and the tick driving the auto-hide deadline, only while a
    /// session is open.
    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        match &self.session {
            Some(session) => Subscription::batch([
                session.listener_subscription(),
                time::every(UI_TICK_INTERVAL).map(|_| Message::Tick),
            ]),
            None => Subscription::none(),
        }
    }

    /// The overlay layer, or nothing when closed.
    #[must_use]
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        self.session
            .as_ref()
            .map(|session| view::view(session, i18n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MediaEvent;
    use crate::domain::error::MediaError;
    use crate::domain::media::PlayOrigin;
    use crate::test_utils::{Call, Script, ScriptedFactory};

    fn overlay(script: Script) -> (State, Arc<ScriptedFactory>) {
        let factory = Arc::new(ScriptedFactory::new(script));
        let state = State::new(factory.clone());
        (state, factory)
    }

    fn open(state: &mut State, now: Instant) -> Effect {
        state.handle(
            Message::Open {
                source: MediaSource::new("clip.mp4"),
                title: "Squat".into(),
            },
            now,
        )
    }

    #[test]
    fn open_autoplays_when_allowed() {
        let (mut state, factory) = overlay(Script::default());
        assert_eq!(open(&mut state, Instant::now()), Effect::None);

        assert!(state.is_open());
        assert!(state.is_playing());
        assert!(state.controls_visible());
        let session = state.session().expect("open session");
        assert_eq!(session.title(), "Squat");
        assert_eq!(session.source().as_str(), "clip.mp4");

        let tracker = factory.last_tracker().expect("element created");
        assert_eq!(
            tracker.calls(),
            vec![
                Call::Load(MediaSource::new("clip.mp4")),
                Call::Play(PlayOrigin::Autoplay)
            ]
        );
    }

    #[test]
    fn declined_autoplay_leaves_session_open_and_paused() {
        let (mut state, _) = overlay(Script::autoplay_blocked());
        open(&mut state, Instant::now());

        assert!(state.is_open());
        assert!(!state.is_playing());
        assert!(state.controls_visible());
    }

    #[test]
    fn close_pauses_rewinds_and_reports_once() {
        let (mut state, factory) = overlay(Script::default());
        open(&mut state, Instant::now());
        let tracker = factory.last_tracker().expect("element");

        assert_eq!(state.close(), Effect::Closed);
        assert_eq!(state.close(), Effect::None);

        assert!(!state.is_open());
        assert!(!state.is_playing());
        assert_eq!(tracker.position(), Duration::ZERO);
        assert!(tracker.is_dropped());
        let calls = tracker.calls();
        assert_eq!(&calls[calls.len() - 2..], &[Call::Pause, Call::Rewind]);
    }

    #[test]
    fn every_dismissal_path_closes() {
        for dismiss in [
            Message::Close,
            Message::BackdropPressed,
            Message::CloseButtonPressed,
            Message::KeyPressed(keyboard::Key::Named(Named::Escape)),
        ] {
            let (mut state, _) = overlay(Script::default());
            open(&mut state, Instant::now());
            assert_eq!(state.handle(dismiss.clone(), Instant::now()), Effect::Closed, "{dismiss:?}");
            assert!(!state.is_open());
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let (mut state, _) = overlay(Script::default());
        open(&mut state, Instant::now());
        let effect = state.handle(
            Message::KeyPressed(keyboard::Key::Character("q".into())),
            Instant::now(),
        );
        assert_eq!(effect, Effect::None);
        assert!(state.is_open());
    }

    #[test]
    fn toggles_wait_for_confirmation() {
        let (mut state, factory) = overlay(Script::manual());
        open(&mut state, Instant::now());
        let tracker = factory.last_tracker().expect("element");

        state.handle(Message::TogglePlayback, Instant::now());
        state.handle(Message::ToggleMute, Instant::now());
        assert!(!state.is_playing());
        assert!(!state.is_muted());

        tracker.push_event(MediaEvent::Playing);
        tracker.push_event(MediaEvent::VolumeChanged { muted: true });
        state.handle(Message::Tick, Instant::now());
        assert!(state.is_playing());
        assert!(state.is_muted());
    }

    #[test]
    fn toggling_mute_twice_restores_it() {
        let (mut state, _) = overlay(Script::default());
        open(&mut state, Instant::now());
        let before = state.is_muted();

        state.handle(Message::ToggleMute, Instant::now());
        assert_ne!(state.is_muted(), before);
        state.handle(Message::ToggleMute, Instant::now());
        assert_eq!(state.is_muted(), before);
    }

    #[test]
    fn toggle_playback_pauses_when_playing() {
        let (mut state, factory) = overlay(Script::default());
        open(&mut state, Instant::now());
        state.handle(Message::TogglePlayback, Instant::now());

        assert!(!state.is_playing());
        let tracker = factory.last_tracker().expect("element");
        assert_eq!(tracker.calls().last(), Some(&Call::Pause));
    }

    #[test]
    fn controls_hide_after_delay_while_playing() {
        let (mut state, _) = overlay(Script::default());
        let Some(start) = Instant::now().checked_sub(Duration::from_secs(10)) else {
            return;
        };
        open(&mut state, start);

        state.handle(Message::Tick, start + Duration::from_millis(2999));
        assert!(state.controls_visible());
        state.handle(Message::Tick, start + Duration::from_millis(3000));
        assert!(!state.controls_visible());

        state.handle(Message::PointerMoved, start + Duration::from_secs(4));
        assert!(state.controls_visible());
    }

    #[test]
    fn media_errors_change_nothing() {
        let (mut state, factory) = overlay(Script::default());
        open(&mut state, Instant::now());
        let tracker = factory.last_tracker().expect("element");
        let before = (state.is_playing(), state.is_muted(), state.controls_visible());

        tracker.push_event(MediaEvent::Error(MediaError::DecodeFailed("corrupt".into())));
        state.handle(Message::Tick, Instant::now());

        assert_eq!(
            (state.is_playing(), state.is_muted(), state.controls_visible()),
            before
        );
        assert!(state.is_open());
    }

    #[test]
    fn pending_play_then_pause_ends_paused() {
        let (mut state, factory) = overlay(Script::manual());
        open(&mut state, Instant::now());
        let tracker = factory.last_tracker().expect("element");

        tracker.push_event(MediaEvent::Playing);
        tracker.push_event(MediaEvent::Paused);
        state.handle(Message::Tick, Instant::now());

        assert!(!state.is_playing());
        assert_eq!(tracker.pending_events(), 0);
    }

    #[test]
    fn frames_are_kept_for_rendering() {
        let (mut state, factory) = overlay(Script::default());
        open(&mut state, Instant::now());
        assert!(state.session().and_then(PlaybackSession::frame).is_none());

        let frame = crate::domain::media::VideoFrame::new(2, 2, vec![0; 16]).expect("frame");
        factory
            .last_tracker()
            .expect("element")
            .push_event(MediaEvent::Frame(frame));
        state.handle(Message::Tick, Instant::now());
        assert!(state.session().and_then(PlaybackSession::frame).is_some());
    }

    #[test]
    fn reopening_closes_previous_session_first() {
        let (mut state, factory) = overlay(Script::default());
        open(&mut state, Instant::now());
        let effect = state.handle(
            Message::Open {
                source: MediaSource::new("lunge.mp4"),
                title: "Lunge".into(),
            },
            Instant::now(),
        );

        assert_eq!(effect, Effect::Closed);
        let trackers = factory.trackers();
        assert_eq!(trackers.len(), 2);
        assert!(trackers[0].is_dropped());
        assert_eq!(trackers[0].position(), Duration::ZERO);
        assert_eq!(state.listeners().active(), 1);
        assert_eq!(state.session().map(PlaybackSession::title), Some("Lunge"));
    }

    #[test]
    fn listeners_follow_the_session() {
        let (mut state, _) = overlay(Script::default());
        let registry = state.listeners().clone();
        assert_eq!(registry.active(), 0);

        open(&mut state, Instant::now());
        assert_eq!(registry.active(), 1);
        state.close();
        assert_eq!(registry.active(), 0);

        open(&mut state, Instant::now());
        drop(state);
        assert_eq!(registry.active(), 0);
    }

    #[test]
    fn messages_while_closed_are_ignored() {
        let (mut state, factory) = overlay(Script::default());
        for msg in [
            Message::TogglePlayback,
            Message::ToggleMute,
            Message::PointerMoved,
            Message::Tick,
            Message::Close,
        ] {
            assert_eq!(state.handle(msg, Instant::now()), Effect::None);
        }
        assert!(factory.trackers().is_empty());
        assert_eq!(state.position(), Duration::ZERO);
    }
}
