// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the video overlay widget.
//!
//! The overlay is driven through its public message API with a scripted
//! media element, so every scenario is deterministic and needs no decoder.

use fitflow::application::port::MediaEvent;
use fitflow::domain::error::MediaError;
use fitflow::domain::media::{MediaSource, PlayOrigin};
use fitflow::test_utils::{Call, ElementTracker, Script, ScriptedFactory};
use fitflow::ui::video_overlay::{Effect, Message, State};
use iced::keyboard::{key::Named, Key};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn overlay(script: Script) -> (State, Arc<ScriptedFactory>) {
    let factory = Arc::new(ScriptedFactory::new(script));
    (State::new(factory.clone()), factory)
}

fn open_squat(state: &mut State, now: Instant) -> Effect {
    state.handle(
        Message::Open {
            source: MediaSource::new("clip.mp4"),
            title: "Squat".to_string(),
        },
        now,
    )
}

fn tracker(factory: &ScriptedFactory) -> ElementTracker {
    factory.last_tracker().expect("an element should have been created")
}

/// A start instant far enough in the past to add offsets freely.
fn past() -> Instant {
    Instant::now()
        .checked_sub(Duration::from_secs(3600))
        .unwrap_or_else(Instant::now)
}

#[test]
fn test_close_always_stops_and_rewinds() {
    for script in [Script::default(), Script::autoplay_blocked(), Script::manual()] {
        let (mut state, factory) = overlay(script);
        open_squat(&mut state, Instant::now());
        let tracker = tracker(&factory);
        tracker.advance_to(Duration::from_secs(7));

        assert_eq!(state.close(), Effect::Closed);
        assert!(!state.is_playing());
        assert_eq!(tracker.position(), Duration::ZERO);
    }
}

#[test]
fn test_close_is_idempotent() {
    let (mut state, factory) = overlay(Script::default());
    open_squat(&mut state, Instant::now());

    let effects = [state.close(), state.close()];
    assert_eq!(effects, [Effect::Closed, Effect::None]);
    assert!(!state.is_open());
    assert!(!state.is_playing());

    // The second close reached no element.
    let calls = tracker(&factory).calls();
    assert_eq!(calls.iter().filter(|call| **call == Call::Rewind).count(), 1);
}

#[test]
fn test_controls_hide_only_after_three_seconds_of_play() {
    let start = past();
    let (mut state, _) = overlay(Script::default());
    open_squat(&mut state, start);
    assert!(state.is_playing());

    for elapsed in [16, 500, 1500, 2500, 2999] {
        state.handle(Message::Tick, start + Duration::from_millis(elapsed));
        assert!(state.controls_visible(), "hidden too early at {elapsed}ms");
    }

    state.handle(Message::Tick, start + Duration::from_millis(3000));
    assert!(!state.controls_visible());
}

#[test]
fn test_controls_never_hide_while_paused() {
    let start = past();
    let (mut state, _) = overlay(Script::autoplay_blocked());
    open_squat(&mut state, start);
    assert!(!state.is_playing());

    for minute in 0..60 {
        state.handle(Message::Tick, start + Duration::from_secs(60 * minute));
        assert!(state.controls_visible());
    }
}

#[test]
fn test_pointer_movement_restores_controls() {
    let start = past();
    let (mut state, _) = overlay(Script::default());
    open_squat(&mut state, start);
    state.handle(Message::Tick, start + Duration::from_secs(5));
    assert!(!state.controls_visible());

    let moved = start + Duration::from_secs(6);
    state.handle(Message::PointerMoved, moved);
    assert!(state.controls_visible());

    state.handle(Message::Tick, moved + Duration::from_millis(2500));
    assert!(state.controls_visible(), "window must restart on movement");
    state.handle(Message::Tick, moved + Duration::from_millis(3000));
    assert!(!state.controls_visible());
}

#[test]
fn test_open_with_successful_autoplay() {
    let (mut state, factory) = overlay(Script::default());
    assert_eq!(open_squat(&mut state, Instant::now()), Effect::None);

    assert!(state.is_open());
    assert!(state.is_playing());
    let session = state.session().expect("session");
    assert_eq!(session.title(), "Squat");
    assert_eq!(
        tracker(&factory).calls()[..2],
        [
            Call::Load(MediaSource::new("clip.mp4")),
            Call::Play(PlayOrigin::Autoplay)
        ]
    );
}

#[test]
fn test_open_with_declined_autoplay_is_not_an_error() {
    let (mut state, _) = overlay(Script::autoplay_blocked());
    assert_eq!(open_squat(&mut state, Instant::now()), Effect::None);

    assert!(state.is_open());
    assert!(!state.is_playing());

    // The user can still start playback.
    state.handle(Message::TogglePlayback, Instant::now());
    assert!(state.is_playing());
}

#[test]
fn test_escape_dismisses() {
    let (mut state, factory) = overlay(Script::default());
    open_squat(&mut state, Instant::now());
    tracker(&factory).advance_to(Duration::from_secs(3));

    let effect = state.handle(Message::KeyPressed(Key::Named(Named::Escape)), Instant::now());

    assert_eq!(effect, Effect::Closed);
    assert!(!state.is_playing());
    assert_eq!(tracker(&factory).position(), Duration::ZERO);
    assert_eq!(
        state.handle(Message::KeyPressed(Key::Named(Named::Escape)), Instant::now()),
        Effect::None
    );
}

#[test]
fn test_backdrop_press_matches_escape() {
    let outcome = |dismiss: Message| {
        let (mut state, factory) = overlay(Script::default());
        open_squat(&mut state, Instant::now());
        let effect = state.handle(dismiss, Instant::now());
        let tracker = tracker(&factory);
        (
            effect,
            state.is_open(),
            state.is_playing(),
            tracker.position(),
            tracker.calls(),
        )
    };

    assert_eq!(
        outcome(Message::BackdropPressed),
        outcome(Message::KeyPressed(Key::Named(Named::Escape)))
    );
    assert_eq!(
        outcome(Message::CloseButtonPressed),
        outcome(Message::BackdropPressed)
    );
}

#[test]
fn test_mute_toggled_twice_is_restored() {
    for muted in [false, true] {
        let script = Script {
            muted,
            ..Script::default()
        };
        let (mut state, factory) = overlay(script);
        open_squat(&mut state, Instant::now());
        // Report the element's initial volume state.
        tracker(&factory).push_event(MediaEvent::VolumeChanged { muted });
        state.handle(Message::Tick, Instant::now());
        let before = state.is_muted();

        state.handle(Message::ToggleMute, Instant::now());
        state.handle(Message::ToggleMute, Instant::now());
        assert_eq!(state.is_muted(), before);
    }
}

#[test]
fn test_reopening_replaces_the_session() {
    let (mut state, factory) = overlay(Script::default());
    open_squat(&mut state, Instant::now());

    let effect = state.handle(
        Message::Open {
            source: MediaSource::new("https://cdn.example.com/lunge.mp4"),
            title: "Lunge".to_string(),
        },
        Instant::now(),
    );

    assert_eq!(effect, Effect::Closed);
    let trackers = factory.trackers();
    assert_eq!(trackers.len(), 2);
    assert!(trackers[0].is_dropped());
    assert_eq!(trackers[0].position(), Duration::ZERO);
    assert!(!trackers[1].is_dropped());
    assert_eq!(state.listeners().active(), 1);
}

#[test]
fn test_listeners_released_on_every_exit() {
    let (mut state, _) = overlay(Script::default());
    let registry = state.listeners().clone();

    open_squat(&mut state, Instant::now());
    assert_eq!(registry.active(), 1);
    state.handle(Message::BackdropPressed, Instant::now());
    assert_eq!(registry.active(), 0);

    open_squat(&mut state, Instant::now());
    open_squat(&mut state, Instant::now());
    assert_eq!(registry.active(), 1);

    drop(state);
    assert_eq!(registry.active(), 0);
}

#[test]
fn test_media_errors_leave_state_untouched() {
    let (mut state, factory) = overlay(Script::default());
    open_squat(&mut state, Instant::now());
    let snapshot = |state: &State| (state.is_playing(), state.is_muted(), state.controls_visible());
    let before = snapshot(&state);

    let tracker = tracker(&factory);
    tracker.push_event(MediaEvent::Error(MediaError::LoadFailed("404".into())));
    tracker.push_event(MediaEvent::PlayRejected {
        origin: PlayOrigin::User,
        reason: MediaError::NotLoaded,
    });
    state.handle(Message::Tick, Instant::now());

    assert_eq!(snapshot(&state), before);
    assert!(state.is_open());
}

#[test]
fn test_pending_play_then_pause_applies_in_order() {
    let (mut state, factory) = overlay(Script::manual());
    open_squat(&mut state, Instant::now());
    let tracker = tracker(&factory);

    // Autoplay is still pending, nothing is observed yet.
    assert!(!state.is_playing());

    tracker.push_event(MediaEvent::Playing);
    tracker.push_event(MediaEvent::Paused);
    state.handle(Message::Tick, Instant::now());

    assert!(!state.is_playing());
    assert_eq!(tracker.pending_events(), 0);
}
