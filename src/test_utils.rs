// SPDX-License-Identifier: MPL-2.0
//! Deterministic media element for tests.
//!
//! [`ScriptedElement`] records every request it receives and answers them
//! according to a [`Script`]. Its [`ElementTracker`] shares that record and
//! stays usable after the element itself has been dropped, so tests can
//! check what happened to a session that no longer exists.

use crate::application::port::{MediaElement, MediaElementFactory, MediaEvent};
use crate::domain::error::MediaError;
use crate::domain::media::{AutoplayPolicy, MediaSource, PlayOrigin};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// A request received by a [`ScriptedElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(MediaSource),
    Play(PlayOrigin),
    Pause,
    SetMuted(bool),
    Rewind,
}

/// How a [`ScriptedElement`] answers requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script {
    /// Policy applied to play requests.
    pub autoplay: AutoplayPolicy,
    /// When true, accepted requests are confirmed immediately. When false,
    /// they are only recorded and the test delivers events by hand through
    /// [`ElementTracker::push_event`].
    pub confirm: bool,
    /// Initial mute state.
    pub muted: bool,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            autoplay: AutoplayPolicy::Allow,
            confirm: true,
            muted: false,
        }
    }
}

impl Script {
    /// Autoplay refused, everything else confirmed.
    #[must_use]
    pub fn autoplay_blocked() -> Self {
        Self {
            autoplay: AutoplayPolicy::Block,
            ..Self::default()
        }
    }

    /// Nothing confirmed until the test says so.
    #[must_use]
    pub fn manual() -> Self {
        Self {
            confirm: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    calls: Vec<Call>,
    events: VecDeque<MediaEvent>,
    position: Duration,
    dropped: bool,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    // A panicking test thread must not hide the record from other assertions.
    shared
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Scripted [`MediaElement`].
#[derive(Debug)]
pub struct ScriptedElement {
    script: Script,
    muted: bool,
    loaded: bool,
    shared: Arc<Mutex<Shared>>,
}

impl ScriptedElement {
    /// Creates an element and the tracker observing it.
    #[must_use]
    pub fn new(script: Script) -> (Self, ElementTracker) {
        let shared = Arc::new(Mutex::new(Shared::default()));
        let element = Self {
            script,
            muted: script.muted,
            loaded: false,
            shared: Arc::clone(&shared),
        };
        (element, ElementTracker { shared })
    }

    fn record(&self, call: Call) {
        lock(&self.shared).calls.push(call);
    }

    fn emit(&self, event: MediaEvent) {
        lock(&self.shared).events.push_back(event);
    }
}

impl MediaElement for ScriptedElement {
    fn load(&mut self, source: &MediaSource) -> Result<(), MediaError> {
        self.record(Call::Load(source.clone()));
        self.loaded = true;
        lock(&self.shared).position = Duration::ZERO;
        Ok(())
    }

    fn request_play(&mut self, origin: PlayOrigin) {
        self.record(Call::Play(origin));
        if !self.loaded {
            self.emit(MediaEvent::PlayRejected {
                origin,
                reason: MediaError::NotLoaded,
            });
        } else if !self.script.autoplay.permits(origin, self.muted) {
            self.emit(MediaEvent::PlayRejected {
                origin,
                reason: MediaError::AutoplayDeclined,
            });
        } else if self.script.confirm {
            lock(&self.shared).position = Duration::from_millis(250);
            self.emit(MediaEvent::Playing);
        }
    }

    fn request_pause(&mut self) {
        self.record(Call::Pause);
        if self.script.confirm {
            self.emit(MediaEvent::Paused);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.record(Call::SetMuted(muted));
        self.muted = muted;
        if self.script.confirm {
            self.emit(MediaEvent::VolumeChanged { muted });
        }
    }

    fn rewind(&mut self) {
        self.record(Call::Rewind);
        lock(&self.shared).position = Duration::ZERO;
    }

    fn position(&self) -> Duration {
        lock(&self.shared).position
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        lock(&self.shared).events.pop_front()
    }
}

impl Drop for ScriptedElement {
    fn drop(&mut self) {
        lock(&self.shared).dropped = true;
    }
}

/// Shared view of a [`ScriptedElement`].
#[derive(Debug, Clone)]
pub struct ElementTracker {
    shared: Arc<Mutex<Shared>>,
}

impl ElementTracker {
    /// Requests received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        lock(&self.shared).calls.clone()
    }

    /// Last known playback position.
    #[must_use]
    pub fn position(&self) -> Duration {
        lock(&self.shared).position
    }

    /// Sets the playback position, as if playback had progressed.
    pub fn advance_to(&self, position: Duration) {
        lock(&self.shared).position = position;
    }

    /// Queues an event for the element to deliver.
    pub fn push_event(&self, event: MediaEvent) {
        lock(&self.shared).events.push_back(event);
    }

    /// Number of events not yet delivered.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        lock(&self.shared).events.len()
    }

    /// Whether the element has been dropped.
    #[must_use]
    pub fn is_dropped(&self) -> bool {
        lock(&self.shared).dropped
    }
}

/// Factory handing out [`ScriptedElement`]s and keeping their trackers.
#[derive(Debug, Default)]
pub struct ScriptedFactory {
    script: Script,
    trackers: Mutex<Vec<ElementTracker>>,
}

impl ScriptedFactory {
    #[must_use]
    pub fn new(script: Script) -> Self {
        Self {
            script,
            trackers: Mutex::new(Vec::new()),
        }
    }

    /// Trackers of every element created so far, oldest first.
    #[must_use]
    pub fn trackers(&self) -> Vec<ElementTracker> {
        self.trackers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Tracker of the most recently created element.
    #[must_use]
    pub fn last_tracker(&self) -> Option<ElementTracker> {
        self.trackers().pop()
    }
}

impl MediaElementFactory for ScriptedFactory {
    fn create_element(&self) -> Box<dyn MediaElement> {
        let (element, tracker) = ScriptedElement::new(self.script);
        self.trackers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(tracker);
        Box::new(element)
    }
}
