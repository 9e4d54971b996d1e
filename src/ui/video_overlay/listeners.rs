// SPDX-License-Identifier: MPL-2.0
//! Scoped keyboard and pointer listeners.
//!
//! A [`ListenerScope`] is the only way to obtain the overlay's event
//! subscription, and the registry counts how many scopes are alive. A
//! session holds its scope for its whole life, so the listeners exist
//! exactly while a session does, whatever way the session ends.

use super::Message;
use iced::event::{self, Event};
use iced::{keyboard, mouse, window, Subscription};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts live [`ListenerScope`]s.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Arc<AtomicUsize>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the listeners until the returned scope is dropped.
    #[must_use]
    pub fn acquire(&self) -> ListenerScope {
        self.active.fetch_add(1, Ordering::SeqCst);
        tracing::trace!("overlay listeners attached");
        ListenerScope {
            active: Arc::clone(&self.active),
        }
    }

    /// Number of scopes currently alive.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// Proof that the overlay listeners are attached.
#[derive(Debug)]
pub struct ListenerScope {
    active: Arc<AtomicUsize>,
}

impl ListenerScope {
    /// Keyboard and pointer events routed to the overlay.
    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(route_event)
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
        tracing::trace!("overlay listeners released");
    }
}

fn route_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => Some(Message::KeyPressed(key)),
        Event::Mouse(mouse::Event::CursorMoved { .. }) => Some(Message::PointerMoved),
        _ => None,
    }
}
