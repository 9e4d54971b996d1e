// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Message, Route};
use crate::catalog::Catalog;
use crate::ui::footer;
use crate::ui::navbar;
use crate::ui::page_scroll::PageScroll;
use crate::ui::pages::{home, workout_day, workouts};
use crate::ui::transition::Transition;
use crate::ui::video_overlay::{self, Effect as OverlayEffect};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub route: &'a mut Route,
    pub overlay: &'a mut video_overlay::State,
    pub transition: &'a mut Transition,
    pub page_scroll: &'a mut PageScroll,
    pub workouts: &'a mut workouts::State,
    pub workout_day: &'a mut workout_day::State,
}

/// Applies one message. `now` is the instant the message is handled at.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message, now: Instant) -> Task<Message> {
    match message {
        Message::Navigate(route)
        | Message::Navbar(navbar::Message::Navigate(route))
        | Message::Footer(footer::Message::Navigate(route))
        | Message::Home(home::Message::Navigate(route)) => navigate(ctx, route, now),
        Message::Workouts(msg) => handle_workouts(ctx, msg, now),
        Message::WorkoutDay(msg) => {
            handle_workout_day(ctx, msg, now);
            Task::none()
        }
        Message::Overlay(msg) => {
            handle_overlay(ctx, msg, now);
            Task::none()
        }
        Message::TransitionTick(instant) => {
            ctx.transition.tick(instant);
            Task::none()
        }
        Message::PageScrolled(offset) => {
            ctx.page_scroll.scrolled_to(offset);
            Task::none()
        }
    }
}

/// Switches page. Any open clip is dismissed first; the new page starts
/// at the top.
pub fn navigate(ctx: &mut UpdateContext<'_>, route: Route, now: Instant) -> Task<Message> {
    report_overlay_effect(ctx.overlay.close());

    if *ctx.route == route {
        return Task::none();
    }
    tracing::debug!(from = %ctx.route, to = %route, "navigating");
    *ctx.route = route;
    ctx.workout_day.reset();
    ctx.transition.start(now);
    ctx.page_scroll.reset()
}

fn handle_workouts(
    ctx: &mut UpdateContext<'_>,
    message: workouts::Message,
    now: Instant,
) -> Task<Message> {
    match ctx.workouts.update(message) {
        workouts::Event::None => Task::none(),
        workouts::Event::Navigate(route) => navigate(ctx, route, now),
    }
}

fn handle_workout_day(ctx: &mut UpdateContext<'_>, message: workout_day::Message, now: Instant) {
    let Route::Day(id) = *ctx.route else {
        return;
    };
    let catalog = ctx.catalog;
    let Some(day) = catalog.day(id) else {
        tracing::warn!(day = %id, "message for a day missing from the catalog");
        return;
    };

    match ctx.workout_day.update(message, day) {
        workout_day::Event::None => {}
        workout_day::Event::PlayVideo { source, title } => {
            let msg = video_overlay::Message::Open { source, title };
            handle_overlay(ctx, msg, now);
        }
    }
}

fn handle_overlay(ctx: &mut UpdateContext<'_>, message: video_overlay::Message, now: Instant) {
    report_overlay_effect(ctx.overlay.handle(message, now));
}

fn report_overlay_effect(effect: OverlayEffect) {
    if effect == OverlayEffect::Closed {
        tracing::debug!("video overlay dismissed");
    }
}
