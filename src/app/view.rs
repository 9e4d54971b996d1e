// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: navbar and scrollable page, the exercise detail
//! dialog, then the video overlay. While a page transition runs, a veil in
//! the page color fades out over the page.

use super::{Message, Route};
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::footer;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::page_scroll::{PageScroll, SCROLLABLE_ID};
use crate::ui::pages::{home, workout_day, workouts};
use crate::ui::styles;
use crate::ui::transition::Transition;
use crate::ui::video_overlay;
use iced::{
    widget::{scrollable::Viewport, Column, Container, Id, Scrollable, Space, Stack, Text},
    Element, Length, Padding,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub route: Route,
    pub transition: &'a Transition,
    pub page_scroll: &'a PageScroll,
    pub overlay: &'a video_overlay::State,
    pub workouts: &'a workouts::State,
    pub workout_day: &'a workout_day::State,
}

/// Renders the current route with its modal layers.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.route,
        scrolled: ctx.page_scroll.is_scrolled(),
    })
    .map(Message::Navbar);

    let page = Container::new(view_page(&ctx))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(Padding {
            top: ctx.transition.offset(),
            ..Padding::ZERO
        });
    let page: Element<'_, Message> = if ctx.transition.is_running() {
        let veil = Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page_veil(1.0 - ctx.transition.opacity()));
        Stack::new().push(page).push(veil).into()
    } else {
        page.into()
    };

    let mut body = Column::new().width(Length::Fill).push(page);
    if ctx.route == Route::Home {
        body = body.push(footer::view(ctx.i18n).map(Message::Footer));
    }

    let main = Container::new(
        Column::new()
            .push(navbar)
            .push(
                Scrollable::new(body)
                    .id(Id::new(SCROLLABLE_ID))
                    .height(Length::Fill)
                    .on_scroll(|viewport: Viewport| {
                        Message::PageScrolled(viewport.absolute_offset())
                    }),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let mut layers = Stack::new().push(main);
    if let Some(dialog) = view_day_dialog(&ctx) {
        layers = layers.push(dialog);
    }
    if let Some(overlay) = ctx.overlay.view(ctx.i18n) {
        layers = layers.push(overlay.map(Message::Overlay));
    }
    layers.into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.route {
        Route::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
        })
        .map(Message::Home),
        Route::Workouts => workouts::view(workouts::ViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            state: ctx.workouts,
        })
        .map(Message::Workouts),
        Route::Day(id) => match ctx.catalog.day(id) {
            Some(day) => workout_day::view(&workout_day::ViewContext {
                i18n: ctx.i18n,
                day,
                state: ctx.workout_day,
            })
            .map(Message::WorkoutDay),
            None => Container::new(
                Text::new(ctx.i18n.tr("day-missing"))
                    .size(typography::TITLE_MD)
                    .color(palette::GRAY_400),
            )
            .padding(spacing::XXL)
            .into(),
        },
    }
}

fn view_day_dialog<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let Route::Day(id) = ctx.route else {
        return None;
    };
    let day = ctx.catalog.day(id)?;
    workout_day::detail_view(&workout_day::ViewContext {
        i18n: ctx.i18n,
        day,
        state: ctx.workout_day,
    })
    .map(|dialog| dialog.map(Message::WorkoutDay))
}
