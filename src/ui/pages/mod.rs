// SPDX-License-Identifier: MPL-2.0
//! Page views.
//!
//! - [`home`] - Hero, program stats and one card per day
//! - [`workouts`] - Accordion overview of the split
//! - [`workout_day`] - Exercises of one day, with the exercise detail dialog

pub mod home;
pub mod workout_day;
pub mod workouts;

use crate::domain::workout::DayId;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::DayAccent;
use iced::widget::{Container, Row, Svg, Text};
use iced::{alignment::Vertical, Element};

/// Glyph of a day: up for push, down for pull, a bolt for legs.
fn day_icon<'a>(id: DayId) -> Svg<'a> {
    match id {
        DayId::Push => icons::arrow_up_circle(),
        DayId::Pull => icons::arrow_down_circle(),
        DayId::Legs => icons::zap(),
    }
}

/// Gradient square holding the day glyph.
fn day_badge<'a, Message: 'a>(id: DayId, size: f32) -> Element<'a, Message> {
    Container::new(
        day_icon(id)
            .width(size / 2.0)
            .height(size / 2.0)
            .style(styles::overlay::icon(palette::WHITE)),
    )
    .width(size)
    .height(size)
    .center_x(size)
    .center_y(size)
    .style(styles::container::day_badge(DayAccent::for_day(id)))
    .into()
}

/// Icon followed by a short muted label (duration, difficulty...).
fn meta_item<'a, Message: 'a>(icon: Svg<'a>, label: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(
            icon.width(sizing::ICON_SM)
                .height(sizing::ICON_SM)
                .style(styles::overlay::icon(palette::GRAY_400)),
        )
        .push(
            Text::new(label)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .into()
}

/// Small rounded chip.
fn pill<'a, Message: 'a>(label: impl Into<String>) -> Element<'a, Message> {
    Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::pill)
        .into()
}
