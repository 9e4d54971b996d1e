// SPDX-License-Identifier: MPL-2.0
//! Overview of the split as an accordion: one day expanded at a time.

use super::{day_badge, meta_item};
use crate::app::Route;
use crate::catalog::Catalog;
use crate::domain::workout::{DayId, WorkoutDay};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::DayAccent;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

const TIP_KEYS: [&str; 4] = [
    "workouts-tip-rest",
    "workouts-tip-overload",
    "workouts-tip-form",
    "workouts-tip-nutrition",
];

/// Accordion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    expanded: Option<DayId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle(DayId),
    Navigate(Route),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
}

impl State {
    #[must_use]
    pub fn expanded(&self) -> Option<DayId> {
        self.expanded
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toggle(id) => {
                self.expanded = if self.expanded == Some(id) {
                    None
                } else {
                    Some(id)
                };
                Event::None
            }
            Message::Navigate(route) => Event::Navigate(route),
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("workouts-heading")).size(typography::DISPLAY))
        .push(
            Text::new(ctx.i18n.tr("workouts-subheading"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400)
                .align_x(Horizontal::Center),
        );

    let accordion = ctx.catalog.days().iter().fold(
        Column::new().spacing(spacing::LG).width(Length::Fill),
        |column, day| {
            let expanded = ctx.state.expanded == Some(day.id);
            column.push(item(ctx.i18n, day, expanded))
        },
    );

    Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::XXL)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .push(header)
        .push(accordion)
        .push(tips(ctx.i18n))
        .into()
}

fn item<'a>(i18n: &'a I18n, day: &'a WorkoutDay, expanded: bool) -> Element<'a, Message> {
    let chevron = if expanded {
        icons::chevron_down()
    } else {
        icons::chevron_right()
    };

    let trigger = button(
        Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .push(day_badge(day.id, sizing::DAY_BADGE))
            .push(
                Column::new()
                    .width(Length::Fill)
                    .spacing(spacing::XXS)
                    .push(Text::new(day.title.as_str()).size(typography::TITLE_LG))
                    .push(
                        Text::new(day.subtitle.as_str())
                            .size(typography::BODY_LG)
                            .color(palette::GRAY_400),
                    ),
            )
            .push(
                chevron
                    .width(sizing::ICON_MD)
                    .height(sizing::ICON_MD)
                    .style(styles::overlay::icon(palette::GRAY_400)),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(styles::button::card)
    .on_press(Message::Toggle(day.id));

    let mut content = Column::new().width(Length::Fill).push(trigger);
    if expanded {
        content = content.push(details(i18n, day));
    }
    content.into()
}

fn details<'a>(i18n: &'a I18n, day: &'a WorkoutDay) -> Element<'a, Message> {
    let count = day.exercise_count().to_string();
    let summary = Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::MD)
        .push(
            Text::new(day.description.as_str())
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(meta_item(icons::clock(), day.duration.as_str()))
                .push(meta_item(icons::target(), day.difficulty.as_str()))
                .push(
                    Text::new(i18n.tr_with_args("workouts-exercise-count", &[("count", count.as_str())]))
                        .size(typography::BODY)
                        .color(palette::GRAY_400),
                ),
        );

    let names = day.exercises.iter().fold(
        Column::new().spacing(spacing::XS),
        |column, exercise| {
            column.push(
                Text::new(format!("• {}", exercise.name))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
        },
    );

    let start = button(
        Text::new(i18n.tr_with_args("workouts-start", &[("title", day.title.as_str())]))
            .size(typography::BODY_LG),
    )
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::accent(DayAccent::for_day(day.id)))
    .on_press(Message::Navigate(Route::Day(day.id)));

    let list = Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("workouts-exercise-list")).size(typography::TITLE_SM))
        .push(names)
        .push(start);

    Container::new(Row::new().spacing(spacing::XL).push(summary).push(list))
        .width(Length::Fill)
        .padding([spacing::LG, spacing::XL])
        .into()
}

fn tips(i18n: &I18n) -> Element<'_, Message> {
    let lines = TIP_KEYS.into_iter().fold(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("workouts-tips-heading")).size(typography::TITLE_MD)),
        |column, key| {
            column.push(
                Text::new(format!("• {}", i18n.tr(key)))
                    .size(typography::BODY_LG)
                    .color(palette::GRAY_400),
            )
        },
    );

    Container::new(lines)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}
