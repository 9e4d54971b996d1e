// SPDX-License-Identifier: MPL-2.0
//! Exercises of one workout day.
//!
//! Each exercise card has a play button that opens the video overlay and
//! is itself pressable to open a detail dialog. The play button captures
//! its press, so playing a clip never opens the dialog.

use super::{day_badge, meta_item, pill};
use crate::domain::media::MediaSource;
use crate::domain::workout::{Exercise, WorkoutDay};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::DayAccent;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, opaque, Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Which exercise, if any, has its detail dialog open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    detail: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PlayVideo(usize),
    ShowDetail(usize),
    CloseDetail,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    PlayVideo { source: MediaSource, title: String },
}

impl State {
    /// Index of the exercise whose dialog is open.
    #[must_use]
    pub fn detail(&self) -> Option<usize> {
        self.detail
    }

    /// Closes the dialog.
    pub fn reset(&mut self) {
        self.detail = None;
    }

    pub fn update(&mut self, message: Message, day: &WorkoutDay) -> Event {
        match message {
            Message::PlayVideo(index) => match day.exercises.get(index) {
                Some(exercise) => Event::PlayVideo {
                    source: exercise.media.clone(),
                    title: exercise.name.clone(),
                },
                None => Event::None,
            },
            Message::ShowDetail(index) => {
                if index < day.exercises.len() {
                    self.detail = Some(index);
                }
                Event::None
            }
            Message::CloseDetail => {
                self.detail = None;
                Event::None
            }
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub day: &'a WorkoutDay,
    pub state: &'a State,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let accent = DayAccent::for_day(ctx.day.id);
    let cards = ctx.day.exercises.iter().enumerate().fold(
        Column::new().spacing(spacing::LG).width(Length::Fill),
        |column, (index, exercise)| column.push(exercise_card(index, exercise, accent)),
    );

    Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::XXL)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .push(header(ctx.i18n, ctx.day, accent))
        .push(cards)
        .into()
}

fn header<'a>(i18n: &'a I18n, day: &'a WorkoutDay, accent: DayAccent) -> Element<'a, Message> {
    let count = day.exercise_count().to_string();
    let summary = format!(
        "{} • {}",
        day.focus,
        i18n.tr_with_args("day-exercise-count", &[("count", count.as_str())])
    );

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(day_badge(day.id, sizing::DAY_BADGE + spacing::XS))
        .push(
            Text::new(day.title.as_str())
                .size(typography::DISPLAY)
                .color(accent.start),
        )
        .push(
            Text::new(summary)
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .push(
            Row::new()
                .spacing(spacing::XL)
                .push(meta_item(icons::clock(), day.duration.as_str()))
                .push(meta_item(icons::target(), day.difficulty.as_str()))
                .push(meta_item(icons::calendar(), day.frequency.as_str())),
        )
        .into()
}

fn exercise_card(index: usize, exercise: &Exercise, accent: DayAccent) -> Element<'_, Message> {
    let play = button(
        icons::play()
            .width(sizing::ICON_MD)
            .height(sizing::ICON_MD)
            .style(styles::overlay::icon(palette::WHITE)),
    )
    .padding(spacing::LG)
    .style(styles::button::accent(accent))
    .on_press(Message::PlayVideo(index));

    let muscles = exercise
        .muscles
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, muscle| {
            row.push(pill(muscle.as_str()))
        });

    let body = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XS)
        .push(Text::new(exercise.name.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(exercise.description.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(pill(exercise.scheme()))
        .push(muscles);

    button(
        Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Top)
            .push(play)
            .push(body)
            .push(
                icons::chevron_right()
                    .width(sizing::ICON_MD)
                    .height(sizing::ICON_MD)
                    .style(styles::overlay::icon(palette::GRAY_400)),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::button::card)
    .on_press(Message::ShowDetail(index))
    .into()
}

/// The detail dialog over a dimmed scrim, when one is open.
pub fn detail_view<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let exercise = ctx.state.detail.and_then(|index| ctx.day.exercises.get(index))?;
    let i18n = ctx.i18n;

    let section = |title: String| Text::new(title).size(typography::BODY_LG).color(palette::PRIMARY_400);

    let sets_reps = Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::XXS)
        .push(section(i18n.tr("day-sets-reps")))
        .push(Text::new(exercise.scheme()).size(typography::BODY));

    let muscles = exercise.muscles.iter().fold(
        Column::new()
            .width(Length::FillPortion(1))
            .spacing(spacing::XXS)
            .push(section(i18n.tr("day-target-muscles"))),
        |column, muscle| column.push(Text::new(muscle.as_str()).size(typography::BODY)),
    );

    let tips = exercise.tips.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(section(i18n.tr("day-exercise-tips"))),
        |column, tip| {
            column.push(
                Text::new(format!("• {tip}"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
        },
    );

    let dialog = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(exercise.name.as_str()).size(typography::TITLE_LG))
        .push(
            Text::new(exercise.description.as_str())
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .push(Row::new().spacing(spacing::LG).push(sets_reps).push(muscles))
        .push(tips)
        .push(
            button(
                Text::new(i18n.tr("day-close"))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::button::secondary)
            .on_press(Message::CloseDetail),
        );

    let dialog = Container::new(dialog)
        .max_width(sizing::DIALOG_MAX_WIDTH)
        .padding(spacing::XL)
        .style(styles::container::card);

    let scrim = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim),
    )
    .on_press(Message::CloseDetail);

    // Presses inside the dialog must not reach the scrim.
    let centered = Container::new(opaque(dialog))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Some(Stack::new().push(scrim).push(centered).into())
}
