// SPDX-License-Identifier: MPL-2.0
//! Landing page.

use super::day_badge;
use crate::app::Route;
use crate::catalog::Catalog;
use crate::domain::workout::DayId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Route),
}

/// Figures shown in the stats band, computed from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub workout_days: usize,
    pub exercises: usize,
}

impl Stats {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            workout_days: catalog.days().len(),
            exercises: catalog.exercise_count(),
        }
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXL)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .push(hero(ctx.i18n))
        .push(stats(ctx.i18n, Stats::from_catalog(ctx.catalog)))
        .push(features(&ctx))
        .push(call_to_action(ctx.i18n))
        .into()
}

fn hero(i18n: &I18n) -> Element<'_, Message> {
    let badge = Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                icons::zap()
                    .width(sizing::ICON_SM)
                    .height(sizing::ICON_SM)
                    .style(styles::overlay::icon(palette::PRIMARY_400)),
            )
            .push(
                Text::new(i18n.tr("home-badge"))
                    .size(typography::BODY)
                    .color(palette::PRIMARY_400),
            ),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::pill);

    let heading = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("home-heading")).size(typography::DISPLAY))
        .push(
            Text::new(i18n.tr("home-heading-accent"))
                .size(typography::DISPLAY)
                .color(palette::PRIMARY_400),
        );

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(i18n.tr("home-get-started")).size(typography::BODY_LG))
                .padding([spacing::MD, spacing::XL])
                .style(styles::button::primary)
                .on_press(Message::Navigate(Route::Workouts)),
        )
        .push(
            button(Text::new(i18n.tr("home-view-exercises")).size(typography::BODY_LG))
                .padding([spacing::MD, spacing::XL])
                .style(styles::button::secondary)
                .on_press(Message::Navigate(Route::Day(DayId::Push))),
        );

    Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(heading)
        .push(
            Text::new(i18n.tr("home-subheading"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400)
                .align_x(Horizontal::Center),
        )
        .push(actions)
        .into()
}

fn stats(i18n: &I18n, stats: Stats) -> Element<'_, Message> {
    let figure = |number: String, label: String| {
        Column::new()
            .width(Length::Fill)
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(number)
                    .size(typography::TITLE_LG)
                    .color(palette::PRIMARY_400),
            )
            .push(
                Text::new(label)
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
    };

    let row = Row::new()
        .spacing(spacing::XL)
        .push(figure(
            stats.workout_days.to_string(),
            i18n.tr("home-stat-days"),
        ))
        .push(figure(
            stats.exercises.to_string(),
            i18n.tr("home-stat-exercises"),
        ))
        .push(figure("100%".to_string(), i18n.tr("home-stat-results")));

    Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .into()
}

fn features<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = ctx.catalog.days().iter().fold(
        Row::new().spacing(spacing::LG).width(Length::Fill),
        |row, day| {
            let card = Column::new()
                .spacing(spacing::MD)
                .push(day_badge(day.id, sizing::ICON_XL))
                .push(Text::new(day.title.as_str()).size(typography::TITLE_MD))
                .push(
                    Text::new(day.subtitle.as_str())
                        .size(typography::BODY)
                        .color(palette::GRAY_400),
                );
            row.push(
                button(card)
                    .width(Length::FillPortion(1))
                    .padding(spacing::XL)
                    .style(styles::button::card)
                    .on_press(Message::Navigate(Route::Day(day.id))),
            )
        },
    );

    Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("home-features-heading")).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr("home-features-subheading"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400)
                .align_x(Horizontal::Center),
        )
        .push(cards)
        .into()
}

fn call_to_action(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("home-cta-heading")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("home-cta-body"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400)
                .align_x(Horizontal::Center),
        )
        .push(
            button(Text::new(i18n.tr("home-cta-button")).size(typography::BODY_LG))
                .padding([spacing::MD, spacing::XL])
                .style(styles::button::primary)
                .on_press(Message::Navigate(Route::Workouts)),
        );

    Container::new(content)
        .max_width(sizing::DIALOG_MAX_WIDTH + sizing::CONTENT_MAX_WIDTH / 4.0)
        .padding(spacing::XXL)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_follow_the_catalog() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        assert_eq!(
            Stats::from_catalog(&catalog),
            Stats {
                workout_days: 3,
                exercises: 18
            }
        );
    }

    #[test]
    fn stats_of_a_partial_catalog() {
        let catalog = Catalog::from_toml_str(
            "[[day]]\nid = \"pull\"\ntitle = \"Pull\"\n\n[[day.exercise]]\nname = \"Row\"\nsets = 3\nreps = \"10\"\nmedia = \"row.mp4\"\n",
        )
        .expect("valid");
        let stats = Stats::from_catalog(&catalog);
        assert_eq!(stats.workout_days, 1);
        assert_eq!(stats.exercises, 1);
    }
}
