// SPDX-License-Identifier: MPL-2.0
//! Footer shown under the home page.

use crate::app::Route;
use crate::domain::workout::DayId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Route),
}

/// Quick links, in display order, with their label keys.
const QUICK_LINKS: [(Route, &str); 5] = [
    (Route::Home, "nav-home"),
    (Route::Workouts, "nav-workouts"),
    (Route::Day(DayId::Push), "footer-push-day"),
    (Route::Day(DayId::Pull), "footer-pull-day"),
    (Route::Day(DayId::Legs), "footer-leg-day"),
];

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let brand = Column::new()
        .spacing(spacing::SM)
        .width(Length::FillPortion(2))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(
                    icons::dumbbell()
                        .width(sizing::ICON_MD)
                        .height(sizing::ICON_MD)
                        .style(styles::overlay::icon(palette::PRIMARY_400)),
                )
                .push(Text::new(i18n.tr("app-brand")).size(typography::TITLE_MD)),
        )
        .push(
            Text::new(i18n.tr("footer-blurb"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    let links = QUICK_LINKS.into_iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .width(Length::FillPortion(1))
            .push(Text::new(i18n.tr("footer-quick-links")).size(typography::BODY_LG)),
        |column, (route, key)| {
            column.push(
                button(Text::new(i18n.tr(key)).size(typography::BODY))
                    .padding([spacing::XXS, 0.0])
                    .style(styles::button::link)
                    .on_press(Message::Navigate(route)),
            )
        },
    );

    let content = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Row::new().spacing(spacing::XL).push(brand).push(links))
        .push(
            Text::new(i18n.tr("footer-copyright"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .center_x(Length::Fill)
        .style(styles::container::footer)
        .into()
}
