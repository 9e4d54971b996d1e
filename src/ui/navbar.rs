// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown at the top of every page.
//!
//! Brand mark on the left (returns home), one link per route on the right.
//! The link of the current route is highlighted. The bar gets a solid,
//! bordered background once the page below it is scrolled.

use crate::app::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Route,
    /// Whether the page is scrolled past the threshold.
    pub scrolled: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Route),
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let links = Route::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, route| {
            row.push(
                button(Text::new(ctx.i18n.tr(route.label_key())).size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::nav_link(route == ctx.current))
                    .on_press(Message::Navigate(route)),
            )
        },
    );

    let bar = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(brand(ctx.i18n))
        .push(Container::new(links).width(Length::Fill).align_right(Length::Fill));

    Container::new(bar)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::navbar(ctx.scrolled))
        .into()
}

/// Dumbbell badge plus wordmark; pressing it goes home.
fn brand(i18n: &I18n) -> Element<'_, Message> {
    let badge = Container::new(
        icons::dumbbell()
            .width(sizing::ICON_SM + spacing::XXS)
            .height(sizing::ICON_SM + spacing::XXS)
            .style(styles::overlay::icon(palette::WHITE)),
    )
    .padding(spacing::XS)
    .style(|_theme: &Theme| container::Style {
        background: Some(palette::PRIMARY_500.into()),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(badge)
        .push(
            Text::new(i18n.tr("app-brand"))
                .size(typography::TITLE_MD)
                .color(palette::PRIMARY_400),
        );

    button(content)
        .padding(0.0)
        .style(styles::button::link)
        .on_press(Message::Navigate(Route::Home))
        .into()
}
