// SPDX-License-Identifier: MPL-2.0
//! Rendering of an open session.
//!
//! Layers, bottom to top: the dimmed backdrop (press to dismiss) and the
//! centred video surface. The surface itself stacks the frame, the controls
//! (only while visible) and the close button, which stays visible at all times.

use super::{Message, PlaybackSession};
use crate::config::DEFAULT_OVERLAY_CAPTION;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length};
use std::sync::OnceLock;

pub(super) fn view<'a>(session: &'a PlaybackSession, i18n: &'a I18n) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let picture = image(session.frame().cloned().unwrap_or_else(placeholder))
        .width(Length::Fill)
        .content_fit(ContentFit::Contain);

    let mut surface = Stack::new().push(picture);
    if session.controls_visible() {
        surface = surface.push(controls(session, i18n));
    }
    surface = surface.push(close_button());

    let surface = Container::new(surface)
        .max_width(sizing::VIDEO_MAX_WIDTH)
        .style(styles::overlay::video_surface)
        .clip(true);

    // Presses on the surface must not reach the backdrop.
    let centered = Container::new(opaque(surface))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new().push(backdrop).push(centered).into()
}

fn controls<'a>(session: &'a PlaybackSession, i18n: &'a I18n) -> Element<'a, Message> {
    let title_bar = Container::new(
        Text::new(session.title())
            .size(typography::TITLE_SM)
            .color(palette::WHITE),
    )
    .width(Length::Fill)
    .padding([spacing::MD, spacing::LG])
    .style(styles::overlay::title_bar);

    let centre_icon = if session.is_playing() {
        icons::pause()
    } else {
        icons::play()
    };
    let centre_button = button(
        centre_icon
            .width(sizing::ICON_LG)
            .height(sizing::ICON_LG)
            .style(styles::overlay::icon(palette::BLACK)),
    )
    .width(sizing::PLAY_BUTTON)
    .height(sizing::PLAY_BUTTON)
    .padding(spacing::LG)
    .style(styles::button::video_play_overlay())
    .on_press(Message::TogglePlayback);

    let centre = Container::new(centre_button)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let bottom_bar = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(small_button(
                if session.is_playing() {
                    icons::pause()
                } else {
                    icons::play()
                },
                Message::TogglePlayback,
            ))
            .push(small_button(
                if session.is_muted() {
                    icons::volume_mute()
                } else {
                    icons::volume()
                },
                Message::ToggleMute,
            ))
            .push(
                Text::new(caption(i18n))
                    .size(typography::BODY)
                    .color(palette::WHITE),
            ),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::MD])
    .style(styles::overlay::bottom_bar);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(title_bar)
        .push(centre)
        .push(bottom_bar)
        .into()
}

fn small_button<'a>(icon: iced::widget::Svg<'a>, message: Message) -> Element<'a, Message> {
    button(
        icon.width(sizing::ICON_MD)
            .height(sizing::ICON_MD)
            .style(styles::overlay::icon(palette::WHITE)),
    )
    .padding(spacing::XS)
    .style(styles::button::overlay(
        opacity::OVERLAY_SUBTLE,
        opacity::OVERLAY_MEDIUM,
    ))
    .on_press(message)
    .into()
}

fn close_button<'a>() -> Element<'a, Message> {
    let close = button(
        icons::close()
            .width(sizing::ICON_MD)
            .height(sizing::ICON_MD)
            .style(styles::overlay::icon(palette::WHITE)),
    )
    .padding(spacing::XS)
    .style(styles::button::overlay(
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .on_press(Message::CloseButtonPressed);

    Container::new(close)
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Right)
        .into()
}

fn caption(i18n: &I18n) -> String {
    let text = i18n.tr("overlay-caption");
    if text.starts_with("MISSING:") {
        DEFAULT_OVERLAY_CAPTION.to_string()
    } else {
        text
    }
}

/// Black 16:9 picture shown until the first frame arrives.
fn placeholder() -> image::Handle {
    static HANDLE: OnceLock<image::Handle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            let (width, height) = (16_u32, 9_u32);
            let mut pixels = Vec::with_capacity((width * height * 4) as usize);
            for _ in 0..width * height {
                pixels.extend_from_slice(&[0, 0, 0, 255]);
            }
            image::Handle::from_rgba(width, height, pixels)
        })
        .clone()
}
