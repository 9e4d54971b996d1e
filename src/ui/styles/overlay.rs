// SPDX-License-Identifier: MPL-2.0
//! Styles for the video overlay: backdrop, video surface and control bars.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Radians, Theme};

/// Full-window dimmed backdrop.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Black 16:9 surface holding the frame.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

fn fade(top: bool) -> Background {
    let strong = Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    };
    let clear = Color {
        a: opacity::TRANSPARENT,
        ..BLACK
    };
    let (first, last) = if top { (strong, clear) } else { (clear, strong) };
    // Top to bottom.
    Background::Gradient(
        Linear::new(Radians(std::f32::consts::PI))
            .add_stop(0.0, first)
            .add_stop(1.0, last)
            .into(),
    )
}

/// Title bar fading from the top edge of the video.
pub fn title_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(fade(true)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Control bar fading from the bottom edge of the video.
pub fn bottom_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(fade(false)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Tint for SVG icons drawn on the overlay.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
