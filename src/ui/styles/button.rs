// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::{is_dark_theme, DayAccent};
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Radians, Theme};

fn accent_gradient(accent: DayAccent, alpha: f32) -> Background {
    let start = Color { a: alpha, ..accent.start };
    let end = Color { a: alpha, ..accent.end };
    Background::Gradient(
        Linear::new(Radians(std::f32::consts::FRAC_PI_2))
            .add_stop(0.0, start)
            .add_stop(1.0, end)
            .into(),
    )
}

/// Main call to action ("Get Started").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::LG
        } else {
            shadow::MD
        },
        snap: true,
    }
}

/// Outlined secondary action ("View Exercises").
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let dark = is_dark_theme(theme);
    let text_color = if dark { WHITE } else { palette::GRAY_900 };
    let hover_bg = if dark {
        palette::GRAY_800
    } else {
        palette::GRAY_100
    };

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(hover_bg))
            }
            _ => None,
        },
        text_color,
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar link; the active route is drawn in the brand color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let dark = is_dark_theme(theme);
        let idle = if dark { palette::GRAY_200 } else { palette::GRAY_700 };
        let text_color = match (active, status) {
            (true, _) => palette::PRIMARY_400,
            (false, button::Status::Hovered) => {
                if dark {
                    WHITE
                } else {
                    palette::GRAY_900
                }
            }
            _ => idle,
        };

        button::Style {
            background: active.then(|| {
                Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_500
                })
            }),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Text-only link inside cards and the footer.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ if is_dark_theme(theme) => palette::GRAY_400,
        _ => palette::GRAY_700,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Whole-card press target (exercise cards, accordion headers).
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let dark = is_dark_theme(theme);
    let (base, hover) = if dark {
        (palette::GRAY_900, palette::GRAY_800)
    } else {
        (WHITE, palette::GRAY_100)
    };
    let hovered = matches!(status, button::Status::Hovered);

    button::Style {
        background: Some(Background::Color(if hovered { hover } else { base })),
        text_color: if dark { WHITE } else { palette::GRAY_900 },
        border: Border {
            color: if hovered {
                palette::PRIMARY_500
            } else if dark {
                palette::GRAY_800
            } else {
                palette::GRAY_200
            },
            width: 1.0,
            radius: radius::XL.into(),
        },
        shadow: if hovered { shadow::LG } else { shadow::NONE },
        snap: true,
    }
}

/// Filled gradient button in a day's accent ("Start Push Day", play).
pub fn accent(accent: DayAccent) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OPAQUE,
            button::Status::Disabled => opacity::OVERLAY_MEDIUM,
            _ => 0.9,
        };
        button::Style {
            background: Some(accent_gradient(accent, alpha)),
            text_color: WHITE,
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::LG
            } else {
                shadow::MD
            },
            snap: true,
        }
    }
}

/// Translucent control on top of the video (play/pause, mute, close).
pub fn overlay(
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::BACKDROP,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Large round play button in the middle of the video.
pub fn video_play_overlay() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OPAQUE,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => opacity::BACKDROP,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: BLACK,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::LG,
            snap: true,
        }
    }
}
