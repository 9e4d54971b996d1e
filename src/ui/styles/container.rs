// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::{is_dark_theme, DayAccent};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let background = if is_dark_theme(theme) {
        palette::GRAY_950
    } else {
        palette::GRAY_100
    };
    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Covers the page while it fades in; `alpha` is `1 - opacity`.
pub fn page_veil(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = page(theme).background;
        let color = match base {
            Some(Background::Color(color)) => color,
            _ => palette::GRAY_100,
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha.clamp(0.0, 1.0),
                ..color
            })),
            ..Default::default()
        }
    }
}

/// Top navigation bar. It blends into the page at the top and turns into a
/// translucent, bordered bar once the page is scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        if !scrolled {
            return container::Style::default();
        }
        let dark = is_dark_theme(theme);
        let base = if dark { palette::GRAY_900 } else { palette::WHITE };
        container::Style {
            background: Some(Background::Color(Color { a: 0.8, ..base })),
            border: Border {
                color: if dark {
                    palette::GRAY_800
                } else {
                    palette::GRAY_200
                },
                width: 1.0,
                radius: 0.0.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Raised surface for cards and panels.
pub fn card(theme: &Theme) -> container::Style {
    let dark = is_dark_theme(theme);
    container::Style {
        background: Some(Background::Color(if dark {
            palette::GRAY_900
        } else {
            palette::WHITE
        })),
        border: Border {
            color: if dark {
                palette::GRAY_800
            } else {
                palette::GRAY_200
            },
            width: 1.0,
            radius: radius::XL.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Small rounded label (muscle tags, set/rep chips, hero badge).
pub fn pill(theme: &Theme) -> container::Style {
    let dark = is_dark_theme(theme);
    container::Style {
        background: Some(Background::Color(if dark {
            palette::GRAY_800
        } else {
            palette::GRAY_200
        })),
        text_color: Some(if dark {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        }),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Square badge filled with a day's gradient.
pub fn day_badge(accent: DayAccent) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Gradient(
            Linear::new(Radians(std::f32::consts::FRAC_PI_4))
                .add_stop(0.0, accent.start)
                .add_stop(1.0, accent.end)
                .into(),
        )),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer band at the bottom of the home screen.
pub fn footer(theme: &Theme) -> container::Style {
    let dark = is_dark_theme(theme);
    container::Style {
        background: Some(Background::Color(if dark {
            palette::GRAY_900
        } else {
            palette::WHITE
        })),
        border: Border {
            color: if dark {
                palette::GRAY_800
            } else {
                palette::GRAY_200
            },
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a modal dialog.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}
