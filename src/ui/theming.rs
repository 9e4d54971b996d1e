// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and per-day accent colors.

use crate::domain::workout::DayId;
use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The Iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Gradient endpoints identifying a workout day across screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAccent {
    pub start: Color,
    pub end: Color,
}

impl DayAccent {
    #[must_use]
    pub fn for_day(id: DayId) -> Self {
        match id {
            DayId::Push => Self {
                start: palette::RED_500,
                end: palette::PINK_500,
            },
            DayId::Pull => Self {
                start: palette::BLUE_500,
                end: palette::CYAN_500,
            },
            DayId::Legs => Self {
                start: palette::GREEN_500,
                end: palette::EMERALD_500,
            },
        }
    }
}

/// Whether the theme has a dark background.
#[must_use]
pub fn is_dark_theme(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }

    #[test]
    fn each_day_has_its_own_accent() {
        let accents: Vec<_> = DayId::ALL.into_iter().map(DayAccent::for_day).collect();
        assert_ne!(accents[0], accents[1]);
        assert_ne!(accents[1], accents[2]);
        assert_ne!(accents[0], accents[2]);
    }

    #[test]
    fn builtin_dark_theme_is_detected() {
        assert!(is_dark_theme(&Theme::Dark));
        assert!(!is_dark_theme(&Theme::Light));
    }
}
