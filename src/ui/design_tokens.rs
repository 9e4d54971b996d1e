// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by every page and the video overlay.
//!
//! Colors live in [`palette`] (grays, the indigo brand and one accent pair
//! per workout day). Sizes are grouped by purpose: [`spacing`] follows an
//! 8px grid, [`sizing`] holds fixed component dimensions, [`typography`]
//! the font scale. Translucency goes through [`opacity`] so the backdrop
//! and control bars stay consistent.
//!
//! ```
//! use fitflow::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::BACKDROP, ..palette::BLACK };
//! assert!(scrim.a > opacity::OVERLAY_STRONG);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.04, 0.04, 0.06);
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const GRAY_800: Color = Color::from_rgb(0.15, 0.15, 0.18);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.63);
    pub const GRAY_200: Color = Color::from_rgb(0.85, 0.85, 0.87);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.95);

    // Brand (indigo)
    pub const PRIMARY_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    pub const PRIMARY_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.27, 0.9);

    // Day accents
    pub const RED_500: Color = Color::from_rgb(0.94, 0.27, 0.27);
    pub const PINK_500: Color = Color::from_rgb(0.93, 0.28, 0.6);
    pub const BLUE_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const CYAN_500: Color = Color::from_rgb(0.02, 0.71, 0.83);
    pub const GREEN_500: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const EMERALD_500: Color = Color::from_rgb(0.06, 0.73, 0.51);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Backdrop behind the video overlay.
    pub const BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const NAVBAR_HEIGHT: f32 = 64.0;

    /// Widest the video surface grows, in logical pixels.
    pub const VIDEO_MAX_WIDTH: f32 = 1024.0;
    /// Widest the main column and dialogs grow.
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const DIALOG_MAX_WIDTH: f32 = 560.0;

    /// Diameter of the centre play button of the overlay.
    pub const PLAY_BUTTON: f32 = 80.0;
    /// Size of the square day badges.
    pub const DAY_BADGE: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale:
    //! - Display: hero heading
    //! - Titles: page and card headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    pub const DISPLAY: f32 = 48.0;
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::PLAY_BUTTON > sizing::ICON_XL);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};
