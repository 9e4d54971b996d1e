// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! components expose a `Message`, an optional `State` with an update
//! function, and a `view` taking a context struct.
//!
//! # Components
//!
//! - [`video_overlay`] - Exercise clip player layered over the page
//! - [`pages`] - Home, workouts overview and workout day pages
//! - [`navbar`] - Top navigation bar
//! - [`footer`] - Footer of the home page
//! - [`transition`] - Page transition easing
//! - [`page_scroll`] - Page scroll offset and reset
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and day accents
//! - [`icons`] - SVG icon loading

pub mod design_tokens;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod page_scroll;
pub mod pages;
pub mod styles;
pub mod theming;
pub mod transition;
pub mod video_overlay;
