// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Route;
use crate::ui::footer;
use crate::ui::navbar;
use crate::ui::pages::{home, workout_day, workouts};
use crate::ui::video_overlay;
use iced::widget::scrollable::AbsoluteOffset;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    Navbar(navbar::Message),
    Footer(footer::Message),
    Home(home::Message),
    Workouts(workouts::Message),
    WorkoutDay(workout_day::Message),
    Overlay(video_overlay::Message),
    /// Periodic tick while a page transition runs.
    TransitionTick(Instant),
    /// The page scrollable moved.
    PageScrolled(AbsoluteOffset),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FITFLOW_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional workout catalog replacing the embedded one.
    pub catalog: Option<PathBuf>,
    /// Optional route path to open first (e.g. `/legs`).
    pub page: Option<String>,
}
