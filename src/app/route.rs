// SPDX-License-Identifier: MPL-2.0
//! Routes the user can navigate between.

use crate::domain::workout::DayId;
use std::fmt;

/// A page of the application, addressed by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Workouts,
    Day(DayId),
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Workouts,
        Route::Day(DayId::Push),
        Route::Day(DayId::Pull),
        Route::Day(DayId::Legs),
    ];

    /// Parses a path such as `/push`. Unknown paths map to [`Route::Home`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        match trimmed {
            "" => Route::Home,
            "/workouts" => Route::Workouts,
            other => other
                .strip_prefix('/')
                .and_then(DayId::parse)
                .map_or(Route::Home, Route::Day),
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Workouts => "/workouts",
            Route::Day(DayId::Push) => "/push",
            Route::Day(DayId::Pull) => "/pull",
            Route::Day(DayId::Legs) => "/legs",
        }
    }

    /// i18n key of the short navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Route::Home => "nav-home",
            Route::Workouts => "nav-workouts",
            Route::Day(DayId::Push) => "nav-push",
            Route::Day(DayId::Pull) => "nav-pull",
            Route::Day(DayId::Legs) => "nav-legs",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
