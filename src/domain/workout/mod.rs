// SPDX-License-Identifier: MPL-2.0
//! Workout program types.

mod types;

pub use types::{DayId, Exercise, WorkoutDay};
