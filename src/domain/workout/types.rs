// SPDX-License-Identifier: MPL-2.0
//! Workout days and their exercises.

use crate::domain::media::MediaSource;
use std::fmt;

/// Identifier of one day of the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayId {
    Push,
    Pull,
    Legs,
}

impl DayId {
    pub const ALL: [DayId; 3] = [DayId::Push, DayId::Pull, DayId::Legs];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DayId::Push => "push",
            DayId::Pull => "pull",
            DayId::Legs => "legs",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exercise of a workout day.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: u8,
    /// Rep range as written, e.g. `8-12`.
    pub reps: String,
    pub media: MediaSource,
    pub description: String,
    pub tips: Vec<String>,
    pub muscles: Vec<String>,
}

impl Exercise {
    /// Sets and reps in the `4 × 8-12` form shown on cards.
    #[must_use]
    pub fn scheme(&self) -> String {
        format!("{} × {}", self.sets, self.reps)
    }
}

/// A day of the push/pull/legs split.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDay {
    pub id: DayId,
    pub title: String,
    pub subtitle: String,
    /// Muscle groups trained, e.g. `Chest, Shoulders, Triceps`.
    pub focus: String,
    pub duration: String,
    pub difficulty: String,
    pub frequency: String,
    pub description: String,
    pub exercises: Vec<Exercise>,
}

impl WorkoutDay {
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_id_parses_its_own_spelling() {
        for id in DayId::ALL {
            assert_eq!(DayId::parse(id.as_str()), Some(id));
        }
        assert_eq!(DayId::parse("arms"), None);
        assert_eq!(DayId::parse("Push"), None);
    }

    #[test]
    fn scheme_joins_sets_and_reps() {
        let exercise = Exercise {
            name: "Squat".into(),
            sets: 4,
            reps: "6-10".into(),
            media: MediaSource::new("Squat.mp4"),
            description: String::new(),
            tips: Vec::new(),
            muscles: Vec::new(),
        };
        assert_eq!(exercise.scheme(), "4 × 6-10");
    }
}
