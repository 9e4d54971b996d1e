// SPDX-License-Identifier: MPL-2.0
//! Workout catalog loading and validation.
//!
//! The catalog ships embedded in the binary (`assets/catalog/workouts.toml`)
//! and can be replaced at startup with `--catalog <file>`. The file format:
//!
//! ```toml
//! [[day]]
//! id = "push"            # push | pull | legs, unique
//! title = "Push Day"
//! subtitle = "Chest, Shoulders, Triceps"
//! focus = "Chest, Shoulders & Triceps"
//! duration = "45-60 min"
//! difficulty = "Intermediate"
//! frequency = "2x per week"
//! description = "..."
//!
//! [[day.exercise]]
//! name = "Incline Dumbbell Press"
//! sets = 4
//! reps = "8-12"
//! media = "/assets/InclineDumbbellPress.mp4"   # path or URL, kept as-is
//! description = "..."
//! tips = ["..."]
//! muscles = ["..."]
//! ```

use crate::domain::media::MediaSource;
use crate::domain::workout::{DayId, Exercise, WorkoutDay};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct CatalogAssets;

const EMBEDDED_FILE: &str = "workouts.toml";

// =============================================================================
// File Schema
// =============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    day: Vec<DayEntry>,
}

#[derive(Debug, Deserialize)]
struct DayEntry {
    id: String,
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    focus: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default)]
    frequency: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    exercise: Vec<ExerciseEntry>,
}

#[derive(Debug, Deserialize)]
struct ExerciseEntry {
    #[serde(default)]
    name: String,
    sets: u8,
    reps: String,
    #[serde(default)]
    media: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tips: Vec<String>,
    #[serde(default)]
    muscles: Vec<String>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Validated set of workout days.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    days: Vec<WorkoutDay>,
}

impl Catalog {
    /// Parses and validates a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the text is not valid TOML for the
    /// catalog schema, has no day, repeats or misspells a day id, or has an
    /// exercise without a name or media location.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| Error::Catalog(e.to_string()))?;

        if file.day.is_empty() {
            return Err(Error::Catalog("catalog has no workout day".into()));
        }

        let mut seen = HashSet::new();
        let mut days = Vec::with_capacity(file.day.len());
        for entry in file.day {
            let id = DayId::parse(&entry.id)
                .ok_or_else(|| Error::Catalog(format!("unknown day id `{}`", entry.id)))?;
            if !seen.insert(id) {
                return Err(Error::Catalog(format!("duplicate day id `{id}`")));
            }
            days.push(convert_day(id, entry)?);
        }

        Ok(Self { days })
    }

    /// Reads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or any error of
    /// [`Catalog::from_toml_str`].
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the embedded asset is missing or invalid.
    pub fn embedded() -> Result<Self> {
        let file = CatalogAssets::get(EMBEDDED_FILE)
            .ok_or_else(|| Error::Catalog(format!("embedded {EMBEDDED_FILE} missing")))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| Error::Catalog(format!("embedded catalog is not UTF-8: {e}")))?;
        Self::from_toml_str(content)
    }

    /// Loads the catalog at `path`, falling back to the embedded one when
    /// no path is given or the file cannot be used.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded catalog itself is unusable.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            match Self::load_from_path(path) {
                Ok(catalog) => {
                    tracing::info!(path = %path.display(), days = catalog.days.len(), "catalog loaded");
                    return Ok(catalog);
                }
                Err(err) => {
                    tracing::error!(path = %path.display(), "using embedded catalog: {err}");
                }
            }
        }
        Self::embedded()
    }

    #[must_use]
    pub fn days(&self) -> &[WorkoutDay] {
        &self.days
    }

    #[must_use]
    pub fn day(&self, id: DayId) -> Option<&WorkoutDay> {
        self.days.iter().find(|day| day.id == id)
    }

    /// Total number of exercises across all days.
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(WorkoutDay::exercise_count).sum()
    }
}

fn convert_day(id: DayId, entry: DayEntry) -> Result<WorkoutDay> {
    let exercises = entry
        .exercise
        .into_iter()
        .enumerate()
        .map(|(index, exercise)| convert_exercise(id, index, exercise))
        .collect::<Result<Vec<_>>>()?;

    Ok(WorkoutDay {
        id,
        title: entry.title,
        subtitle: entry.subtitle,
        focus: entry.focus,
        duration: entry.duration,
        difficulty: entry.difficulty,
        frequency: entry.frequency,
        description: entry.description,
        exercises,
    })
}

fn convert_exercise(day: DayId, index: usize, entry: ExerciseEntry) -> Result<Exercise> {
    if entry.name.trim().is_empty() {
        return Err(Error::Catalog(format!(
            "exercise #{} of `{day}` has no name",
            index + 1
        )));
    }
    let media = MediaSource::new(entry.media);
    if media.is_blank() {
        return Err(Error::Catalog(format!(
            "exercise `{}` of `{day}` has no media",
            entry.name
        )));
    }

    Ok(Exercise {
        name: entry.name,
        sets: entry.sets,
        reps: entry.reps,
        media,
        description: entry.description,
        tips: entry.tips,
        muscles: entry.muscles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[[day]]
id = "legs"
title = "Leg Day"

[[day.exercise]]
name = "Squat"
sets = 4
reps = "8-12"
media = "squat.mp4"
"#;

    #[test]
    fn embedded_catalog_has_three_full_days() {
        let catalog = Catalog::embedded().expect("embedded catalog should be valid");
        let ids: Vec<_> = catalog.days().iter().map(|day| day.id).collect();
        assert_eq!(ids, DayId::ALL);
        for day in catalog.days() {
            assert_eq!(day.exercise_count(), 6, "{} should have six exercises", day.id);
        }
        assert_eq!(catalog.exercise_count(), 18);
    }

    #[test]
    fn media_locations_are_kept_verbatim() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let legs = catalog.day(DayId::Legs).expect("legs day");
        assert!(legs.exercises[0].media.as_str().starts_with("https://"));
        let pull = catalog.day(DayId::Pull).expect("pull day");
        assert_eq!(pull.exercises[0].media.as_str(), "/assets/lat-pulldown.mp4");
    }

    #[test]
    fn minimal_catalog_parses_with_defaults() {
        let catalog = Catalog::from_toml_str(MINIMAL).expect("valid");
        let day = catalog.day(DayId::Legs).expect("legs");
        assert!(day.subtitle.is_empty());
        assert!(day.exercises[0].tips.is_empty());
        assert!(catalog.day(DayId::Push).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            Catalog::from_toml_str(""),
            Err(Error::Catalog(msg)) if msg.contains("no workout day")
        ));
    }

    #[test]
    fn duplicate_day_is_rejected() {
        let doubled = format!("{MINIMAL}\n{MINIMAL}");
        assert!(matches!(
            Catalog::from_toml_str(&doubled),
            Err(Error::Catalog(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn unknown_day_is_rejected() {
        let content = MINIMAL.replace("\"legs\"", "\"arms\"");
        assert!(matches!(
            Catalog::from_toml_str(&content),
            Err(Error::Catalog(msg)) if msg.contains("arms")
        ));
    }

    #[test]
    fn exercise_without_media_is_rejected() {
        let content = MINIMAL.replace("media = \"squat.mp4\"", "media = \" \"");
        assert!(matches!(
            Catalog::from_toml_str(&content),
            Err(Error::Catalog(msg)) if msg.contains("no media")
        ));
    }

    #[test]
    fn exercise_without_name_is_rejected() {
        let content = MINIMAL.replace("name = \"Squat\"", "name = \"\"");
        assert!(matches!(
            Catalog::from_toml_str(&content),
            Err(Error::Catalog(msg)) if msg.contains("no name")
        ));
    }

    #[test]
    fn unreadable_path_falls_back_to_embedded() {
        let catalog = Catalog::load(Some(Path::new("/nonexistent/fitflow/workouts.toml")))
            .expect("fallback should succeed");
        assert_eq!(catalog, Catalog::embedded().expect("embedded"));
    }
}
