// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the content side of the app: the workout catalog,
//! the settings file, translations and routes.

use fitflow::app::Route;
use fitflow::catalog::Catalog;
use fitflow::config::{self, Config};
use fitflow::domain::media::AutoplayPolicy;
use fitflow::domain::workout::DayId;
use fitflow::i18n::fluent::I18n;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

fn ftl_keys(file: &str) -> BTreeSet<String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets/i18n")
        .join(file);
    let content = fs::read_to_string(&path).expect("translation file should exist");
    content
        .lines()
        .filter(|line| !line.starts_with([' ', '#', '\t']))
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect()
}

#[test]
fn test_every_day_route_has_a_catalog_entry() {
    let catalog = Catalog::embedded().expect("embedded catalog");
    for route in Route::ALL {
        if let Route::Day(id) = route {
            let day = catalog.day(id).expect("day should exist");
            assert!(!day.title.is_empty());
            assert!(day.exercises.iter().all(|exercise| !exercise.media.is_blank()));
        }
    }
}

#[test]
fn test_routes_round_trip_through_paths() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), route);
    }
    assert_eq!(Route::from_path("/legs/"), Route::Day(DayId::Legs));
    assert_eq!(Route::from_path("/nowhere"), Route::Home);
}

#[test]
fn test_catalog_file_overrides_embedded() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let path = temp_dir.path().join("workouts.toml");
    fs::write(
        &path,
        r#"
[[day]]
id = "push"
title = "Short Push"

[[day.exercise]]
name = "Push-up"
sets = 3
reps = "15"
media = "https://videos.example.com/push-up.mp4"
"#,
    )
    .expect("write catalog");

    let catalog = Catalog::load(Some(&path)).expect("catalog");
    assert_eq!(catalog.days().len(), 1);
    assert_eq!(catalog.exercise_count(), 1);
    let push = catalog.day(DayId::Push).expect("push day");
    assert_eq!(push.title, "Short Push");
    assert_eq!(
        push.exercises[0].media.as_str(),
        "https://videos.example.com/push-up.mp4"
    );
}

#[test]
fn test_invalid_catalog_file_falls_back_to_embedded() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let path = temp_dir.path().join("workouts.toml");
    fs::write(&path, "[[day]]\nid = \"arms\"\ntitle = \"Arms\"\n").expect("write catalog");

    let catalog = Catalog::load(Some(&path)).expect("fallback");
    assert_eq!(catalog.days().len(), 3);
}

#[test]
fn test_settings_survive_save_and_load() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    settings.video.autoplay = AutoplayPolicy::Block;

    config::save_with_override(&settings, Some(temp_dir.path().to_path_buf()))
        .expect("save settings");
    let (loaded, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, settings);
}

#[test]
fn test_cli_language_beats_config() {
    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("fr".to_string()), &settings);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("nav-home"), "Accueil");
}

#[test]
fn test_unknown_language_falls_back_to_available_locale() {
    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("xx-YY".to_string()), &settings);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn test_missing_key_is_visible() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
}

#[test]
fn test_translations_share_the_same_keys() {
    let english = ftl_keys("en-US.ftl");
    let french = ftl_keys("fr.ftl");
    assert!(!english.is_empty());
    assert_eq!(
        english.symmetric_difference(&french).collect::<Vec<_>>(),
        Vec::<&String>::new()
    );
}
