// SPDX-License-Identifier: MPL-2.0
//! Translations.
//!
//! [`fluent::I18n`] holds one Fluent bundle per `.ftl` file under
//! `assets/i18n/` and formats messages in the selected locale. Unknown keys
//! render as `MISSING: <key>` so gaps are visible in the UI.

pub mod fluent;
