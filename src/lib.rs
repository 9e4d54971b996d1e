// SPDX-License-Identifier: MPL-2.0
//! `fitflow` is a push/pull/legs workout guide built with the Iced GUI
//! framework.
//!
//! It presents a static workout catalog across a handful of pages and plays
//! exercise tutorial clips in an on-demand video overlay, with Fluent
//! localization and a small TOML configuration file.

pub mod app;
pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod test_utils;
pub mod ui;
