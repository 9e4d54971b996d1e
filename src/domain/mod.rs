// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so it stays
//! trivially testable.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`MediaError`](error::MediaError))
//! - [`media`]: Media playback types ([`MediaSource`](media::MediaSource),
//!   [`PlayOrigin`](media::PlayOrigin), [`AutoplayPolicy`](media::AutoplayPolicy),
//!   [`VideoFrame`](media::VideoFrame))
//! - [`workout`]: Workout program types ([`WorkoutDay`](workout::WorkoutDay),
//!   [`Exercise`](workout::Exercise), [`DayId`](workout::DayId))

pub mod error;
pub mod media;
pub mod workout;
