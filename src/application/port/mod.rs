// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`media`]: Media element lifecycle, playback requests and events
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - No `async fn`: outcomes arrive later as polled events

pub mod media;

pub use media::{MediaElement, MediaElementFactory, MediaEvent};
