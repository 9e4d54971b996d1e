// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`ffmpeg`]: Video playback via `FFmpeg` (feature `ffmpeg`)
//! - [`unavailable`]: Stand-in element for builds without a media backend
//!
//! Use [`media_factory`] to get the factory matching the compiled features.

#[cfg(feature = "ffmpeg")]
pub mod ffmpeg;
pub mod unavailable;

use crate::application::port::MediaElementFactory;
use crate::domain::media::AutoplayPolicy;
use std::sync::Arc;

/// Returns the media element factory for this build.
#[must_use]
pub fn media_factory(policy: AutoplayPolicy, start_muted: bool) -> Arc<dyn MediaElementFactory> {
    #[cfg(feature = "ffmpeg")]
    {
        Arc::new(ffmpeg::FfmpegElementFactory::new(policy, start_muted))
    }
    #[cfg(not(feature = "ffmpeg"))]
    {
        Arc::new(unavailable::UnavailableElementFactory::new(policy, start_muted))
    }
}
