// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`MediaElement`] port trait.
//!
//! - [`decoder`] runs demuxing, decoding and RGBA conversion on its own
//!   thread and talks to the element through channels
//! - [`audio`] plays the clip's audio track through `cpal`; the element
//!   mutes it through the shared sink state
//! - [`FfmpegElement`] owns one decoder, applies the autoplay policy and
//!   translates decoder events into [`MediaEvent`]s
//!
//! [`MediaElement`]: crate::application::port::MediaElement
//! [`MediaEvent`]: crate::application::port::MediaEvent

pub mod audio;
pub mod decoder;
mod element;

pub use element::{FfmpegElement, FfmpegElementFactory};

use crate::domain::error::MediaError;
use std::sync::OnceLock;

static FFMPEG_READY: OnceLock<bool> = OnceLock::new();

/// Initializes `FFmpeg` once per process.
///
/// # Errors
///
/// Returns [`MediaError::BackendUnavailable`] if the libraries failed to
/// initialize, now or on an earlier call.
pub fn init_ffmpeg() -> Result<(), MediaError> {
    let ready = *FFMPEG_READY.get_or_init(|| {
        if let Err(e) = ffmpeg_next::init() {
            tracing::error!("FFmpeg initialization failed: {e}");
            return false;
        }
        // Remote tutorial clips are fetched over HTTP(S).
        ffmpeg_next::format::network::init();

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
        true
    });

    if ready {
        Ok(())
    } else {
        Err(MediaError::BackendUnavailable)
    }
}
