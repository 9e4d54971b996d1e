// SPDX-License-Identifier: MPL-2.0
//! Media playback errors.

use std::fmt;

/// Failure reported by a media element.
///
/// None of these are fatal for the overlay: an autoplay refusal leaves the
/// session paused, everything else is logged and the session stays as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The platform refused a play request that did not come from the user.
    AutoplayDeclined,
    /// A command was issued before any source was loaded.
    NotLoaded,
    /// The source could not be opened (missing file, bad URL, no video stream).
    LoadFailed(String),
    /// The source opened but a frame could not be decoded.
    DecodeFailed(String),
    /// No decoding backend was compiled into this build.
    BackendUnavailable,
}

impl MediaError {
    /// Returns the i18n message key describing this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaError::AutoplayDeclined => "error-media-autoplay-declined",
            MediaError::NotLoaded => "error-media-not-loaded",
            MediaError::LoadFailed(_) => "error-media-load-failed",
            MediaError::DecodeFailed(_) => "error-media-decode-failed",
            MediaError::BackendUnavailable => "error-media-backend-unavailable",
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::AutoplayDeclined => write!(f, "autoplay declined"),
            MediaError::NotLoaded => write!(f, "no media loaded"),
            MediaError::LoadFailed(msg) => write!(f, "failed to load media: {msg}"),
            MediaError::DecodeFailed(msg) => write!(f, "failed to decode media: {msg}"),
            MediaError::BackendUnavailable => write!(f, "no media backend available"),
        }
    }
}

impl std::error::Error for MediaError {}
