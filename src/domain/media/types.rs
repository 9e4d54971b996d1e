// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.

use std::fmt;
use std::sync::Arc;

/// Opaque media location.
///
/// Local paths and remote URLs are both accepted and passed to the backend
/// untouched; no scheme is inferred or rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaSource(String);

impl MediaSource {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Returns the location exactly as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the location is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaSource {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MediaSource {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Who asked for playback to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrigin {
    /// Requested by the widget itself when a session opens.
    Autoplay,
    /// Requested by an explicit user gesture.
    User,
}

/// Platform rule deciding whether an autoplay request is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayPolicy {
    /// Autoplay always allowed.
    #[default]
    Allow,
    /// Autoplay allowed only while the element is muted.
    AllowMuted,
    /// Autoplay always refused.
    Block,
}

impl AutoplayPolicy {
    /// Returns whether a play request from `origin` may start playback.
    ///
    /// User-initiated requests are never refused by the policy.
    #[must_use]
    pub fn permits(self, origin: PlayOrigin, muted: bool) -> bool {
        match (origin, self) {
            (PlayOrigin::User, _) | (PlayOrigin::Autoplay, AutoplayPolicy::Allow) => true,
            (PlayOrigin::Autoplay, AutoplayPolicy::AllowMuted) => muted,
            (PlayOrigin::Autoplay, AutoplayPolicy::Block) => false,
        }
    }

    /// Parses the configuration spelling (`allow`, `allow-muted`, `block`).
    #[must_use]
    pub fn from_config_str(value: &str) -> Option<Self> {
        match value {
            "allow" => Some(Self::Allow),
            "allow-muted" => Some(Self::AllowMuted),
            "block" => Some(Self::Block),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_config_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::AllowMuted => "allow-muted",
            Self::Block => "block",
        }
    }
}

/// A decoded video frame in RGBA8 layout.
///
/// Pixel data is shared so frames can be cloned into messages cheaply.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    width: u32,
    height: u32,
    rgba: Arc<Vec<u8>>,
}

impl VideoFrame {
    /// Creates a frame, returning `None` when the buffer does not hold
    /// exactly `width * height * 4` bytes.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        (rgba.len() == expected).then(|| Self {
            width,
            height,
            rgba: Arc::new(rgba),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Returns the pixel buffer as an owned vector, cloning only if shared.
    #[must_use]
    pub fn into_rgba(self) -> Vec<u8> {
        Arc::try_unwrap(self.rgba).unwrap_or_else(|shared| (*shared).clone())
    }
}
