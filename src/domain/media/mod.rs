// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! Pure data describing what is played and how play requests are judged.
//! The presentation layer converts [`VideoFrame`] into framework handles.

mod types;

pub use types::{AutoplayPolicy, MediaSource, PlayOrigin, VideoFrame};
