// SPDX-License-Identifier: MPL-2.0
//! Threaded video decoder using `FFmpeg`.
//!
//! The decoder opens the source, decodes video packets to RGBA frames and
//! paces them by presentation timestamp. Audio packets go to the
//! [`AudioTrack`] when the clip has one. It answers play and pause commands
//! with confirmation events so the element can report observed state.

use super::audio::{AudioTrack, SharedSink};
use crate::domain::error::MediaError;
use crate::domain::media::VideoFrame;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Capacity of the event channel. Small so the decoder blocks instead of
/// piling frames up when the UI is slow to drain.
const EVENT_CAPACITY: usize = 2;

/// Idle sleep while paused.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Commands sent to the decoder thread.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderCommand {
    /// Start or resume playback.
    Play,
    /// Pause playback, keeping the current position.
    Pause,
    /// Seek to a position without changing the play state.
    Seek { target_secs: f64 },
    /// Stop decoding and release resources.
    Stop,
}

/// Events sent from the decoder thread.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// A play command took effect.
    Playing,
    /// A pause command took effect, or the stream ended.
    Paused,
    /// A frame is due for display.
    Frame { frame: VideoFrame, pts_secs: f64 },
    /// No more frames.
    EndOfStream,
    /// Open, seek or decode failure.
    Error(MediaError),
}

/// Handle to a running decoder thread.
///
/// Dropping the handle closes both channels, which stops the thread.
pub struct DecoderHandle {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl DecoderHandle {
    /// Spawns a decoder thread for `location` (path or URL, passed as-is).
    /// Decoded audio is queued into `sink`.
    ///
    /// Opening happens on the thread; failures arrive as
    /// [`DecoderEvent::Error`].
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::LoadFailed`] if the thread cannot be spawned.
    pub fn spawn(location: String, sink: SharedSink) -> Result<Self, MediaError> {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(EVENT_CAPACITY);

        std::thread::Builder::new()
            .name("fitflow-decoder".into())
            .spawn(move || {
                let result = decoder_loop(&location, command_rx, &event_tx, &sink);
                sink.set_paused(true);
                if let Err(e) = result {
                    tracing::warn!(source = %location, "decoder stopped: {e}");
                    let _ = event_tx.blocking_send(DecoderEvent::Error(e));
                }
            })
            .map_err(|e| MediaError::LoadFailed(format!("failed to start decoder: {e}")))?;

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sends a command. Returns `false` if the thread has exited.
    pub fn send(&self, command: DecoderCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    /// Receives the next event without blocking.
    pub fn try_recv(&mut self) -> Option<DecoderEvent> {
        self.event_rx.try_recv().ok()
    }
}

impl Drop for DecoderHandle {
    fn drop(&mut self) {
        let _ = self.command_tx.send(DecoderCommand::Stop);
    }
}

/// Playback clock state kept by the decoder loop.
#[derive(Debug, Default)]
struct Clock {
    playing: bool,
    started_at: Option<Instant>,
    first_pts: Option<f64>,
    current_pts: f64,
    at_end: bool,
}

impl Clock {
    fn stop(&mut self) {
        self.playing = false;
        self.started_at = None;
        self.first_pts = None;
    }

    /// Time to wait before showing a frame with `pts_secs`.
    fn delay_for(&mut self, pts_secs: f64, now: Instant) -> Duration {
        let Some(start) = self.started_at else {
            return Duration::ZERO;
        };
        let first = *self.first_pts.get_or_insert(pts_secs);
        let offset = (pts_secs - first).max(0.0);
        let due = start + Duration::from_secs_f64(offset);
        due.saturating_duration_since(now)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_av_timestamp(secs: f64) -> i64 {
    (secs * f64::from(ffmpeg_next::ffi::AV_TIME_BASE)) as i64
}

fn decoder_loop(
    location: &str,
    mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    event_tx: &mpsc::Sender<DecoderEvent>,
    sink: &SharedSink,
) -> Result<(), MediaError> {
    super::init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&location)
        .map_err(|e| MediaError::LoadFailed(format!("failed to open {location}: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| MediaError::LoadFailed("no video stream found".to_string()))?;
    let video_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| MediaError::LoadFailed(format!("failed to create codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| MediaError::LoadFailed(format!("failed to create video decoder: {e}")))?;

    let width = decoder.width();
    let height = decoder.height();

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| MediaError::LoadFailed(format!("failed to create scaler: {e}")))?;

    let time_base = input.time_base();
    let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

    let mut audio = AudioTrack::open(&ictx, std::sync::Arc::clone(sink));

    tracing::debug!(
        source = location,
        width,
        height,
        audio = audio.is_some(),
        "media opened"
    );

    let mut clock = Clock::default();

    loop {
        match command_rx.try_recv() {
            Ok(DecoderCommand::Play) => {
                let resume_from = if clock.at_end { 0.0 } else { clock.current_pts };
                if !clock.playing && (resume_from > 0.0 || clock.at_end) {
                    let ts = to_av_timestamp(resume_from);
                    if let Err(e) = ictx.seek(ts, ..ts) {
                        let _ = event_tx.blocking_send(DecoderEvent::Error(
                            MediaError::DecodeFailed(format!("resume seek failed: {e}")),
                        ));
                    } else {
                        decoder.flush();
                        if let Some(track) = audio.as_mut() {
                            track.flush();
                        }
                    }
                }
                sink.set_paused(false);
                clock.playing = true;
                clock.at_end = false;
                clock.started_at = Some(Instant::now());
                clock.first_pts = None;
                if event_tx.blocking_send(DecoderEvent::Playing).is_err() {
                    break;
                }
            }
            Ok(DecoderCommand::Pause) => {
                sink.set_paused(true);
                clock.stop();
                if event_tx.blocking_send(DecoderEvent::Paused).is_err() {
                    break;
                }
            }
            Ok(DecoderCommand::Seek { target_secs }) => {
                let ts = to_av_timestamp(target_secs);
                if let Err(e) = ictx.seek(ts, ..ts) {
                    let _ = event_tx.blocking_send(DecoderEvent::Error(MediaError::DecodeFailed(
                        format!("seek failed: {e}"),
                    )));
                } else {
                    decoder.flush();
                    if let Some(track) = audio.as_mut() {
                        track.flush();
                    }
                    clock.current_pts = target_secs;
                    clock.at_end = false;
                    if clock.playing {
                        clock.started_at = Some(Instant::now());
                        clock.first_pts = None;
                    }
                }
            }
            Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        if !clock.playing {
            std::thread::sleep(IDLE_POLL);
            continue;
        }

        let mut frame_sent = false;
        for (stream, packet) in ictx.packets() {
            if let Some(track) = audio
                .as_mut()
                .filter(|track| track.stream_index() == stream.index())
            {
                track.decode(&packet);
                continue;
            }
            if stream.index() != video_stream_index {
                continue;
            }

            if let Err(e) = decoder.send_packet(&packet) {
                let _ = event_tx.blocking_send(DecoderEvent::Error(MediaError::DecodeFailed(
                    format!("packet send failed: {e}"),
                )));
                continue;
            }

            let mut decoded = ffmpeg_next::frame::Video::empty();
            if decoder.receive_frame(&mut decoded).is_err() {
                continue;
            }

            let mut rgba_frame = ffmpeg_next::frame::Video::empty();
            if let Err(e) = scaler.run(&decoded, &mut rgba_frame) {
                let _ = event_tx.blocking_send(DecoderEvent::Error(MediaError::DecodeFailed(
                    format!("scaling failed: {e}"),
                )));
                continue;
            }

            #[allow(clippy::cast_precision_loss)]
            let pts_secs = decoded
                .timestamp()
                .map_or(clock.current_pts, |pts| pts as f64 * time_base_f64);

            let wait = clock.delay_for(pts_secs, Instant::now());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
            clock.current_pts = pts_secs;

            let Some(frame) = VideoFrame::new(width, height, extract_rgba_data(&rgba_frame))
            else {
                continue;
            };
            if event_tx
                .blocking_send(DecoderEvent::Frame { frame, pts_secs })
                .is_err()
            {
                return Ok(());
            }
            frame_sent = true;
            break;
        }

        if !frame_sent {
            clock.stop();
            clock.at_end = true;
            let _ = event_tx.blocking_send(DecoderEvent::Paused);
            let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
        }
    }

    Ok(())
}

/// Copies RGBA rows out of a frame, dropping stride padding.
#[allow(clippy::cast_possible_truncation)]
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width();
    let height = frame.height();
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let row_start = (y * stride as u32) as usize;
        let row_end = row_start + (width * 4) as usize;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }

    rgba_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_without_start_never_waits() {
        let mut clock = Clock::default();
        assert_eq!(clock.delay_for(5.0, Instant::now()), Duration::ZERO);
    }

    #[test]
    fn clock_paces_relative_to_first_frame() {
        let now = Instant::now();
        let mut clock = Clock {
            playing: true,
            started_at: Some(now),
            ..Clock::default()
        };
        assert_eq!(clock.delay_for(10.0, now), Duration::ZERO);
        let wait = clock.delay_for(10.5, now);
        assert_eq!(wait, Duration::from_millis(500));
    }

    #[test]
    fn stop_resets_timing_but_keeps_position() {
        let mut clock = Clock {
            playing: true,
            started_at: Some(Instant::now()),
            first_pts: Some(1.0),
            current_pts: 3.0,
            at_end: false,
        };
        clock.stop();
        assert!(!clock.playing);
        assert!(clock.started_at.is_none());
        assert!((clock.current_pts - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_source_reports_load_failure() {
        let sink = crate::infrastructure::ffmpeg::audio::SinkState::shared(false);
        let mut handle = DecoderHandle::spawn("/nonexistent/fitflow/clip.mp4".into(), sink)
            .expect("thread should spawn");
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = None;
        while Instant::now() < deadline {
            if let Some(event) = handle.try_recv() {
                seen = Some(event);
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(matches!(
            seen,
            Some(DecoderEvent::Error(
                MediaError::LoadFailed(_) | MediaError::BackendUnavailable
            ))
        ));
    }
}
