// SPDX-License-Identifier: MPL-2.0
//! Audio track playback through `cpal`.
//!
//! The decoder thread decodes the clip's best audio stream, resamples it to
//! the output device format and queues the samples into a [`SinkState`].
//! The same state is held by the media element, which mutes it directly:
//! the output callback reads the mute flag for every buffer it fills, so a
//! mute is in effect as soon as [`SinkState::set_muted`] returns.
//!
//! `cpal::Stream` is not `Send` on every platform, so [`AudioOutput`] is
//! created and dropped on the decoder thread and never leaves it.

use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Decoded audio is resampled to at most this many channels.
const MAX_SOURCE_CHANNELS: usize = 2;

/// Seconds of audio the sink buffers before dropping samples.
const BUFFER_SECS: usize = 1;

/// State shared by the element, the decoder thread and the output callback.
#[derive(Debug)]
pub struct SinkState {
    muted: AtomicBool,
    paused: AtomicBool,
    /// Interleaved f32 samples in [-1.0, 1.0], in source channel layout.
    buffer: Mutex<VecDeque<f32>>,
}

pub type SharedSink = Arc<SinkState>;

impl SinkState {
    /// A paused sink; nothing is heard until playback starts.
    #[must_use]
    pub fn new(muted: bool) -> Self {
        Self {
            muted: AtomicBool::new(muted),
            paused: AtomicBool::new(true),
            buffer: Mutex::new(VecDeque::new()),
        }
    }

    #[must_use]
    pub fn shared(muted: bool) -> SharedSink {
        Arc::new(Self::new(muted))
    }

    pub fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Output volume currently applied: zero while muted or paused.
    #[must_use]
    pub fn gain(&self) -> f32 {
        if self.is_muted() || self.is_paused() {
            0.0
        } else {
            1.0
        }
    }

    /// Discards buffered samples (after a seek).
    pub fn clear(&self) {
        self.lock_buffer().clear();
    }

    /// Number of buffered samples.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.lock_buffer().len()
    }

    /// Appends samples, keeping at most `capacity` buffered. Returns how
    /// many were accepted.
    pub fn push(&self, samples: &[f32], capacity: usize) -> usize {
        let mut buffer = self.lock_buffer();
        let accepted = capacity.saturating_sub(buffer.len()).min(samples.len());
        buffer.extend(&samples[..accepted]);
        accepted
    }

    /// Fills one device buffer.
    ///
    /// While paused nothing is consumed. While muted samples are consumed
    /// and silence is written, so unmuting resumes in sync with the video.
    /// Device channels beyond the source layout get silence.
    pub fn fill<T>(&self, data: &mut [T], device_channels: usize, source_channels: usize)
    where
        T: cpal::SizedSample + cpal::FromSample<f32>,
    {
        let silence = T::from_sample(0.0_f32);
        let source_channels = source_channels.min(MAX_SOURCE_CHANNELS);
        if self.is_paused() || device_channels == 0 || source_channels == 0 {
            data.fill(silence);
            return;
        }

        let gain = self.gain();
        let mut buffer = self.lock_buffer();
        for frame in data.chunks_mut(device_channels) {
            if buffer.len() < source_channels {
                frame.fill(silence);
                continue;
            }
            let mut source = [0.0_f32; MAX_SOURCE_CHANNELS];
            for (slot, value) in source.iter_mut().zip(buffer.drain(..source_channels)) {
                *slot = value;
            }
            for (channel, sample) in frame.iter_mut().enumerate() {
                *sample = if channel < source_channels {
                    // Just below 1.0: i16 conversion overflows at exactly 1.0.
                    T::from_sample((source[channel] * gain).clamp(-1.0, 0.999_999_9))
                } else {
                    silence
                };
            }
        }
    }

    fn lock_buffer(&self) -> std::sync::MutexGuard<'_, VecDeque<f32>> {
        self.buffer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Output stream on the default audio device.
pub struct AudioOutput {
    sink: SharedSink,
    sample_rate: u32,
    device_channels: u16,
    source_channels: u16,
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Opens the default output device and starts a stream draining `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if there is no output device or the stream
    /// cannot be built or started.
    pub fn open(sink: SharedSink) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Io("no audio output device found".to_string()))?;
        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Io(format!("failed to get audio config: {e}")))?;

        let sample_rate = supported_config.sample_rate();
        let device_channels = supported_config.channels();
        let source_channels = if device_channels == 1 { 1 } else { 2 };

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(
                &device,
                &supported_config.into(),
                Arc::clone(&sink),
                source_channels,
            )?,
            cpal::SampleFormat::I16 => build_stream::<i16>(
                &device,
                &supported_config.into(),
                Arc::clone(&sink),
                source_channels,
            )?,
            cpal::SampleFormat::U16 => build_stream::<u16>(
                &device,
                &supported_config.into(),
                Arc::clone(&sink),
                source_channels,
            )?,
            other => {
                return Err(Error::Io(format!("unsupported audio sample format {other:?}")));
            }
        };
        stream
            .play()
            .map_err(|e| Error::Io(format!("failed to start audio stream: {e}")))?;

        Ok(Self {
            sink,
            sample_rate,
            device_channels,
            source_channels,
            _stream: stream,
        })
    }

    /// Queues resampled samples, dropping what does not fit.
    pub fn queue(&self, samples: &[f32]) {
        let capacity = self.sample_rate as usize * usize::from(self.source_channels) * BUFFER_SECS;
        let accepted = self.sink.push(samples, capacity);
        if accepted < samples.len() {
            tracing::trace!(dropped = samples.len() - accepted, "audio buffer full");
        }
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count the decoder must resample to.
    #[must_use]
    pub fn source_channels(&self) -> u16 {
        self.source_channels
    }

    #[must_use]
    pub fn device_channels(&self) -> u16 {
        self.device_channels
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    sink: SharedSink,
    source_channels: u16,
) -> Result<cpal::Stream>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let device_channels = usize::from(config.channels);
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                sink.fill(data, device_channels, usize::from(source_channels));
            },
            |err| tracing::warn!("audio output error: {err}"),
            None,
        )
        .map_err(|e| Error::Io(format!("failed to build audio stream: {e}")))
}

/// Decoder and resampler for the audio stream of an open input.
pub struct AudioTrack {
    stream_index: usize,
    decoder: ffmpeg_next::decoder::Audio,
    resampler: ffmpeg_next::software::resampling::Context,
    output: AudioOutput,
}

impl AudioTrack {
    /// Prepares playback of the best audio stream of `ictx`.
    ///
    /// Returns `None` when the clip has no audio, or when it cannot be
    /// played (no device, unsupported codec); the video plays silently.
    pub fn open(ictx: &ffmpeg_next::format::context::Input, sink: SharedSink) -> Option<Self> {
        let input = ictx.streams().best(ffmpeg_next::media::Type::Audio)?;
        let stream_index = input.index();

        let decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
            .and_then(|context| context.decoder().audio());
        let decoder = match decoder {
            Ok(decoder) => decoder,
            Err(e) => {
                tracing::warn!("audio track skipped, no decoder: {e}");
                return None;
            }
        };

        let output = match AudioOutput::open(sink) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("audio track skipped: {e}");
                return None;
            }
        };

        let layout = if output.source_channels() == 1 {
            ffmpeg_next::ChannelLayout::MONO
        } else {
            ffmpeg_next::ChannelLayout::STEREO
        };
        let resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
            layout,
            output.sample_rate(),
        );
        let resampler = match resampler {
            Ok(resampler) => resampler,
            Err(e) => {
                tracing::warn!("audio track skipped, no resampler: {e}");
                return None;
            }
        };

        tracing::debug!(
            rate = output.sample_rate(),
            channels = output.device_channels(),
            "audio output opened"
        );
        Some(Self {
            stream_index,
            decoder,
            resampler,
            output,
        })
    }

    #[must_use]
    pub fn stream_index(&self) -> usize {
        self.stream_index
    }

    /// Decodes one packet and queues every frame it yields.
    pub fn decode(&mut self, packet: &ffmpeg_next::Packet) {
        if let Err(e) = self.decoder.send_packet(packet) {
            tracing::debug!("audio packet rejected: {e}");
            return;
        }
        let mut decoded = ffmpeg_next::frame::Audio::empty();
        while self.decoder.receive_frame(&mut decoded).is_ok() {
            let mut resampled = ffmpeg_next::frame::Audio::empty();
            if let Err(e) = self.resampler.run(&decoded, &mut resampled) {
                tracing::debug!("audio resampling failed: {e}");
                continue;
            }
            let samples = extract_samples(&resampled, self.output.source_channels());
            self.output.queue(&samples);
        }
    }

    /// Drops decoder state and buffered audio after a seek.
    pub fn flush(&mut self) {
        self.decoder.flush();
        self.output.sink.clear();
    }
}

/// Reads packed f32 samples out of a resampled frame.
fn extract_samples(frame: &ffmpeg_next::frame::Audio, channels: u16) -> Vec<f32> {
    let data = frame.data(0);
    let count = (frame.samples() * usize::from(channels)).min(data.len() / 4);
    data[..count * 4]
        .chunks_exact(4)
        .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}
