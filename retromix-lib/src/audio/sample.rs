//! Preloaded sound effects backed by `rodio` sample buffers.

use std::path::Path;
use std::sync::Arc;

use rodio::buffer::SamplesBuffer;

use crate::decode::{decode_file, DecodedAudio};
use crate::error::AudioError;

/// A fully decoded sound effect held in memory for instant playback.
///
/// The PCM lives behind an `Arc`; each play mints a fresh [`SamplesBuffer`]
/// because `rodio` sources are consumed by the sink that plays them.
#[derive(Debug, Clone)]
pub struct LoadedSample {
    pcm: Arc<[f32]>,
    channels: u16,
    sample_rate: u32,
}

impl LoadedSample {
    /// Decode `path` into a playable sample.
    pub fn load(path: &Path) -> Result<Self, AudioError> {
        Ok(Self::from(decode_file(path)?))
    }

    /// Build an independent one-shot source over the decoded PCM.
    pub fn source(&self) -> SamplesBuffer<f32> {
        SamplesBuffer::new(self.channels, self.sample_rate, self.pcm.to_vec())
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of sample frames.
    pub fn frames(&self) -> usize {
        self.pcm.len() / self.channels.max(1) as usize
    }

    /// Decoded length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate.max(1) as f64
    }
}

impl From<DecodedAudio> for LoadedSample {
    fn from(value: DecodedAudio) -> Self {
        Self {
            pcm: value.pcm.into(),
            channels: value.channels,
            sample_rate: value.sample_rate,
        }
    }
}
