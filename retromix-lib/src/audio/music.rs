//! The single resident music track.

use std::path::{Path, PathBuf};

use rodio::buffer::SamplesBuffer;
use rodio::source::Repeat;
use rodio::Source;

use super::sample::LoadedSample;
use crate::error::AudioError;

/// A preloaded background track, played looped on its own sink.
///
/// Music is decoded whole at load time, so a broken file fails at
/// `load_music` rather than mid-game when playback starts.
#[derive(Debug, Clone)]
pub struct MusicTrack {
    audio: LoadedSample,
    path: PathBuf,
}

impl MusicTrack {
    /// Decode `path` into a loopable track.
    pub fn load(path: &Path) -> Result<Self, AudioError> {
        Ok(Self {
            audio: LoadedSample::load(path)?,
            path: path.to_path_buf(),
        })
    }

    /// Build an endlessly repeating source over the decoded PCM.
    pub fn looped_source(&self) -> Repeat<SamplesBuffer<f32>> {
        self.audio.source().repeat_infinite()
    }

    /// Length of one loop iteration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.audio.duration_secs()
    }

    /// The path the track was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
