//! High-level audio facade for game hosts.

mod controls;

use rodio::Sink;

use crate::audio::bank::SampleBank;
use crate::audio::music::MusicTrack;
use crate::playback::device::{OutputDevice, OutputMode};
use crate::resolve::LoadPath;
use crate::settings::{DeviceSettings, MAX_VOLUME};

/// Owned audio context: device lifecycle, the sample bank, and music.
///
/// `AudioSystem` replaces the classic pile of process-wide flags with a
/// value the host owns outright, so multiple contexts (or test isolation)
/// come for free. It performs no internal locking; callers serialize access.
pub struct AudioSystem {
    load_path: LoadPath,
    settings: DeviceSettings,
    mode: OutputMode,
    device: Option<OutputDevice>,
    bank: SampleBank,
    music: Option<MusicTrack>,
    music_sink: Option<Sink>,
    music_volume: i32,
}

impl AudioSystem {
    /// Create a system that will open the default hardware output.
    pub fn new(load_path: LoadPath) -> Self {
        Self::with_settings(load_path, DeviceSettings::default())
    }

    /// Create a hardware-backed system with explicit settings.
    pub fn with_settings(load_path: LoadPath, settings: DeviceSettings) -> Self {
        Self::build(load_path, settings, OutputMode::Playback)
    }

    /// Create a system that never touches audio hardware.
    pub fn detached(load_path: LoadPath) -> Self {
        Self::detached_with_settings(load_path, DeviceSettings::default())
    }

    /// Create a detached system with explicit settings.
    pub fn detached_with_settings(load_path: LoadPath, settings: DeviceSettings) -> Self {
        Self::build(load_path, settings, OutputMode::Detached)
    }

    fn build(load_path: LoadPath, settings: DeviceSettings, mode: OutputMode) -> Self {
        let music_volume = settings.music_volume.clamp(0, MAX_VOLUME);
        Self {
            load_path,
            settings,
            mode,
            device: None,
            bank: SampleBank::new(),
            music: None,
            music_sink: None,
            music_volume,
        }
    }

    /// Whether the device is open and channels are allocated.
    pub fn is_initialized(&self) -> bool {
        self.device.is_some()
    }

    /// Number of occupied sample slots.
    pub fn loaded_sample_count(&self) -> usize {
        self.bank.loaded()
    }

    /// Whether a music track is currently resident.
    pub fn music_loaded(&self) -> bool {
        self.music.is_some()
    }

    /// Whether music playback has been started and not yet stopped.
    pub fn music_playing(&self) -> bool {
        self.music_sink.is_some()
    }

    /// The current music volume on the 0..=128 scale.
    pub fn music_volume(&self) -> i32 {
        self.music_volume
    }

    /// The resolver assets are loaded through.
    pub fn load_path(&self) -> &LoadPath {
        &self.load_path
    }
}
