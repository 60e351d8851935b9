//! Lifecycle and playback operations for [`AudioSystem`].

use log::{debug, info, warn};

use super::AudioSystem;
use crate::audio::bank::MAX_SAMPLES;
use crate::audio::music::MusicTrack;
use crate::audio::sample::LoadedSample;
use crate::error::AudioError;
use crate::playback::device::{OutputDevice, OutputMode};
use crate::settings::{volume_to_gain, MAX_VOLUME};

impl AudioSystem {
    /// Open the output device and allocate the channel pool.
    ///
    /// Idempotent: calling this on an initialized system is a no-op that
    /// still reports success. On failure the system stays fully
    /// uninitialized; a later call may succeed.
    pub fn init_device(&mut self) -> Result<(), AudioError> {
        if self.device.is_some() {
            return Ok(());
        }

        let device = match self.mode {
            OutputMode::Playback => OutputDevice::open(self.settings.channel_count)?,
            OutputMode::Detached => OutputDevice::detached(self.settings.channel_count),
        };

        info!(
            "audio device opened with {} channels",
            device.channel_count()
        );
        self.device = Some(device);
        Ok(())
    }

    /// Preload up to [`MAX_SAMPLES`] sound effects into the bank.
    ///
    /// Existing slots are released first, then the device is initialized if
    /// needed. Entries past the bank capacity are ignored with a warning.
    /// The first file that fails to load aborts the remainder; slots loaded
    /// before it stay resident.
    pub fn load_samples<S: AsRef<str>>(&mut self, filenames: &[S]) -> Result<(), AudioError> {
        self.bank.clear();
        self.init_device()?;

        if filenames.len() > MAX_SAMPLES {
            warn!(
                "{} sample files requested, loading the first {}",
                filenames.len(),
                MAX_SAMPLES
            );
        }

        for (slot, filename) in filenames.iter().take(MAX_SAMPLES).enumerate() {
            let path = self.load_path.resolve(filename.as_ref());
            let sample = LoadedSample::load(&path)?;
            debug!(
                "slot {}: loaded {} ({:.2}s, {} Hz)",
                slot,
                path.display(),
                sample.duration_secs(),
                sample.sample_rate()
            );
            self.bank.insert(slot, sample);
        }

        Ok(())
    }

    /// Preload one music track, releasing any previously loaded one.
    ///
    /// If music is currently playing it keeps playing the old track until
    /// the next [`AudioSystem::play_music`].
    pub fn load_music(&mut self, filename: &str) -> Result<(), AudioError> {
        self.init_device()?;

        let path = self.load_path.resolve(filename);
        let track = MusicTrack::load(&path)?;
        info!(
            "loaded music {} ({:.1}s per loop)",
            path.display(),
            track.duration_secs()
        );

        if self.music.replace(track).is_some() {
            debug!("released previously loaded music");
        }
        Ok(())
    }

    /// Play the sample in `slot` once, on an auto-selected channel.
    ///
    /// Out-of-range slots, empty slots, and an uninitialized device are all
    /// logged no-ops.
    pub fn play_sample(&self, slot: usize) {
        let device = match &self.device {
            Some(device) => device,
            None => {
                debug!("play_sample({}) before init, ignoring", slot);
                return;
            }
        };

        let sample = match self.bank.get(slot) {
            Some(sample) => sample,
            None => {
                debug!("no sample loaded in slot {}", slot);
                return;
            }
        };

        if !device.play(sample.source()) {
            debug!(
                "all {} channels busy, dropping sample {}",
                device.channel_count(),
                slot
            );
        }
    }

    /// Start the loaded music track, looped indefinitely.
    ///
    /// A no-op when nothing is loaded. If music is already playing it is
    /// halted first and restarts from the beginning; two tracks never layer.
    pub fn play_music(&mut self) {
        let track = match &self.music {
            Some(track) => track,
            None => return,
        };

        let device = match self.device.as_mut() {
            Some(device) => device,
            None => {
                warn!("play_music before init, ignoring");
                return;
            }
        };

        if let Some(previous) = self.music_sink.take() {
            previous.stop();
        }

        let sink = match device.new_sink() {
            Ok(sink) => sink,
            Err(err) => {
                warn!("could not open a music channel: {}", err);
                return;
            }
        };

        sink.set_volume(volume_to_gain(self.music_volume));
        sink.append(track.looped_source());
        debug!("music started: {}", track.path().display());
        self.music_sink = Some(sink);
    }

    /// Halt music playback. Safe when nothing is playing.
    pub fn stop_music(&mut self) {
        if let Some(sink) = self.music_sink.take() {
            sink.stop();
            debug!("music stopped");
        }
    }

    /// Set the music volume on the 0..=128 scale.
    ///
    /// Out-of-range levels are clamped. Accepted whether or not music is
    /// loaded or playing; the level persists across later tracks.
    pub fn set_music_volume(&mut self, level: i32) {
        let level = level.clamp(0, MAX_VOLUME);
        self.music_volume = level;
        if let Some(sink) = &self.music_sink {
            sink.set_volume(volume_to_gain(level));
        }
    }

    /// Release every loaded asset and close the device.
    ///
    /// Safe to call from any state, including before the first init and
    /// with nothing loaded. The system returns to its pristine state and
    /// [`AudioSystem::init_device`] works again afterwards.
    pub fn shutdown(&mut self) {
        self.stop_music();
        self.music = None;
        self.bank.clear();
        if self.device.take().is_some() {
            info!("audio device closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::settings::{DeviceSettings, MAX_VOLUME};
    use crate::test_util::write_sine_wav;
    use crate::{AudioError, AudioSystem, LoadPath};

    fn fixture_dir(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            write_sine_wav(&dir.path().join(name), 1, 22_050, 0.02);
        }
        dir
    }

    fn system(dir: &tempfile::TempDir) -> AudioSystem {
        AudioSystem::detached(LoadPath::new(dir.path()))
    }

    #[test]
    fn init_device_is_idempotent() {
        let dir = fixture_dir(&[]);
        let mut system = system(&dir);
        assert!(system.init_device().is_ok());
        assert!(system.init_device().is_ok());
        assert!(system.is_initialized());
    }

    #[test]
    fn loading_no_samples_succeeds_and_leaves_the_bank_empty() {
        let dir = fixture_dir(&[]);
        let mut system = system(&dir);
        system.load_samples::<&str>(&[]).unwrap();
        assert!(system.is_initialized());
        assert_eq!(system.loaded_sample_count(), 0);
    }

    #[test]
    fn excess_sample_files_are_ignored() {
        let names = [
            "s0.wav", "s1.wav", "s2.wav", "s3.wav", "s4.wav", "s5.wav", "s6.wav", "s7.wav",
            "s8.wav",
        ];
        let dir = fixture_dir(&names);
        let mut system = system(&dir);
        system.load_samples(&names).unwrap();
        assert_eq!(system.loaded_sample_count(), 8);
    }

    #[test]
    fn reload_releases_the_previous_set() {
        let dir = fixture_dir(&["a.wav", "b.wav", "c.wav"]);
        let mut system = system(&dir);
        system.load_samples(&["a.wav", "b.wav"]).unwrap();
        assert_eq!(system.loaded_sample_count(), 2);

        system.load_samples(&["c.wav"]).unwrap();
        assert_eq!(system.loaded_sample_count(), 1);
    }

    #[test]
    fn a_failing_file_keeps_earlier_slots_and_stops_there() {
        let dir = fixture_dir(&["a.wav", "c.wav"]);
        let mut system = system(&dir);
        let result = system.load_samples(&["a.wav", "missing.wav", "c.wav"]);
        assert!(matches!(result, Err(AudioError::Io(_))));
        // a.wav made it in, missing.wav failed, c.wav was never attempted.
        assert_eq!(system.loaded_sample_count(), 1);
    }

    #[test]
    fn playing_an_unloaded_or_out_of_range_slot_is_a_no_op() {
        let dir = fixture_dir(&["a.wav"]);
        let mut system = system(&dir);
        system.load_samples(&["a.wav"]).unwrap();

        system.play_sample(1);
        system.play_sample(7);
        system.play_sample(8);
        system.play_sample(usize::MAX);
    }

    #[test]
    fn playing_before_init_is_a_no_op() {
        let dir = fixture_dir(&[]);
        let mut system = system(&dir);
        system.play_sample(0);
        system.play_music();
        system.stop_music();
        assert!(!system.is_initialized());
    }

    #[test]
    fn music_round_trip() {
        let dir = fixture_dir(&["theme.wav"]);
        let mut system = system(&dir);
        system.load_music("theme.wav").unwrap();
        assert!(system.music_loaded());
        assert!(!system.music_playing());

        system.play_music();
        assert!(system.music_playing());

        system.stop_music();
        assert!(!system.music_playing());
        // Stopping again is safe.
        system.stop_music();
    }

    #[test]
    fn play_music_with_nothing_loaded_is_a_no_op() {
        let dir = fixture_dir(&[]);
        let mut system = system(&dir);
        system.init_device().unwrap();
        system.play_music();
        assert!(!system.music_playing());
    }

    #[test]
    fn replaying_music_restarts_instead_of_layering() {
        let dir = fixture_dir(&["theme.wav"]);
        let mut system = system(&dir);
        system.load_music("theme.wav").unwrap();
        system.play_music();
        system.play_music();
        assert!(system.music_playing());
    }

    #[test]
    fn load_music_failure_reports_an_error() {
        let dir = fixture_dir(&[]);
        let mut system = system(&dir);
        assert!(system.load_music("missing.wav").is_err());
        assert!(!system.music_loaded());
    }

    #[test]
    fn volume_is_accepted_in_any_state_and_clamped() {
        let dir = fixture_dir(&["theme.wav"]);
        let mut system = system(&dir);

        // Nothing loaded or playing yet.
        system.set_music_volume(0);
        assert_eq!(system.music_volume(), 0);
        system.set_music_volume(MAX_VOLUME);
        assert_eq!(system.music_volume(), MAX_VOLUME);

        system.set_music_volume(-5);
        assert_eq!(system.music_volume(), 0);
        system.set_music_volume(500);
        assert_eq!(system.music_volume(), MAX_VOLUME);

        // And with music actually playing.
        system.load_music("theme.wav").unwrap();
        system.play_music();
        system.set_music_volume(64);
        assert_eq!(system.music_volume(), 64);
    }

    #[test]
    fn shutdown_is_safe_from_any_state() {
        let dir = fixture_dir(&[]);
        let mut system = system(&dir);
        // Never initialized, nothing loaded.
        system.shutdown();
        assert!(!system.is_initialized());
    }

    #[test]
    fn shutdown_then_reinit_works() {
        let dir = fixture_dir(&["a.wav"]);
        let mut system = system(&dir);
        system.load_samples(&["a.wav"]).unwrap();
        system.shutdown();
        assert!(!system.is_initialized());
        assert_eq!(system.loaded_sample_count(), 0);

        system.init_device().unwrap();
        assert!(system.is_initialized());
    }

    #[test]
    fn full_session_scenario() {
        let dir = fixture_dir(&["jump.wav", "coin.wav"]);
        let mut system = system(&dir);

        system.init_device().unwrap();
        system.load_samples(&["jump.wav", "coin.wav"]).unwrap();
        system.play_sample(0);
        system.play_sample(1);
        system.shutdown();

        assert!(!system.is_initialized());
        assert_eq!(system.loaded_sample_count(), 0);
    }

    #[test]
    fn settings_control_the_channel_pool() {
        let dir = fixture_dir(&["a.wav"]);
        let settings = DeviceSettings {
            channel_count: 1,
            music_volume: 100,
        };
        let mut system =
            AudioSystem::detached_with_settings(LoadPath::new(dir.path()), settings);
        system.load_samples(&["a.wav"]).unwrap();
        assert_eq!(system.music_volume(), 100);

        // One channel: the second play finds the pool busy and is dropped.
        system.play_sample(0);
        system.play_sample(0);
    }
}
