//! Symphonia helpers for opening and fully decoding audio assets.
//!
//! Samples and music are both preloaded: the whole file is decoded up front
//! into interleaved `f32` PCM so playback later never touches the disk.

pub mod convert;

use std::fs::File;
use std::path::Path;

use log::warn;
use symphonia::core::codecs::{Decoder, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AudioError;
use convert::channel_to_f32;

/// A fully decoded audio file.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved `f32` PCM.
    pub pcm: Vec<f32>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Number of sample frames (one sample per channel).
    pub fn frames(&self) -> usize {
        self.pcm.len() / self.channels.max(1) as usize
    }

    /// Decoded length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate.max(1) as f64
    }
}

/// Open `path`, pick its first decodable audio track, and decode it whole.
pub fn decode_file(path: &Path) -> Result<DecodedAudio, AudioError> {
    let (mut decoder, mut format, track_id) = open_file(path)?;

    let mut pcm: Vec<f32> = Vec::new();
    let mut channels: u16 = 0;
    let mut sample_rate: u32 = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(err))
                if err.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(err) => return Err(AudioError::Decode(err.to_string())),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(err)) => {
                // Recoverable corruption: skip the packet, keep going.
                warn!("decode error in {}: {}", path.display(), err);
                continue;
            }
            Err(err) => return Err(AudioError::Decode(err.to_string())),
        };

        let spec = *decoded.spec();
        if channels == 0 {
            channels = spec.channels.count() as u16;
            sample_rate = spec.rate;
        }

        if spec.channels.count() != channels as usize {
            warn!(
                "channel layout changed mid-file in {}, skipping packet",
                path.display()
            );
            continue;
        }

        let per_channel: Vec<Vec<f32>> = (0..channels as usize)
            .map(|ch| channel_to_f32(decoded.clone(), ch))
            .collect();

        let frames = per_channel.first().map(Vec::len).unwrap_or(0);
        pcm.reserve(frames * channels as usize);
        for frame in 0..frames {
            for channel in &per_channel {
                pcm.push(channel[frame]);
            }
        }
    }

    if pcm.is_empty() {
        return Err(AudioError::Decode(format!(
            "no audio frames decoded from {}",
            path.display()
        )));
    }

    Ok(DecodedAudio {
        pcm,
        channels,
        sample_rate,
    })
}

/// Probe a file and return a decoder, format reader, and selected track id.
fn open_file(
    path: &Path,
) -> Result<(Box<dyn Decoder>, Box<dyn FormatReader>, u32), AudioError> {
    let src = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    // Provide the file extension as a probe hint.
    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        hint.with_extension(extension);
    }

    let meta_opts: MetadataOptions = Default::default();
    let fmt_opts: FormatOptions = Default::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|err| AudioError::Unsupported(err.to_string()))?;

    let format = probed.format;

    // Find the first audio track with a known (decodeable) codec.
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            AudioError::Unsupported(format!("no decodable audio track in {}", path.display()))
        })?;
    let track_id = track.id;

    let dec_opts: DecoderOptions = Default::default();
    let decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(|err| AudioError::Decode(err.to_string()))?;

    Ok((decoder, format, track_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::write_sine_wav;
    use std::io::Write;

    #[test]
    fn decodes_mono_wav_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beep.wav");
        write_sine_wav(&path, 1, 22_050, 0.1);

        let decoded = decode_file(&path).unwrap();
        assert_eq!(decoded.channels, 1);
        assert_eq!(decoded.sample_rate, 22_050);
        assert_eq!(decoded.frames(), 2_205);
        assert!((decoded.duration_secs() - 0.1).abs() < 0.001);
    }

    #[test]
    fn decodes_stereo_wav_interleaved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_sine_wav(&path, 2, 44_100, 0.05);

        let decoded = decode_file(&path).unwrap();
        assert_eq!(decoded.channels, 2);
        assert_eq!(decoded.pcm.len(), decoded.frames() * 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_file(&dir.path().join("nope.wav")).unwrap_err();
        assert!(matches!(err, AudioError::Io(_)));
    }

    #[test]
    fn garbage_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.wav");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"this is not a wave file at all").unwrap();
        drop(file);

        assert!(decode_file(&path).is_err());
    }
}
