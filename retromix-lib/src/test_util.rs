//! WAV fixture generation shared by unit tests.

use std::path::Path;

/// Write a 16-bit PCM sine tone to `path`.
pub(crate) fn write_sine_wav(path: &Path, channels: u16, sample_rate: u32, seconds: f32) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    let frames = (sample_rate as f32 * seconds) as u32;
    for frame in 0..frames {
        let t = frame as f32 / sample_rate as f32;
        let value = (t * 440.0 * 2.0 * std::f32::consts::PI).sin();
        let sample = (value * 0.5 * i16::MAX as f32) as i16;
        for _ in 0..channels {
            writer.write_sample(sample).unwrap();
        }
    }
    writer.finalize().unwrap();
}
