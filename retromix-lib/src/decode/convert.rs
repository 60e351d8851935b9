//! Sample format conversion helpers for asset decoding.

use symphonia::core::audio::{AudioBufferRef, Signal};

/// Convert an unsigned 8-bit sample to `f32`.
pub fn convert_unsigned_8bit_to_f32(sample: u8) -> f32 {
    (sample as f32 - 128.0) / 128.0
}

/// Convert a signed 8-bit sample to `f32`.
pub fn convert_signed_8bit_to_f32(sample: i8) -> f32 {
    sample as f32 / 128.0
}

/// Convert an unsigned 16-bit sample to `f32`.
pub fn convert_unsigned_16bit_to_f32(sample: u16) -> f32 {
    (sample as f32 - 32_768.0) / 32_768.0
}

/// Convert a signed 16-bit sample to `f32`.
pub fn convert_signed_16bit_to_f32(sample: i16) -> f32 {
    sample as f32 / 32_768.0
}

/// Convert an unsigned 24-bit sample stored in a `u32` to `f32`.
pub fn convert_unsigned_24bit_to_f32(sample: u32) -> f32 {
    (sample as f32 - 8_388_608.0) / 8_388_608.0
}

/// Convert a signed 24-bit sample stored in an `i32` to `f32`.
///
/// The 24-bit payload occupies the least significant bits, so the sign bit
/// has to be re-extended before scaling.
pub fn convert_signed_24bit_to_f32(sample: i32) -> f32 {
    let extended = sample << 8 >> 8;
    extended as f32 / 8_388_608.0
}

/// Convert an unsigned 32-bit sample to `f32`.
pub fn convert_unsigned_32bit_to_f32(sample: u32) -> f32 {
    (sample as f64 / 2_147_483_648.0 - 1.0) as f32
}

/// Convert a signed 32-bit sample to `f32`.
pub fn convert_signed_32bit_to_f32(sample: i32) -> f32 {
    (sample as f64 / 2_147_483_648.0) as f32
}

/// Extract one channel of a decoded packet as `f32` samples.
pub fn channel_to_f32(decoded: AudioBufferRef<'_>, channel: usize) -> Vec<f32> {
    match decoded {
        AudioBufferRef::U8(buf) => buf
            .chan(channel)
            .iter()
            .map(|s| convert_unsigned_8bit_to_f32(*s))
            .collect(),
        AudioBufferRef::S8(buf) => buf
            .chan(channel)
            .iter()
            .map(|s| convert_signed_8bit_to_f32(*s))
            .collect(),
        AudioBufferRef::U16(buf) => buf
            .chan(channel)
            .iter()
            .map(|s| convert_unsigned_16bit_to_f32(*s))
            .collect(),
        AudioBufferRef::S16(buf) => buf
            .chan(channel)
            .iter()
            .map(|s| convert_signed_16bit_to_f32(*s))
            .collect(),
        AudioBufferRef::U24(buf) => buf
            .chan(channel)
            .iter()
            .map(|s| convert_unsigned_24bit_to_f32(s.0))
            .collect(),
        AudioBufferRef::S24(buf) => buf
            .chan(channel)
            .iter()
            .map(|s| convert_signed_24bit_to_f32(s.0))
            .collect(),
        AudioBufferRef::U32(buf) => buf
            .chan(channel)
            .iter()
            .map(|s| convert_unsigned_32bit_to_f32(*s))
            .collect(),
        AudioBufferRef::S32(buf) => buf
            .chan(channel)
            .iter()
            .map(|s| convert_signed_32bit_to_f32(*s))
            .collect(),
        AudioBufferRef::F32(buf) => buf.chan(channel).to_vec(),
        AudioBufferRef::F64(buf) => buf.chan(channel).iter().map(|s| *s as f32).collect(),
    }
}
