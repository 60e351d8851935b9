//! Runtime configuration for the output device.

use serde::{Deserialize, Serialize};

const DEFAULT_CHANNEL_COUNT: usize = 8;

/// Maximum volume level on the 0..=128 scale used by the public API.
pub const MAX_VOLUME: i32 = 128;

/// Serialized configuration for the output device.
///
/// `channel_count` is the number of concurrent sample playback channels
/// allocated at init; `music_volume` is the initial music level on the
/// 0..=128 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    pub channel_count: usize,
    pub music_volume: i32,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            channel_count: DEFAULT_CHANNEL_COUNT,
            music_volume: MAX_VOLUME,
        }
    }
}

/// Map a 0..=128 volume level to a linear sink gain.
///
/// Out-of-range levels are clamped, matching the mixer convention where 128
/// is full volume and anything above it is treated as 128.
pub fn volume_to_gain(level: i32) -> f32 {
    level.clamp(0, MAX_VOLUME) as f32 / MAX_VOLUME as f32
}
