use std::fmt::{Display, Formatter};

/// Error type for device setup and asset loading.
#[derive(Debug)]
pub enum AudioError {
    Device(String),
    Io(std::io::Error),
    Decode(String),
    Unsupported(String),
}

impl Display for AudioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Device(err) => write!(f, "audio device error: {}", err),
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Decode(err) => write!(f, "decode error: {}", err),
            Self::Unsupported(err) => write!(f, "unsupported audio: {}", err),
        }
    }
}

impl std::error::Error for AudioError {}

impl From<std::io::Error> for AudioError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
