//! The open output device and its fixed pool of playback channels.

use rodio::buffer::SamplesBuffer;
use rodio::queue::SourcesQueueOutput;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::error::AudioError;

/// How the device connects to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Open the default hardware output stream.
    Playback,
    /// Build the same channel pool on idle sinks with no hardware attached.
    /// Used by headless hosts and tests.
    Detached,
}

enum Output {
    Stream {
        handle: OutputStreamHandle,
        // The stream must stay alive for the sinks to keep playing.
        _stream: OutputStream,
    },
    Detached {
        // Consumer halves of the idle sinks, kept alive for the device's
        // lifetime so appends remain valid.
        _queues: Vec<SourcesQueueOutput<f32>>,
    },
}

/// An open audio device plus its allocated channel pool.
///
/// Construction is all-or-nothing: if the stream opens but a channel sink
/// cannot be created, everything built so far is dropped and the caller sees
/// a single failure with no half-open device left behind.
pub struct OutputDevice {
    output: Output,
    channels: Vec<Sink>,
}

impl OutputDevice {
    /// Open the default output stream and allocate `channel_count` channels.
    pub fn open(channel_count: usize) -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|err| AudioError::Device(err.to_string()))?;

        let mut channels = Vec::with_capacity(channel_count);
        for _ in 0..channel_count {
            let sink =
                Sink::try_new(&handle).map_err(|err| AudioError::Device(err.to_string()))?;
            channels.push(sink);
        }

        Ok(Self {
            output: Output::Stream {
                handle,
                _stream: stream,
            },
            channels,
        })
    }

    /// Build a detached device with `channel_count` idle channels.
    pub fn detached(channel_count: usize) -> Self {
        let mut queues = Vec::with_capacity(channel_count);
        let mut channels = Vec::with_capacity(channel_count);
        for _ in 0..channel_count {
            let (sink, queue) = Sink::new_idle();
            channels.push(sink);
            queues.push(queue);
        }

        Self {
            output: Output::Detached { _queues: queues },
            channels,
        }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Play a one-shot source on the first idle channel, mixed with whatever
    /// else is playing.
    ///
    /// Returns `false` when every channel is busy; the request is dropped,
    /// mirroring the mixer convention for a full channel pool.
    pub fn play(&self, source: SamplesBuffer<f32>) -> bool {
        match self.channels.iter().find(|sink| sink.empty()) {
            Some(sink) => {
                sink.append(source);
                true
            }
            None => false,
        }
    }

    /// Open a dedicated sink outside the channel pool.
    ///
    /// Music gets its own sink per playback because a stopped `rodio` sink
    /// does not accept further sources.
    pub fn new_sink(&mut self) -> Result<Sink, AudioError> {
        match &mut self.output {
            Output::Stream { handle, .. } => {
                Sink::try_new(handle).map_err(|err| AudioError::Device(err.to_string()))
            }
            Output::Detached { _queues } => {
                let (sink, queue) = Sink::new_idle();
                _queues.push(queue);
                Ok(sink)
            }
        }
    }
}
