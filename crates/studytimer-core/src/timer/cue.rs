//! Boundary cue backends.
//!
//! The engine fires one cue per session expiry. Backends may fail; the
//! engine logs the failure and keeps going.

use std::io::Write;
use std::time::Duration;

use crate::error::CueError;

/// Something that can play the discrete "session over" signal.
pub trait BoundaryCue {
    fn emit(&mut self) -> Result<(), CueError>;
}

/// No sound at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl BoundaryCue for SilentCue {
    fn emit(&mut self) -> Result<(), CueError> {
        Ok(())
    }
}

/// ASCII BEL on stderr; the terminal decides what it sounds like.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellCue;

impl BoundaryCue for BellCue {
    fn emit(&mut self) -> Result<(), CueError> {
        let mut err = std::io::stderr().lock();
        err.write_all(b"\x07")
            .and_then(|_| err.flush())
            .map_err(|e| CueError::Playback(e.to_string()))
    }
}

/// Parameters of the synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSettings {
    pub frequency_hz: f32,
    pub duration: Duration,
    /// Linear gain, 0.0 ..= 1.0.
    pub volume: f32,
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            frequency_hz: 440.0,
            duration: Duration::from_millis(500),
            volume: 0.5,
        }
    }
}

#[cfg(feature = "sound")]
pub use tone::ToneCue;

#[cfg(feature = "sound")]
mod tone {
    use rodio::source::{SineWave, Source};
    use rodio::{OutputStream, Sink};

    use super::{BoundaryCue, ToneSettings};
    use crate::error::CueError;

    enum Output {
        Untried,
        Ready { _stream: OutputStream, sink: Sink },
        Unavailable(String),
    }

    /// Sine beep through the default audio device.
    ///
    /// The output stream is opened on the first cue and reused afterwards.
    /// If opening fails once, the device is treated as absent for the
    /// lifetime of the cue.
    pub struct ToneCue {
        settings: ToneSettings,
        output: Output,
    }

    impl ToneCue {
        pub fn new(settings: ToneSettings) -> Self {
            Self {
                settings,
                output: Output::Untried,
            }
        }

        fn ensure_output(&mut self) -> Result<&Sink, CueError> {
            if matches!(self.output, Output::Untried) {
                self.output = match open_output() {
                    Ok((stream, sink)) => Output::Ready {
                        _stream: stream,
                        sink,
                    },
                    Err(message) => {
                        tracing::warn!("audio output unavailable, cues will be silent: {message}");
                        Output::Unavailable(message)
                    }
                };
            }
            match &self.output {
                Output::Ready { sink, .. } => Ok(sink),
                Output::Unavailable(message) => Err(CueError::Unavailable(message.clone())),
                Output::Untried => Err(CueError::Unavailable("audio output not opened".into())),
            }
        }
    }

    fn open_output() -> Result<(OutputStream, Sink), String> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| format!("Failed to create audio output stream: {e}"))?;
        let sink =
            Sink::try_new(&handle).map_err(|e| format!("Failed to create audio sink: {e}"))?;
        Ok((stream, sink))
    }

    impl BoundaryCue for ToneCue {
        fn emit(&mut self) -> Result<(), CueError> {
            let settings = self.settings;
            let sink = self.ensure_output()?;
            let beep = SineWave::new(settings.frequency_hz)
                .take_duration(settings.duration)
                .amplify(settings.volume.clamp(0.0, 1.0));
            sink.append(beep);
            Ok(())
        }
    }
}
