//! Speech output
//!
//! The narrator seam between the game and the platform speech engine.
//! `SystemVoice` drives the system text-to-speech engine and blocks until
//! playback finishes; `SilentVoice` is the mute/fallback implementation.
//! Narration failures are surfaced to the caller and never stop the game.

use std::fmt;
use std::thread;
use std::time::Duration;

use tts::Tts;

/// How long to wait between playback polls
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Speech engine failure
#[derive(Debug, Clone)]
pub enum SpeechError {
    /// The platform engine could not be initialized
    Unavailable(String),
    /// An utterance could not be played
    Failed(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "Speech engine unavailable: {reason}"),
            Self::Failed(reason) => write!(f, "Speech playback failed: {reason}"),
        }
    }
}

impl std::error::Error for SpeechError {}

/// Something that can vocalize text
///
/// The game only ever calls [`say`](Narrator::say); tests substitute a
/// recording implementation to observe what would have been spoken.
pub trait Narrator {
    /// Vocalize the given text, returning once playback is done
    ///
    /// # Errors
    /// Returns [`SpeechError`] when the utterance cannot be played.
    fn say(&mut self, text: &str) -> Result<(), SpeechError>;
}

/// System text-to-speech voice
///
/// Playback is blocking: the call returns when the utterance has finished.
pub struct SystemVoice {
    tts: Tts,
}

impl SystemVoice {
    /// Initialize the platform speech engine
    ///
    /// # Errors
    /// Returns [`SpeechError::Unavailable`] when no engine can be started
    /// (no speech daemon, missing audio device). Callers are expected to
    /// fall back to [`SilentVoice`].
    pub fn new() -> Result<Self, SpeechError> {
        let tts = Tts::default().map_err(|e| SpeechError::Unavailable(e.to_string()))?;
        Ok(Self { tts })
    }
}

impl Narrator for SystemVoice {
    fn say(&mut self, text: &str) -> Result<(), SpeechError> {
        if text.is_empty() {
            return Ok(());
        }

        self.tts
            .speak(text, true)
            .map(|_| ())
            .map_err(|e| SpeechError::Failed(e.to_string()))?;

        // Give the engine a moment to start, then wait out the utterance.
        thread::sleep(POLL_INTERVAL);
        while self.tts.is_speaking().unwrap_or(false) {
            thread::sleep(POLL_INTERVAL);
        }

        Ok(())
    }
}

/// No-op narrator used for `--mute` and as the fallback voice
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentVoice;

impl Narrator for SilentVoice {
    fn say(&mut self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}
