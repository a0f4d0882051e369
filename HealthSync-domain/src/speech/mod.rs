//! Optional voice output for assessment verdicts.
//!
//! Speech is an external capability. Failures are reported to the caller and
//! never affect the assessment itself.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

/// Voice output errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VoiceError {
    /// No speech engine is configured
    #[error("Voice not available")]
    Unavailable,

    /// The engine failed while speaking
    #[error("TTS error: {0}")]
    Engine(String),
}

/// A speech capability
pub trait VoiceOutput: Send + Sync + std::fmt::Debug {
    /// Whether speaking is possible at all
    fn is_available(&self) -> bool;

    /// Speak the text
    fn speak(&self, text: &str) -> Result<(), VoiceError>;
}

/// Voice output used when no engine is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableVoice;

impl VoiceOutput for UnavailableVoice {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str) -> Result<(), VoiceError> {
        Err(VoiceError::Unavailable)
    }
}

/// Voice output that emits the utterance as a structured log event
#[derive(Debug, Clone, Copy)]
pub struct TracingVoice {
    rate: u32,
}

impl TracingVoice {
    /// Create a voice speaking at `rate` words per minute
    pub fn new(rate: u32) -> Self {
        Self { rate }
    }

    /// Configured speaking rate
    pub fn rate(&self) -> u32 {
        self.rate
    }
}

impl Default for TracingVoice {
    fn default() -> Self {
        Self::new(150)
    }
}

impl VoiceOutput for TracingVoice {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, text: &str) -> Result<(), VoiceError> {
        if text.trim().is_empty() {
            return Err(VoiceError::Engine("nothing to speak".to_string()));
        }
        info!(rate = self.rate, utterance = %text, "VOICE");
        Ok(())
    }
}

/// Outcome of trying to speak a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceOutcome {
    /// The text was spoken
    Spoken,
    /// No engine configured, nothing attempted
    Unavailable,
    /// The engine failed
    Failed,
}

impl VoiceOutcome {
    /// Wire name of the outcome
    pub fn as_str(self) -> &'static str {
        match self {
            VoiceOutcome::Spoken => "spoken",
            VoiceOutcome::Unavailable => "unavailable",
            VoiceOutcome::Failed => "error",
        }
    }
}

/// Speak `text` if the voice is available, logging any failure.
pub fn speak_if_available(voice: &dyn VoiceOutput, text: &str) -> VoiceOutcome {
    if !voice.is_available() {
        return VoiceOutcome::Unavailable;
    }

    match voice.speak(text) {
        Ok(()) => VoiceOutcome::Spoken,
        Err(e) => {
            warn!("Voice output failed: {}", e);
            VoiceOutcome::Failed
        }
    }
}

/// Build the voice output named by `mode` (`off` or `log`)
pub fn create_voice_output(mode: &str, rate: u32) -> Option<Arc<dyn VoiceOutput>> {
    match mode.trim().to_lowercase().as_str() {
        "off" | "" => Some(Arc::new(UnavailableVoice)),
        "log" => Some(Arc::new(TracingVoice::new(rate))),
        _ => None,
    }
}
