//! Speech capability seams.
//!
//! The browser shell backs these traits with the Web Speech API; a desktop
//! shell plugs in a platform engine; tests and headless environments get
//! [`NoSpeech`]. The assistant never touches speech itself — the shell
//! captures a transcript, routes it through the state reducer, and speaks
//! the reply that comes back.

use std::sync::mpsc::Receiver;

use crate::models::enums::Language;

/// Lifecycle events from a capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// The engine started listening.
    Started,
    /// A finalized transcript of what was heard.
    Transcript(String),
    /// The engine failed mid-capture; no transcript will follow.
    Error(String),
    /// The engine stopped listening.
    Ended,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech capture is not supported in this environment")]
    CaptureUnsupported,

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),
}

/// Microphone capture. One session at a time per implementation.
pub trait SpeechCapture {
    /// Begin listening in the given language. Events arrive on the
    /// returned channel until `Ended`.
    fn start_capture(&mut self, language: Language) -> Result<Receiver<TranscriptEvent>, SpeechError>;

    /// Stop an in-flight session. No-op when idle.
    fn stop_capture(&mut self);

    fn is_supported(&self) -> bool;
}

/// Text-to-speech output.
pub trait SpeechSynthesis {
    /// Queue `text` for speaking in the given language's locale.
    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError>;

    /// Cancel any queued or in-flight speech.
    fn cancel(&mut self);

    fn is_speaking(&self) -> bool;
}

/// Stand-in for environments without a speech engine.
///
/// Capture reports unsupported; synthesis silently drops text, matching
/// how the shell behaves when the platform has no voices.
#[derive(Debug, Default)]
pub struct NoSpeech;

impl SpeechCapture for NoSpeech {
    fn start_capture(&mut self, _language: Language) -> Result<Receiver<TranscriptEvent>, SpeechError> {
        Err(SpeechError::CaptureUnsupported)
    }

    fn stop_capture(&mut self) {}

    fn is_supported(&self) -> bool {
        false
    }
}

impl SpeechSynthesis for NoSpeech {
    fn speak(&mut self, _text: &str, _language: Language) -> Result<(), SpeechError> {
        Ok(())
    }

    fn cancel(&mut self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn no_speech_capture_is_unsupported() {
        let mut speech = NoSpeech;
        assert!(!SpeechCapture::is_supported(&speech));
        assert!(matches!(
            speech.start_capture(Language::English),
            Err(SpeechError::CaptureUnsupported),
        ));
    }

    #[test]
    fn no_speech_synthesis_silently_drops() {
        let mut speech = NoSpeech;
        assert!(speech.speak("Hello", Language::English).is_ok());
        assert!(!speech.is_speaking());
    }

    /// Scripted capture backed by a pre-loaded channel — the shape a shell
    /// implementation takes.
    struct ScriptedCapture {
        transcript: String,
    }

    impl SpeechCapture for ScriptedCapture {
        fn start_capture(
            &mut self,
            _language: Language,
        ) -> Result<Receiver<TranscriptEvent>, SpeechError> {
            let (tx, rx) = mpsc::channel();
            tx.send(TranscriptEvent::Started).unwrap();
            tx.send(TranscriptEvent::Transcript(self.transcript.clone())).unwrap();
            tx.send(TranscriptEvent::Ended).unwrap();
            Ok(rx)
        }

        fn stop_capture(&mut self) {}

        fn is_supported(&self) -> bool {
            true
        }
    }

    #[test]
    fn capture_events_drive_the_reducer() {
        use crate::state::{Action, AppState};

        let mut capture = ScriptedCapture {
            transcript: "What are the side effects of ibuprofen?".into(),
        };
        let mut state = AppState::new();

        let events = capture.start_capture(state.language).unwrap();
        for event in events {
            if let TranscriptEvent::Transcript(text) = event {
                state.apply(Action::SubmitQuestion(text));
            }
        }

        assert_eq!(state.conversation.len(), 3);
        assert!(state.conversation[2]
            .content
            .starts_with("Ibuprofen side effects include"));
    }
}
