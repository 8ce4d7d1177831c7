use super::CapabilityError;

/// Voice parameters for read-aloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechSettings {
    pub rate: f32,
    pub pitch: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.0,
        }
    }
}

/// Text-to-speech output. One utterance at a time.
pub trait SpeechSynthesizer {
    fn available(&self) -> bool;
    fn speak(&mut self, text: &str, settings: SpeechSettings) -> Result<(), CapabilityError>;
    /// False once the last utterance has finished or was cancelled.
    fn is_speaking(&mut self) -> bool;
    /// Stop the current utterance, if any. Never fails.
    fn cancel(&mut self);
}

/// Speech-to-text input.
pub trait SpeechRecognizer {
    fn available(&self) -> bool;
    /// Blocks until a phrase is heard. `None` when nothing was recognised.
    fn listen(&mut self) -> Result<Option<String>, CapabilityError>;
}

pub trait Clipboard {
    fn available(&self) -> bool;
    fn write_text(&mut self, text: &str) -> Result<(), CapabilityError>;
}

/// Port for a capability this host does not have.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl SpeechSynthesizer for Unavailable {
    fn available(&self) -> bool {
        false
    }

    fn speak(&mut self, _text: &str, _settings: SpeechSettings) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unavailable("Speech synthesis"))
    }

    fn is_speaking(&mut self) -> bool {
        false
    }

    fn cancel(&mut self) {}
}

impl SpeechRecognizer for Unavailable {
    fn available(&self) -> bool {
        false
    }

    fn listen(&mut self) -> Result<Option<String>, CapabilityError> {
        Err(CapabilityError::Unavailable("Speech recognition"))
    }
}

impl Clipboard for Unavailable {
    fn available(&self) -> bool {
        false
    }

    fn write_text(&mut self, _text: &str) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unavailable("Clipboard"))
    }
}

/// Drop markdown emphasis and heading marks so they are not read out.
pub fn speakable_text(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '*' | '#' | '_')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_voice_is_slightly_slow() {
        let s = SpeechSettings::default();
        assert_eq!(s.rate, 0.9);
        assert_eq!(s.pitch, 1.0);
    }

    #[test]
    fn unavailable_ports_report_absence() {
        let mut port = Unavailable;
        assert!(!SpeechSynthesizer::available(&port));
        assert!(!Clipboard::available(&port));
        assert_eq!(
            port.write_text("x"),
            Err(CapabilityError::Unavailable("Clipboard"))
        );
        assert!(SpeechRecognizer::listen(&mut port).is_err());
    }

    #[test]
    fn markdown_marks_removed_for_speech() {
        assert_eq!(
            speakable_text("**Fever** • OTC Medication Guide"),
            "Fever • OTC Medication Guide"
        );
    }
}
