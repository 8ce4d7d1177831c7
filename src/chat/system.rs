//! Capability ports backed by host commands found on `PATH`.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use super::capabilities::{Clipboard, SpeechSettings, SpeechSynthesizer};
use super::CapabilityError;

/// Locate an executable by name on `PATH`.
pub fn find_program(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Read-aloud through `say` (macOS) or `espeak-ng`/`espeak` (Linux).
///
/// Each utterance is a child process; cancelling kills it.
pub struct CommandSpeech {
    program: Option<PathBuf>,
    current: Option<Child>,
}

impl CommandSpeech {
    pub fn detect() -> Self {
        let program = ["say", "espeak-ng", "espeak"]
            .iter()
            .find_map(|name| find_program(name));
        debug!(program = ?program, "Speech synthesis detection");
        Self {
            program,
            current: None,
        }
    }

    fn args(&self, settings: SpeechSettings) -> Vec<String> {
        let is_say = self
            .program
            .as_ref()
            .and_then(|p| p.file_name())
            .is_some_and(|n| n == "say");
        if is_say {
            // `say` rate is words per minute, default around 175.
            vec!["-r".into(), format!("{}", (175.0 * settings.rate) as u32)]
        } else {
            // espeak: words per minute (default 175), pitch 0..99 (default 50).
            vec![
                "-s".into(),
                format!("{}", (175.0 * settings.rate) as u32),
                "-p".into(),
                format!("{}", (50.0 * settings.pitch).clamp(0.0, 99.0) as u32),
            ]
        }
    }
}

impl SpeechSynthesizer for CommandSpeech {
    fn available(&self) -> bool {
        self.program.is_some()
    }

    fn speak(&mut self, text: &str, settings: SpeechSettings) -> Result<(), CapabilityError> {
        self.cancel();
        let program = self
            .program
            .as_ref()
            .ok_or(CapabilityError::Unavailable("Speech synthesis"))?;

        let child = Command::new(program)
            .args(self.args(settings))
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CapabilityError::Failed {
                capability: "Speech synthesis",
                reason: e.to_string(),
            })?;
        self.current = Some(child);
        Ok(())
    }

    fn is_speaking(&mut self) -> bool {
        let Some(child) = self.current.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                debug!(status = %status, "Speech finished");
                self.current = None;
                false
            }
            Err(e) => {
                warn!(error = %e, "Could not poll speech process");
                self.current = None;
                false
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            if let Err(e) = child.kill() {
                debug!(error = %e, "Speech process already finished");
            }
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Clipboard through `pbcopy`, `wl-copy` or `xclip`, whichever exists.
pub struct CommandClipboard {
    program: Option<(PathBuf, &'static [&'static str])>,
}

const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
];

impl CommandClipboard {
    pub fn detect() -> Self {
        let program = CLIPBOARD_PROGRAMS
            .iter()
            .find_map(|(name, args)| find_program(name).map(|p| (p, *args)));
        debug!(program = ?program.as_ref().map(|(p, _)| p), "Clipboard detection");
        Self { program }
    }
}

impl Clipboard for CommandClipboard {
    fn available(&self) -> bool {
        self.program.is_some()
    }

    fn write_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        let (program, args) = self
            .program
            .as_ref()
            .ok_or(CapabilityError::Unavailable("Clipboard"))?;
        let failed = |e: std::io::Error| CapabilityError::Failed {
            capability: "Clipboard",
            reason: e.to_string(),
        };

        let mut child = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(failed)?;
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(failed(e));
            }
        }
        let status = child.wait().map_err(failed)?;
        if !status.success() {
            warn!(status = %status, "Clipboard command failed");
            return Err(CapabilityError::Failed {
                capability: "Clipboard",
                reason: format!("exited with {status}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn missing_program_not_found() {
        assert!(find_program("medikami-no-such-program-xyz").is_none());
    }

    #[test]
    fn espeak_args_scale_settings() {
        let speech = CommandSpeech {
            program: Some(PathBuf::from("/usr/bin/espeak")),
            current: None,
        };
        let args = speech.args(SpeechSettings::default());
        assert_eq!(args, vec!["-s", "157", "-p", "50"]);
    }

    #[test]
    fn say_args_use_rate_only() {
        let speech = CommandSpeech {
            program: Some(PathBuf::from("/usr/bin/say")),
            current: None,
        };
        assert_eq!(speech.args(SpeechSettings::default()), vec!["-r", "157"]);
    }

    #[test]
    fn undetected_ports_are_unavailable() {
        let mut speech = CommandSpeech {
            program: None,
            current: None,
        };
        assert!(!speech.available());
        assert_eq!(
            speech.speak("hi", SpeechSettings::default()),
            Err(CapabilityError::Unavailable("Speech synthesis"))
        );
        assert!(!speech.is_speaking());
        let mut clipboard = CommandClipboard { program: None };
        assert!(clipboard.write_text("x").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn finished_speech_process_is_reaped() {
        let Some(program) = find_program("true") else {
            return;
        };
        let child = Command::new(program).spawn().unwrap();
        let mut speech = CommandSpeech {
            program: None,
            current: Some(child),
        };

        let deadline = Instant::now() + Duration::from_secs(5);
        while speech.is_speaking() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(!speech.is_speaking());
        assert!(speech.current.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn clipboard_reader_that_exits_early_is_an_error() {
        let Some(program) = find_program("true") else {
            return;
        };
        let mut clipboard = CommandClipboard {
            program: Some((program, &[])),
        };
        // Larger than a pipe buffer, so the write cannot finish unread.
        let text = "x".repeat(1 << 20);
        assert!(matches!(
            clipboard.write_text(&text),
            Err(CapabilityError::Failed { capability: "Clipboard", .. })
        ));
    }
}
