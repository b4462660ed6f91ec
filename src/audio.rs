//! Best-effort sound playback through an external player process.
//!
//! The engine never decodes audio. [`AudioPlayer::play`] spawns the
//! configured OS player on a WAV file and returns as soon as the process
//! has been dispatched; playback success is not observed.

use std::path::Path;
use std::process::{Child, Command, Stdio};

use log::{debug, warn};

use crate::error::{EngineError, Result};

/// Which program plays sounds, and with which leading arguments.
///
/// The file path is appended after `args`, unless an argument contains a
/// placeholder, in which case it is substituted there:
///
/// - `{path}`: the path as is
/// - `{quoted_path}`: the path with `'` doubled, for use inside a
///   single-quoted shell string literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl AudioConfig {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn command_for(&self, path: &Path) -> Command {
        let path = path.to_string_lossy();
        let mut command = Command::new(&self.program);
        let mut substituted = false;
        let quoted = path.replace('\'', "''");
        for arg in &self.args {
            if arg.contains("{path}") || arg.contains("{quoted_path}") {
                command.arg(arg.replace("{path}", &path).replace("{quoted_path}", &quoted));
                substituted = true;
            } else {
                command.arg(arg);
            }
        }
        if !substituted {
            command.arg(path.as_ref());
        }
        command
    }
}

impl Default for AudioConfig {
    #[cfg(target_os = "macos")]
    fn default() -> Self {
        Self::new("afplay", &[])
    }

    #[cfg(windows)]
    fn default() -> Self {
        Self::new(
            "powershell",
            &[
                "-NoProfile",
                "-Command",
                "(New-Object Media.SoundPlayer '{quoted_path}').PlaySync()",
            ],
        )
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    fn default() -> Self {
        Self::new("aplay", &["-q"])
    }
}

/// Dispatches sounds and remembers the players still running.
#[derive(Debug, Default)]
pub struct AudioPlayer {
    config: AudioConfig,
    playing: Vec<Child>,
}

impl AudioPlayer {
    pub fn new(config: AudioConfig) -> Self {
        Self {
            config,
            playing: Vec::new(),
        }
    }

    /// Starts playing `path` in the background.
    ///
    /// Only the dispatch is checked: a missing player program is an error,
    /// a file the player cannot read is not.
    pub fn play<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.reap();
        let path = path.as_ref();
        let child = self
            .config
            .command_for(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                warn!("Cannot dispatch {} for {}: {}", self.config.program, path.display(), e);
                EngineError::Audio(format!("{}: {}", self.config.program, e))
            })?;
        debug!("Playing {} (pid {})", path.display(), child.id());
        self.playing.push(child);
        Ok(())
    }

    /// Stops every sound dispatched by this player that is still running.
    pub fn stop(&mut self) -> Result<()> {
        let mut first_error = None;
        for mut child in self.playing.drain(..) {
            if let Ok(None) = child.try_wait() {
                if let Err(e) = child.kill() {
                    first_error.get_or_insert(e);
                }
            }
            // reap so no zombie is left behind
            let _ = child.wait();
        }
        match first_error {
            Some(e) => Err(EngineError::Audio(e.to_string())),
            None => Ok(()),
        }
    }

    /// Number of dispatched players that have not exited yet.
    pub fn active(&mut self) -> usize {
        self.reap();
        self.playing.len()
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    fn reap(&mut self) {
        self.playing
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}
