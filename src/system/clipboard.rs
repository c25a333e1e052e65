// src/system/clipboard.rs
use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

use crate::models::ClipboardOutcome;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to {program}: {source}")]
    Stdin {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: std::process::ExitStatus },

    #[error("No clipboard mechanism available")]
    NoMechanism,
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// A clipboard tool invoked with the text on its stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mechanism {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

const PBCOPY: Mechanism = Mechanism { program: "pbcopy", args: &[] };
const CLIP: Mechanism = Mechanism { program: "clip", args: &[] };
const XCLIP: Mechanism = Mechanism { program: "xclip", args: &["-selection", "clipboard"] };
const XSEL: Mechanism = Mechanism { program: "xsel", args: &["--clipboard", "--input"] };

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Unsupported(String),
}

impl Platform {
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Platform::Linux,
            other => Platform::Unsupported(other.to_string()),
        }
    }

    /// Mechanisms to try, primary first.
    pub fn mechanisms(&self) -> &'static [Mechanism] {
        match self {
            Platform::MacOs => &[PBCOPY],
            Platform::Windows => &[CLIP],
            Platform::Linux => &[XCLIP, XSEL],
            Platform::Unsupported(_) => &[],
        }
    }
}

impl Mechanism {
    fn run(&self, text: &str) -> Result<()> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.to_string(),
                source,
            })?;

        // Take stdin so it is closed before we wait, otherwise the tool never sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Reap the child on every path, including a failed write
        let waited = child.wait();

        written.map_err(|source| ClipboardError::Stdin {
            program: self.program.to_string(),
            source,
        })?;

        let status = waited.map_err(|source| ClipboardError::Wait {
            program: self.program.to_string(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::ExitStatus {
                program: self.program.to_string(),
                status,
            })
        }
    }
}

/// Try each mechanism in order and return the one that worked.
pub fn copy_via(mechanisms: &[Mechanism], text: &str) -> Result<Mechanism> {
    let mut last_error = ClipboardError::NoMechanism;

    for mechanism in mechanisms {
        match mechanism.run(text) {
            Ok(()) => return Ok(*mechanism),
            Err(e) => {
                log::debug!("Clipboard mechanism {} failed: {}", mechanism.program, e);
                last_error = e;
            }
        }
    }

    Err(last_error)
}

pub fn copy_for_platform(platform: &Platform, text: &str) -> ClipboardOutcome {
    if let Platform::Unsupported(name) = platform {
        log::info!("Clipboard not supported on {}", name);
        return ClipboardOutcome::Unsupported { platform: name.clone() };
    }

    match copy_via(platform.mechanisms(), text) {
        Ok(mechanism) => {
            log::info!("Password copied to clipboard via {}", mechanism.program);
            ClipboardOutcome::Copied {
                mechanism: mechanism.program.to_string(),
            }
        }
        Err(e) => {
            log::warn!("Failed to copy password to clipboard: {}", e);
            ClipboardOutcome::Failed { reason: e.to_string() }
        }
    }
}

/// Place `text` on the system clipboard. Never fails, the outcome says
/// what happened.
pub fn copy_to_clipboard(text: &str) -> ClipboardOutcome {
    copy_for_platform(&Platform::detect(), text)
}
