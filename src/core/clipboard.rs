//! Clipboard backends.
//!
//! The system clipboard is reached through an external utility that reads the
//! data from stdin. When none is configured, the first of
//! [`constants::CLIPBOARD_CANDIDATES`] found on `PATH` is used.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::core::constants;
use crate::error::{ActionError, Result};

/// Clipboard backend trait.
pub trait Clipboard {
    /// Place `data` on the clipboard exactly as given.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` if the clipboard cannot be written.
    fn copy(&self, data: &str) -> Result<()>;
}

/// Clipboard backed by an external utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Clipboard running `program args...` with the data on stdin.
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Find a clipboard utility on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NoClipboardUtility` if none is installed.
    pub fn detect() -> Result<Self> {
        Self::detect_in(std::env::var_os("PATH"))
    }

    /// Find a clipboard utility on the given search path.
    pub fn detect_in(paths: Option<OsString>) -> Result<Self> {
        let cwd = std::env::current_dir()?;

        for (name, args) in constants::CLIPBOARD_CANDIDATES {
            if let Ok(program) = which::which_in(name, paths.as_ref(), &cwd) {
                debug!(program = %program.display(), "found clipboard utility");
                return Ok(Self::new(
                    program,
                    args.iter().map(|s| s.to_string()).collect(),
                ));
            }
        }

        debug!("no clipboard utility on PATH");
        Err(ActionError::NoClipboardUtility.into())
    }

    /// Program path.
    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

/// Configured clipboard, or the first one on `PATH` found at copy time.
///
/// Detection is deferred so that actions other than copy never require a
/// clipboard utility.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    configured: Option<CommandClipboard>,
}

impl SystemClipboard {
    pub fn new(configured: Option<CommandClipboard>) -> Self {
        Self { configured }
    }

    /// Explicitly configured utility, if any.
    pub fn configured(&self) -> Option<&CommandClipboard> {
        self.configured.as_ref()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, data: &str) -> Result<()> {
        match &self.configured {
            Some(clipboard) => clipboard.copy(data),
            None => CommandClipboard::detect()?.copy(data),
        }
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, data: &str) -> Result<()> {
        trace!(program = %self.program.display(), "copying to clipboard");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ActionError::NoClipboardUtility,
                _ => ActionError::ClipboardFailed(e.to_string()),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(data.as_bytes())
                .map_err(|e| ActionError::ClipboardFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| ActionError::ClipboardFailed(e.to_string()))?;

        if !status.success() {
            return Err(ActionError::ClipboardFailed(format!(
                "{} exited with {}",
                self.program.display(),
                status
            ))
            .into());
        }

        Ok(())
    }
}
