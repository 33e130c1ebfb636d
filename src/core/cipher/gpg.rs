//! Command-line decryption backend.
//!
//! Runs an external program (GnuPG by default) with the secret file path as
//! its last argument and reads plaintext from its stdout.
//!
//! ## Requirements
//!
//! - `gpg` CLI must be installed
//! - The private key must be available in the keyring (or via gpg-agent)
//!
//! ## Usage
//!
//! Override the program in `config.toml`:
//! ```toml
//! [decrypt]
//! program = "age"
//! args = ["--decrypt", "--identity", "/home/me/.age/key.txt"]
//! ```

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::Decryptor;
use crate::core::constants;
use crate::error::{ParseError, Result};

/// Decryptor backed by an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDecryptor {
    program: String,
    args: Vec<String>,
}

impl CommandDecryptor {
    /// Decryptor running `program args... <path>`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `gpg --quiet --batch --decrypt <path>`
    pub fn gpg() -> Self {
        Self::new(
            constants::DECRYPT_PROGRAM,
            constants::DECRYPT_ARGS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl Default for CommandDecryptor {
    fn default() -> Self {
        Self::gpg()
    }
}

impl Decryptor for CommandDecryptor {
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>> {
        trace!(program = %self.program, path = %path.display(), "decrypting");

        if !path.is_file() {
            debug!(path = %path.display(), "secret file missing");
            return Err(ParseError::EmptyOrMissing.into());
        }

        // stderr is discarded so decryptor diagnostics never reach the user
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| {
                debug!(program = %self.program, error = %e, "failed to spawn decryptor");
                ParseError::EmptyOrMissing
            })?;

        let stdout = Zeroizing::new(output.stdout);

        if !output.status.success() {
            debug!(status = ?output.status.code(), "decryptor exited with failure");
            return Err(ParseError::EmptyOrMissing.into());
        }

        let plaintext = std::str::from_utf8(&stdout).map_err(|_| {
            debug!("decrypted output is not valid UTF-8");
            ParseError::EmptyOrMissing
        })?;

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(Zeroizing::new(plaintext.to_string()))
    }

    fn name(&self) -> &str {
        &self.program
    }
}
