//! Configuration file management.
//!
//! Reads `~/.config/keypick/config.toml`. Every setting is optional; a
//! missing file means defaults throughout.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::cipher::CommandDecryptor;
use crate::core::clipboard::{CommandClipboard, SystemClipboard};
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// User configuration.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the encrypted secret files. A leading `~/` expands
    /// to the home directory. Defaults to `~/.secrets`.
    pub secrets_dir: Option<String>,
    /// External decryption program.
    pub decrypt: DecryptConfig,
    /// External clipboard program. Autodetected when unset.
    pub clipboard: ClipboardConfig,
}

/// `[decrypt]` section.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DecryptConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for DecryptConfig {
    fn default() -> Self {
        Self {
            program: constants::DECRYPT_PROGRAM.to_string(),
            args: constants::DECRYPT_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// `[clipboard]` section.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardConfig {
    pub program: Option<String>,
    pub args: Vec<String>,
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist; the default location may be absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        debug!(path = %path.display(), "loading config");

        if !required && !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Parse TOML configuration text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents).map_err(ConfigError::Parse)?)
    }

    /// Secrets directory: `override_dir`, then `secrets_dir`, then
    /// `~/.secrets`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if `~` is needed but unknown.
    pub fn secrets_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }

        match &self.secrets_dir {
            Some(dir) => expand_home(dir),
            None => Ok(home_dir()?.join(constants::SECRETS_DIR)),
        }
    }

    /// Decryptor described by `[decrypt]`.
    pub fn decryptor(&self) -> CommandDecryptor {
        CommandDecryptor::new(&self.decrypt.program, self.decrypt.args.clone())
    }

    /// Clipboard described by `[clipboard]`, else the first one on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if the program path needs `~`
    /// expanded and the home directory is unknown.
    pub fn clipboard(&self) -> Result<SystemClipboard> {
        let configured = match &self.clipboard.program {
            Some(program) => Some(CommandClipboard::new(
                expand_home(program)?,
                self.clipboard.args.clone(),
            )),
            None => None,
        };
        Ok(SystemClipboard::new(configured))
    }
}

fn home_dir() -> Result<PathBuf> {
    Ok(dirs::home_dir().ok_or(ConfigError::NoHomeDir)?)
}

fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None if path == "~" => home_dir(),
        None => Ok(PathBuf::from(path)),
    }
}
